use assert_cmd::Command;

mod common;
use common::create_sample_dataset;

fn prepare_cmd(root: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("fldprep").unwrap();
    cmd.arg(root).arg("3");
    cmd.args(["--male-train", "8", "--female-train", "10"]);
    cmd
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("fldprep").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(format!("fldprep {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_positional_args_fails() {
    let mut cmd = Command::cargo_bin("fldprep").unwrap();
    cmd.assert().failure();
}

#[test]
fn prepare_prints_text_report() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_sample_dataset(temp.path());

    prepare_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Split (seed 55):"))
        .stdout(predicates::str::contains("total: test 4, train 18 (8 / 36 with mirrors)"))
        .stdout(predicates::str::contains("aedit-training.txt"));

    assert!(temp.path().join("train.v2.txt").is_file());
    assert!(temp.path().join("aedit-testing.txt").is_file());
    assert!(!temp.path().join("training_with_face_landmarks.xml").exists());
}

#[test]
fn prepare_json_output_is_parseable() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_sample_dataset(temp.path());

    let output = prepare_cmd(temp.path())
        .args(["--output", "json"])
        .output()
        .expect("run fldprep");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["split"]["seed"], 55);
    assert_eq!(report["split"]["train_total"], 36);
    assert_eq!(report["split"]["genders"][0]["gender"], "male");
    assert_eq!(report["training"]["written"], 36);
    assert_eq!(report["testing"]["written"], 8);
}

#[test]
fn xml_flag_writes_both_documents() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_sample_dataset(temp.path());

    prepare_cmd(temp.path()).arg("--xml").assert().success();

    assert!(temp.path().join("training_with_face_landmarks.xml").is_file());
    assert!(temp.path().join("testing_with_face_landmarks.xml").is_file());
}

#[test]
fn targets_can_come_from_environment() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_sample_dataset(temp.path());

    let mut cmd = Command::cargo_bin("fldprep").unwrap();
    cmd.arg(temp.path()).arg("3");
    cmd.env("FLDPREP_MALE_TRAIN", "3");
    cmd.env("FLDPREP_FEMALE_TRAIN", "4");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("total: test 4, train 7"));
}

#[test]
fn insufficient_pool_fails_with_message() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_sample_dataset(temp.path());

    // Default targets (550 / 1300) far exceed the sample dataset.
    let mut cmd = Command::cargo_bin("fldprep").unwrap();
    cmd.arg(temp.path()).arg("3");
    cmd.env_remove("FLDPREP_MALE_TRAIN");
    cmd.env_remove("FLDPREP_FEMALE_TRAIN");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Not enough new male images"));
}

#[test]
fn nonexistent_data_dir_fails() {
    let mut cmd = Command::cargo_bin("fldprep").unwrap();
    cmd.args(["nonexistent_data_dir", "78"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Invalid data directory"));
}

#[test]
fn unsupported_output_format_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    create_sample_dataset(temp.path());

    prepare_cmd(temp.path())
        .args(["--output", "yaml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unsupported format"));
}
