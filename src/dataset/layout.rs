//! Data directory layout and image discovery.
//!
//! The expected layout is a root directory with `male/` and `female/`
//! subdirectories holding `<stem>_rect.txt`, `<stem>_bv<N>c.txt` and
//! `<stem>.jpg` triples, plus the split manifests at the root.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::key::{Gender, ImageKey, RECT_SUFFIX};
use crate::error::FldPrepError;

pub const TRAIN_V1_MANIFEST: &str = "train.v1.txt";
pub const TEST_V1_MANIFEST: &str = "test.v1.txt";
pub const TRAIN_V2_MANIFEST: &str = "train.v2.txt";
pub const TEST_V2_MANIFEST: &str = "test.v2.txt";
pub const AEDIT_TRAINING: &str = "aedit-training.txt";
pub const AEDIT_TESTING: &str = "aedit-testing.txt";
pub const XML_TRAINING: &str = "training_with_face_landmarks.xml";
pub const XML_TESTING: &str = "testing_with_face_landmarks.xml";

/// Resolved facial landmark data directory.
#[derive(Clone, Debug)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    /// Resolve `path` to a canonical data directory.
    pub fn discover(path: &Path) -> Result<Self, FldPrepError> {
        if !path.is_dir() {
            return Err(FldPrepError::DataDirInvalid {
                path: path.to_path_buf(),
                message: "input must be a directory".to_string(),
            });
        }

        let root = fs::canonicalize(path).map_err(FldPrepError::Io)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gender_dir(&self, gender: Gender) -> PathBuf {
        self.root.join(gender.dir_name())
    }

    /// Absolute path of a file directly under the data root.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// List the non-mirrored image keys of one gender, sorted.
    ///
    /// Keys come from `*_rect.txt` files found directly in the gender
    /// directory. A missing gender directory yields no keys.
    pub fn discover_image_keys(&self, gender: Gender) -> Result<Vec<ImageKey>, FldPrepError> {
        let dir = self.gender_dir(gender);
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "gender directory not found; no images discovered");
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| FldPrepError::DataDirInvalid {
                path: dir.clone(),
                message: format!("failed while scanning directory: {source}"),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if name.starts_with('.') || name.contains("mirror") {
                continue;
            }
            if let Some(stem) = name.strip_suffix(RECT_SUFFIX) {
                keys.push(ImageKey::from_parts(gender, stem));
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_rejects_missing_directory() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let err = DataLayout::discover(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, FldPrepError::DataDirInvalid { .. }));
    }

    #[test]
    fn discover_image_keys_skips_mirrors_and_other_files() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let male = temp.path().join("male");
        fs::create_dir_all(male.join("nested")).expect("create male dir");
        for name in [
            "0002_rect.txt",
            "0001_rect.txt",
            "0001_mirror_rect.txt",
            "0001_bv78c.txt",
            "0001.jpg",
            ".0004_rect.txt",
        ] {
            fs::write(male.join(name), "1 2 3 4\n").expect("write fixture");
        }
        fs::write(male.join("nested/0003_rect.txt"), "1 2 3 4\n").expect("write nested");

        let layout = DataLayout::discover(temp.path()).expect("discover layout");
        let keys = layout
            .discover_image_keys(Gender::Male)
            .expect("discover keys");

        let keys: Vec<&str> = keys.iter().map(ImageKey::as_str).collect();
        assert_eq!(keys, vec!["male/0001", "male/0002"]);
    }

    #[test]
    fn missing_gender_directory_yields_no_keys() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let layout = DataLayout::discover(temp.path()).expect("discover layout");
        let keys = layout
            .discover_image_keys(Gender::Female)
            .expect("discover keys");
        assert!(keys.is_empty());
    }
}
