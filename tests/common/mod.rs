#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const NUM_POINTS: u32 = 3;

/// Rectangle written for image `index`: distinct per image so box lines can
/// be traced back.
pub fn rect_for(index: usize) -> (i64, i64, i64, i64) {
    let i = index as i64;
    (10 + i, 20 + 2 * i, 30 + i, 40 + 3 * i)
}

fn points_for(index: usize) -> String {
    (0..NUM_POINTS)
        .map(|p| format!("{}.{} {}.75\n", index + p as usize, p, 2 * index + p as usize))
        .collect()
}

/// Write the rect/points/jpg triple for `<gender>/<stem>` and its mirror.
pub fn write_image(root: &Path, gender: &str, stem: &str, index: usize) {
    let dir = root.join(gender);
    fs::create_dir_all(&dir).expect("create gender dir");

    let (left, top, width, height) = rect_for(index);
    for name in [stem.to_string(), format!("{stem}_mirror")] {
        fs::write(
            dir.join(format!("{name}_rect.txt")),
            format!("{left} {top} {width} {height}\n"),
        )
        .expect("write rect file");
        fs::write(
            dir.join(format!("{name}_bv{NUM_POINTS}c.txt")),
            points_for(index),
        )
        .expect("write points file");
        fs::write(dir.join(format!("{name}.jpg")), b"jpg").expect("write image file");
    }
}

pub fn stem(index: usize) -> String {
    format!("{index:04}")
}

/// Sample layout:
///
/// - male: 12 images, prior train 0..3, prior test 3..5
/// - female: 15 images, prior train 0..4, prior test 4..7
pub fn create_sample_dataset(root: &Path) {
    for i in 0..12 {
        write_image(root, "male", &stem(i), i);
    }
    for i in 0..15 {
        write_image(root, "female", &stem(i), 100 + i);
    }

    let mut train = String::new();
    for i in 0..3 {
        train.push_str(&format!("male/{}\nmale/{}_mirror\n", stem(i), stem(i)));
    }
    for i in 0..4 {
        train.push_str(&format!("female/{}\nfemale/{}_mirror\n", stem(i), stem(i)));
    }

    let mut test = String::new();
    for i in 3..5 {
        test.push_str(&format!("male/{}\n", stem(i)));
    }
    for i in 4..7 {
        test.push_str(&format!("female/{}\n", stem(i)));
    }

    fs::write(root.join("train.v1.txt"), train).expect("write train.v1");
    fs::write(root.join("test.v1.txt"), test).expect("write test.v1");
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
