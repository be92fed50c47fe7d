#![allow(dead_code)]

use std::collections::BTreeMap;

use fldprep::dataset::{Gender, ImageKey};
use fldprep::split::{SplitInput, SplitOptions};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Shape of one gender's data: prior train, prior test, new images, and how
/// many of the new images the train target asks for.
#[derive(Clone, Debug)]
pub struct GenderShape {
    pub prior_train: usize,
    pub prior_test: usize,
    pub new_images: usize,
    pub take: usize,
}

pub fn arb_gender_shape() -> impl Strategy<Value = GenderShape> {
    (0usize..12, 0usize..12, 0usize..25)
        .prop_flat_map(|(prior_train, prior_test, new_images)| {
            (
                Just(prior_train),
                Just(prior_test),
                Just(new_images),
                0..=new_images,
            )
        })
        .prop_map(|(prior_train, prior_test, new_images, take)| GenderShape {
            prior_train,
            prior_test,
            new_images,
            take,
        })
}

fn keys(gender: Gender, range: std::ops::Range<usize>) -> Vec<ImageKey> {
    range
        .map(|i| ImageKey::from_parts(gender, &format!("{i:04}")))
        .collect()
}

/// Build split input and options for the two shapes. Keys are numbered
/// prior train, then prior test, then new images.
pub fn split_case(male: &GenderShape, female: &GenderShape, seed: u64) -> (SplitInput, SplitOptions) {
    let mut discovered = BTreeMap::new();
    let mut prior_train = Vec::new();
    let mut prior_test = Vec::new();

    for (gender, shape) in [(Gender::Male, male), (Gender::Female, female)] {
        let train_end = shape.prior_train;
        let test_end = train_end + shape.prior_test;
        let all_end = test_end + shape.new_images;

        discovered.insert(gender, keys(gender, 0..all_end));
        prior_train.extend(keys(gender, 0..train_end));
        prior_test.extend(keys(gender, train_end..test_end));
    }

    let opts = SplitOptions {
        seed,
        male_train: male.prior_train + male.take,
        female_train: female.prior_train + female.take,
    };

    (
        SplitInput {
            discovered,
            prior_train,
            prior_test,
        },
        opts,
    )
}
