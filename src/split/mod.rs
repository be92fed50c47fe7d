//! Train/test split builder.
//!
//! Extends a previously fixed split with newly added images. Prior train and
//! test entries are always kept. New images are drawn at random (seeded) to
//! bring each gender's train split up to its target size, and the test split
//! is only ever reduced so both genders carry the same number of images.

mod report;

pub use report::{GenderCounts, SplitReport};

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};

use crate::dataset::{Gender, ImageKey};
use crate::error::FldPrepError;
use crate::manifest::partition_by_gender;

pub const DEFAULT_SEED: u64 = 55;
pub const DEFAULT_MALE_TRAIN: usize = 550;
pub const DEFAULT_FEMALE_TRAIN: usize = 1300;

/// Split builder options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOptions {
    pub seed: u64,
    pub male_train: usize,
    pub female_train: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            male_train: DEFAULT_MALE_TRAIN,
            female_train: DEFAULT_FEMALE_TRAIN,
        }
    }
}

impl SplitOptions {
    /// Target train size for one gender.
    pub fn train_target(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male_train,
            Gender::Female => self.female_train,
        }
    }
}

/// Everything the split builder reads.
#[derive(Clone, Debug, Default)]
pub struct SplitInput {
    /// Non-mirrored keys found on disk, per gender.
    pub discovered: BTreeMap<Gender, Vec<ImageKey>>,
    /// Prior train manifest, mirrors removed.
    pub prior_train: Vec<ImageKey>,
    /// Prior test manifest, mirrors removed.
    pub prior_test: Vec<ImageKey>,
}

/// Final split lists. Male entries precede female entries, and the mirrored
/// half follows the base half in the same order.
#[derive(Clone, Debug)]
pub struct Splits {
    pub train: Vec<ImageKey>,
    pub test: Vec<ImageKey>,
    pub report: SplitReport,
}

/// Build the train and test lists.
///
/// The RNG is drawn from in a fixed order: male train sample, female train
/// sample, then the test balancing sample. Output is fully determined by the
/// inputs and the seed.
pub fn build_splits(input: &SplitInput, opts: &SplitOptions) -> Result<Splits, FldPrepError> {
    let mut rng = StdRng::seed_from_u64(opts.seed);

    let prior_train = partition_by_gender(&input.prior_train);
    let prior_test = partition_by_gender(&input.prior_test);
    let empty: Vec<ImageKey> = Vec::new();

    let mut train_by_gender: BTreeMap<Gender, Vec<ImageKey>> = BTreeMap::new();
    let mut counts: BTreeMap<Gender, GenderCounts> = BTreeMap::new();

    for gender in Gender::ALL {
        let discovered = input.discovered.get(&gender).unwrap_or(&empty);
        let old_train = prior_train.get(&gender).unwrap_or(&empty);
        let old_test = prior_test.get(&gender).unwrap_or(&empty);

        let pool = new_pool(discovered, old_train, old_test);
        let target = opts.train_target(gender);
        if old_train.len() > target {
            tracing::warn!(
                %gender,
                prior = old_train.len(),
                target,
                "prior train split already exceeds target; no new images sampled"
            );
        }

        let required = target.saturating_sub(old_train.len());
        if pool.len() < required {
            return Err(FldPrepError::InsufficientPool {
                gender,
                required,
                available: pool.len(),
            });
        }

        let pool_len = pool.len();
        let sampled = sample_keys(pool, required, &mut rng);
        tracing::debug!(%gender, pool = pool_len, sampled = sampled.len(), "sampled new train images");

        let mut train = old_train.clone();
        train.extend(sampled);

        counts.insert(
            gender,
            GenderCounts {
                gender,
                prior_test: old_test.len(),
                prior_train: old_train.len(),
                new_pool: pool_len,
                sampled_train: required,
                test: 0,
                train: train.len(),
            },
        );
        train_by_gender.insert(gender, train);
    }

    let mut male_test = prior_test.get(&Gender::Male).cloned().unwrap_or_default();
    let mut female_test = prior_test.get(&Gender::Female).cloned().unwrap_or_default();
    balance_test_lists(&mut male_test, &mut female_test, &mut rng);

    for (gender, len) in [(Gender::Male, male_test.len()), (Gender::Female, female_test.len())] {
        if let Some(c) = counts.get_mut(&gender) {
            c.test = len;
        }
    }

    let mut test = male_test;
    test.extend(female_test);
    let mut train: Vec<ImageKey> = Vec::new();
    for gender in Gender::ALL {
        train.extend(train_by_gender.remove(&gender).unwrap_or_default());
    }

    let test = with_mirrors(test);
    let train = with_mirrors(train);

    let report = SplitReport {
        seed: opts.seed,
        genders: counts.into_values().collect(),
        test_total: test.len(),
        train_total: train.len(),
    };

    Ok(Splits {
        train,
        test,
        report,
    })
}

/// Discovered keys that appear in neither prior manifest, sorted.
pub fn new_pool(
    discovered: &[ImageKey],
    prior_train: &[ImageKey],
    prior_test: &[ImageKey],
) -> Vec<ImageKey> {
    let known: HashSet<&ImageKey> = prior_train.iter().chain(prior_test).collect();
    let mut pool: Vec<ImageKey> = discovered
        .iter()
        .filter(|key| !known.contains(key))
        .cloned()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    pool.sort();
    pool
}

/// Draw `k` keys without replacement, in draw order.
///
/// Callers make sure `k <= pool.len()`.
pub fn sample_keys<R: Rng + ?Sized>(mut pool: Vec<ImageKey>, k: usize, rng: &mut R) -> Vec<ImageKey> {
    if k == 0 {
        return Vec::new();
    }
    pool.shuffle(rng);
    pool.truncate(k);
    pool
}

/// Down-sample the longer list so both have the same length.
///
/// Kept entries retain their original relative order. Lists of equal
/// length are left unchanged and consume no randomness.
pub fn balance_test_lists<R: Rng + ?Sized>(
    male: &mut Vec<ImageKey>,
    female: &mut Vec<ImageKey>,
    rng: &mut R,
) {
    if male.len() > female.len() {
        subsample_in_order(male, female.len(), rng);
    } else if female.len() > male.len() {
        subsample_in_order(female, male.len(), rng);
    }
}

fn subsample_in_order<R: Rng + ?Sized>(keys: &mut Vec<ImageKey>, k: usize, rng: &mut R) {
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.shuffle(rng);
    indices.truncate(k);
    indices.sort_unstable();

    let kept: Vec<ImageKey> = indices.into_iter().map(|i| keys[i].clone()).collect();
    *keys = kept;
}

/// Append the mirrored key of every entry, after all base entries.
pub fn with_mirrors(mut keys: Vec<ImageKey>) -> Vec<ImageKey> {
    let mirrors: Vec<ImageKey> = keys.iter().map(ImageKey::mirrored).collect();
    keys.extend(mirrors);
    keys
}
