//! Split report types.

use serde::Serialize;
use std::fmt;

use crate::dataset::Gender;

/// Per-gender counts, taken before mirrors are appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenderCounts {
    pub gender: Gender,
    /// Entries of this gender in the prior test manifest.
    pub prior_test: usize,
    /// Entries of this gender in the prior train manifest.
    pub prior_train: usize,
    /// Discovered keys absent from both prior manifests.
    pub new_pool: usize,
    /// Keys drawn from the new pool into train.
    pub sampled_train: usize,
    pub test: usize,
    pub train: usize,
}

/// Summary of one split build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub seed: u64,
    pub genders: Vec<GenderCounts>,
    /// Final list lengths, mirrors included.
    pub test_total: usize,
    pub train_total: usize,
}

impl SplitReport {
    pub fn counts(&self, gender: Gender) -> Option<&GenderCounts> {
        self.genders.iter().find(|c| c.gender == gender)
    }

    /// Test entries before mirroring.
    pub fn base_test(&self) -> usize {
        self.genders.iter().map(|c| c.test).sum()
    }

    /// Train entries before mirroring.
    pub fn base_train(&self) -> usize {
        self.genders.iter().map(|c| c.train).sum()
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Split (seed {}):", self.seed)?;
        for c in &self.genders {
            writeln!(
                f,
                "  {}: test v1 {}, train v1 {}, new pool {}, sampled {} -> test {}, train {}",
                c.gender, c.prior_test, c.prior_train, c.new_pool, c.sampled_train, c.test, c.train
            )?;
        }
        writeln!(
            f,
            "  total: test {}, train {} ({} / {} with mirrors)",
            self.base_test(),
            self.base_train(),
            self.test_total,
            self.train_total
        )
    }
}
