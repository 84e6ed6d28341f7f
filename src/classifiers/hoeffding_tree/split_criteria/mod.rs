mod gini_split_criterion;
mod info_gain_split_criterion;
mod split_criterion;

pub use gini_split_criterion::GiniSplitCriterion;
pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;

use serde::{Deserialize, Serialize};

/// The fitness function a tree was configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessFunction {
    #[default]
    Gini,
    InfoGain,
}

impl SplitCriterion for FitnessFunction {
    fn range_of_merit(&self, num_classes: usize) -> f64 {
        match self {
            FitnessFunction::Gini => GiniSplitCriterion.range_of_merit(num_classes),
            FitnessFunction::InfoGain => InfoGainSplitCriterion.range_of_merit(num_classes),
        }
    }

    fn merit_of_split(&self, post_split_dists: &[Vec<f64>]) -> f64 {
        match self {
            FitnessFunction::Gini => GiniSplitCriterion.merit_of_split(post_split_dists),
            FitnessFunction::InfoGain => InfoGainSplitCriterion.merit_of_split(post_split_dists),
        }
    }
}
