use crate::classifiers::hoeffding_tree::split_criteria::split_criterion::{
    SplitCriterion, class_totals,
};
use serde::{Deserialize, Serialize};

/// Reduction in Gini impurity achieved by a partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn range_of_merit(&self, num_classes: usize) -> f64 {
        if num_classes == 0 {
            return 0.0;
        }
        1.0 - 1.0 / num_classes as f64
    }

    fn merit_of_split(&self, post_split_dists: &[Vec<f64>]) -> f64 {
        let totals = class_totals(post_split_dists);
        let n: f64 = totals.iter().sum();
        if n <= 0.0 {
            return 0.0;
        }

        // gini(parent) - sum_i (n_i / n) gini(child_i), scaled by n^2 so that
        // integral counts keep every intermediate term exact.
        let parent: f64 = totals.iter().map(|c| c * c).sum();
        let mut children = 0.0;
        for dist in post_split_dists {
            let n_i: f64 = dist.iter().sum();
            if n_i <= 0.0 {
                continue;
            }
            children += dist.iter().map(|c| c * c * n / n_i).sum::<f64>();
        }
        ((children - parent) / (n * n)).max(0.0)
    }
}
