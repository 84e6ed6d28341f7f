use crate::classifiers::hoeffding_tree::split_criteria::split_criterion::{
    SplitCriterion, class_totals,
};
use serde::{Deserialize, Serialize};

/// Reduction in entropy (bits) achieved by a partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_entropy(&self, distribution: &[f64]) -> f64 {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        distribution
            .iter()
            .filter(|&&w| w > 0.0)
            .map(|&w| {
                let p = w / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn range_of_merit(&self, num_classes: usize) -> f64 {
        if num_classes < 2 {
            return 0.0;
        }
        (num_classes as f64).log2()
    }

    fn merit_of_split(&self, post_split_dists: &[Vec<f64>]) -> f64 {
        let totals = class_totals(post_split_dists);
        let n: f64 = totals.iter().sum();
        if n <= 0.0 {
            return 0.0;
        }
        let mut children = 0.0;
        for dist in post_split_dists {
            let n_i: f64 = dist.iter().sum();
            if n_i > 0.0 {
                children += (n_i / n) * self.compute_entropy(dist);
            }
        }
        (self.compute_entropy(&totals) - children).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_fair_coin_is_one_bit() {
        let ig = InfoGainSplitCriterion::new();
        assert!((ig.compute_entropy(&[5.0, 5.0]) - 1.0).abs() < 1e-12);
        assert_eq!(ig.compute_entropy(&[7.0, 0.0]), 0.0);
    }

    #[test]
    fn perfect_partition_gains_full_entropy() {
        let ig = InfoGainSplitCriterion::new();
        let merit = ig.merit_of_split(&[vec![8.0, 0.0], vec![0.0, 8.0]]);
        assert!((merit - 1.0).abs() < 1e-12);
    }

    #[test]
    fn range_is_log2_of_classes() {
        let ig = InfoGainSplitCriterion::new();
        assert_eq!(ig.range_of_merit(2), 1.0);
        assert_eq!(ig.range_of_merit(8), 3.0);
        assert_eq!(ig.range_of_merit(1), 0.0);
    }
}
