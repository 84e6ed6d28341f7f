use crate::utils::math::normal_probability;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Weighted incremental mean and variance (Welford's update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GaussianEstimator {
    weight_sum: f64,
    mean: f64,
    variance_sum: f64,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observation(&mut self, value: f64, weight: f64) {
        if !value.is_finite() || !weight.is_finite() || weight <= 0.0 {
            return;
        }
        if self.weight_sum > 0.0 {
            self.weight_sum += weight;
            let last_mean = self.mean;
            self.mean += weight * (value - last_mean) / self.weight_sum;
            self.variance_sum += weight * (value - last_mean) * (value - self.mean);
        } else {
            self.mean = value;
            self.weight_sum = weight;
        }
    }

    pub fn total_weight_observed(&self) -> f64 {
        self.weight_sum
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        if self.weight_sum > 1.0 {
            self.variance_sum / (self.weight_sum - 1.0)
        } else {
            0.0
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Density at `value`. A zero-variance estimator is a point mass at its mean.
    pub fn probability_density(&self, value: f64) -> f64 {
        if self.weight_sum <= 0.0 {
            return 0.0;
        }
        let std_dev = self.std_dev();
        if std_dev > 0.0 {
            let diff = value - self.mean;
            (1.0 / ((2.0 * PI).sqrt() * std_dev)) * (-(diff * diff) / (2.0 * std_dev * std_dev)).exp()
        } else if value == self.mean {
            1.0
        } else {
            0.0
        }
    }

    /// Splits the observed weight into the parts below, at and above `value`.
    pub fn estimated_weight_less_equal_greater(&self, value: f64) -> (f64, f64, f64) {
        let equal_to = self.probability_density(value) * self.weight_sum;
        let std_dev = self.std_dev();
        let less_than = if std_dev > 0.0 {
            normal_probability((value - self.mean) / std_dev) * self.weight_sum - equal_to
        } else if value < self.mean {
            self.weight_sum - equal_to
        } else {
            0.0
        };
        let greater_than = (self.weight_sum - equal_to - less_than).max(0.0);
        (less_than.max(0.0), equal_to, greater_than)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn mean_and_variance_match_batch_formula() {
        let mut est = GaussianEstimator::new();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            est.add_observation(v, 1.0);
        }
        assert!(approx_eq(est.mean(), 5.0, 1e-12));
        // sample variance of the set above
        assert!(approx_eq(est.variance(), 32.0 / 7.0, 1e-12));
    }

    #[test]
    fn non_finite_and_non_positive_weights_are_ignored() {
        let mut est = GaussianEstimator::new();
        est.add_observation(f64::NAN, 1.0);
        est.add_observation(1.0, 0.0);
        est.add_observation(f64::INFINITY, 1.0);
        assert_eq!(est.total_weight_observed(), 0.0);
        assert_eq!(est.probability_density(1.0), 0.0);
    }

    #[test]
    fn single_point_is_point_mass() {
        let mut est = GaussianEstimator::new();
        est.add_observation(3.0, 2.0);
        assert_eq!(est.probability_density(3.0), 1.0);
        assert_eq!(est.probability_density(3.5), 0.0);
        let (lt, eq, gt) = est.estimated_weight_less_equal_greater(4.0);
        assert_eq!((lt, eq, gt), (0.0, 0.0, 2.0));
    }

    #[test]
    fn weight_partition_sums_to_total() {
        let mut est = GaussianEstimator::new();
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            est.add_observation(v, 1.0);
        }
        let (lt, eq, gt) = est.estimated_weight_less_equal_greater(2.5);
        assert!(approx_eq(lt + eq + gt, 5.0, 1e-9));
        assert!(lt < gt);
    }
}
