use crate::classifiers::attribute_class_observers::attribute_class_observer::AttributeClassObserver;
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    NumericAttributeBinaryTest, SplitTest,
};
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use crate::core::estimators::GaussianEstimator;
use serde::{Deserialize, Serialize};

/// Summarizes each class with a normal distribution and estimates binary
/// splits from the fitted densities. Constant memory per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNumericAttributeClassObserver {
    num_bins: usize,
    // (min, max) per class, `None` until the class has a finite value
    value_range_per_class: Vec<Option<(f64, f64)>>,
    attribute_value_distribution_per_class: Vec<GaussianEstimator>,
    class_distribution: Vec<f64>,
}

impl GaussianNumericAttributeClassObserver {
    pub fn new(num_classes: usize, num_bins: usize) -> Self {
        GaussianNumericAttributeClassObserver {
            num_bins,
            value_range_per_class: vec![None; num_classes],
            attribute_value_distribution_per_class: vec![GaussianEstimator::new(); num_classes],
            class_distribution: vec![0.0; num_classes],
        }
    }

    pub fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: usize,
    ) -> Option<f64> {
        if att_val.is_nan() {
            return None;
        }
        let est = self.attribute_value_distribution_per_class.get(class_val)?;
        if est.total_weight_observed() <= 0.0 {
            return None;
        }
        Some(est.probability_density(att_val))
    }

    fn observed_range(&self) -> Option<(f64, f64)> {
        self.value_range_per_class
            .iter()
            .flatten()
            .fold(None, |acc, &(lo, hi)| match acc {
                None => Some((lo, hi)),
                Some((a, b)) => Some((a.min(lo), b.max(hi))),
            })
    }

    /// `num_bins` evenly spaced points strictly inside the observed range.
    fn split_point_suggestions(&self) -> Vec<f64> {
        let Some((min, max)) = self.observed_range() else {
            return Vec::new();
        };
        let bin_size = (max - min) / (self.num_bins as f64 + 1.0);
        (0..self.num_bins)
            .map(|i| min + bin_size * (i as f64 + 1.0))
            .filter(|&v| v > min && v < max)
            .collect()
    }

    fn class_dists_resulting_from_binary_split(&self, split_value: f64) -> Vec<Vec<f64>> {
        let num_classes = self.class_distribution.len();
        let mut lhs = vec![0.0; num_classes];
        let mut rhs = vec![0.0; num_classes];
        for (class, est) in self.attribute_value_distribution_per_class.iter().enumerate() {
            let Some((lo, hi)) = self.value_range_per_class[class] else {
                continue;
            };
            if split_value < lo {
                rhs[class] += est.total_weight_observed();
            } else if split_value >= hi {
                lhs[class] += est.total_weight_observed();
            } else {
                let (lt, eq, gt) = est.estimated_weight_less_equal_greater(split_value);
                lhs[class] += lt + eq;
                rhs[class] += gt;
            }
        }
        vec![lhs, rhs]
    }

    fn best_split(&self, criterion: &dyn SplitCriterion) -> Option<(f64, f64, Vec<Vec<f64>>)> {
        let mut best: Option<(f64, f64, Vec<Vec<f64>>)> = None;
        for split_value in self.split_point_suggestions() {
            let dists = self.class_dists_resulting_from_binary_split(split_value);
            let merit = criterion.merit_of_split(&dists);
            if best.as_ref().is_none_or(|b| merit > b.1) {
                best = Some((split_value, merit, dists));
            }
        }
        best
    }
}

impl AttributeClassObserver for GaussianNumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize) {
        self.class_distribution[class_val] += 1.0;
        if !att_val.is_finite() {
            return;
        }
        let range = &mut self.value_range_per_class[class_val];
        *range = match *range {
            None => Some((att_val, att_val)),
            Some((lo, hi)) => Some((lo.min(att_val), hi.max(att_val))),
        };
        self.attribute_value_distribution_per_class[class_val].add_observation(att_val, 1.0);
    }

    fn evaluate_fitness(&self, criterion: &dyn SplitCriterion) -> f64 {
        self.best_split(criterion).map_or(0.0, |(_, merit, _)| merit)
    }

    fn observed_class_distribution(&self) -> &[f64] {
        &self.class_distribution
    }

    fn split(
        &self,
        attribute_index: usize,
        criterion: &dyn SplitCriterion,
    ) -> AttributeSplitSuggestion {
        let (split_value, merit, dists) = self.best_split(criterion).unwrap_or_else(|| {
            let value = self.observed_range().map_or(0.0, |(lo, _)| lo);
            (value, 0.0, self.class_dists_resulting_from_binary_split(value))
        });
        AttributeSplitSuggestion::new(
            SplitTest::NumericBinary(NumericAttributeBinaryTest::new(
                attribute_index,
                split_value,
                true,
            )),
            dists,
            merit,
        )
    }

    fn is_consistent(&self, num_classes: usize) -> bool {
        self.class_distribution.len() == num_classes
            && self.value_range_per_class.len() == num_classes
            && self.attribute_value_distribution_per_class.len() == num_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::hoeffding_tree::instance_conditional_test::InstanceConditionalTest;
    use crate::classifiers::hoeffding_tree::split_criteria::GiniSplitCriterion;
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn starts_empty_returns_none() {
        let obs = GaussianNumericAttributeClassObserver::new(2, 10);
        assert!(
            obs.probability_of_attribute_value_given_class(0.0, 0)
                .is_none()
        );
        assert_eq!(obs.evaluate_fitness(&GiniSplitCriterion), 0.0);
    }

    #[test]
    fn pdf_peaks_at_class_mean() {
        let mut obs = GaussianNumericAttributeClassObserver::new(2, 10);

        obs.observe_attribute_class(1.0, 0);
        obs.observe_attribute_class(3.0, 0);
        obs.observe_attribute_class(2.0, 0);

        let p_center = obs
            .probability_of_attribute_value_given_class(2.0, 0)
            .unwrap();
        let p_far1 = obs
            .probability_of_attribute_value_given_class(0.0, 0)
            .unwrap();
        let p_far2 = obs
            .probability_of_attribute_value_given_class(5.0, 0)
            .unwrap();
        assert!(p_center > p_far1);
        assert!(p_center > p_far2);

        assert!(
            obs.probability_of_attribute_value_given_class(2.0, 1)
                .is_none()
        );
    }

    #[test]
    fn ignores_nan_values_but_counts_class() {
        let mut obs = GaussianNumericAttributeClassObserver::new(1, 10);

        obs.observe_attribute_class(f64::NAN, 0);
        assert!(
            obs.probability_of_attribute_value_given_class(0.0, 0)
                .is_none()
        );
        assert_eq!(obs.observed_class_distribution(), &[1.0]);

        obs.observe_attribute_class(10.0, 0);
        let p = obs
            .probability_of_attribute_value_given_class(10.0, 0)
            .unwrap();
        assert!(approx_eq(p, 1.0, EPS));
    }

    #[test]
    fn class_index_out_of_bounds_returns_none() {
        let mut obs = GaussianNumericAttributeClassObserver::new(1, 10);
        obs.observe_attribute_class(1.0, 0);
        assert!(
            obs.probability_of_attribute_value_given_class(1.0, 5)
                .is_none()
        );
    }

    #[test]
    fn well_separated_classes_split_between_them() {
        let mut obs = GaussianNumericAttributeClassObserver::new(2, 10);
        for i in 0..50 {
            let jitter = (i % 5) as f64 * 0.1;
            obs.observe_attribute_class(1.0 + jitter, 0);
            obs.observe_attribute_class(9.0 + jitter, 1);
        }
        let suggestion = obs.split(3, &GiniSplitCriterion);
        let test = suggestion.get_split_test();
        assert_eq!(test.attribute_index(), 3);
        assert_eq!(test.branch_for_value(1.2), 0);
        assert_eq!(test.branch_for_value(9.2), 1);
        assert!(suggestion.get_merit() > 0.45);
        let majorities = suggestion.branch_majorities();
        assert_eq!(majorities[0].map(|m| m.0), Some(0));
        assert_eq!(majorities[1].map(|m| m.0), Some(1));
    }
}
