use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    InstanceConditionalTest, NumericAttributeBinaryTest, SplitTest,
};
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use serde::{Deserialize, Serialize};

/// Exact binary split search over every observed value.
///
/// Memory grows with the number of observations; evaluation sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryNumericAttributeClassObserver {
    observations: Vec<(f64, usize)>,
    class_distribution: Vec<f64>,
}

struct BestThreshold {
    threshold: f64,
    merit: f64,
    dists: Vec<Vec<f64>>,
}

impl BinaryNumericAttributeClassObserver {
    pub fn new(num_classes: usize) -> Self {
        Self {
            observations: Vec::new(),
            class_distribution: vec![0.0; num_classes],
        }
    }

    /// Sweeps the sorted observations left to right; each boundary between two
    /// distinct values is a candidate threshold. NaN values stay on the right.
    fn best_threshold(&self, criterion: &dyn SplitCriterion) -> Option<BestThreshold> {
        let mut sorted = self.observations.clone();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left = vec![0.0; self.class_distribution.len()];
        let mut right = self.class_distribution.clone();
        let mut best: Option<BestThreshold> = None;

        for (i, &(value, class)) in sorted.iter().enumerate() {
            left[class] += 1.0;
            right[class] -= 1.0;

            let Some(&(next, _)) = sorted.get(i + 1) else {
                break;
            };
            if next == value {
                continue;
            }

            let dists = vec![left.clone(), right.clone()];
            let merit = criterion.merit_of_split(&dists);
            if best.as_ref().is_none_or(|b| merit > b.merit) {
                let mid = value + (next - value) / 2.0;
                let threshold = if mid < next { mid } else { value };
                best = Some(BestThreshold {
                    threshold,
                    merit,
                    dists,
                });
            }
        }
        best
    }
}

impl AttributeClassObserver for BinaryNumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize) {
        self.class_distribution[class_val] += 1.0;
        if !att_val.is_nan() {
            self.observations.push((att_val, class_val));
        }
    }

    fn evaluate_fitness(&self, criterion: &dyn SplitCriterion) -> f64 {
        self.best_threshold(criterion).map_or(0.0, |b| b.merit)
    }

    fn observed_class_distribution(&self) -> &[f64] {
        &self.class_distribution
    }

    fn split(
        &self,
        attribute_index: usize,
        criterion: &dyn SplitCriterion,
    ) -> AttributeSplitSuggestion {
        if let Some(best) = self.best_threshold(criterion) {
            let test = NumericAttributeBinaryTest::new(attribute_index, best.threshold, true);
            return AttributeSplitSuggestion::new(
                SplitTest::NumericBinary(test),
                best.dists,
                best.merit,
            );
        }

        // At most one distinct value: everything observed goes left.
        let threshold = self.observations.first().map_or(0.0, |&(v, _)| v);
        let test = NumericAttributeBinaryTest::new(attribute_index, threshold, true);
        let mut dists = vec![vec![0.0; self.class_distribution.len()]; 2];
        for &(value, class) in &self.observations {
            dists[test.branch_for_value(value)][class] += 1.0;
        }
        let observed: Vec<f64> = dists[0].clone();
        for (class, total) in self.class_distribution.iter().enumerate() {
            dists[1][class] = total - observed[class];
        }
        AttributeSplitSuggestion::new(SplitTest::NumericBinary(test), dists, 0.0)
    }

    fn is_consistent(&self, num_classes: usize) -> bool {
        self.class_distribution.len() == num_classes
            && self.observations.iter().all(|&(_, class)| class < num_classes)
    }
}
