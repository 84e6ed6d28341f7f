use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use crate::utils::math::max_index;

/// Running per-attribute statistics a leaf keeps while it is still learning.
pub trait AttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize);

    /// Best merit a split on this attribute could achieve right now; never negative.
    fn evaluate_fitness(&self, criterion: &dyn SplitCriterion) -> f64;

    /// Weight seen per class, NaN attribute values included.
    fn observed_class_distribution(&self) -> &[f64];

    /// Finalizes the split this observer would make on attribute `attribute_index`.
    fn split(&self, attribute_index: usize, criterion: &dyn SplitCriterion)
    -> AttributeSplitSuggestion;

    /// Whether every per-class table is sized for `num_classes` and every
    /// stored class index is in range. Checked on state read from outside.
    fn is_consistent(&self, num_classes: usize) -> bool;

    fn total_weight_observed(&self) -> f64 {
        self.observed_class_distribution().iter().sum()
    }

    fn majority_class(&self) -> usize {
        max_index(self.observed_class_distribution()).map_or(0, |(class, _)| class)
    }

    fn majority_probability(&self) -> f64 {
        let total = self.total_weight_observed();
        if total <= 0.0 {
            return 0.0;
        }
        max_index(self.observed_class_distribution()).map_or(0.0, |(_, weight)| weight / total)
    }
}
