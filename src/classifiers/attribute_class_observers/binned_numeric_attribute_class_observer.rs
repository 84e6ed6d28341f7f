use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    NumericAttributeBinnedTest, SplitTest,
};
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use serde::{Deserialize, Serialize};

/// Equal-width histogram observer.
///
/// The first `observations_before_binning` values are buffered to find the
/// range; after that they are folded into `bins` equal-width bins and every
/// later value only bumps one counter. Before the bins exist the fitness is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedNumericAttributeClassObserver {
    bins: usize,
    observations_before_binning: usize,
    buffer: Vec<(f64, usize)>,
    split_points: Vec<f64>,
    // [bin][class]
    sufficient_statistics: Vec<Vec<f64>>,
    class_distribution: Vec<f64>,
}

impl BinnedNumericAttributeClassObserver {
    pub fn new(num_classes: usize, bins: usize, observations_before_binning: usize) -> Self {
        Self {
            bins,
            observations_before_binning,
            buffer: Vec::with_capacity(observations_before_binning),
            split_points: Vec::new(),
            sufficient_statistics: Vec::new(),
            class_distribution: vec![0.0; num_classes],
        }
    }

    pub fn is_binned(&self) -> bool {
        !self.sufficient_statistics.is_empty()
    }

    pub fn split_points(&self) -> &[f64] {
        &self.split_points
    }

    fn equal_width_split_points(&self, values: impl Iterator<Item = f64> + Clone) -> Vec<f64> {
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() {
            return vec![0.0; self.bins.saturating_sub(1)];
        }
        let bin_width = (max - min) / self.bins as f64;
        (1..self.bins).map(|i| min + i as f64 * bin_width).collect()
    }

    fn fold_into_bins(split_points: &[f64], buffer: &[(f64, usize)], stats: &mut [Vec<f64>]) {
        for &(value, class) in buffer {
            stats[NumericAttributeBinnedTest::bin_of(split_points, value)][class] += 1.0;
        }
    }

    fn create_bins(&mut self) {
        self.split_points = self.equal_width_split_points(self.buffer.iter().map(|o| o.0));
        self.sufficient_statistics = vec![vec![0.0; self.class_distribution.len()]; self.bins];
        Self::fold_into_bins(&self.split_points, &self.buffer, &mut self.sufficient_statistics);
        self.buffer = Vec::new();
    }

    /// Current bins, or the bins the buffer would produce if binned now.
    fn binned_statistics(&self) -> (Vec<f64>, Vec<Vec<f64>>) {
        if self.is_binned() {
            return (self.split_points.clone(), self.sufficient_statistics.clone());
        }
        let split_points = self.equal_width_split_points(self.buffer.iter().map(|o| o.0));
        let mut stats = vec![vec![0.0; self.class_distribution.len()]; self.bins];
        Self::fold_into_bins(&split_points, &self.buffer, &mut stats);
        (split_points, stats)
    }
}

impl AttributeClassObserver for BinnedNumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize) {
        self.class_distribution[class_val] += 1.0;
        if att_val.is_nan() {
            return;
        }
        if self.is_binned() {
            let bin = NumericAttributeBinnedTest::bin_of(&self.split_points, att_val);
            self.sufficient_statistics[bin][class_val] += 1.0;
            return;
        }
        self.buffer.push((att_val, class_val));
        if self.buffer.len() >= self.observations_before_binning {
            self.create_bins();
        }
    }

    fn evaluate_fitness(&self, criterion: &dyn SplitCriterion) -> f64 {
        if !self.is_binned() {
            return 0.0;
        }
        criterion.merit_of_split(&self.sufficient_statistics)
    }

    fn observed_class_distribution(&self) -> &[f64] {
        &self.class_distribution
    }

    fn split(
        &self,
        attribute_index: usize,
        criterion: &dyn SplitCriterion,
    ) -> AttributeSplitSuggestion {
        let (split_points, stats) = self.binned_statistics();
        let merit = criterion.merit_of_split(&stats);
        AttributeSplitSuggestion::new(
            SplitTest::NumericBinned(NumericAttributeBinnedTest::new(attribute_index, split_points)),
            stats,
            merit,
        )
    }

    fn is_consistent(&self, num_classes: usize) -> bool {
        let bins_fit = !self.is_binned()
            || (self.sufficient_statistics.len() == self.split_points.len() + 1
                && self
                    .sufficient_statistics
                    .iter()
                    .all(|row| row.len() == num_classes));
        self.class_distribution.len() == num_classes
            && self.buffer.iter().all(|&(_, class)| class < num_classes)
            && bins_fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::hoeffding_tree::instance_conditional_test::InstanceConditionalTest;
    use crate::classifiers::hoeffding_tree::split_criteria::GiniSplitCriterion;

    #[test]
    fn no_fitness_before_binning() {
        let mut obs = BinnedNumericAttributeClassObserver::new(2, 4, 10);
        for i in 0..9 {
            obs.observe_attribute_class(i as f64, usize::from(i >= 5));
        }
        assert!(!obs.is_binned());
        assert_eq!(obs.evaluate_fitness(&GiniSplitCriterion), 0.0);
        assert_eq!(obs.majority_class(), 0);
    }

    #[test]
    fn bins_span_the_buffered_range() {
        let mut obs = BinnedNumericAttributeClassObserver::new(2, 4, 5);
        for (v, c) in [(0.0, 0), (1.0, 0), (2.0, 1), (3.0, 1), (4.0, 1)] {
            obs.observe_attribute_class(v, c);
        }
        assert!(obs.is_binned());
        assert_eq!(obs.split_points(), &[1.0, 2.0, 3.0]);

        obs.observe_attribute_class(100.0, 1);
        let suggestion = obs.split(1, &GiniSplitCriterion);
        assert_eq!(suggestion.number_of_splits(), 4);
        assert_eq!(suggestion.resulting_class_distribution_from_split(0), &[1.0, 0.0]);
        assert_eq!(suggestion.resulting_class_distribution_from_split(3), &[0.0, 3.0]);
        assert_eq!(suggestion.get_split_test().branch_for_value(1.5), 1);
    }

    #[test]
    fn separable_bins_have_positive_fitness() {
        let mut obs = BinnedNumericAttributeClassObserver::new(2, 2, 10);
        for i in 0..10 {
            obs.observe_attribute_class(i as f64, usize::from(i >= 5));
        }
        // split point at 4.5
        assert!((obs.evaluate_fitness(&GiniSplitCriterion) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nan_counts_only_the_class_before_and_after_binning() {
        let mut obs = BinnedNumericAttributeClassObserver::new(2, 2, 4);
        obs.observe_attribute_class(f64::NAN, 1);
        for (v, c) in [(0.0, 0), (1.0, 0), (2.0, 1), (3.0, 1)] {
            obs.observe_attribute_class(v, c);
        }
        assert!(obs.is_binned());
        let before = obs.sufficient_statistics.clone();
        obs.observe_attribute_class(f64::NAN, 0);
        assert_eq!(obs.sufficient_statistics, before);
        assert_eq!(obs.observed_class_distribution(), &[3.0, 3.0]);
        let binned_total: f64 = obs.sufficient_statistics.iter().flatten().sum();
        assert_eq!(binned_total, 4.0);
    }

    #[test]
    fn consistency_tracks_class_count() {
        let mut obs = BinnedNumericAttributeClassObserver::new(2, 3, 2);
        obs.observe_attribute_class(0.0, 0);
        obs.observe_attribute_class(1.0, 1);
        assert!(obs.is_consistent(2));
        assert!(!obs.is_consistent(3));
        obs.sufficient_statistics.pop();
        assert!(!obs.is_consistent(2));
    }

    #[test]
    fn split_before_binning_uses_buffer() {
        let mut obs = BinnedNumericAttributeClassObserver::new(2, 2, 100);
        obs.observe_attribute_class(0.0, 0);
        obs.observe_attribute_class(10.0, 1);
        let suggestion = obs.split(0, &GiniSplitCriterion);
        assert_eq!(suggestion.number_of_splits(), 2);
        assert_eq!(
            suggestion.branch_majorities(),
            vec![Some((0, 1.0)), Some((1, 1.0))]
        );
    }
}
