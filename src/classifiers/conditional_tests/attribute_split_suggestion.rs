use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    InstanceConditionalTest, SplitTest,
};
use crate::utils::math::max_index;

/// A finalized split rule together with the class distribution each of its
/// branches would start with.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSplitSuggestion {
    split_test: SplitTest,
    resulting_class_distribution: Vec<Vec<f64>>,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(
        split_test: SplitTest,
        resulting_class_distribution: Vec<Vec<f64>>,
        merit: f64,
    ) -> Self {
        debug_assert_eq!(split_test.num_branches(), resulting_class_distribution.len());
        Self {
            split_test,
            resulting_class_distribution,
            merit,
        }
    }

    pub fn get_split_test(&self) -> &SplitTest {
        &self.split_test
    }

    pub fn into_split_test(self) -> SplitTest {
        self.split_test
    }

    pub fn get_resulting_class_distribution(&self) -> &Vec<Vec<f64>> {
        &self.resulting_class_distribution
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> &[f64] {
        &self.resulting_class_distribution[split_index]
    }

    /// Majority class and its empirical probability in each branch, or `None`
    /// for a branch that received no weight.
    pub fn branch_majorities(&self) -> Vec<Option<(usize, f64)>> {
        self.resulting_class_distribution
            .iter()
            .map(|dist| {
                let total: f64 = dist.iter().sum();
                if total <= 0.0 {
                    return None;
                }
                max_index(dist).map(|(class, weight)| (class, weight / total))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::hoeffding_tree::instance_conditional_test::NominalAttributeMultiwayTest;

    #[test]
    fn branch_majorities_skip_empty_branches() {
        let s = AttributeSplitSuggestion::new(
            SplitTest::NominalMultiway(NominalAttributeMultiwayTest::new(0, 3)),
            vec![vec![3.0, 1.0], vec![0.0, 0.0], vec![1.0, 4.0]],
            0.2,
        );
        assert_eq!(s.number_of_splits(), 3);
        assert_eq!(
            s.branch_majorities(),
            vec![Some((0, 0.75)), None, Some((1, 0.8))]
        );
        assert_eq!(s.resulting_class_distribution_from_split(2), &[1.0, 4.0]);
    }
}
