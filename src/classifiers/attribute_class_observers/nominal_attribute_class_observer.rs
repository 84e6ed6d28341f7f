use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    InstanceConditionalTest, NominalAttributeMultiwayTest, SplitTest,
};
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use serde::{Deserialize, Serialize};

/// Class counts per category of a nominal attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalAttributeClassObserver {
    attribute_value_distribution_per_category: Vec<Vec<f64>>,
    class_distribution: Vec<f64>,
}

impl NominalAttributeClassObserver {
    pub fn new(num_categories: usize, num_classes: usize) -> Self {
        Self {
            attribute_value_distribution_per_category: vec![vec![0.0; num_classes]; num_categories],
            class_distribution: vec![0.0; num_classes],
        }
    }

    pub fn num_categories(&self) -> usize {
        self.attribute_value_distribution_per_category.len()
    }

    fn test_for(&self, attribute_index: usize) -> NominalAttributeMultiwayTest {
        NominalAttributeMultiwayTest::new(attribute_index, self.num_categories())
    }
}

impl AttributeClassObserver for NominalAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize) {
        let category = self.test_for(0).branch_for_value(att_val);
        self.attribute_value_distribution_per_category[category][class_val] += 1.0;
        self.class_distribution[class_val] += 1.0;
    }

    fn evaluate_fitness(&self, criterion: &dyn SplitCriterion) -> f64 {
        criterion.merit_of_split(&self.attribute_value_distribution_per_category)
    }

    fn observed_class_distribution(&self) -> &[f64] {
        &self.class_distribution
    }

    fn split(
        &self,
        attribute_index: usize,
        criterion: &dyn SplitCriterion,
    ) -> AttributeSplitSuggestion {
        AttributeSplitSuggestion::new(
            SplitTest::NominalMultiway(self.test_for(attribute_index)),
            self.attribute_value_distribution_per_category.clone(),
            self.evaluate_fitness(criterion),
        )
    }

    fn is_consistent(&self, num_classes: usize) -> bool {
        self.class_distribution.len() == num_classes
            && self
                .attribute_value_distribution_per_category
                .iter()
                .all(|dist| dist.len() == num_classes)
    }
}
