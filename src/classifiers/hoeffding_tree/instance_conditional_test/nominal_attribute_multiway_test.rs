use crate::classifiers::hoeffding_tree::instance_conditional_test::InstanceConditionalTest;
use serde::{Deserialize, Serialize};

/// One branch per category of a nominal attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominalAttributeMultiwayTest {
    attribute_index: usize,
    num_categories: usize,
}

impl NominalAttributeMultiwayTest {
    pub fn new(attribute_index: usize, num_categories: usize) -> Self {
        Self {
            attribute_index,
            num_categories,
        }
    }
}

impl InstanceConditionalTest for NominalAttributeMultiwayTest {
    fn branch_for_value(&self, value: f64) -> usize {
        // `as` saturates: NaN and negatives map to 0, huge values to the last category.
        (value as usize).min(self.num_categories.saturating_sub(1))
    }

    fn num_branches(&self) -> usize {
        self.num_categories
    }

    fn attribute_index(&self) -> usize {
        self.attribute_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_maps_to_its_own_branch() {
        let t = NominalAttributeMultiwayTest::new(2, 4);
        assert_eq!(t.branch_for_value(0.0), 0);
        assert_eq!(t.branch_for_value(3.0), 3);
        assert_eq!(t.branch_for_instance(&[9.0, 9.0, 1.0]), 1);
        assert_eq!(t.num_branches(), 4);
    }

    #[test]
    fn out_of_domain_values_stay_in_range() {
        let t = NominalAttributeMultiwayTest::new(0, 3);
        assert_eq!(t.branch_for_value(f64::NAN), 0);
        assert_eq!(t.branch_for_value(-4.0), 0);
        assert_eq!(t.branch_for_value(17.0), 2);
    }
}
