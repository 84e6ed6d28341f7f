use crate::classifiers::hoeffding_tree::instance_conditional_test::InstanceConditionalTest;
use serde::{Deserialize, Serialize};

/// Two-way threshold split: values below the threshold go to branch 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericAttributeBinaryTest {
    attribute_index: usize,
    attribute_value: f64,
    equals_passes_test: bool,
}

impl NumericAttributeBinaryTest {
    pub fn new(attribute_index: usize, attribute_value: f64, equals_passes_test: bool) -> Self {
        Self {
            attribute_index,
            attribute_value,
            equals_passes_test,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.attribute_value
    }
}

impl InstanceConditionalTest for NumericAttributeBinaryTest {
    fn branch_for_value(&self, value: f64) -> usize {
        if value == self.attribute_value {
            return if self.equals_passes_test { 0 } else { 1 };
        }
        if value < self.attribute_value {
            return 0;
        }
        // NaN compares false above and falls through here
        1
    }

    fn num_branches(&self) -> usize {
        2
    }

    fn attribute_index(&self) -> usize {
        self.attribute_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_flag() {
        let inclusive = NumericAttributeBinaryTest::new(0, 5.0, true);
        let exclusive = NumericAttributeBinaryTest::new(0, 5.0, false);
        assert_eq!(inclusive.branch_for_value(5.0), 0);
        assert_eq!(exclusive.branch_for_value(5.0), 1);
        assert_eq!(inclusive.branch_for_value(4.9), 0);
        assert_eq!(inclusive.branch_for_value(5.1), 1);
    }

    #[test]
    fn nan_goes_right() {
        let t = NumericAttributeBinaryTest::new(1, 0.0, true);
        assert_eq!(t.branch_for_instance(&[0.0, f64::NAN]), 1);
    }
}
