use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    NominalAttributeMultiwayTest, NumericAttributeBinaryTest, NumericAttributeBinnedTest,
};
use serde::{Deserialize, Serialize};

/// A finalized split rule: maps the value of one attribute to a branch.
///
/// `branch_for_value` is total: every value, NaN included, lands in
/// `0..num_branches()`.
pub trait InstanceConditionalTest {
    fn branch_for_value(&self, value: f64) -> usize;

    fn num_branches(&self) -> usize;

    fn attribute_index(&self) -> usize;

    fn branch_for_instance(&self, point: &[f64]) -> usize {
        self.branch_for_value(point[self.attribute_index()])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SplitTest {
    NominalMultiway(NominalAttributeMultiwayTest),
    NumericBinary(NumericAttributeBinaryTest),
    NumericBinned(NumericAttributeBinnedTest),
}

impl InstanceConditionalTest for SplitTest {
    fn branch_for_value(&self, value: f64) -> usize {
        match self {
            SplitTest::NominalMultiway(t) => t.branch_for_value(value),
            SplitTest::NumericBinary(t) => t.branch_for_value(value),
            SplitTest::NumericBinned(t) => t.branch_for_value(value),
        }
    }

    fn num_branches(&self) -> usize {
        match self {
            SplitTest::NominalMultiway(t) => t.num_branches(),
            SplitTest::NumericBinary(t) => t.num_branches(),
            SplitTest::NumericBinned(t) => t.num_branches(),
        }
    }

    fn attribute_index(&self) -> usize {
        match self {
            SplitTest::NominalMultiway(t) => t.attribute_index(),
            SplitTest::NumericBinary(t) => t.attribute_index(),
            SplitTest::NumericBinned(t) => t.attribute_index(),
        }
    }
}
