use crate::classifiers::hoeffding_tree::instance_conditional_test::{
    InstanceConditionalTest, SplitTest,
};
use crate::classifiers::hoeffding_tree::nodes::Node;
use crate::classifiers::hoeffding_tree::tree_options::TreeContext;
use crate::core::attributes::AttributeType;
use crate::error::HoeffdingError;
use serde::{Deserialize, Serialize};

/// State of a node after its split was finalized: one child per branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitNode {
    split_test: SplitTest,
    children: Vec<Node>,
}

impl SplitNode {
    pub fn new(split_test: SplitTest, children: Vec<Node>) -> Self {
        debug_assert_eq!(split_test.num_branches(), children.len());
        Self {
            split_test,
            children,
        }
    }

    pub fn split_test(&self) -> &SplitTest {
        &self.split_test
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn child_index(&self, point: &[f64]) -> usize {
        self.split_test.branch_for_instance(point)
    }

    pub fn child_for(&self, point: &[f64]) -> &Node {
        &self.children[self.child_index(point)]
    }

    pub fn child_for_mut(&mut self, point: &[f64]) -> &mut Node {
        let index = self.child_index(point);
        &mut self.children[index]
    }

    /// Checks the test against the descriptor, then every child.
    pub fn validate(&self, ctx: &TreeContext<'_>) -> Result<(), HoeffdingError> {
        let index = self.split_test.attribute_index();
        let Some(attribute_type) = ctx.header.attribute_type(index) else {
            return Err(HoeffdingError::UnableToRead(format!(
                "split on attribute {index}, descriptor has {}",
                ctx.header.number_of_attributes()
            )));
        };
        let test_fits = match &self.split_test {
            SplitTest::NominalMultiway(t) => {
                ctx.header.num_categories(index) == Some(t.num_branches())
            }
            SplitTest::NumericBinary(_) | SplitTest::NumericBinned(_) => {
                attribute_type == AttributeType::Numeric
            }
        };
        if !test_fits {
            return Err(HoeffdingError::UnableToRead(format!(
                "split test does not fit {attribute_type:?} attribute {index}"
            )));
        }
        if self.children.len() != self.split_test.num_branches() {
            return Err(HoeffdingError::UnableToRead(format!(
                "split node has {} children for {} branches",
                self.children.len(),
                self.split_test.num_branches()
            )));
        }
        self.children.iter().try_for_each(|child| child.validate(ctx))
    }

    /// Stable partition of `points` by branch: `groups[b]` holds the indices,
    /// in input order, of the points routed to child `b`.
    pub fn partition<'p>(&self, points: impl Iterator<Item = &'p [f64]>) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.children.len()];
        for (i, point) in points.enumerate() {
            groups[self.child_index(point)].push(i);
        }
        groups
    }
}
