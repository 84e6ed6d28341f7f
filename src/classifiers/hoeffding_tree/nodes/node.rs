use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::instance_conditional_test::InstanceConditionalTest;
use crate::classifiers::hoeffding_tree::nodes::{LearningNode, SplitNode};
use crate::classifiers::hoeffding_tree::split_decision::attempt_to_split;
use crate::classifiers::hoeffding_tree::tree_options::TreeContext;
use crate::core::instances::Dataset;
use crate::error::HoeffdingError;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeState {
    Learning(LearningNode),
    Split(SplitNode),
}

/// A tree node. Its majority class and probability are valid in both states;
/// everything else depends on whether the node has split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    majority_class: usize,
    majority_probability: f64,
    state: NodeState,
}

impl Node {
    pub fn new_leaf(ctx: &TreeContext<'_>) -> Self {
        Self::seeded_leaf(ctx, 0, 0.0)
    }

    pub fn seeded_leaf(
        ctx: &TreeContext<'_>,
        majority_class: usize,
        majority_probability: f64,
    ) -> Self {
        Self {
            majority_class,
            majority_probability,
            state: NodeState::Learning(LearningNode::new(ctx)),
        }
    }

    pub fn train(&mut self, point: &[f64], label: usize, ctx: &TreeContext<'_>) {
        if let NodeState::Split(split) = &mut self.state {
            return split.child_for_mut(point).train(point, label, ctx);
        }
        self.learn_from_instance(point, label, ctx);
    }

    fn learn_from_instance(&mut self, point: &[f64], label: usize, ctx: &TreeContext<'_>) {
        let NodeState::Learning(leaf) = &mut self.state else {
            return;
        };
        if let Some((class, probability)) = leaf.learn_from_instance(point, label, ctx) {
            self.majority_class = class;
            self.majority_probability = probability;
        }
        if !leaf.is_check_due() {
            return;
        }
        if let Some(suggestion) = attempt_to_split(leaf, ctx) {
            self.split(suggestion, ctx);
        }
    }

    /// Replaces the learning state with fresh children, one per branch of
    /// `suggestion`. A child whose branch saw no weight inherits this node's
    /// majority.
    fn split(&mut self, suggestion: AttributeSplitSuggestion, ctx: &TreeContext<'_>) {
        let fallback = (self.majority_class, self.majority_probability);
        let children = suggestion
            .branch_majorities()
            .into_iter()
            .map(|majority| {
                let (class, probability) = majority.unwrap_or(fallback);
                Node::seeded_leaf(ctx, class, probability)
            })
            .collect();
        self.state = NodeState::Split(SplitNode::new(suggestion.into_split_test(), children));
    }

    /// Batch training: a leaf only checks for a split once the whole batch
    /// has been seen, then hands each child the points routed to it.
    pub fn train_batch(&mut self, data: &Dataset, labels: &[usize], ctx: &TreeContext<'_>) {
        if data.is_empty() {
            return;
        }
        let NodeState::Learning(leaf) = &mut self.state else {
            self.train_children_batch(data, labels, data.n_cols(), ctx);
            return;
        };
        let saved = leaf.set_batch_limits(data.n_cols());

        // Points past the one that triggered a split were already streamed
        // into the children.
        let mut split_after = None;
        for (i, (point, &label)) in data.cols().zip(labels).enumerate() {
            self.train(point, label, ctx);
            if split_after.is_none() && !self.is_leaf() {
                split_after = Some(i + 1);
            }
        }

        if let NodeState::Learning(leaf) = &mut self.state {
            leaf.restore_limits(saved);
        } else if let Some(upto) = split_after {
            self.train_children_batch(data, labels, upto, ctx);
        }
    }

    fn train_children_batch(
        &mut self,
        data: &Dataset,
        labels: &[usize],
        upto: usize,
        ctx: &TreeContext<'_>,
    ) {
        let NodeState::Split(split) = &mut self.state else {
            return;
        };
        let groups = split.partition(data.cols().take(upto));
        debug!(
            "partitioned {upto} points on attribute {}: {:?}",
            split.split_test().attribute_index(),
            groups.iter().map(Vec::len).collect::<Vec<_>>()
        );
        for (child, group) in split.children_mut().iter_mut().zip(groups) {
            if group.is_empty() {
                continue;
            }
            let child_labels: Vec<usize> = group.iter().map(|&i| labels[i]).collect();
            child.train_batch(&data.select_cols(&group), &child_labels, ctx);
        }
    }

    pub fn classify(&self, point: &[f64]) -> usize {
        self.classify_with_probability(point).0
    }

    pub fn classify_with_probability(&self, point: &[f64]) -> (usize, f64) {
        let mut node = self;
        while let NodeState::Split(split) = &node.state {
            node = split.child_for(point);
        }
        (node.majority_class, node.majority_probability)
    }

    /// Walks the subtree and rejects state that would break routing or
    /// training under `ctx`. Run on trees read from outside.
    pub fn validate(&self, ctx: &TreeContext<'_>) -> Result<(), HoeffdingError> {
        if self.majority_class >= ctx.options.num_classes {
            return Err(HoeffdingError::UnableToRead(format!(
                "majority class {} is out of range for {} classes",
                self.majority_class, ctx.options.num_classes
            )));
        }
        if !(0.0..=1.0).contains(&self.majority_probability) {
            return Err(HoeffdingError::UnableToRead(format!(
                "majority probability {} is outside [0, 1]",
                self.majority_probability
            )));
        }
        match &self.state {
            NodeState::Learning(leaf) => leaf.validate(ctx),
            NodeState::Split(split) => split.validate(ctx),
        }
    }

    /// Rebuilds candidates that were left out of a persisted leaf.
    pub fn restore_candidates(&mut self, ctx: &TreeContext<'_>) {
        match &mut self.state {
            NodeState::Learning(leaf) => leaf.restore_candidates(ctx),
            NodeState::Split(split) => {
                for child in split.children_mut() {
                    child.restore_candidates(ctx);
                }
            }
        }
    }

    pub fn majority_class(&self) -> usize {
        self.majority_class
    }

    pub fn majority_probability(&self) -> f64 {
        self.majority_probability
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Learning(_))
    }

    /// Index of the attribute this node splits on, once it has split.
    pub fn split_attribute(&self) -> Option<usize> {
        match &self.state {
            NodeState::Learning(_) => None,
            NodeState::Split(split) => Some(split.split_test().attribute_index()),
        }
    }

    pub fn learning_node(&self) -> Option<&LearningNode> {
        match &self.state {
            NodeState::Learning(leaf) => Some(leaf),
            NodeState::Split(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.state {
            NodeState::Learning(_) => &[],
            NodeState::Split(split) => split.children(),
        }
    }

    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    /// Observations seen while this node was a leaf; `None` once split.
    pub fn sample_count(&self) -> Option<usize> {
        self.learning_node().map(LearningNode::sample_count)
    }

    pub fn num_nodes(&self) -> usize {
        1 + self.children().iter().map(Node::num_nodes).sum::<usize>()
    }

    pub fn num_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children().iter().map(Node::num_leaves).sum()
    }

    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}
