mod learning_nodes;
mod node;
mod split_node;

pub use learning_nodes::{Candidates, LearningNode};
pub use node::{Node, NodeState};
pub use split_node::SplitNode;
