mod learning_node;

pub use learning_node::{Candidates, LearningNode};
