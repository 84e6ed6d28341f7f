pub mod attribute_map;
#[allow(clippy::module_inception)]
mod hoeffding_tree;
pub mod instance_conditional_test;
pub mod nodes;
pub mod split_criteria;
pub mod split_decision;
mod tree_options;

pub use hoeffding_tree::HoeffdingTree;
pub use tree_options::{
    DEFAULT_CHECK_INTERVAL, DEFAULT_MAX_SAMPLES, DEFAULT_SUCCESS_PROBABILITY, TreeContext,
    TreeOptions,
};
