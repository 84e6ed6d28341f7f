pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::classifiers::hoeffding_tree::{HoeffdingTree, TreeOptions};
pub use crate::core::instance_header::InstanceHeader;
pub use crate::core::instances::Dataset;
pub use crate::error::HoeffdingError;
