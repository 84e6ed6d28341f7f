#[allow(clippy::module_inception)]
mod instance_conditional_test;
mod nominal_attribute_multiway_test;
mod numeric_attribute_binary_test;

pub use instance_conditional_test::{InstanceConditionalTest, SplitTest};
pub use nominal_attribute_multiway_test::NominalAttributeMultiwayTest;
pub use numeric_attribute_binary_test::NumericAttributeBinaryTest;
pub use numeric_attribute_binned_test::NumericAttributeBinnedTest;
