mod threshold_generator;

pub use threshold_generator::ThresholdGenerator;
