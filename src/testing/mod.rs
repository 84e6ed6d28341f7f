pub mod dummies;
pub mod generators;
