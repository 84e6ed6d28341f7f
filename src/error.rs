use thiserror::Error;

/// Errors raised at the public boundary of the tree.
#[derive(Debug, Error)]
pub enum HoeffdingError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("point has {found} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("dataset has {points} points but {labels} labels were given")]
    LabelCountMismatch { points: usize, labels: usize },

    #[error("label {label} is out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("unable to write model: {0}")]
    UnableToWrite(String),

    #[error("unable to read model: {0}")]
    UnableToRead(String),
}
