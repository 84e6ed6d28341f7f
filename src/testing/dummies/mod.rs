mod headers;

pub use headers::*;
