use std::fmt;

/// Shape of a series operand, reported in mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Field(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Field(len) => write!(f, "field of {}", len),
        }
    }
}

/// Common error type for series arithmetic.
#[derive(thiserror::Error, Debug)]
pub enum WindError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub type WindResult<T> = Result<T, WindError>;
