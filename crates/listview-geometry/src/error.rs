use std::fmt;

/// Geometry rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    NegativeLength { length: f32 },
    NonFiniteLength { length: f32 },
    NonFiniteStart { start: f32 },
    InvalidRowHeight { height: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NegativeLength { length } => {
                write!(f, "interval length {length} is negative")
            }
            GeometryError::NonFiniteLength { length } => {
                write!(f, "interval length {length} is not finite")
            }
            GeometryError::NonFiniteStart { start } => {
                write!(f, "interval start {start} is not finite")
            }
            GeometryError::InvalidRowHeight { height } => {
                write!(f, "row height {height} must be finite and greater than zero")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
