use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

/// Errors raised by the checked accessors and constructors of the value types.
///
/// Degenerate numeric input (normalizing a zero vector, inverting a singular
/// matrix) is never reported here: it propagates as `NaN`/`inf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("component index {index} is out of range for a vector of {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("indexes [{row}, {col}] are out of range {size}x{size}")]
    CellOutOfRange { row: usize, col: usize, size: usize },

    #[error("row {row} is out of range for a {size}x{size} matrix")]
    RowOutOfRange { row: usize, size: usize },

    #[error("expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
