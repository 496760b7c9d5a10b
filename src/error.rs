use crate::shape::Shape;
use thiserror::Error;

pub type MResult<T> = Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("shape mismatch: {left} vs {right}")]
    ShapeMismatch { left: Shape, right: Shape },
    #[error("invalid dimension {rows}x{cols}: {reason}")]
    InvalidDimension {
        rows: i64,
        cols: i64,
        reason: &'static str,
    },
    #[error("index ({row}, {col}) out of bounds for shape {shape}")]
    OutOfBounds { row: usize, col: usize, shape: Shape },
    #[error("matrix storage has been released")]
    Released,
}

impl MatrixError {
    pub(crate) fn invalid_dimension(rows: i64, cols: i64, reason: &'static str) -> Self {
        MatrixError::InvalidDimension { rows, cols, reason }
    }

    pub(crate) fn out_of_bounds(row: usize, col: usize, shape: Shape) -> Self {
        MatrixError::OutOfBounds { row, col, shape }
    }
}

impl From<MatrixError> for String {
    fn from(e: MatrixError) -> Self {
        format!("{}", e)
    }
}
