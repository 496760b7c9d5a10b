use crate::error::{MResult, MatrixError};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

#[inline]
fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Shape {
        Shape { rows, cols }
    }

    /// Builds a shape whose element count is addressable in memory for
    /// elements of `elem_size` bytes.
    pub fn checked(rows: usize, cols: usize, elem_size: usize) -> MResult<Shape> {
        let count = rows.checked_mul(cols).ok_or_else(|| {
            MatrixError::invalid_dimension(to_i64(rows), to_i64(cols), "element count overflow")
        })?;
        match count.checked_mul(elem_size) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(Shape { rows, cols }),
            _ => Err(MatrixError::invalid_dimension(
                to_i64(rows),
                to_i64(cols),
                "capacity overflow",
            )),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.elem_count() == 0
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    // [rows, cols] => strides [cols, 1]
    pub fn strides(&self) -> (usize, usize) {
        (self.cols, 1)
    }

    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        let (rs, cs) = self.strides();
        row * rs + col * cs
    }

    pub(crate) fn check(&self, row: usize, col: usize) -> MResult<usize> {
        if self.contains(row, col) {
            Ok(self.offset(row, col))
        } else {
            Err(MatrixError::out_of_bounds(row, col, *self))
        }
    }

    pub fn indices(&self) -> ShapeIter {
        ShapeIter {
            shape: *self,
            index: self.first_index(),
        }
    }

    #[inline]
    fn first_index(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((0, 0))
        }
    }

    #[inline]
    fn next_for(&self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        if col + 1 < self.cols {
            Some((row, col + 1))
        } else if row + 1 < self.rows {
            Some((row + 1, 0))
        } else {
            None
        }
    }
}

impl TryFrom<(i64, i64)> for Shape {
    type Error = MatrixError;

    fn try_from((rows, cols): (i64, i64)) -> MResult<Shape> {
        if rows < 0 || cols < 0 {
            return Err(MatrixError::invalid_dimension(rows, cols, "negative dimension"));
        }
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => Shape::checked(r, c, 1),
            _ => Err(MatrixError::invalid_dimension(
                rows,
                cols,
                "dimension exceeds address space",
            )),
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Row-major walk over every `(row, col)` of a shape.
pub struct ShapeIter {
    shape: Shape,
    index: Option<(usize, usize)>,
}

impl Iterator for ShapeIter {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.index?;
        self.index = self.shape.next_for(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.index {
            Some((r, c)) => self.shape.elem_count() - self.shape.offset(r, c),
            None => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for ShapeIter {}
