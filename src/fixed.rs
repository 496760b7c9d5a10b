use crate::element::Element;
use crate::error::{MResult, MatrixError};
use crate::matrix::Matrix;
use crate::shape::Shape;

/// Matrix with compile-time dimensions and inline `[[T; C]; R]` storage.
#[derive(Clone, Copy, PartialEq)]
pub struct FixedMatrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Element, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    pub fn new() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    pub const fn from_array(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::new();
        for (r, row) in m.data.iter_mut().enumerate() {
            for (c, x) in row.iter_mut().enumerate() {
                *x = f(r, c);
            }
        }
        m
    }

    pub fn as_array(&self) -> &[[T; C]; R] {
        &self.data
    }
}

impl<T: Element, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const R: usize, const C: usize> Matrix<T> for FixedMatrix<T, R, C> {
    fn shape(&self) -> Shape {
        Shape::new(R, C)
    }

    fn get(&self, row: usize, col: usize) -> MResult<T> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or_else(|| MatrixError::out_of_bounds(row, col, self.shape()))
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> MResult<()> {
        match self.data.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(x) => {
                *x = value;
                Ok(())
            }
            None => Err(MatrixError::out_of_bounds(row, col, Shape::new(R, C))),
        }
    }

    fn populate(&mut self, f: &mut dyn FnMut(usize, usize) -> T) -> MResult<()> {
        *self = Self::from_fn(f);
        Ok(())
    }
}
