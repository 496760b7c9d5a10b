use crate::element::{DType, Element};
use crate::error::{MResult, MatrixError};
use crate::fixed::FixedMatrix;
use crate::matrix::Matrix;
use crate::shape::Shape;
use log::{debug, trace};
use std::mem;

/// Dynamically sized matrix owning one contiguous row-major buffer.
///
/// The buffer is allocated eagerly, zero filled, and never shared: `clone`
/// and `clone_from` both copy every element. [`release`](HeapMatrix::release)
/// frees the buffer early and may be called any number of times; `Drop`
/// calls it as well. A released matrix keeps its shape but answers every
/// element access with [`MatrixError::Released`].
pub struct HeapMatrix<T> {
    shape: Shape,
    data: Option<Vec<T>>,
}

impl<T: Element> HeapMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> MResult<Self> {
        let shape = Shape::checked(rows, cols, mem::size_of::<T>())?;
        debug!("allocating {} heap matrix of {:?}", shape, T::DTYPE);
        Ok(Self {
            shape,
            data: Some(vec![T::zero(); shape.elem_count()]),
        })
    }

    pub fn zeros(shape: Shape) -> MResult<Self> {
        Self::new(shape.rows(), shape.cols())
    }

    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> MResult<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let shape = Shape::checked(rows, cols, mem::size_of::<T>())?;
        let data = shape.indices().map(|(r, c)| f(r, c)).collect();
        Ok(Self {
            shape,
            data: Some(data),
        })
    }

    /// Takes ownership of a row-major buffer of exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, v: Vec<T>) -> MResult<Self> {
        let shape = Shape::checked(rows, cols, mem::size_of::<T>())?;
        if v.len() != shape.elem_count() {
            return Err(MatrixError::InvalidDimension {
                rows: rows as i64,
                cols: cols as i64,
                reason: "data length does not match dimensions",
            });
        }
        Ok(Self {
            shape,
            data: Some(v),
        })
    }

    pub fn from_rows<const N: usize>(xs: &[[T; N]]) -> MResult<Self> {
        Self::from_vec(xs.len(), N, xs.iter().flatten().copied().collect())
    }

    pub fn from_fixed<const R: usize, const C: usize>(m: &FixedMatrix<T, R, C>) -> MResult<Self> {
        let a = m.as_array();
        Self::from_fn(R, C, |r, c| a[r][c])
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    pub fn row(&self, i: usize) -> MResult<&[T]> {
        let data = self.data()?;
        if i >= self.shape.rows() {
            return Err(MatrixError::out_of_bounds(i, 0, self.shape));
        }
        let cols = self.shape.cols();
        Ok(&data[i * cols..(i + 1) * cols])
    }

    pub fn as_slice(&self) -> MResult<&[T]> {
        self.data().map(Vec::as_slice)
    }

    pub fn into_vec(mut self) -> MResult<Vec<T>> {
        self.data.take().ok_or(MatrixError::Released)
    }
}

impl<T> HeapMatrix<T> {
    pub fn is_released(&self) -> bool {
        self.data.is_none()
    }

    /// Frees the backing buffer. Calling it on a released matrix is a no-op.
    pub fn release(&mut self) {
        if let Some(data) = self.data.take() {
            trace!("releasing {} heap matrix", self.shape);
            drop(data);
        }
    }

    fn data(&self) -> MResult<&Vec<T>> {
        self.data.as_ref().ok_or(MatrixError::Released)
    }

    fn data_mut(&mut self) -> MResult<&mut Vec<T>> {
        self.data.as_mut().ok_or(MatrixError::Released)
    }
}

impl<T> Drop for HeapMatrix<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Clone> Clone for HeapMatrix<T> {
    fn clone(&self) -> Self {
        trace!("deep copy of {} heap matrix", self.shape);
        Self {
            shape: self.shape,
            data: self.data.clone(),
        }
    }

    // `&mut self` and `&source` cannot alias, so assigning a matrix to
    // itself is rejected at compile time.
    fn clone_from(&mut self, source: &Self) {
        self.release();
        trace!("assigning {} heap matrix over {}", source.shape, self.shape);
        self.shape = source.shape;
        self.data = source.data.clone();
    }
}

impl<T: PartialEq> PartialEq for HeapMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Element> Matrix<T> for HeapMatrix<T> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> MResult<T> {
        let data = self.data()?;
        let offset = self.shape.check(row, col)?;
        Ok(data[offset])
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> MResult<()> {
        let shape = self.shape;
        let data = self.data_mut()?;
        data[shape.check(row, col)?] = value;
        Ok(())
    }

    fn populate(&mut self, f: &mut dyn FnMut(usize, usize) -> T) -> MResult<()> {
        let shape = self.shape;
        let data = self.data_mut()?;
        for ((r, c), x) in shape.indices().zip(data.iter_mut()) {
            *x = f(r, c);
        }
        Ok(())
    }
}
