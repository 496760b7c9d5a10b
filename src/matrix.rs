use crate::element::Element;
use crate::error::MResult;
use crate::heap::HeapMatrix;
use crate::ops;
use crate::render::{self, RenderOptions};
use crate::shape::Shape;

/// Capability set shared by every storage strategy.
///
/// Indices are `(row, col)`, zero based. `get` and `set` reject indices
/// outside the shape with [`MatrixError::OutOfBounds`](crate::MatrixError::OutOfBounds)
/// and leave the matrix untouched; [`get_or_zero`](Matrix::get_or_zero) and
/// [`set_lenient`](Matrix::set_lenient) provide the silent fallback instead.
///
/// The trait is object safe, so operands of different storage can meet
/// behind `&dyn Matrix<T>`.
pub trait Matrix<T: Element> {
    fn shape(&self) -> Shape;

    fn get(&self, row: usize, col: usize) -> MResult<T>;

    fn set(&mut self, row: usize, col: usize, value: T) -> MResult<()>;

    /// Fills every cell with `f(row, col)`, row by row.
    fn populate(&mut self, f: &mut dyn FnMut(usize, usize) -> T) -> MResult<()> {
        for (r, c) in self.shape().indices() {
            self.set(r, c, f(r, c))?;
        }
        Ok(())
    }

    /// Elementwise sum. The result is always heap backed, whatever the
    /// storage of either operand.
    fn combine(&self, other: &dyn Matrix<T>) -> MResult<HeapMatrix<T>> {
        ops::combine(self, other)
    }

    fn rows(&self) -> usize {
        self.shape().rows()
    }

    fn cols(&self) -> usize {
        self.shape().cols()
    }

    fn len(&self) -> usize {
        self.shape().elem_count()
    }

    fn is_empty(&self) -> bool {
        self.shape().is_empty()
    }

    fn get_or_zero(&self, row: usize, col: usize) -> T {
        self.get(row, col).unwrap_or_else(|_| T::zero())
    }

    /// Returns whether the value was stored.
    fn set_lenient(&mut self, row: usize, col: usize, value: T) -> bool {
        self.set(row, col, value).is_ok()
    }

    fn render(&self) -> Vec<Vec<String>> {
        render::render_cells(self, &RenderOptions::default())
    }

    fn render_with(&self, opts: &RenderOptions) -> Vec<Vec<String>> {
        render::render_cells(self, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::fixed::FixedMatrix;

    fn boxed(heap: bool) -> Box<dyn Matrix<i32>> {
        if heap {
            Box::new(HeapMatrix::<i32>::new(3, 2).unwrap())
        } else {
            Box::new(FixedMatrix::<i32, 3, 2>::new())
        }
    }

    #[test]
    fn test_dyn_contract() {
        for heap in [true, false] {
            let mut m = boxed(heap);
            assert_eq!(m.shape(), Shape::new(3, 2));
            assert_eq!((m.rows(), m.cols(), m.len()), (3, 2, 6));
            assert!(!m.is_empty());
            m.populate(&mut |r, c| (r * 10 + c) as i32).unwrap();
            assert_eq!(m.get(2, 1), Ok(21));
            m.set(0, 0, -4).unwrap();
            assert_eq!(m.get(0, 0), Ok(-4));
        }
    }

    #[test]
    fn test_out_of_bounds_policy() {
        for heap in [true, false] {
            let mut m = boxed(heap);
            m.populate(&mut |_, _| 7).unwrap();
            assert_eq!(
                m.get(3, 0),
                Err(MatrixError::OutOfBounds {
                    row: 3,
                    col: 0,
                    shape: Shape::new(3, 2)
                })
            );
            assert!(matches!(m.set(0, 2, 1), Err(MatrixError::OutOfBounds { .. })));
            // a rejected write leaves every cell as it was
            assert!(m.shape().indices().all(|(r, c)| m.get(r, c) == Ok(7)));

            assert_eq!(m.get_or_zero(9, 9), 0);
            assert_eq!(m.get_or_zero(1, 1), 7);
            assert!(!m.set_lenient(5, 0, 1));
            assert!(m.set_lenient(1, 0, 1));
            assert_eq!(m.get(1, 0), Ok(1));
        }
    }

    #[test]
    fn test_populate_order() {
        let mut m = HeapMatrix::<u32>::new(2, 3).unwrap();
        let mut n = 0;
        m.populate(&mut |_, _| {
            n += 1;
            n
        })
        .unwrap();
        assert_eq!(m.as_slice().unwrap(), &[1, 2, 3, 4, 5, 6]);
    }
}
