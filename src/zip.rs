use crate::element::Element;
use crate::error::{MResult, MatrixError};
use crate::matrix::Matrix;
use crate::shape::ShapeIter;
use log::debug;
use std::marker::PhantomData;

/// Walks two same-shaped matrices in lock step, reading each cell through
/// the `Matrix` accessor so the storage of either side does not matter.
pub struct Zip<'a, T, L: ?Sized, R: ?Sized> {
    a: &'a L,
    b: &'a R,
    cells: ShapeIter,
    _elem: PhantomData<T>,
}

impl<'a, T, L, R> Zip<'a, T, L, R>
where
    T: Element,
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
{
    pub fn new(a: &'a L, b: &'a R) -> MResult<Zip<'a, T, L, R>> {
        let (left, right) = (a.shape(), b.shape());
        if left != right {
            debug!("cannot zip {} with {}", left, right);
            return Err(MatrixError::ShapeMismatch { left, right });
        }
        Ok(Self {
            a,
            b,
            cells: left.indices(),
            _elem: PhantomData,
        })
    }

    pub fn ops<F>(self, mut f: F) -> MResult<()>
    where
        F: FnMut((usize, usize), T, T),
    {
        for t in self {
            let (ix, x, y) = t?;
            f(ix, x, y);
        }
        Ok(())
    }

    pub fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(T, T) -> B,
    {
        Map::new(self, f)
    }
}

impl<'a, T, L, R> Iterator for Zip<'a, T, L, R>
where
    T: Element,
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
{
    type Item = MResult<((usize, usize), T, T)>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (r, c) = self.cells.next()?;
        let item = self
            .a
            .get(r, c)
            .and_then(|x| self.b.get(r, c).map(|y| ((r, c), x, y)));
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub fn new(i: I, f: F) -> Map<I, F> {
        Self { iter: i, f }
    }
}

impl<'a, B, T, L, R, F> Iterator for Map<Zip<'a, T, L, R>, F>
where
    T: Element,
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
    F: FnMut(T, T) -> B,
{
    type Item = MResult<B>;

    #[inline]
    fn next(&mut self) -> Option<MResult<B>> {
        let f = &mut self.f;
        self.iter.next().map(|t| t.map(|(_, x, y)| f(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedMatrix, HeapMatrix, Shape};

    #[test]
    fn test_zip() {
        let m1 = HeapMatrix::from_rows(&[[0, 0, 0], [1, 1, 1]]).unwrap();
        let m2 = FixedMatrix::from_array([[1, 2, 3], [4, 5, 6]]);
        let cells: Vec<_> = Zip::new(&m1, &m2)
            .unwrap()
            .collect::<MResult<_>>()
            .unwrap();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4], ((1, 1), 1, 5));
    }

    #[test]
    fn test_zip_map() {
        let m1 = FixedMatrix::from_array([[1.0f64, 2.0], [3.0, 4.0]]);
        let m2 = FixedMatrix::from_array([[0.5f64, 0.5], [0.5, 0.5]]);
        let v: Vec<f64> = Zip::new(&m1, &m2)
            .unwrap()
            .map(|x, y| x * y)
            .collect::<MResult<_>>()
            .unwrap();
        assert_eq!(v, vec![0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_zip_ops() {
        let m1 = FixedMatrix::<i32, 2, 2>::from_fn(|r, c| (r + c) as i32);
        let mut sum = 0;
        Zip::new(&m1, &m1)
            .unwrap()
            .ops(|_, x, y| sum += x * y)
            .unwrap();
        assert_eq!(sum, 0 + 1 + 1 + 4);
    }

    #[test]
    fn test_zip_shape_mismatch() {
        let m1 = HeapMatrix::<i32>::new(3, 2).unwrap();
        let m2 = HeapMatrix::<i32>::new(2, 3).unwrap();
        assert!(matches!(
            Zip::new(&m1, &m2),
            Err(MatrixError::ShapeMismatch { left, right })
                if left == Shape::new(3, 2) && right == Shape::new(2, 3)
        ));
    }

    #[test]
    fn test_zip_released_operand() {
        let m1 = HeapMatrix::<i32>::new(1, 2).unwrap();
        let mut m2 = HeapMatrix::<i32>::new(1, 2).unwrap();
        m2.release();
        let first = Zip::new(&m1, &m2).unwrap().next();
        assert!(matches!(first, Some(Err(MatrixError::Released))));
    }
}
