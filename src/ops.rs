use crate::element::Element;
use crate::error::MResult;
use crate::fixed::FixedMatrix;
use crate::heap::HeapMatrix;
use crate::matrix::Matrix;
use crate::zip::Zip;

/// Elementwise sum of two same-shaped matrices into a new heap matrix.
///
/// Fails with `ShapeMismatch` when the shapes differ, or with `Released`
/// when either operand is a released heap matrix. Overflow behaves as the
/// native `+` of `T`.
pub fn combine<T, L, R>(lhs: &L, rhs: &R) -> MResult<HeapMatrix<T>>
where
    T: Element,
    L: Matrix<T> + ?Sized,
    R: Matrix<T> + ?Sized,
{
    let shape = lhs.shape();
    let data = Zip::new(lhs, rhs)?
        .map(|x, y| x + y)
        .collect::<MResult<Vec<T>>>()?;
    HeapMatrix::from_vec(shape.rows(), shape.cols(), data)
}

macro_rules! impl_add {
    ([$($g:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T: Element, $($g)*> std::ops::Add<&$rhs> for &$lhs {
            type Output = MResult<HeapMatrix<T>>;
            fn add(self, rhs: &$rhs) -> Self::Output {
                combine(self, rhs)
            }
        }
    };
}

impl_add!([] HeapMatrix<T>, HeapMatrix<T>);
impl_add!([const R: usize, const C: usize] HeapMatrix<T>, FixedMatrix<T, R, C>);
impl_add!([const R: usize, const C: usize] FixedMatrix<T, R, C>, HeapMatrix<T>);
impl_add!(
    [const R: usize, const C: usize, const R2: usize, const C2: usize]
    FixedMatrix<T, R, C>,
    FixedMatrix<T, R2, C2>
);
impl_add!([] dyn Matrix<T>, dyn Matrix<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::shape::Shape;

    #[test]
    fn test_add() {
        let m1 = HeapMatrix::from_rows(&[[1.5f32, 2.0], [0.0, 1.0], [4.5, 3.0]]).unwrap();
        let m2 = FixedMatrix::from_array([[0.5f32, 1.0], [2.0, 3.0], [1.0, 1.0]]);
        let m3 = (&m1 + &m2).unwrap();
        assert_eq!(m3.as_slice().unwrap(), &[2.0, 3.0, 2.0, 4.0, 5.5, 4.0]);
    }

    #[test]
    fn test_add_int() {
        let m1 = HeapMatrix::from_rows(&[[1, 2], [0, 1], [4, 3]]).unwrap();
        let m2 = FixedMatrix::from_array([[0, 1], [2, 3], [1, 1]]);
        let m3 = (&m2 + &m1).unwrap();
        assert_eq!(m3.as_slice().unwrap(), &[1, 3, 2, 4, 5, 4]);
    }

    #[test]
    fn test_add_fixed_fixed() {
        let a = FixedMatrix::<u16, 2, 2>::from_fn(|_, _| 1);
        let b = FixedMatrix::<u16, 2, 2>::from_fn(|_, _| 2);
        let c = (&a + &b).unwrap();
        assert_eq!(c.shape(), Shape::new(2, 2));
        assert_eq!(c.as_slice().unwrap(), &[3; 4]);

        let d = FixedMatrix::<u16, 3, 2>::new();
        let e = FixedMatrix::<u16, 2, 3>::new();
        assert!(matches!(&d + &e, Err(MatrixError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_add_dyn() {
        let h = HeapMatrix::<i32>::from_fn(2, 2, |r, _| r as i32).unwrap();
        let f = FixedMatrix::<i32, 2, 2>::from_fn(|_, c| c as i32);
        let a: &dyn Matrix<i32> = &h;
        let b: &dyn Matrix<i32> = &f;
        let c = (a + b).unwrap();
        assert_eq!(c.as_slice().unwrap(), &[0, 1, 1, 2]);
    }

    #[test]
    fn test_combine_empty() {
        let a = HeapMatrix::<f64>::new(0, 3).unwrap();
        let b = FixedMatrix::<f64, 0, 3>::new();
        let c = combine(&a, &b).unwrap();
        assert_eq!(c.shape(), Shape::new(0, 3));
        assert!(c.is_empty());
    }

    #[test]
    fn test_combine_released() {
        let a = HeapMatrix::<i32>::new(2, 2).unwrap();
        let mut b = a.clone();
        b.release();
        assert_eq!(combine(&a, &b), Err(MatrixError::Released));
    }
}
