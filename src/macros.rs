/// Heap matrix from row literals: `hmat![[1, 2], [3, 4]]`.
/// Evaluates to `MResult<HeapMatrix<_>>`.
#[macro_export]
macro_rules! hmat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::HeapMatrix::from_rows(&[$([$($x,)*],)*])
    }};
}

/// Fixed matrix from row literals: `fmat![[1, 2], [3, 4]]`.
#[macro_export]
macro_rules! fmat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::FixedMatrix::from_array([$([$($x,)*],)*])
    }};
}
