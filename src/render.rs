use crate::element::Element;
use crate::error::MResult;
use crate::fixed::FixedMatrix;
use crate::heap::HeapMatrix;
use crate::matrix::Matrix;
use std::fmt;

/// Formatting applied to each cell by [`Matrix::render_with`].
///
/// `precision` only affects floating point elements; `width` right-aligns
/// every cell to at least that many characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub precision: Option<usize>,
    pub width: Option<usize>,
}

impl RenderOptions {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn format<T: fmt::Display>(&self, v: &T) -> String {
        match (self.width, self.precision) {
            (Some(w), Some(p)) => format!("{:>w$.p$}", v, w = w, p = p),
            (Some(w), None) => format!("{:>w$}", v, w = w),
            (None, Some(p)) => format!("{:.p$}", v, p = p),
            (None, None) => v.to_string(),
        }
    }
}

/// One `Vec<String>` per row. A matrix whose cells cannot be read
/// (a released heap matrix) renders as no rows.
pub(crate) fn render_cells<T, M>(m: &M, opts: &RenderOptions) -> Vec<Vec<String>>
where
    T: Element,
    M: Matrix<T> + ?Sized,
{
    let (rows, cols) = m.shape().dims2();
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| m.get(r, c).map(|v| opts.format(&v)))
                .collect::<MResult<Vec<_>>>()
        })
        .collect::<MResult<Vec<_>>>()
        .unwrap_or_default()
}

// | a  b  |
fn format_rows(rows: &[Vec<String>], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in rows {
        f.write_str("| ")?;
        for cell in row {
            write!(f, "{}  ", cell)?;
        }
        writeln!(f, "|")?;
    }
    Ok(())
}

fn format_matrix<T, M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Element,
    M: Matrix<T> + ?Sized,
{
    let (rows, cols) = m.shape().dims2();
    f.write_str("[")?;
    for r in 0..rows {
        if r > 0 {
            f.write_str(", ")?;
        }
        f.write_str("[")?;
        for c in 0..cols {
            if c > 0 {
                f.write_str(", ")?;
            }
            match m.get(r, c) {
                Ok(v) => write!(f, "{:?}", v)?,
                Err(_) => return Err(fmt::Error),
            }
        }
        f.write_str("]")?;
    }
    f.write_str("]")
}

impl<T: Element> fmt::Display for HeapMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(&self.render(), f)
    }
}

impl<T: Element, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(&self.render(), f)
    }
}

impl<T: Element> fmt::Debug for HeapMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_released() {
            return write!(f, "HeapMatrix<released {}>", self.shape());
        }
        format_matrix(self, f)
    }
}

impl<T: Element, const R: usize, const C: usize> fmt::Debug for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(self, f)
    }
}
