mod element;
mod error;
mod fixed;
mod heap;
mod macros;
mod matrix;
pub mod ops;
mod render;
mod shape;
pub mod zip;

pub use crate::element::{DType, Element};
pub use crate::error::{MResult, MatrixError};
pub use crate::fixed::FixedMatrix;
pub use crate::heap::HeapMatrix;
pub use crate::matrix::Matrix;
pub use crate::ops::combine;
pub use crate::render::RenderOptions;
pub use crate::shape::{Shape, ShapeIter};

pub use half::f16;
