use half::f16;
use num_traits::Zero;
use std::fmt::{Debug, Display};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F16,
    F32,
    F64,
}

impl DType {
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::F32 | DType::F64)
    }
}

/// Numeric type that can be stored in a matrix cell.
pub trait Element: Copy + Zero + Add<Output = Self> + Display + Debug + PartialEq {
    const DTYPE: DType;
}

#[macro_export]
macro_rules! impl_element {
    ($($e:ident => $d:ident),*) => {
        $(impl $crate::Element for $e {
            const DTYPE: $crate::DType = $crate::DType::$d;
        })*
    };
}

impl_element!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64
);

impl Element for f16 {
    const DTYPE: DType = DType::F16;
}
