//! # Flat Tensor Storage

use crate::tensor::ScalarType;

/// Flat, row-major element storage of a tensor.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorStorage {
    /// See [`ScalarType::Bool`].
    Bool(Vec<bool>),

    /// See [`ScalarType::U8`].
    U8(Vec<u8>),

    /// See [`ScalarType::I8`].
    I8(Vec<i8>),

    /// See [`ScalarType::I16`].
    I16(Vec<i16>),

    /// See [`ScalarType::I32`].
    I32(Vec<i32>),

    /// See [`ScalarType::I64`].
    I64(Vec<i64>),

    /// See [`ScalarType::F32`].
    F32(Vec<f32>),

    /// See [`ScalarType::F64`].
    F64(Vec<f64>),
}

macro_rules! storage_from_vec {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for TensorStorage {
                fn from(values: Vec<$elem>) -> Self {
                    Self::$variant(values)
                }
            }
        )*
    };
}

storage_from_vec!(
    bool => Bool,
    u8 => U8,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);

impl TensorStorage {
    /// The element type tag of this storage.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Bool(_) => ScalarType::Bool,
            Self::U8(_) => ScalarType::U8,
            Self::I8(_) => ScalarType::I8,
            Self::I16(_) => ScalarType::I16,
            Self::I32(_) => ScalarType::I32,
            Self::I64(_) => ScalarType::I64,
            Self::F32(_) => ScalarType::F32,
            Self::F64(_) => ScalarType::F64,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::U8(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Is the storage empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The size of the storage, in bytes.
    pub fn nbytes(&self) -> usize {
        self.len() * self.scalar_type().byte_width()
    }
}
