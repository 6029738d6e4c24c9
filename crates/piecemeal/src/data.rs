//! # Pipeline Data Values
//!
//! [`Data`] is the dynamically-typed value that flows between the stages of
//! a data pipeline; [`crate::decoders::PieceDecoder::decode_data`] consumes
//! and produces it.

use crate::tensor::IdTensor;

/// A dynamically-typed pipeline value.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// A boolean.
    Bool(bool),

    /// An integer.
    Int(i64),

    /// A float.
    Float(f64),

    /// A string.
    String(String),

    /// A tensor.
    Tensor(IdTensor),

    /// An ordered list of values.
    List(Vec<Data>),
}

impl Data {
    /// The name of this value's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Tensor(_) => "tensor",
            Self::List(_) => "list",
        }
    }

    /// Is this value a tensor?
    pub fn is_tensor(&self) -> bool {
        matches!(self, Self::Tensor(_))
    }

    /// Get the tensor, if this is one.
    pub fn as_tensor(&self) -> Option<&IdTensor> {
        match self {
            Self::Tensor(t) => Some(t),
            _ => None,
        }
    }

    /// Get the string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the list, if this is one.
    pub fn as_list(&self) -> Option<&[Data]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<IdTensor> for Data {
    fn from(tensor: IdTensor) -> Self {
        Self::Tensor(tensor)
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for Data {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<String>> for Data {
    fn from(values: Vec<String>) -> Self {
        Self::List(values.into_iter().map(Data::String).collect())
    }
}
