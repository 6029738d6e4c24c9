//! # Tensor Element Types

/// The declared element type of a [`crate::tensor::IdTensor`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum ScalarType {
    /// Boolean elements.
    Bool,

    /// Unsigned 8-bit integers.
    U8,

    /// Signed 8-bit integers.
    I8,

    /// Signed 16-bit integers.
    I16,

    /// Signed 32-bit integers.
    I32,

    /// Signed 64-bit integers.
    I64,

    /// 32-bit floats.
    F32,

    /// 64-bit floats.
    F64,
}

impl ScalarType {
    /// The size of one element, in bytes.
    pub fn byte_width(&self) -> usize {
        match self {
            Self::Bool | Self::U8 | Self::I8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }

    /// Can elements of this type be decoded as token ids?
    ///
    /// Only the signed 16, 32, and 64-bit widths are admissible.
    pub fn is_token_id_width(&self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::I64)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_token_id_widths() {
        let admissible: Vec<ScalarType> = ScalarType::iter()
            .filter(|t| t.is_token_id_width())
            .collect();
        assert_eq!(
            admissible,
            vec![ScalarType::I16, ScalarType::I32, ScalarType::I64]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ScalarType::I16.to_string(), "i16");
        assert_eq!(ScalarType::F64.to_string(), "f64");
        assert_eq!(ScalarType::from_str("i64").unwrap(), ScalarType::I64);
        assert!(ScalarType::from_str("f16").is_err());
    }

    #[test]
    fn test_byte_width() {
        assert_eq!(ScalarType::Bool.byte_width(), 1);
        assert_eq!(ScalarType::I16.byte_width(), 2);
        assert_eq!(ScalarType::F32.byte_width(), 4);
        assert_eq!(ScalarType::I64.byte_width(), 8);
    }
}
