//! # SentencePiece Piece Types

/// The SentencePiece type of a vocabulary piece.
///
/// The kind controls how a piece renders during detokenization.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum PieceKind {
    /// A learned subword; ``▁`` marks a word boundary.
    #[default]
    Normal,

    /// The unknown piece; renders as [`crate::vocab::UNKNOWN_SURFACE`].
    Unknown,

    /// A control symbol (``<s>``, ``</s>``, ``<pad>``); renders as nothing.
    Control,

    /// A user-defined symbol; renders like [`PieceKind::Normal`].
    UserDefined,

    /// A byte-fallback piece, ``<0xNN>``.
    Byte,
}

impl PieceKind {
    /// Infer the kind of piece from its text, using SentencePiece conventions.
    pub fn infer(piece: &str) -> Self {
        match piece {
            "<unk>" => Self::Unknown,
            "<s>" | "</s>" | "<pad>" => Self::Control,
            _ if parse_byte_piece(piece).is_some() => Self::Byte,
            _ => Self::Normal,
        }
    }
}

/// Parse a byte-fallback piece.
///
/// ## Returns
/// `Some(byte)` for pieces of the form ``<0xNN>`` (two uppercase hex digits);
/// `None` otherwise.
pub fn parse_byte_piece(piece: &str) -> Option<u8> {
    let hex = piece.strip_prefix("<0x")?.strip_suffix('>')?;
    if hex.len() != 2 || !hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

/// Format a byte as its byte-fallback piece, ``<0xNN>``.
pub fn byte_piece(byte: u8) -> String {
    format!("<0x{byte:02X}>")
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_infer() {
        assert_eq!(PieceKind::infer("<unk>"), PieceKind::Unknown);
        assert_eq!(PieceKind::infer("<s>"), PieceKind::Control);
        assert_eq!(PieceKind::infer("</s>"), PieceKind::Control);
        assert_eq!(PieceKind::infer("<pad>"), PieceKind::Control);
        assert_eq!(PieceKind::infer("<0x0A>"), PieceKind::Byte);
        assert_eq!(PieceKind::infer("\u{2581}hello"), PieceKind::Normal);
        assert_eq!(PieceKind::infer("<0x0a>"), PieceKind::Normal);
    }

    #[test]
    fn test_byte_pieces() {
        assert_eq!(parse_byte_piece("<0x00>"), Some(0));
        assert_eq!(parse_byte_piece("<0xE4>"), Some(0xE4));
        assert_eq!(parse_byte_piece("<0xFF>"), Some(0xFF));
        assert_eq!(parse_byte_piece("<0x1>"), None);
        assert_eq!(parse_byte_piece("<0x123>"), None);
        assert_eq!(parse_byte_piece("<0x+1>"), None);
        assert_eq!(parse_byte_piece("0x41"), None);

        for b in [0u8, 0x41, 0xC3, 0xFF] {
            assert_eq!(parse_byte_piece(&byte_piece(b)), Some(b));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(PieceKind::UserDefined.to_string(), "user_defined");
        assert_eq!(PieceKind::from_str("byte").unwrap(), PieceKind::Byte);
    }
}
