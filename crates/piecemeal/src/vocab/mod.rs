//! # Vocabulary
//!
//! This module provides the SentencePiece vocabulary model consumed by
//! [`crate::decoders::PieceDecoder`], and its io mechanisms.
//!
//! * [`PieceModel`] - the read-only `id -> piece` / `pieces -> text` contract.
//! * [`PieceVocab`] - the in-memory SentencePiece piece table.
//! * [`PieceKind`] - the SentencePiece piece types.
pub mod io;

pub mod piece_kind;
pub mod piece_model;
pub mod piece_vocab;

#[doc(inline)]
pub use piece_kind::PieceKind;
#[doc(inline)]
pub use piece_model::PieceModel;
#[doc(inline)]
pub use piece_vocab::PieceVocab;

/// The SentencePiece word-boundary marker, ``▁`` (U+2581).
pub const WORD_BOUNDARY_MARKER: char = '\u{2581}';

/// The surface text of an unknown piece, `` ⁇ `` (U+2047).
pub const UNKNOWN_SURFACE: &str = " \u{2047} ";
