//! # Batch Piece Decoders
//!
//! Decoder clients should use:
//!
//! * [`PieceDecoder`] - decodes `(batch, sequence)` token-id tensors into one
//!   string per row, in parallel across rows.
//! * [`PieceDecoderOptions`] - configures and builds a [`PieceDecoder`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use piecemeal::decoders::PieceDecoder;
//! use piecemeal::tensor::IdTensor;
//! use piecemeal::vocab::PieceVocab;
//!
//! let vocab = PieceVocab::from_piece_strs(["<unk>", "\u{2581}hello", "\u{2581}world"]).unwrap();
//! let decoder = PieceDecoder::new(Arc::new(vocab));
//!
//! let batch = IdTensor::from_rows(&[vec![1i64, 2], vec![2, 1]]).unwrap();
//! assert_eq!(
//!     decoder.decode(&batch).unwrap(),
//!     vec!["hello world", "world hello"]
//! );
//! ```

pub mod decoder_options;
pub mod piece_decoder;

#[doc(inline)]
pub use decoder_options::PieceDecoderOptions;
#[doc(inline)]
pub use piece_decoder::PieceDecoder;
