//! # `piecemeal` Batch SentencePiece Detokenizer
//!
//! This turns `(batch, sequence)` tensors of token ids, as produced by a
//! language model, back into text; one string per row, decoded in parallel.
//!
//! See:
//! * [`decoders`] to decode token-id tensors into text.
//! * [`vocab`] for the SentencePiece vocabulary model and its io.
//! * [`tensor`] for the minimal id-tensor type the decoders consume.
//! * [`data`] for the pipeline value accepted by [`decoders::PieceDecoder::decode_data`].
//!
//! ## Crate Features
//!
#![doc = document_features::document_features!()]
//!
//! ## Decoding a Batch
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use piecemeal::decoders::PieceDecoderOptions;
//! use piecemeal::tensor::IdTensor;
//! use piecemeal::vocab::io::load_sentencepiece_vocab_path;
//!
//! let vocab = Arc::new(load_sentencepiece_vocab_path("spm.vocab")?);
//!
//! let decoder = PieceDecoderOptions::default()
//!     .with_pad_id(Some(0))
//!     .build(vocab);
//!
//! let batch = IdTensor::from_rows(&[vec![17i64, 912, 0], vec![44, 3, 9]])?;
//! for line in decoder.decode(&batch)? {
//!     println!("{line}");
//! }
//! # Ok::<(), piecemeal::errors::PiecemealError>(())
//!```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod compat;
pub mod data;
pub mod decoders;
pub mod errors;
pub mod tensor;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use data::Data;
#[doc(inline)]
pub use decoders::{PieceDecoder, PieceDecoderOptions};
#[doc(inline)]
pub use errors::{PMResult, PiecemealError};
#[doc(inline)]
pub use tensor::{Device, IdTensor, ScalarType};
#[doc(inline)]
pub use types::{IdElement, TokenId};
#[doc(inline)]
pub use vocab::{PieceKind, PieceModel, PieceVocab};
