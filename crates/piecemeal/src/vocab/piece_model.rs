//! # Vocabulary Model Trait

use std::sync::Arc;

use crate::{errors::PMResult, types::TokenId};

/// A read-only subword vocabulary model.
///
/// Both queries are issued concurrently from decoder workers without locking,
/// hence the `Send + Sync` bound.
pub trait PieceModel: Send + Sync {
    /// The number of pieces in the vocabulary.
    fn vocab_size(&self) -> usize;

    /// Resolve a token id to its piece.
    ///
    /// ## Returns
    /// The piece text, borrowed from the model; or
    /// [`crate::errors::PiecemealError::TokenOutOfRange`] if `id` is not in the
    /// vocabulary.
    fn token_for_id(
        &self,
        id: TokenId,
    ) -> PMResult<&str>;

    /// Merge an ordered piece sequence into natural text.
    fn detokenize(
        &self,
        pieces: &[&str],
    ) -> String;
}

impl<M: PieceModel + ?Sized> PieceModel for Arc<M> {
    fn vocab_size(&self) -> usize {
        (**self).vocab_size()
    }

    fn token_for_id(
        &self,
        id: TokenId,
    ) -> PMResult<&str> {
        (**self).token_for_id(id)
    }

    fn detokenize(
        &self,
        pieces: &[&str],
    ) -> String {
        (**self).detokenize(pieces)
    }
}
