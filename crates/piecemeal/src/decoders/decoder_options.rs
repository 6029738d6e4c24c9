//! Piece Decoder Options
//!
//! Options for building a [`PieceDecoder`].

use std::sync::Arc;

use crate::{decoders::PieceDecoder, types::TokenId, vocab::PieceModel};

/// Options for configuring a [`PieceDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDecoderOptions {
    /// Should batch rows be decoded in parallel?
    ///
    /// Has no effect without the ``rayon`` feature.
    pub parallel: bool,

    /// Truncate each row at its first occurrence of this id.
    pub pad_id: Option<TokenId>,
}

impl Default for PieceDecoderOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            pad_id: None,
        }
    }
}

impl PieceDecoderOptions {
    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Gets the configured pad id.
    pub fn pad_id(&self) -> Option<TokenId> {
        self.pad_id
    }

    /// Sets the configured pad id.
    ///
    /// Rows ending in the pad id are truncated at their first pad id,
    /// before lookup; so trailing padding never reaches the vocabulary.
    pub fn set_pad_id(
        &mut self,
        pad_id: Option<TokenId>,
    ) {
        self.pad_id = pad_id;
    }

    /// Sets the configured pad id.
    pub fn with_pad_id(
        mut self,
        pad_id: Option<TokenId>,
    ) -> Self {
        self.set_pad_id(pad_id);
        self
    }

    /// Build a [`PieceDecoder`] for the given model.
    pub fn build<M: PieceModel>(
        &self,
        model: Arc<M>,
    ) -> PieceDecoder<M> {
        PieceDecoder::with_options(model, *self)
    }
}
