//! # SentencePiece Piece Vocabulary

use crate::{
    compat::strings::string_from_utf8_lossy,
    errors::{PMResult, PiecemealError},
    types::{PMHashMap, TokenId, hash_map_with_capacity},
    vocab::{
        PieceKind,
        PieceModel,
        UNKNOWN_SURFACE,
        WORD_BOUNDARY_MARKER,
        piece_kind::parse_byte_piece,
    },
};

/// An in-memory SentencePiece vocabulary.
///
/// Piece `i` has token id `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceVocab {
    pieces: Vec<String>,
    kinds: Vec<PieceKind>,
    piece_to_id: PMHashMap<String, TokenId>,
}

impl PieceVocab {
    /// Build a vocabulary from `(piece, kind)` pairs, in id order.
    ///
    /// ## Returns
    /// The vocabulary; or [`PiecemealError::VocabConflict`] on duplicate
    /// pieces, or more pieces than [`TokenId`] can address.
    pub fn from_pieces<I, S>(pieces: I) -> PMResult<Self>
    where
        I: IntoIterator<Item = (S, PieceKind)>,
        S: Into<String>,
    {
        let pieces = pieces.into_iter();

        let (lower, _) = pieces.size_hint();
        let mut vocab = Self {
            pieces: Vec::with_capacity(lower),
            kinds: Vec::with_capacity(lower),
            piece_to_id: hash_map_with_capacity(lower),
        };

        for (piece, kind) in pieces {
            vocab.push_piece(piece.into(), kind)?;
        }

        Ok(vocab)
    }

    /// Build a vocabulary from piece strings, inferring each [`PieceKind`].
    ///
    /// See [`PieceKind::infer`].
    pub fn from_piece_strs<I, S>(pieces: I) -> PMResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_pieces(pieces.into_iter().map(|p| {
            let p = p.as_ref();
            (p.to_string(), PieceKind::infer(p))
        }))
    }

    fn push_piece(
        &mut self,
        piece: String,
        kind: PieceKind,
    ) -> PMResult<()> {
        let id = TokenId::try_from(self.pieces.len()).map_err(|_| {
            PiecemealError::VocabConflict(format!(
                "vocab size ({}) exceeds token id capacity",
                self.pieces.len() + 1
            ))
        })?;

        if piece.is_empty() {
            return Err(PiecemealError::VocabConflict(format!(
                "empty piece for token id {id}"
            )));
        }

        if let Some(&prev) = self.piece_to_id.get(&piece) {
            return Err(PiecemealError::VocabConflict(format!(
                "piece {piece:?} is assigned to both {prev} and {id}"
            )));
        }

        self.piece_to_id.insert(piece.clone(), id);
        self.pieces.push(piece);
        self.kinds.push(kind);
        Ok(())
    }

    /// The number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over `(piece, kind)` in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (&str, PieceKind)> + '_ {
        self.pieces
            .iter()
            .map(String::as_str)
            .zip(self.kinds.iter().copied())
    }

    /// Look up the token id of a piece.
    pub fn id_for_piece(
        &self,
        piece: &str,
    ) -> Option<TokenId> {
        self.piece_to_id.get(piece).copied()
    }

    /// The kind of the piece with the given id.
    pub fn piece_kind(
        &self,
        id: TokenId,
    ) -> Option<PieceKind> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.kinds.get(idx).copied())
    }

    /// Classify a piece; pieces foreign to this vocabulary are
    /// [`PieceKind::Normal`].
    fn kind_of(
        &self,
        piece: &str,
    ) -> PieceKind {
        self.id_for_piece(piece)
            .and_then(|id| self.piece_kind(id))
            .unwrap_or_default()
    }
}

/// Append a run of byte-fallback bytes as (lossy) UTF-8.
fn flush_bytes(
    text: &mut String,
    pending: &mut Vec<u8>,
) {
    if !pending.is_empty() {
        text.push_str(&string_from_utf8_lossy(core::mem::take(pending)));
    }
}

impl PieceModel for PieceVocab {
    fn vocab_size(&self) -> usize {
        self.len()
    }

    fn token_for_id(
        &self,
        id: TokenId,
    ) -> PMResult<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.pieces.get(idx))
            .map(String::as_str)
            .ok_or(PiecemealError::TokenOutOfRange {
                id: id as i64,
                vocab_size: self.len(),
            })
    }

    fn detokenize(
        &self,
        pieces: &[&str],
    ) -> String {
        let mut text = String::with_capacity(pieces.iter().map(|p| p.len()).sum());
        let mut pending_bytes: Vec<u8> = Vec::new();
        let mut at_start = true;

        for &piece in pieces {
            let kind = self.kind_of(piece);

            if kind == PieceKind::Byte
                && let Some(byte) = parse_byte_piece(piece)
            {
                pending_bytes.push(byte);
                at_start = false;
                continue;
            }
            flush_bytes(&mut text, &mut pending_bytes);

            match kind {
                PieceKind::Control => continue,
                PieceKind::Unknown => text.push_str(UNKNOWN_SURFACE),
                _ => {
                    // Only a word piece opening the text loses its boundary marker.
                    let piece = if at_start {
                        piece.strip_prefix(WORD_BOUNDARY_MARKER).unwrap_or(piece)
                    } else {
                        piece
                    };
                    text.push_str(&piece.replace(WORD_BOUNDARY_MARKER, " "));
                }
            }
            at_start = false;
        }
        flush_bytes(&mut text, &mut pending_bytes);

        text
    }
}
