//! # SentencePiece `.vocab` IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{PMResult, PiecemealError},
    vocab::{PieceKind, PieceVocab},
};

/// Load a [`PieceVocab`] from a SentencePiece `.vocab` file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_sentencepiece_vocab_path<P: AsRef<Path>>(path: P) -> PMResult<PieceVocab> {
    let reader = BufReader::new(File::open(path)?);
    read_sentencepiece_vocab(reader)
}

/// Read a [`PieceVocab`] from a SentencePiece `.vocab` [`BufRead`] stream.
///
/// Lines are:
/// ```terminaloutput
/// {PIECE}\t{SCORE}
/// ```
///
/// Line `i` is token id `i`; the score is validated and then ignored.
/// Piece kinds are inferred with [`PieceKind::infer`].
pub fn read_sentencepiece_vocab<R: BufRead>(reader: R) -> PMResult<PieceVocab> {
    let mut pieces: Vec<(String, PieceKind)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let piece = match line.split_once('\t') {
            Some((piece, score)) => {
                score.trim().parse::<f32>().map_err(|e| {
                    PiecemealError::Parse(format!("line {}: bad score {score:?}: {e}", idx + 1))
                })?;
                piece
            }
            None => line,
        };

        if piece.is_empty() {
            return Err(PiecemealError::Parse(format!(
                "line {}: empty piece",
                idx + 1
            )));
        }

        pieces.push((piece.to_string(), PieceKind::infer(piece)));
    }

    log::debug!("read {} sentencepiece vocab pieces", pieces.len());

    PieceVocab::from_pieces(pieces)
}

/// Save a [`PieceVocab`] to a SentencePiece `.vocab` file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_sentencepiece_vocab_path<P: AsRef<Path>>(
    vocab: &PieceVocab,
    path: P,
) -> PMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_sentencepiece_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`PieceVocab`] to a [`Write`] writer.
///
/// Scores are written as `0`.
pub fn write_sentencepiece_vocab<W: Write>(
    vocab: &PieceVocab,
    writer: &mut W,
) -> PMResult<()> {
    for (piece, _) in vocab.pieces() {
        writeln!(writer, "{piece}\t0")?;
    }
    Ok(())
}
