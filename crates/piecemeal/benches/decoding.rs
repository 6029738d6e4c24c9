#![allow(missing_docs)]

use std::sync::{Arc, LazyLock};

use divan::{Bencher, black_box, counter::ItemsCount};
use piecemeal::{
    IdTensor,
    PieceDecoder,
    PieceDecoderOptions,
    PieceVocab,
    vocab::piece_kind::byte_piece,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const VOCAB_SIZE: usize = 32_000;
const SEQ_LEN: usize = 256;

static VOCAB: LazyLock<Arc<PieceVocab>> = LazyLock::new(|| {
    let pieces = ["<unk>", "<s>", "</s>", "<pad>"]
        .into_iter()
        .map(str::to_string)
        .chain((0..=u8::MAX).map(byte_piece))
        .chain((0..VOCAB_SIZE - 260).map(|i| {
            if i % 3 == 0 {
                format!("{i:x}")
            } else {
                format!("\u{2581}w{i:x}")
            }
        }));
    Arc::new(PieceVocab::from_piece_strs(pieces).unwrap())
});

fn batch(rows: usize) -> IdTensor {
    // Deterministic, non-trivial id stream over the word pieces.
    let ids: Vec<i64> = (0..rows * SEQ_LEN)
        .map(|i| 260 + ((i * 7919) % (VOCAB_SIZE - 260)) as i64)
        .collect();
    IdTensor::new([rows, SEQ_LEN], ids).unwrap()
}

#[divan::bench(args = [1, 16, 256])]
fn parallel(
    bencher: Bencher,
    rows: usize,
) {
    let decoder = PieceDecoder::new(VOCAB.clone());
    let batch = batch(rows);
    bencher
        .counter(ItemsCount::new(rows * SEQ_LEN))
        .bench(|| decoder.decode(black_box(&batch)).unwrap());
}

#[divan::bench(args = [1, 16, 256])]
fn serial(
    bencher: Bencher,
    rows: usize,
) {
    let decoder = PieceDecoderOptions::default()
        .with_parallel(false)
        .build(VOCAB.clone());
    let batch = batch(rows);
    bencher
        .counter(ItemsCount::new(rows * SEQ_LEN))
        .bench(|| decoder.decode(black_box(&batch)).unwrap());
}
