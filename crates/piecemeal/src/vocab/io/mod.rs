//! # Vocabulary IO

mod sentencepiece_io;

#[doc(inline)]
pub use sentencepiece_io::{
    load_sentencepiece_vocab_path,
    read_sentencepiece_vocab,
    save_sentencepiece_vocab_path,
    write_sentencepiece_vocab,
};
