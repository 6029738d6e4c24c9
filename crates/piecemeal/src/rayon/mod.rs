//! # Rayon Utilities
//!
//! [`rayon`] powered fork/join over partitioned output slots.

mod rayon_slots;

pub use rayon_slots::try_fill_chunks_par;
