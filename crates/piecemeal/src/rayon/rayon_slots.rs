//! # Parallel Slot Filling

use rayon::prelude::*;

/// Fill `slots` in parallel, one task per contiguous chunk.
///
/// Each task receives its chunk index and exclusive access to its chunk of
/// `chunk_len` slots (the last chunk may be shorter); chunk `i` starts at
/// slot `i * chunk_len`.
///
/// ## Returns
/// `Ok(())` if every task succeeds; otherwise the error of one failing task.
/// Which error is reported is unspecified when several tasks fail.
///
/// ## Panics
/// Panics if `chunk_len` is 0.
pub fn try_fill_chunks_par<S, E, F>(
    slots: &mut [S],
    chunk_len: usize,
    f: F,
) -> Result<(), E>
where
    S: Send,
    E: Send,
    F: Fn(usize, &mut [S]) -> Result<(), E> + Send + Sync,
{
    slots
        .par_chunks_mut(chunk_len)
        .enumerate()
        .try_for_each(|(idx, chunk)| f(idx, chunk))
}
