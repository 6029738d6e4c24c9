//! # Thread Utilities

use core::num::NonZeroUsize;
#[cfg(feature = "rayon")]
use std::env;
use std::thread;

/// The search list of environment variables that Rayon uses to control parallelism.
#[cfg(feature = "rayon")]
const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

/// Get the max parallelism available.
///
/// When `rayon` is enabled, will scan over `RAYON_VARS`.
pub fn est_max_parallelism() -> usize {
    let default = || {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    };

    #[cfg(feature = "rayon")]
    for name in RAYON_VARS {
        if let Some(x @ 1..) = env::var(name).ok().and_then(|s| s.parse::<usize>().ok()) {
            return x;
        }
    }

    default()
}

/// Split `total` items into contiguous chunks, one per worker.
///
/// ``ceil(total / workers)``, and never less than 1.
pub fn chunk_len(
    total: usize,
    workers: NonZeroUsize,
) -> usize {
    total.div_ceil(workers.get()).max(1)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_chunk_len() {
        let n = |x: usize| NonZeroUsize::new(x).unwrap();

        assert_eq!(chunk_len(0, n(4)), 1);
        assert_eq!(chunk_len(3, n(4)), 1);
        assert_eq!(chunk_len(8, n(4)), 2);
        assert_eq!(chunk_len(9, n(4)), 3);
        assert_eq!(chunk_len(9, n(1)), 9);
    }

    #[test]
    #[serial]
    fn test_est_max_parallelism() {
        #[cfg(feature = "rayon")]
        let orig_env: Vec<(&str, Option<String>)> = RAYON_VARS
            .iter()
            .map(|&name| (name, env::var(name).ok()))
            .collect();

        #[cfg(feature = "rayon")]
        for name in RAYON_VARS {
            unsafe { env::remove_var(name) };
        }

        let base = est_max_parallelism();
        assert!(base >= 1);

        #[cfg(feature = "rayon")]
        for name in RAYON_VARS {
            unsafe { env::set_var(name, format!("{}", base + 12)) };
            assert_eq!(est_max_parallelism(), base + 12);

            unsafe { env::set_var(name, "0") };
            assert_eq!(est_max_parallelism(), base);

            unsafe { env::remove_var(name) };
        }

        assert_eq!(est_max_parallelism(), base);

        #[cfg(feature = "rayon")]
        for (name, val) in orig_env {
            match val {
                Some(s) => unsafe { env::set_var(name, s) },
                None => unsafe { env::remove_var(name) },
            }
        }
    }
}
