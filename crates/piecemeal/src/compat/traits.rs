//! # Trait Compatibility and Utility

/// Compile-time check that a type is `Send` and `Sync`.
///
/// ```rust
/// use piecemeal::compat::traits::assert_send_sync;
///
/// const _: () = assert_send_sync::<std::sync::Arc<str>>();
/// ```
pub const fn assert_send_sync<S: Send + Sync + ?Sized>() {}
