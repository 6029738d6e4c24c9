//! # Cross-Rust Version Compatibility

pub mod strings;
pub mod threads;
pub mod traits;
