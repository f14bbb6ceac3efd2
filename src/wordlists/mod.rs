//! Target word pools
//!
//! The default pool is embedded in the binary; custom pools load from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
