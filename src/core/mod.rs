//! Core primitives.
//!
//! The word codec and the hashing used by commitments and record digests.

pub mod word;
pub mod hash;

// Re-export core types
pub use word::{Symbol, Word, PackedWord, CodecError, MAX_WORD_LEN};
pub use hash::{Hash32, StateHasher};
