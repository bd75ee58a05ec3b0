//! Domain-Separated Hashing
//!
//! SHA-256 wrapper used for:
//! - Word commitments
//! - Public game record digests
//!
//! Order of updates is part of the format.

use sha2::{Digest, Sha256};

use super::word::Symbol;

/// Hash output type (256 bits / 32 bytes)
pub type Hash32 = [u8; 32];

/// Domain separator for word commitments.
pub const COMMITMENT_DOMAIN: &[u8] = b"SEALED_HANGMAN_COMMIT_V1";

/// Domain separator for game record digests.
pub const STATE_DOMAIN: &[u8] = b"SEALED_HANGMAN_STATE_V1";

/// Deterministic hasher with a domain prefix.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Hasher for word commitments.
    pub fn for_commitment() -> Self {
        Self::new(COMMITMENT_DOMAIN)
    }

    /// Hasher for game record digests.
    pub fn for_game_state() -> Self {
        Self::new(STATE_DOMAIN)
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a u128 value (little-endian).
    #[inline]
    pub fn update_u128(&mut self, value: u128) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a symbol sequence, one byte per symbol.
    pub fn update_symbols(&mut self, symbols: &[Symbol]) {
        for symbol in symbols {
            self.update_u8(symbol.value());
        }
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> Hash32 {
        self.hasher.finalize().into()
    }
}

// =============================================================================
// TESTS
// =============================================================================
