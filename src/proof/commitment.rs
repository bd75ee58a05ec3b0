//! Word Commitment
//!
//! The setter commits to the secret word before the first guess.
//! Every reveal afterwards must hash, with the same blinding value,
//! to exactly the published commitment.

use std::fmt;

use ed25519_dalek::SigningKey;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::hash::{Hash32, StateHasher};
use crate::core::word::Word;
use crate::proof::signature::{sign_reveal, MoveSignature};

/// Size of the blinding value in bytes.
pub const BLINDING_LEN: usize = 32;

/// Secret random scalar mixed into the commitment.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinding([u8; BLINDING_LEN]);

impl Blinding {
    /// Wrap raw bytes.
    pub const fn from_bytes(bytes: [u8; BLINDING_LEN]) -> Self {
        Self(bytes)
    }

    /// Draw a fresh value from the operating system RNG.
    pub fn random() -> Self {
        Self::from_rng(&mut OsRng)
    }

    /// Draw a fresh value from the given RNG.
    pub fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; BLINDING_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLINDING_LEN] {
        &self.0
    }
}

impl fmt::Debug for Blinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blinding(..)")
    }
}

/// Public commitment to the secret word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCommitment(pub Hash32);

impl WordCommitment {
    /// Raw hash bytes.
    pub fn as_bytes(&self) -> &Hash32 {
        &self.0
    }
}

impl fmt::Display for WordCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Hash the word's symbol values followed by the blinding value.
pub fn commit(word: &Word, blinding: &Blinding) -> WordCommitment {
    let mut hasher = StateHasher::for_commitment();
    hasher.update_symbols(word.symbols());
    hasher.update_bytes(blinding.as_bytes());
    WordCommitment(hasher.finalize())
}

/// Check a revealed word and blinding against a commitment.
pub fn verify_reveal(word: &Word, blinding: &Blinding, commitment: &WordCommitment) -> bool {
    commit(word, blinding) == *commitment
}

/// The setter's private preimage, kept off the public record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetterSecret {
    /// The secret word.
    pub word: Word,
    /// Blinding value chosen at setup.
    pub blinding: Blinding,
}

impl SetterSecret {
    /// Create a new secret.
    pub fn new(word: Word, blinding: Blinding) -> Self {
        Self { word, blinding }
    }

    /// Create a secret with a fresh random blinding value.
    pub fn with_random_blinding(word: Word) -> Self {
        Self::new(word, Blinding::random())
    }

    /// Commitment to publish at setup.
    pub fn commitment(&self) -> WordCommitment {
        commit(&self.word, &self.blinding)
    }

    /// Does this secret open the given commitment?
    pub fn opens(&self, commitment: &WordCommitment) -> bool {
        verify_reveal(&self.word, &self.blinding, commitment)
    }

    /// Sign a reveal of this secret.
    pub fn sign_reveal(&self, key: &SigningKey) -> MoveSignature {
        sign_reveal(key, &self.word, &self.blinding)
    }
}
