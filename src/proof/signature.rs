//! Move Signatures
//!
//! Ed25519 authentication of the two transitions.
//!
//! Each signed message is the ordered sequence of values being
//! authenticated, prefixed with a per-move domain tag:
//!
//! ```text
//! guess:  GUESS_DOMAIN  || symbol
//! reveal: REVEAL_DOMAIN || symbol_0 .. symbol_{L-1} || blinding
//! ```

use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};

use crate::core::word::{Symbol, Word};
use crate::proof::commitment::Blinding;

/// Domain tag for guess messages.
const GUESS_DOMAIN: &[u8] = b"SEALED_HANGMAN_GUESS_V1";

/// Domain tag for reveal messages.
const REVEAL_DOMAIN: &[u8] = b"SEALED_HANGMAN_REVEAL_V1";

/// Public identity of a participant (Ed25519 verifying key bytes).
///
/// Implements Ord for deterministic ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerKey(pub [u8; 32]);

impl PlayerKey {
    /// Identity for a signing key.
    pub fn from_signing_key(key: &SigningKey) -> Self {
        Self(key.verifying_key().to_bytes())
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// First four bytes as hex, for logs.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Verify a signature over `message`.
    ///
    /// Bytes that are not a valid curve point never verify.
    pub fn verify(&self, message: &[u8], signature: &MoveSignature) -> bool {
        match VerifyingKey::from_bytes(&self.0) {
            Ok(key) => key.verify(message, &signature.0).is_ok(),
            Err(_) => false,
        }
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Signature attached to a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSignature(pub Signature);

impl MoveSignature {
    /// Raw 64-byte signature.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }

    /// Parse from raw bytes.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        Self(Signature::from_bytes(bytes))
    }
}

/// Message the guesser signs for `submit_guess`.
pub fn guess_message(guess: Symbol) -> Vec<u8> {
    let mut message = Vec::with_capacity(GUESS_DOMAIN.len() + 1);
    message.extend_from_slice(GUESS_DOMAIN);
    message.push(guess.value());
    message
}

/// Message the setter signs for `verify_guess`.
pub fn reveal_message(word: &Word, blinding: &Blinding) -> Vec<u8> {
    let mut message = Vec::with_capacity(REVEAL_DOMAIN.len() + word.len() + 32);
    message.extend_from_slice(REVEAL_DOMAIN);
    message.extend(word.symbols().iter().map(|s| s.value()));
    message.extend_from_slice(blinding.as_bytes());
    message
}

/// Sign a guess.
pub fn sign_guess(key: &SigningKey, guess: Symbol) -> MoveSignature {
    MoveSignature(key.sign(&guess_message(guess)))
}

/// Sign a reveal of the secret word.
pub fn sign_reveal(key: &SigningKey, word: &Word, blinding: &Blinding) -> MoveSignature {
    MoveSignature(key.sign(&reveal_message(word, blinding)))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn sym(c: char) -> Symbol {
        Symbol::from_char(c).unwrap()
    }

    #[test]
    fn test_guess_signature_verifies() {
        let key = SigningKey::generate(&mut OsRng);
        let player = PlayerKey::from_signing_key(&key);

        let sig = sign_guess(&key, sym('e'));
        assert!(player.verify(&guess_message(sym('e')), &sig));
        assert!(!player.verify(&guess_message(sym('f')), &sig));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let key = SigningKey::generate(&mut OsRng);
        let other = PlayerKey::from_signing_key(&SigningKey::generate(&mut OsRng));

        let sig = sign_guess(&key, sym('e'));
        assert!(!other.verify(&guess_message(sym('e')), &sig));
    }

    #[test]
    fn test_reveal_signature_covers_blinding() {
        let key = SigningKey::generate(&mut OsRng);
        let player = PlayerKey::from_signing_key(&key);
        let word: Word = "cat".parse().unwrap();
        let blinding = Blinding::from_bytes([1; 32]);

        let sig = sign_reveal(&key, &word, &blinding);
        assert!(player.verify(&reveal_message(&word, &blinding), &sig));
        assert!(!player.verify(&reveal_message(&word, &Blinding::from_bytes([2; 32])), &sig));
    }

    #[test]
    fn test_guess_and_reveal_domains_differ() {
        // A one-letter word with a zero blinding must not collide with a guess.
        let word: Word = "a".parse().unwrap();
        let blinding = Blinding::from_bytes([0; 32]);
        assert_ne!(guess_message(sym('a')), reveal_message(&word, &blinding));
    }

    #[test]
    fn test_invalid_key_bytes_never_verify() {
        let key = SigningKey::generate(&mut OsRng);
        let sig = sign_guess(&key, sym('a'));

        // Find bytes that are not a valid point encoding.
        let bogus = (0u8..=255)
            .map(|b| [b; 32])
            .find(|bytes| VerifyingKey::from_bytes(bytes).is_err())
            .expect("some byte pattern is not a curve point");
        assert!(!PlayerKey(bogus).verify(&guess_message(sym('a')), &sig));
    }

    #[test]
    fn test_signature_bytes_roundtrip() {
        let key = SigningKey::generate(&mut OsRng);
        let sig = sign_guess(&key, sym('q'));
        assert_eq!(MoveSignature::from_bytes(&sig.to_bytes()), sig);
    }
}
