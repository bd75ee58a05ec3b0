//! Cryptographic Bindings
//!
//! What keeps both players honest:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    BINDINGS                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - Hash commitment to the secret word       │
//! │  signature.rs    - Ed25519 signatures over each move        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod signature;

// Re-export key types
pub use commitment::{commit, verify_reveal, Blinding, SetterSecret, WordCommitment};
pub use signature::{sign_guess, sign_reveal, MoveSignature, PlayerKey};
