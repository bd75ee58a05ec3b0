//! # Sealed Hangman
//!
//! Two-party hangman where the secret word is locked behind a hash
//! commitment and every move is signed, so neither player can cheat even
//! though the whole game record is public.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SEALED HANGMAN                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Encoding primitives                       │
//! │  ├── word.rs     - 5-bit symbol codec, packed words          │
//! │  └── hash.rs     - Domain-separated SHA-256                  │
//! │                                                              │
//! │  proof/          - Cryptographic bindings                    │
//! │  ├── commitment.rs - Word commitment and reveal check        │
//! │  └── signature.rs  - Ed25519 move signatures                 │
//! │                                                              │
//! │  game/           - Protocol                                  │
//! │  ├── state.rs    - Public game record                        │
//! │  ├── turn.rs     - init_game, submit_guess, verify_guess     │
//! │  ├── outcome.rs  - Win/loss evaluation                       │
//! │  ├── events.rs   - Transition events                         │
//! │  └── view.rs     - Observable projection                     │
//! │                                                              │
//! │  config.rs       - Setup policy                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Protocol Guarantee
//!
//! - The setter cannot change the word: every verification reopens the
//!   commitment published at setup.
//! - Nobody moves out of turn: the turn flag gates both transitions.
//! - Nobody forges the other's move: each transition is signed by the
//!   identity bound to it at setup.
//! - A rejected call leaves the record untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::config::GameConfig;
pub use crate::core::word::{Symbol, Word, CodecError, MAX_WORD_LEN};
pub use crate::game::state::{Game, GameId, Outcome, Turn};
pub use crate::game::turn::{init_game, submit_guess, verify_guess, ProtocolError};
pub use crate::game::view::GameView;
pub use crate::proof::commitment::{Blinding, SetterSecret, WordCommitment};
pub use crate::proof::signature::{MoveSignature, PlayerKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
