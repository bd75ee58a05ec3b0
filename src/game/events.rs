//! Game Events
//!
//! Events emitted by accepted transitions, for viewers and logs.

use serde::{Deserialize, Serialize};

use crate::core::word::Symbol;
use crate::game::state::{GameId, Outcome};

/// Something that happened in an accepted transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Game record created and commitment published.
    GameStarted {
        /// New game's identifier.
        game_id: GameId,
        /// Length of the secret word.
        word_length: usize,
        /// Misses allowed.
        miss_limit: u32,
    },

    /// Guesser proposed a character.
    GuessSubmitted {
        /// The proposed symbol.
        guess: Symbol,
    },

    /// Setter proved whether the guess occurs in the word.
    GuessVerified {
        /// The symbol that was checked.
        guess: Symbol,
        /// Does it occur in the word?
        hit: bool,
        /// Positions where the guess occurs (empty on a miss).
        positions: Vec<usize>,
        /// Misses after this verification.
        miss_count: u32,
    },

    /// Outcome became terminal.
    GameEnded {
        /// Final outcome.
        outcome: Outcome,
        /// Misses at the end.
        miss_count: u32,
    },
}

/// Result of one transition.
#[derive(Debug, Default)]
pub struct TurnResult {
    /// Events generated by this transition
    pub events: Vec<GameEvent>,
    /// Outcome after the transition
    pub outcome: Outcome,
}

impl TurnResult {
    /// Did this transition end the game?
    pub fn game_ended(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameEnded { .. }))
    }
}
