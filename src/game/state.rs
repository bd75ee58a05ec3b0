//! Game State Definitions
//!
//! The public record of one game. Everything here is visible to both
//! players and to any viewer; the secret word never appears in it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::hash::{Hash32, StateHasher};
use crate::core::word::{CodecError, PackedWord, Symbol, Word};
use crate::proof::commitment::WordCommitment;
use crate::proof::signature::PlayerKey;

// =============================================================================
// GAME ID
// =============================================================================

/// Unique game identifier (UUID as bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub [u8; 16]);

impl GameId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Fresh random id.
    pub fn new_v4() -> Self {
        Self(uuid::Uuid::new_v4().into_bytes())
    }

    /// Convert to UUID string.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// First four bytes as hex, for logs.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

// =============================================================================
// TURN & OUTCOME
// =============================================================================

/// Whose move is next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    /// Guesser submits a character.
    Guesser,
    /// Setter verifies the last guess.
    Setter,
}

impl Turn {
    fn code(self) -> u8 {
        match self {
            Turn::Guesser => 0,
            Turn::Setter => 1,
        }
    }
}

/// Result of the game so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Still being played.
    #[default]
    Ongoing,
    /// Miss limit reached. The setter wins.
    GuesserLoses,
    /// Masked word equals the secret word.
    GuesserWins,
}

impl Outcome {
    /// Numeric code: 0 ongoing, 1 setter wins, 2 guesser wins.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Ongoing => 0,
            Outcome::GuesserLoses => 1,
            Outcome::GuesserWins => 2,
        }
    }

    /// Has the game ended?
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

// =============================================================================
// PARAMETERS & STATE
// =============================================================================

/// Values fixed at setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    /// Only identity allowed to verify guesses.
    pub setter: PlayerKey,
    /// Only identity allowed to submit guesses.
    pub guesser: PlayerKey,
    /// Commitment to the secret word.
    pub commitment: WordCommitment,
    /// Length of the secret word (needed to unpack the masked word).
    pub word_length: usize,
    /// Misses allowed before the guesser loses.
    pub miss_limit: u32,
}

/// Mutable public fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Packed masked word; blank where not yet guessed.
    pub masked_word: PackedWord,
    /// Most recent guess (none before the first).
    pub last_guess: Option<Symbol>,
    /// Guesses proven absent from the word.
    pub miss_count: u32,
    /// Whose move is next.
    pub turn: Turn,
    /// Current outcome.
    pub outcome: Outcome,
}

impl GameState {
    /// State at setup: all blank, no misses, guesser to move.
    pub fn initial(word_length: usize) -> Result<Self, CodecError> {
        Ok(Self {
            masked_word: Word::blank(word_length)?.pack(),
            last_guess: None,
            miss_count: 0,
            turn: Turn::Guesser,
            outcome: Outcome::Ongoing,
        })
    }
}

/// Errors loading a published game record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Bytes are not a valid encoding.
    #[error("decode error: {0}")]
    Decode(#[from] bincode::Error),

    /// Masked word inconsistent with the word length.
    #[error("invalid masked word: {0}")]
    Codec(#[from] CodecError),

    /// Counters or flags violate the game invariants.
    #[error("inconsistent record: {0}")]
    Inconsistent(&'static str),
}

// =============================================================================
// GAME RECORD
// =============================================================================

/// The full public record the ledger holds for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Game identifier.
    pub id: GameId,
    /// Values fixed at setup.
    pub params: GameParams,
    /// Values the transitions mutate.
    pub state: GameState,
}

impl Game {
    /// Unpack the masked word.
    pub fn masked_word(&self) -> Result<Word, CodecError> {
        Word::unpack(self.state.masked_word, self.params.word_length)
    }

    /// Current outcome.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Whose move is next.
    #[inline]
    pub fn turn(&self) -> Turn {
        self.state.turn
    }

    /// Misses so far.
    #[inline]
    pub fn miss_count(&self) -> u32 {
        self.state.miss_count
    }

    /// Published commitment.
    #[inline]
    pub fn commitment(&self) -> &WordCommitment {
        &self.params.commitment
    }

    /// Digest of the whole public record.
    pub fn compute_hash(&self) -> Hash32 {
        let mut hasher = StateHasher::for_game_state();
        hasher.update_bytes(&self.id.0);
        hasher.update_bytes(self.params.setter.as_bytes());
        hasher.update_bytes(self.params.guesser.as_bytes());
        hasher.update_bytes(self.params.commitment.as_bytes());
        hasher.update_u32(self.params.word_length as u32);
        hasher.update_u32(self.params.miss_limit);
        hasher.update_u128(self.state.masked_word);
        hasher.update_u8(self.state.last_guess.map_or(0, Symbol::value));
        hasher.update_u32(self.state.miss_count);
        hasher.update_u8(self.state.turn.code());
        hasher.update_u8(self.state.outcome.code());
        hasher.finalize()
    }

    /// Compact binary encoding for publication.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a published record and check its invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let game: Game = bincode::deserialize(bytes)?;
        game.check_invariants()?;
        Ok(game)
    }

    /// Check the invariants every reachable record satisfies.
    pub fn check_invariants(&self) -> Result<(), RecordError> {
        let masked = self.masked_word()?;
        if self.params.word_length == 0 {
            return Err(RecordError::Inconsistent("empty word"));
        }
        if self.params.miss_limit == 0 {
            return Err(RecordError::Inconsistent("zero miss limit"));
        }
        if self.state.miss_count > self.params.miss_limit {
            return Err(RecordError::Inconsistent("miss count above limit"));
        }
        if self.state.turn == Turn::Setter && self.state.last_guess.is_none() {
            return Err(RecordError::Inconsistent("setter to move without a guess"));
        }
        // The secret word is not on the record, so a win is only checkable
        // against the mask: a blank-free mask equals the word.
        let lost = self.state.miss_count == self.params.miss_limit;
        let consistent = match self.state.outcome {
            Outcome::GuesserLoses => lost,
            Outcome::GuesserWins => !lost,
            Outcome::Ongoing => !lost && !masked.is_fully_revealed(),
        };
        if !consistent {
            return Err(RecordError::Inconsistent("outcome does not match counters"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game() -> Game {
        Game {
            id: GameId::new([1; 16]),
            params: GameParams {
                setter: PlayerKey([2; 32]),
                guesser: PlayerKey([3; 32]),
                commitment: WordCommitment([4; 32]),
                word_length: 3,
                miss_limit: 5,
            },
            state: GameState::initial(3).unwrap(),
        }
    }

    #[test]
    fn test_initial_state() {
        let game = test_game();
        assert_eq!(game.masked_word().unwrap().to_string(), "___");
        assert_eq!(game.state.last_guess, None);
        assert_eq!(game.miss_count(), 0);
        assert_eq!(game.turn(), Turn::Guesser);
        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_game_id_formats() {
        let id = GameId::new([0xab; 16]);
        assert_eq!(id.to_uuid_string(), "abababab-abab-abab-abab-abababababab");
        assert_eq!(id.short_hex(), "abababab");
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Ongoing.code(), 0);
        assert_eq!(Outcome::GuesserLoses.code(), 1);
        assert_eq!(Outcome::GuesserWins.code(), 2);
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::GuesserWins.is_terminal());
    }

    #[test]
    fn test_hash_tracks_state() {
        let game = test_game();
        let mut moved = game.clone();
        moved.state.turn = Turn::Setter;
        moved.state.last_guess = Symbol::from_value(1).ok();

        assert_eq!(game.compute_hash(), test_game().compute_hash());
        assert_ne!(game.compute_hash(), moved.compute_hash());
    }

    #[test]
    fn test_record_roundtrip() {
        let game = test_game();
        let bytes = game.to_bytes().unwrap();
        assert_eq!(Game::from_bytes(&bytes).unwrap(), game);
    }

    #[test]
    fn test_record_accepts_win_with_blank_in_word() {
        // "c_t" won: the blank position was never guessed.
        let mut game = test_game();
        game.state.masked_word = "c_t".parse::<Word>().unwrap().pack();
        game.state.last_guess = Symbol::from_char('t').ok();
        game.state.outcome = Outcome::GuesserWins;
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_record_rejects_broken_invariants() {
        let mut game = test_game();
        game.state.miss_count = 6;
        let bytes = game.to_bytes().unwrap();
        assert!(matches!(Game::from_bytes(&bytes), Err(RecordError::Inconsistent(_))));

        let mut game = test_game();
        game.state.outcome = Outcome::GuesserLoses;
        assert!(game.check_invariants().is_err());

        let mut game = test_game();
        game.state.masked_word = "cat".parse::<Word>().unwrap().pack();
        assert!(game.check_invariants().is_err());

        let mut game = test_game();
        game.state.masked_word = u128::MAX;
        assert!(matches!(game.check_invariants(), Err(RecordError::Codec(_))));
    }
}
