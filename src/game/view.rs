//! Public Game View
//!
//! What any viewer may read: the five public fields plus the constants
//! needed to decode them (word length and miss limit).

use serde::{Deserialize, Serialize};

use crate::core::word::{CodecError, PackedWord, Symbol, Word};
use crate::game::state::{Game, GameId, Outcome, Turn};
use crate::proof::commitment::WordCommitment;

/// Observable projection of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Game identifier.
    pub game_id: GameId,
    /// Published commitment.
    pub commitment: WordCommitment,
    /// Packed masked word.
    pub masked_word: PackedWord,
    /// Symbol value of the last guess, 0 before the first guess.
    pub last_guess: u8,
    /// Misses so far.
    pub miss_count: u32,
    /// Whose move is next.
    pub turn: Turn,
    /// Current outcome.
    pub outcome: Outcome,
    /// Length needed to unpack `masked_word`.
    pub word_length: usize,
    /// Misses allowed.
    pub miss_limit: u32,
}

impl GameView {
    /// Project a game record.
    pub fn of(game: &Game) -> Self {
        Self {
            game_id: game.id,
            commitment: game.params.commitment,
            masked_word: game.state.masked_word,
            last_guess: game.state.last_guess.map_or(0, Symbol::value),
            miss_count: game.state.miss_count,
            turn: game.state.turn,
            outcome: game.state.outcome,
            word_length: game.params.word_length,
            miss_limit: game.params.miss_limit,
        }
    }

    /// Unpack the masked word.
    pub fn masked(&self) -> Result<Word, CodecError> {
        Word::unpack(self.masked_word, self.word_length)
    }

    /// Last guess as a character, if any.
    pub fn last_guess_char(&self) -> Option<char> {
        Symbol::from_value(self.last_guess).ok().map(Symbol::to_char)
    }

    /// Misses left before the guesser loses.
    pub fn remaining_lives(&self) -> u32 {
        self.miss_limit.saturating_sub(self.miss_count)
    }

    /// JSON encoding for external viewers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self::of(game)
    }
}
