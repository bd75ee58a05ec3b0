//! Game Configuration
//!
//! Setup-time policy: miss limit, word length bound, whether the secret
//! word may contain the blank symbol, and how strictly the setter's text
//! is parsed.
//!
//! The protocol itself accepts any encodable word; these checks are
//! stricter local rules layered on top.

use crate::core::word::{Symbol, Word, MAX_WORD_LEN};
use crate::game::state::Game;
use crate::game::turn::{init_game, ProtocolError};
use crate::proof::commitment::{SetterSecret, WordCommitment};
use crate::proof::signature::PlayerKey;

/// Default misses allowed.
pub const DEFAULT_MISS_LIMIT: u32 = 5;

/// Setup configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Misses allowed before the guesser loses.
    pub miss_limit: u32,
    /// Longest secret word accepted (capped at the codec maximum).
    pub max_word_len: usize,
    /// Lowercase ASCII uppercase letters instead of rejecting them.
    pub fold_case: bool,
    /// Accept `_` inside the secret word. Such a position can never be
    /// revealed, so it is already shown in the initial mask.
    pub allow_blank_in_word: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            miss_limit: DEFAULT_MISS_LIMIT,
            max_word_len: MAX_WORD_LEN,
            fold_case: false,
            allow_blank_in_word: true,
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            miss_limit: std::env::var("HANGMAN_MISS_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.miss_limit),
            max_word_len: std::env::var("HANGMAN_MAX_WORD_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(|n: usize| n.min(MAX_WORD_LEN))
                .unwrap_or(defaults.max_word_len),
            fold_case: std::env::var("HANGMAN_FOLD_CASE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.fold_case),
            allow_blank_in_word: std::env::var("HANGMAN_ALLOW_BLANK")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.allow_blank_in_word),
        }
    }

    /// Parse a secret word under this policy.
    pub fn parse_word(&self, text: &str) -> Result<Word, ProtocolError> {
        let symbols = text
            .chars()
            .map(|c| {
                let c = if self.fold_case { c.to_ascii_lowercase() } else { c };
                Symbol::from_char(c)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.len() > self.max_word_len.min(MAX_WORD_LEN) {
            return Err(ProtocolError::InvalidSetup("word is longer than allowed"));
        }
        let word = Word::new(symbols)?;
        self.check_word(&word)?;
        Ok(word)
    }

    fn check_word(&self, word: &Word) -> Result<(), ProtocolError> {
        if word.len() > self.max_word_len {
            return Err(ProtocolError::InvalidSetup("word is longer than allowed"));
        }
        if !self.allow_blank_in_word && word.contains(Symbol::BLANK) {
            return Err(ProtocolError::InvalidSetup("word contains the blank symbol"));
        }
        Ok(())
    }

    /// Parse a single guessed character under this policy.
    pub fn parse_guess(&self, c: char) -> Result<Symbol, ProtocolError> {
        let c = if self.fold_case { c.to_ascii_lowercase() } else { c };
        Ok(Symbol::from_char(c)?)
    }

    /// Set up a game from the setter's secret.
    pub fn init_game(
        &self,
        setter: PlayerKey,
        guesser: PlayerKey,
        secret: &SetterSecret,
    ) -> Result<(Game, WordCommitment), ProtocolError> {
        self.check_word(&secret.word)?;
        init_game(setter, guesser, &secret.word, &secret.blinding, self.miss_limit)
    }
}
