//! Turn Protocol
//!
//! Setup and the two transitions of the game.
//!
//! ```text
//!              submit_guess                verify_guess
//!   ┌──────────────┐ ───────────▶ ┌─────────────┐ ──────────▶ Ongoing ─┐
//!   │ GuesserTurn  │              │ SetterTurn  │                      │
//!   └──────────────┘ ◀─────────────────────────────────────────────────┘
//!                                        └──────▶ GuesserLoses / GuesserWins
//! ```
//!
//! Every check runs in a fixed order and the first failure aborts the call.
//! Effects are computed on copies and written back only after all checks
//! pass, so a rejected call never mutates the record.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::word::{CodecError, Symbol, Word, MAX_WORD_LEN};
use crate::game::events::{GameEvent, TurnResult};
use crate::game::outcome::evaluate_outcome;
use crate::game::state::{Game, GameId, GameParams, GameState, Outcome, Turn};
use crate::proof::commitment::{commit, verify_reveal, Blinding, WordCommitment};
use crate::proof::signature::{guess_message, reveal_message, MoveSignature, PlayerKey};

/// Rejections. None of them is retriable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Codec misuse.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Setup parameters rejected.
    #[error("invalid setup: {0}")]
    InvalidSetup(&'static str),

    /// Caller is not the identity bound to this transition.
    #[error("caller is not authorized for this move")]
    Unauthorized,

    /// The other party must move first.
    #[error("out of turn: waiting for {expected:?}")]
    OutOfTurn {
        /// Whose move it actually is.
        expected: Turn,
    },

    /// Signature did not verify under the caller's key.
    #[error("bad signature")]
    BadSignature,

    /// Revealed word and blinding do not open the commitment.
    #[error("revealed word does not match commitment")]
    CommitmentMismatch,

    /// The game has already ended.
    #[error("game over: {0:?}")]
    GameOver(Outcome),
}

// =============================================================================
// SETUP
// =============================================================================

/// Create a game record and its commitment.
///
/// The word and blinding are read here only; the setter keeps them for
/// every later `verify_guess`.
pub fn init_game(
    setter: PlayerKey,
    guesser: PlayerKey,
    word: &Word,
    blinding: &Blinding,
    miss_limit: u32,
) -> Result<(Game, WordCommitment), ProtocolError> {
    if word.is_empty() {
        return Err(ProtocolError::InvalidSetup("word is empty"));
    }
    if word.len() > MAX_WORD_LEN {
        return Err(ProtocolError::InvalidSetup("word is too long"));
    }
    if miss_limit == 0 {
        return Err(ProtocolError::InvalidSetup("miss limit must be at least 1"));
    }

    let commitment = commit(word, blinding);
    let game = Game {
        id: GameId::new_v4(),
        params: GameParams {
            setter,
            guesser,
            commitment,
            word_length: word.len(),
            miss_limit,
        },
        state: GameState::initial(word.len())?,
    };

    info!(
        "Game {} set up: {} letters, {} lives, commitment {}",
        game.id.short_hex(),
        word.len(),
        miss_limit,
        &commitment.to_string()[..8]
    );

    Ok((game, commitment))
}

/// Events for a freshly set up game.
pub fn start_events(game: &Game) -> TurnResult {
    TurnResult {
        events: vec![GameEvent::GameStarted {
            game_id: game.id,
            word_length: game.params.word_length,
            miss_limit: game.params.miss_limit,
        }],
        outcome: game.outcome(),
    }
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Guesser proposes a character.
pub fn submit_guess(
    game: &mut Game,
    caller: &PlayerKey,
    signature: &MoveSignature,
    guess: Symbol,
) -> Result<TurnResult, ProtocolError> {
    check_live(game)?;
    check_role(caller, &game.params.guesser)?;
    check_turn(game, Turn::Guesser)?;

    if !caller.verify(&guess_message(guess), signature) {
        warn!("Game {}: bad guess signature from {}", game.id.short_hex(), caller.short_hex());
        return Err(ProtocolError::BadSignature);
    }

    game.state.last_guess = Some(guess);
    game.state.turn = Turn::Setter;

    debug!("Game {}: guess '{}' submitted", game.id.short_hex(), guess);

    Ok(TurnResult {
        events: vec![GameEvent::GuessSubmitted { guess }],
        outcome: game.outcome(),
    })
}

/// Setter opens the commitment and scores the pending guess.
pub fn verify_guess(
    game: &mut Game,
    caller: &PlayerKey,
    signature: &MoveSignature,
    revealed: &Word,
    blinding: &Blinding,
) -> Result<TurnResult, ProtocolError> {
    check_live(game)?;
    check_role(caller, &game.params.setter)?;
    check_turn(game, Turn::Setter)?;

    if !caller.verify(&reveal_message(revealed, blinding), signature) {
        warn!("Game {}: bad reveal signature from {}", game.id.short_hex(), caller.short_hex());
        return Err(ProtocolError::BadSignature);
    }

    if revealed.len() != game.params.word_length
        || !verify_reveal(revealed, blinding, &game.params.commitment)
    {
        warn!("Game {}: reveal does not open the commitment", game.id.short_hex());
        return Err(ProtocolError::CommitmentMismatch);
    }

    let guess = game
        .state
        .last_guess
        .ok_or(ProtocolError::OutOfTurn { expected: Turn::Guesser })?;

    // Compute every effect before touching the record.
    let mut masked = game.masked_word()?;
    let hit = revealed.contains(guess);
    let miss_count = if hit {
        game.state.miss_count
    } else {
        game.state.miss_count + 1
    };
    let positions = masked.reveal(revealed, guess);
    let outcome = evaluate_outcome(miss_count, game.params.miss_limit, &masked, revealed);

    game.state.miss_count = miss_count;
    game.state.masked_word = masked.pack();
    game.state.outcome = outcome;
    if outcome == Outcome::Ongoing {
        game.state.turn = Turn::Guesser;
    }

    debug!(
        "Game {}: guess '{}' {} ({} / {} misses) -> {}",
        game.id.short_hex(),
        guess,
        if hit { "hit" } else { "missed" },
        miss_count,
        game.params.miss_limit,
        masked
    );

    let mut result = TurnResult {
        events: vec![GameEvent::GuessVerified {
            guess,
            hit,
            positions,
            miss_count,
        }],
        outcome,
    };

    if outcome.is_terminal() {
        info!("Game {} ended: {:?}", game.id.short_hex(), outcome);
        result.events.push(GameEvent::GameEnded { outcome, miss_count });
    }

    Ok(result)
}

fn check_live(game: &Game) -> Result<(), ProtocolError> {
    match game.outcome() {
        Outcome::Ongoing => Ok(()),
        outcome => Err(ProtocolError::GameOver(outcome)),
    }
}

fn check_role(caller: &PlayerKey, expected: &PlayerKey) -> Result<(), ProtocolError> {
    if caller == expected {
        Ok(())
    } else {
        Err(ProtocolError::Unauthorized)
    }
}

fn check_turn(game: &Game, required: Turn) -> Result<(), ProtocolError> {
    if game.turn() == required {
        Ok(())
    } else {
        Err(ProtocolError::OutOfTurn { expected: game.turn() })
    }
}

// =============================================================================
// TESTS
// =============================================================================
