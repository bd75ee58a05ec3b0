//! Outcome Evaluation
//!
//! Decides the outcome from the post-update state. The loss condition is
//! checked first. A hit never adds a miss, so both conditions cannot hold
//! on the same verification, but the order keeps the tie-break fixed.

use crate::core::word::Word;
use crate::game::state::Outcome;

/// Outcome after a verification.
///
/// `masked` is the masked word after revealing the latest guess and
/// `revealed` is the setter's opened word.
pub fn evaluate_outcome(miss_count: u32, miss_limit: u32, masked: &Word, revealed: &Word) -> Outcome {
    if miss_count >= miss_limit {
        Outcome::GuesserLoses
    } else if masked == revealed {
        Outcome::GuesserWins
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn test_ongoing() {
        assert_eq!(evaluate_outcome(0, 5, &word("c__"), &word("cat")), Outcome::Ongoing);
        assert_eq!(evaluate_outcome(4, 5, &word("ca_"), &word("cat")), Outcome::Ongoing);
    }

    #[test]
    fn test_win_when_fully_revealed() {
        assert_eq!(evaluate_outcome(0, 5, &word("cat"), &word("cat")), Outcome::GuesserWins);
        assert_eq!(evaluate_outcome(4, 5, &word("cat"), &word("cat")), Outcome::GuesserWins);
    }

    #[test]
    fn test_loss_at_limit() {
        assert_eq!(evaluate_outcome(2, 2, &word("___"), &word("cat")), Outcome::GuesserLoses);
    }

    #[test]
    fn test_loss_takes_priority() {
        assert_eq!(evaluate_outcome(3, 3, &word("cat"), &word("cat")), Outcome::GuesserLoses);
    }
}
