//! Word Codec
//!
//! Fixed-width character encoding for the secret word and the masked word.
//!
//! Every character is one of 27 symbols packed into 5 bits:
//!
//! ```text
//! a = 1, b = 2, ... z = 26, _ = 27
//! ```
//!
//! A word packs into a single `u128` with the first character in the
//! least significant bits (character `i` occupies bits `5i..5i+5`).
//! The length is not recoverable from the packed value, so it always
//! travels alongside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bits per encoded character.
pub const SYMBOL_BITS: usize = 5;

/// Mask selecting one encoded character.
const SYMBOL_MASK: u128 = (1 << SYMBOL_BITS) - 1;

/// Longest word that fits in a [`PackedWord`] (25 * 5 = 125 bits).
pub const MAX_WORD_LEN: usize = 128 / SYMBOL_BITS;

/// Character used for unrevealed positions.
pub const BLANK_CHAR: char = '_';

/// Packed word representation.
pub type PackedWord = u128;

// =============================================================================
// ERRORS
// =============================================================================

/// Codec misuse. The caller must fix its input before resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Character outside `a-z` and `_`.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// Symbol value outside `[1, 27]`.
    #[error("invalid symbol value {0}")]
    InvalidSymbolValue(u8),

    /// Packed value or symbol count inconsistent with the given length.
    #[error("length mismatch: {length} characters (max {max})")]
    LengthMismatch {
        /// Length that was supplied or found.
        length: usize,
        /// Maximum the codec supports.
        max: usize,
    },
}

// =============================================================================
// SYMBOL
// =============================================================================

/// One encoded character, always in `[1, 27]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Symbol(u8);

impl Symbol {
    /// The blank placeholder `_`.
    pub const BLANK: Symbol = Symbol(27);

    /// Encode a character.
    pub fn from_char(c: char) -> Result<Self, CodecError> {
        match c {
            BLANK_CHAR => Ok(Self::BLANK),
            'a'..='z' => Ok(Self(c as u8 - b'a' + 1)),
            _ => Err(CodecError::InvalidCharacter(c)),
        }
    }

    /// Build from a raw symbol value.
    pub fn from_value(value: u8) -> Result<Self, CodecError> {
        if (1..=27).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CodecError::InvalidSymbolValue(value))
        }
    }

    /// Raw symbol value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Decode back to a character.
    pub fn to_char(self) -> char {
        if self == Self::BLANK {
            BLANK_CHAR
        } else {
            (b'a' + self.0 - 1) as char
        }
    }

    /// Is this the blank placeholder?
    #[inline]
    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }
}

impl TryFrom<u8> for Symbol {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Map a character to its symbol value.
pub fn encode_symbol(c: char) -> Result<u8, CodecError> {
    Symbol::from_char(c).map(Symbol::value)
}

/// Map a symbol value back to its character.
pub fn decode_symbol(value: u8) -> Result<char, CodecError> {
    Symbol::from_value(value).map(Symbol::to_char)
}

// =============================================================================
// PACKING
// =============================================================================

/// Concatenate 5-bit symbol values, first symbol in the lowest bits.
pub fn pack(symbols: &[Symbol]) -> Result<PackedWord, CodecError> {
    if symbols.len() > MAX_WORD_LEN {
        return Err(CodecError::LengthMismatch {
            length: symbols.len(),
            max: MAX_WORD_LEN,
        });
    }

    Ok(pack_unchecked(symbols))
}

/// Callers guarantee `symbols.len() <= MAX_WORD_LEN`.
fn pack_unchecked(symbols: &[Symbol]) -> PackedWord {
    symbols
        .iter()
        .enumerate()
        .fold(0u128, |acc, (i, s)| acc | ((s.value() as u128) << (i * SYMBOL_BITS)))
}

/// Inverse of [`pack`] for a known length.
///
/// Bits set above `length * 5` are a [`CodecError::LengthMismatch`] rather
/// than being dropped.
pub fn unpack(packed: PackedWord, length: usize) -> Result<Vec<Symbol>, CodecError> {
    let mismatch = CodecError::LengthMismatch {
        length,
        max: MAX_WORD_LEN,
    };
    if length > MAX_WORD_LEN {
        return Err(mismatch);
    }

    let used_bits = length * SYMBOL_BITS;
    if packed.checked_shr(used_bits as u32).unwrap_or(0) != 0 {
        return Err(mismatch);
    }

    (0..length)
        .map(|i| {
            let value = ((packed >> (i * SYMBOL_BITS)) & SYMBOL_MASK) as u8;
            Symbol::from_value(value)
        })
        .collect()
}

// =============================================================================
// WORD
// =============================================================================

/// A sequence of at most [`MAX_WORD_LEN`] symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Word(Vec<Symbol>);

impl Word {
    /// Create from symbols.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, CodecError> {
        if symbols.len() > MAX_WORD_LEN {
            return Err(CodecError::LengthMismatch {
                length: symbols.len(),
                max: MAX_WORD_LEN,
            });
        }
        Ok(Self(symbols))
    }

    /// All-blank word of the given length.
    pub fn blank(length: usize) -> Result<Self, CodecError> {
        Self::new(vec![Symbol::BLANK; length])
    }

    /// Decode a packed word of known length.
    pub fn unpack(packed: PackedWord, length: usize) -> Result<Self, CodecError> {
        unpack(packed, length).map(Self)
    }

    /// Pack into a single integer.
    pub fn pack(&self) -> PackedWord {
        pack_unchecked(&self.0)
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the word empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols in order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Per-position flags for where `symbol` occurs.
    pub fn matches(&self, symbol: Symbol) -> Vec<bool> {
        self.0.iter().map(|s| *s == symbol).collect()
    }

    /// Does `symbol` occur anywhere?
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    /// Copy `symbol` into every position where it occurs in `source`.
    ///
    /// Returns the matching positions, including ones already revealed.
    /// Both words must have the same length.
    pub fn reveal(&mut self, source: &Word, symbol: Symbol) -> Vec<usize> {
        debug_assert_eq!(self.len(), source.len());

        let mut positions = Vec::new();
        for (i, (slot, s)) in self.0.iter_mut().zip(source.0.iter()).enumerate() {
            if *s == symbol {
                *slot = symbol;
                positions.push(i);
            }
        }
        positions
    }

    /// No blank positions left.
    pub fn is_fully_revealed(&self) -> bool {
        !self.contains(Symbol::BLANK)
    }
}

impl TryFrom<Vec<Symbol>> for Word {
    type Error = CodecError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Word> for Vec<Symbol> {
    fn from(word: Word) -> Vec<Symbol> {
        word.0
    }
}

impl FromStr for Word {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(Symbol::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(symbols)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
