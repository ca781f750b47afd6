//! Ready-made alphabets and an owned [`Alphabet`] type.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Largest alphabet a byte mask can index without bias.
pub const MAX_ALPHABET_SIZE: usize = 254;

/// Length used when the caller does not pick one.
pub const DEFAULT_LENGTH: usize = 21;

/// URL-safe symbols: `_-0-9a-zA-Z`.
pub const DEFAULT: &[char] = &[
    '_', '-', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const NUMBERS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Digits and English letters without lookalikes: `1 l I 0 O o u v 5 S s`.
pub const NO_LOOK_ALIKES: &[char] = &[
    '2', '3', '4', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M',
    'N', 'P', 'Q', 'R', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 't', 'w', 'x', 'y', 'z',
];

/// An owned, ordered set of symbols.
///
/// Duplicates are kept as given; a symbol listed twice is drawn twice as often.
/// The size is only checked when the alphabet is handed to a generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from(DEFAULT)
    }
}

impl From<&[char]> for Alphabet {
    fn from(symbols: &[char]) -> Self {
        Self(symbols.to_vec())
    }
}

impl From<Vec<char>> for Alphabet {
    fn from(symbols: Vec<char>) -> Self {
        Self(symbols)
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self(symbols.chars().collect())
    }
}

impl From<String> for Alphabet {
    fn from(symbols: String) -> Self {
        Self::from(symbols.as_str())
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.0.into_iter().collect()
    }
}

impl AsRef<[char]> for Alphabet {
    fn as_ref(&self) -> &[char] {
        &self.0
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
