use crate::error::InvalidCriteria;
use crate::hash::{Hash, HEX_DIGEST_LENGTH};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Longest criteria that a digest can satisfy.
pub const MAX_CRITERIA_LEN: usize = HEX_DIGEST_LENGTH;

/// The hex prefix a solution's digest must start with.
///
/// Only lowercase hex of at most [MAX_CRITERIA_LEN] characters is accepted,
/// anything else could never match and would make the search run forever.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Criteria {
    text: String,
    nibbles: Vec<u8>,
}

impl Criteria {
    pub fn new(text: &str) -> Result<Self, InvalidCriteria> {
        if text.len() > MAX_CRITERIA_LEN {
            return Err(InvalidCriteria::TooLong { len: text.len() });
        }
        let nibbles = text
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0'..='9' | 'a'..='f' => Ok(character.to_digit(16).unwrap_or_default() as u8),
                _ => Err(InvalidCriteria::NonHex {
                    position,
                    character,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Criteria {
            text: text.to_owned(),
            nibbles,
        })
    }

    /// Criteria requiring `difficulty` leading zero hex digits.
    pub fn leading_zeros(difficulty: usize) -> Result<Self, InvalidCriteria> {
        Self::new(&"0".repeat(difficulty))
    }

    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// Whether the lowercase hex rendering of `hash` starts with this criteria.
    pub fn is_met_by(&self, hash: &Hash) -> bool {
        self.nibbles.iter().enumerate().all(|(i, nibble)| {
            let byte = hash[i / 2];
            let digit = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            digit == *nibble
        })
    }

    /// Same check on an already rendered digest.
    pub fn is_met_by_hex(&self, hex: &str) -> bool {
        hex.starts_with(&self.text)
    }
}

impl FromStr for Criteria {
    type Err = InvalidCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Criteria {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for Criteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
