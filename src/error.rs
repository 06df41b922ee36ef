use thiserror::Error;

/// Why a criteria string can never be met by a hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCriteria {
    /// A digest only has 64 hex characters
    #[error("criteria is {len} characters long, at most 64 are allowed")]
    TooLong { len: usize },

    /// Digests are rendered as lowercase hex only
    #[error("criteria has non-hex character {character:?} at position {position}")]
    NonHex { position: usize, character: char },
}

/// Why a submitted solution was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("solution hash does not start with the criteria")]
    InvalidDifficulty,

    #[error("solution hash is not the digest of data and added value")]
    InvalidHash,

    #[error("added value {0:?} is not a decimal nonce")]
    InvalidAddedValue(String),
}
