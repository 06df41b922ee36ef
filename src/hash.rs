use sha2::{Digest, Sha256};

/// The length of a `Hash` (in bytes).
pub const HASH_LENGTH: usize = 32;
/// The length of a `Hash` rendered as hex.
pub const HEX_DIGEST_LENGTH: usize = HASH_LENGTH * 2;
pub type Hash = [u8; HASH_LENGTH];

pub fn hash_bytes(bytes: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

pub trait HexEncode {
    fn encode_hex(&self) -> String;
}

impl HexEncode for Hash {
    fn encode_hex(&self) -> String {
        hex::encode(self)
    }
}

/// SHA-256 state seeded with the challenge data.
///
/// Every probe clones the seeded state and only feeds the nonce digits,
/// so the data is absorbed once per search instead of once per nonce.
#[derive(Clone)]
pub struct ProbeHasher {
    seeded: Sha256,
}

impl ProbeHasher {
    pub fn new(data: &[u8]) -> Self {
        ProbeHasher {
            seeded: Sha256::new_with_prefix(data),
        }
    }

    /// Hash of `data` followed by the decimal form of `nonce`.
    pub fn probe(&self, nonce: u64) -> Hash {
        let mut hasher = self.seeded.clone();
        hasher.update(nonce.to_string().as_bytes());
        hasher.finalize().into()
    }
}
