pub use crate::challenge::{solve, Challenge};
pub use crate::config::SolverConfig;
pub use crate::criteria::{Criteria, MAX_CRITERIA_LEN};
pub use crate::error::{InvalidCriteria, VerifyError};
pub use crate::hash::{Hash, HexEncode};
pub use crate::solution::Solution;

mod challenge;
mod config;
mod criteria;
mod error;
mod hash;
mod solution;

/// Number of leading zero hex digits required when none is given.
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Challenge data used when the caller does not bring its own,
/// shaped like `TIMESTAMP|NONCE|SIGNATURE`.
pub const SAMPLE_DATA: &str =
    "1692065790855700|164|a5f7531fb66472a7a2524a9a5681e83ed389ed7db4c24895305d059719394b86";
