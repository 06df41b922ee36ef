use crate::config::SolverConfig;
use crate::criteria::Criteria;
use crate::error::InvalidCriteria;
use crate::hash::{Hash, HexEncode, ProbeHasher};
use crate::solution::Solution;
use tokio::task;

/// A proof-of-work puzzle: find a nonce that, appended to `data`, gives a
/// digest starting with `criteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    data: String,
    criteria: Criteria,
}

impl Challenge {
    /// Validates the criteria up front, an invalid one would never be met.
    pub fn new(data: impl Into<String>, criteria: &str) -> Result<Self, InvalidCriteria> {
        Ok(Self::with_criteria(data, Criteria::new(criteria)?))
    }

    pub fn with_criteria(data: impl Into<String>, criteria: Criteria) -> Self {
        Challenge {
            data: data.into(),
            criteria,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Searches nonces upwards from 0 and returns the first one that meets
    /// the criteria. There is no upper bound on the running time.
    pub fn solve(&self) -> Solution {
        tracing::debug!(data = %self.data, criteria = %self.criteria, "solving challenge");
        let hasher = ProbeHasher::new(self.data.as_bytes());
        let mut nonce = 0u64;
        loop {
            let hash = hasher.probe(nonce);
            if self.criteria.is_met_by(&hash) {
                return self.found(nonce, hash);
            }
            nonce += 1;
        }
    }

    /// Same search as [Challenge::solve], yielding to the tokio scheduler every
    /// `config.yield_interval` probes. Dropping the future stops the search.
    pub async fn solve_async(&self, config: &SolverConfig) -> Solution {
        tracing::debug!(
            data = %self.data,
            criteria = %self.criteria,
            yield_interval = config.yield_interval.get(),
            "solving challenge cooperatively"
        );
        let hasher = ProbeHasher::new(self.data.as_bytes());
        let mut nonce = 0u64;
        loop {
            let hash = hasher.probe(nonce);
            if self.criteria.is_met_by(&hash) {
                return self.found(nonce, hash);
            }
            nonce += 1;
            if nonce % config.yield_interval.get() == 0 {
                tracing::trace!(nonce, "yielding");
                task::yield_now().await;
            }
        }
    }

    fn found(&self, nonce: u64, hash: Hash) -> Solution {
        let solution = Solution {
            data: self.data.clone(),
            added_value: nonce.to_string(),
            hash: hash.encode_hex(),
        };
        tracing::debug!(nonce, hash = %solution.hash, "challenge solved");
        solution
    }
}

/// Finds the smallest nonce such that the SHA-256 of `data` followed by the
/// nonce's decimal digits starts with `criteria`.
pub fn solve(data: &str, criteria: &str) -> Result<Solution, InvalidCriteria> {
    Ok(Challenge::new(data, criteria)?.solve())
}
