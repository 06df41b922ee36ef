use std::num::NonZeroU64;

/// Tuning for the cooperative (async) search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of probes between two yields to the scheduler
    pub yield_interval: NonZeroU64,
}

impl SolverConfig {
    pub const DEFAULT_YIELD_INTERVAL: NonZeroU64 = match NonZeroU64::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn with_yield_interval(yield_interval: NonZeroU64) -> Self {
        SolverConfig { yield_interval }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::with_yield_interval(Self::DEFAULT_YIELD_INTERVAL)
    }
}
