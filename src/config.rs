//! Search engine configuration.

/// Plies searched by default
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Candidate moves kept per node by default
pub const DEFAULT_BRANCHING_LIMIT: usize = 5;

/// Configuration for the minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead, including the root move.
    pub depth: u32,

    /// Maximum candidate moves explored per node. Larger sets are shuffled
    /// and truncated, so a limit at least as large as the frontier makes the
    /// search deterministic.
    pub branching_limit: usize,

    /// Seed for the shuffling source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            branching_limit: DEFAULT_BRANCHING_LIMIT,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_branching_limit(mut self, limit: usize) -> Self {
        self.branching_limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Config that never truncates candidates
    pub fn exhaustive(depth: u32) -> Self {
        Self {
            depth,
            branching_limit: usize::MAX,
            seed: None,
        }
    }
}
