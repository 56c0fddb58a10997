//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] carries everything a run needs besides the graph and
//! its endpoints. [`validate()`](SolverConfig::validate) checks structural
//! invariants before any simulation state is allocated.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::dominance::DominanceRule;

// ── ExecutionMode ──────────────────────────────────────────────────

/// How the per-tick discovery and admission phases are executed.
///
/// Both modes produce identical ripples, ids and results: parallel work is
/// collected back in sweep order before anything is admitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Everything on the calling thread.
    #[default]
    Sequential,
    /// Discovery (per active ripple) and admissibility filtering (per
    /// arrival node) run on a dedicated worker pool.
    Parallel {
        /// Number of worker threads. `None` = auto-detect
        /// (`available_parallelism`, clamped to `[1, 64]`).
        workers: Option<usize>,
    },
}

impl ExecutionMode {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Sequential mode always resolves to 1. Explicit values are clamped
    /// to `[1, 64]`; a zero-thread pool could never make progress.
    pub fn resolved_workers(&self) -> usize {
        match *self {
            Self::Sequential => 1,
            Self::Parallel { workers: Some(n) } => n.clamp(1, 64),
            Self::Parallel { workers: None } => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 64),
        }
    }

    /// Whether a worker pool is used.
    pub fn is_parallel(&self) -> bool {
        matches!(self, Self::Parallel { .. })
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SolverConfig::validate()`] or while building
/// the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_ticks` is `Some(0)`: the run would stop before the first tick.
    ZeroTickLimit,
    /// `max_ripples` is `Some(0)`: not even the seed would fit.
    ZeroRippleLimit,
    /// The parallel worker pool could not be created.
    ThreadPoolBuild {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickLimit => write!(f, "max_ticks must be at least 1"),
            Self::ZeroRippleLimit => write!(f, "max_ripples must be at least 1"),
            Self::ThreadPoolBuild { reason } => {
                write!(f, "worker pool could not be built: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SolverConfig ───────────────────────────────────────────────────

/// Complete configuration for one or more solver runs.
///
/// # Examples
///
/// ```
/// use ripple_engine::{DominanceRule, ExecutionMode, SolverConfig};
///
/// let config = SolverConfig::new(3)
///     .with_dominance(DominanceRule::ColorCount)
///     .with_execution(ExecutionMode::Parallel { workers: Some(2) })
///     .with_max_ticks(10_000);
/// assert_eq!(config.max_colors, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of distinct colours a path may use (`k`).
    pub max_colors: usize,
    /// Dominance predicate used to prune arrivals. Default: `ColorSubset`.
    pub dominance: DominanceRule,
    /// Sequential or pooled execution. Default: `Sequential`.
    pub execution: ExecutionMode,
    /// Optional upper bound on simulated ticks. Default: `None` (run until
    /// the simulation terminates on its own).
    pub max_ticks: Option<u64>,
    /// Optional upper bound on ripples stored per run, seed included.
    /// Default: `None` (the arena's addressable maximum).
    pub max_ripples: Option<usize>,
}

impl SolverConfig {
    /// Default configuration for colour budget `max_colors`.
    pub fn new(max_colors: usize) -> Self {
        Self {
            max_colors,
            dominance: DominanceRule::default(),
            execution: ExecutionMode::default(),
            max_ticks: None,
            max_ripples: None,
        }
    }

    /// Replace the dominance rule.
    pub fn with_dominance(mut self, dominance: DominanceRule) -> Self {
        self.dominance = dominance;
        self
    }

    /// Replace the execution mode.
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Bound the number of simulated ticks.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Bound the number of ripples a run may store.
    pub fn with_max_ripples(mut self, max_ripples: usize) -> Self {
        self.max_ripples = Some(max_ripples);
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ticks == Some(0) {
            return Err(ConfigError::ZeroTickLimit);
        }
        if self.max_ripples == Some(0) {
            return Err(ConfigError::ZeroRippleLimit);
        }
        Ok(())
    }
}

/// Build the worker pool for `execution`, if it needs one.
pub(crate) fn build_pool(
    execution: ExecutionMode,
) -> Result<Option<Arc<rayon::ThreadPool>>, ConfigError> {
    if !execution.is_parallel() {
        return Ok(None);
    }
    let workers = execution.resolved_workers();
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("ripple-worker-{i}"))
        .build()
        .map(|pool| Some(Arc::new(pool)))
        .map_err(|e| ConfigError::ThreadPoolBuild {
            reason: e.to_string(),
        })
}
