//! Search configuration: tolerance presets, result limits and the builder that
//! ties them together.

use crate::error::ConcertSearchError;

/// Only exact matches survive.
pub const EXACT_TOLERANCE: f64 = 0.0;
/// One edit per ten characters of the term.
pub const STRICT_TOLERANCE: f64 = 0.1;
pub const MODERATE_TOLERANCE: f64 = 0.25;
pub const LENIENT_TOLERANCE: f64 = 0.4;

/// `max_results` value meaning "return every match".
pub const NO_MAX_RESULTS: usize = 0;

/// Candidate count from which [`rank_with_config`](crate::rank_with_config) scores
/// on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Fraction of the term length allowed as edit distance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Tolerance {
    Exact,
    Strict,
    #[default]
    Moderate,
    Lenient,
    /// Used as given. Values outside `[0, 1]` are accepted here;
    /// [`SearchConfigBuilder::custom_tolerance`] is the validating entry point.
    Custom(f64),
}

impl Tolerance {
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Exact => EXACT_TOLERANCE,
            Self::Strict => STRICT_TOLERANCE,
            Self::Moderate => MODERATE_TOLERANCE,
            Self::Lenient => LENIENT_TOLERANCE,
            Self::Custom(v) => v,
        }
    }
}

impl From<f64> for Tolerance {
    fn from(value: f64) -> Self {
        Self::Custom(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of results to return, [`NO_MAX_RESULTS`] for all
    pub max_results: usize,
    pub tolerance: Tolerance,
    /// Candidate count at which scoring switches to parallel
    pub parallel_threshold: usize,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: NO_MAX_RESULTS,
            tolerance: Tolerance::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Exact name lookups, e.g. checking whether an entity already exists
    pub fn exact() -> Self {
        Self::new().tolerance(Tolerance::Exact)
    }

    /// Tolerates the odd typo in longer names
    pub fn strict() -> Self {
        Self::new().tolerance(Tolerance::Strict)
    }

    pub fn moderate() -> Self {
        Self::new().tolerance(Tolerance::Moderate)
    }

    /// Interactive pickers where a short list of loose suggestions is wanted
    pub fn lenient() -> Self {
        Self::new().tolerance(Tolerance::Lenient).max_results(10)
    }

    /// Set the maximum number of results to return
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    /// Return every match
    pub fn unlimited(self) -> Self {
        self.max_results(NO_MAX_RESULTS)
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set a custom tolerance, which must lie in `[0, 1]`
    pub fn custom_tolerance(self, tolerance: f64) -> Result<Self, ConcertSearchError> {
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(ConcertSearchError::ConfigError(format!(
                "Tolerance must be within [0, 1], got {tolerance}"
            )));
        }
        Ok(self.tolerance(Tolerance::Custom(tolerance)))
    }

    /// Set the candidate count at which scoring runs in parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Always score sequentially
    pub fn sequential(self) -> Self {
        self.parallel_threshold(usize::MAX)
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
