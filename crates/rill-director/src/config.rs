//! Director configuration, validation, and error types.
//!
//! [`DirectorConfig`] is the builder-input for a
//! [`FlowDirector`](crate::FlowDirector). [`validate()`](DirectorConfig::validate)
//! checks it once at build time, so a constructed director never fails a
//! pass because of its own settings.

use std::error::Error;
use std::fmt;

// ── FixedGradientPolicy ───────────────────────────────────────────

/// How fixed-gradient boundary nodes choose their receiver.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FixedGradientPolicy {
    /// Route exactly like a core node.
    #[default]
    RouteAsCore,
    /// Add a virtual off-grid neighbour with the given downhill slope,
    /// ranked after every real neighbour. If it is the strict maximum the
    /// node drains off-grid: it keeps itself as receiver, has no link,
    /// records `gradient` as its slope, and is not flagged as a sink.
    OffGrid {
        /// Slope to the virtual neighbour; must be positive and finite.
        gradient: f64,
    },
}

// ── DirectorConfig ────────────────────────────────────────────────

/// Settings for a [`FlowDirector`](crate::FlowDirector).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectorConfig {
    /// Receiver rule for fixed-gradient nodes. Default: route as core.
    pub fixed_gradient: FixedGradientPolicy,
    /// Node count at or above which the pass runs on the rayon pool
    /// (when the `parallel` feature is enabled). Default: 4096.
    pub parallel_threshold: usize,
}

impl DirectorConfig {
    /// Default node count at which the pass goes parallel.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    /// Check configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let FixedGradientPolicy::OffGrid { gradient } = self.fixed_gradient {
            if !(gradient.is_finite() && gradient > 0.0) {
                return Err(ConfigError::InvalidOffGridGradient { value: gradient });
            }
        }
        Ok(())
    }
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            fixed_gradient: FixedGradientPolicy::RouteAsCore,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DirectorConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The off-grid gradient is zero, negative, NaN, or infinite.
    InvalidOffGridGradient {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOffGridGradient { value } => {
                write!(f, "off-grid gradient {value} must be positive and finite")
            }
        }
    }
}

impl Error for ConfigError {}
