//! Measurement Configuration
//!
//! Repetition count and stat method for a measurement run. Both fields fall
//! back to defaults when omitted, so a TOML snippet as small as
//! `stat = "average"` is a complete configuration.

use serde::{Deserialize, Serialize};

/// Default repetition count. High enough to absorb warm-up noise.
pub const DEFAULT_ITERATIONS: u64 = 100_000;

/// Stat method applied to the per-repetition durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Duration of the middle repetition; the loop stops once it is taken.
    #[default]
    Median,
    /// Arithmetic mean over all repetitions.
    Average,
}

impl std::str::FromStr for Stat {
    type Err = UnsupportedStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "median" => Ok(Stat::Median),
            "average" => Ok(Stat::Average),
            _ => Err(UnsupportedStatError {
                provided: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Median => write!(f, "median"),
            Stat::Average => write!(f, "average"),
        }
    }
}

/// Error for a stat name that matches no supported method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The stat method provided (\"{provided}\") is not supported. Supported stat methods are: median, average")]
pub struct UnsupportedStatError {
    /// The unrecognized name, exactly as given.
    pub provided: String,
}

/// Configuration for a measurement run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Repetition count for the timed loop.
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Stat method reducing per-repetition durations to one figure.
    #[serde(default)]
    pub stat: Stat,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            stat: Stat::default(),
        }
    }
}

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}
