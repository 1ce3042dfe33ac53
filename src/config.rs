//! Configuration for a two-population comparison.

use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Alternative hypothesis for the variance-ratio (F) stage.
///
/// Names follow the consistency framing of the comparison: a population
/// with smaller variance is the more consistent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Consistency {
    /// Two-sided test of equal variances (H_1: variances differ).
    #[default]
    Equal,
    /// H_1: the first population is more consistent (sigma_a / sigma_b < 1).
    Left,
    /// H_1: the second population is more consistent (sigma_a / sigma_b > 1).
    Right,
}

impl Consistency {
    /// Hypothesis label used in the report's reject line.
    pub(crate) fn hypothesis_label(self) -> &'static str {
        match self {
            Self::Equal => "unequal variances",
            Self::Left => "\u{3c3}_a/\u{3c3}_b < 1",
            Self::Right => "\u{3c3}_a/\u{3c3}_b > 1",
        }
    }
}

impl FromStr for Consistency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "equal" | "e" => Ok(Self::Equal),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(Error::configuration(format!(
                "unrecognized consistency mode {other:?} (expected \"equal\", \"left\" or \"right\")"
            ))),
        }
    }
}

/// Tail selection for the mean-difference (t) stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Tail {
    /// H_1: mean difference < 0.
    Left,
    /// H_1: mean difference > 0.
    #[default]
    Right,
    /// H_1: means differ in either direction.
    TwoSided,
}

impl FromStr for Tail {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "two-tailed" | "two" | "t" => Ok(Self::TwoSided),
            other => Err(Error::configuration(format!(
                "unrecognized tail {other:?} (expected \"left\", \"right\" or \"two-tailed\")"
            ))),
        }
    }
}

/// Which optional stages of the comparison to run.
///
/// The variance-ratio stage always runs: the mean-difference stage
/// branches on its reject decision, so there is nothing to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stages {
    /// Run the mean-difference (t) stage.
    pub t_test: bool,
    /// Run the confidence-interval stage.
    pub interval: bool,
}

impl Stages {
    /// Run every stage (the default).
    pub fn all() -> Self {
        Self {
            t_test: true,
            interval: true,
        }
    }

    /// Run only the variance-ratio stage.
    pub fn f_test_only() -> Self {
        Self {
            t_test: false,
            interval: false,
        }
    }

    /// Run the variance-ratio and t stages, skipping the interval.
    pub fn without_interval() -> Self {
        Self {
            t_test: true,
            interval: false,
        }
    }
}

impl Default for Stages {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration options for [`TwoSampleComparator`](crate::TwoSampleComparator).
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Significance level in (0, 1). Default: 0.05.
    pub alpha: f64,

    /// Alternative hypothesis for the variance-ratio stage.
    /// Default: [`Consistency::Equal`].
    pub consistency: Consistency,

    /// Tail selection for the mean-difference stage.
    /// Default: [`Tail::Right`].
    pub tail: Tail,

    /// Treat the two samples as matched pairs.
    ///
    /// When set, both samples must have equal length and the t stage
    /// operates on the element-wise difference series. Default: false.
    pub matched_pairs: bool,

    /// Which optional stages to run. Default: all.
    pub stages: Stages,

    /// Decimal places used when rendering the report. Default: 4.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            consistency: Consistency::Equal,
            tail: Tail::Right,
            matched_pairs: false,
            stages: Stages::all(),
            precision: 4,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the assembled configuration is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `alpha` is outside (0, 1).
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::invalid_input(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}
