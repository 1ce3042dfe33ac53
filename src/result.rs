//! Result types for a two-population comparison.

use serde::Serialize;

use crate::config::Tail;

/// Which t-test algorithm the mean-difference stage ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TTestMethod {
    /// Pooled-variance independent-samples test (equal variances retained).
    Pooled,
    /// Welch's unequal-variance independent-samples test.
    Welch,
    /// Matched-pairs test on the element-wise difference series.
    MatchedPairs,
}

/// Outcome of the variance-ratio (F) stage. Always present.
#[derive(Debug, Clone, Serialize)]
pub struct FTestOutcome {
    /// Observed F statistic, s2_a / s2_b.
    pub statistic: f64,
    /// p-value under the configured alternative.
    pub p_value: f64,
    /// Lower rejection bound, where the alternative defines one.
    pub lower_critical: Option<f64>,
    /// Upper rejection bound, where the alternative defines one.
    pub upper_critical: Option<f64>,
    /// Whether H_0 (equal variances) was rejected.
    pub reject: bool,
    /// Hypothesis label rendered in the report's reject line.
    pub hypothesis: &'static str,
    /// Bessel-corrected sample variances (s2_a, s2_b).
    pub variances: (f64, f64),
    /// Degrees of freedom (n_a - 1, n_b - 1).
    pub df: (f64, f64),
}

/// Outcome of the mean-difference (t) stage.
#[derive(Debug, Clone, Serialize)]
pub struct TTestOutcome {
    /// Observed t statistic.
    pub statistic: f64,
    /// p-value, one- or two-tailed per the configured tail.
    pub p_value: f64,
    /// Critical t value at the configured significance level.
    pub critical: f64,
    /// Reported degrees of freedom.
    ///
    /// For independent samples this is df_a + df_b in both branches,
    /// even though Welch's p-value is computed at the Satterthwaite
    /// approximation.
    pub df: f64,
    /// Whether H_0 (no mean difference) was rejected.
    pub reject: bool,
    /// Which algorithm produced the statistic.
    pub method: TTestMethod,
    /// Tail the p-value and critical value correspond to.
    pub tail: Tail,
}

/// Confidence interval for the mean difference.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Confidence coefficient, 1 - alpha.
    pub confidence: f64,
}

impl ConfidenceInterval {
    /// Whether the interval contains `value`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Full result of a two-population comparison.
///
/// Constructed once per invocation and never mutated afterwards. Fields
/// for the optional stages are `None` when the stage was not requested.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Variance-ratio stage outcome (always computed).
    pub f_test: FTestOutcome,
    /// Mean-difference stage outcome, if requested.
    pub t_test: Option<TTestOutcome>,
    /// Confidence interval, if requested.
    pub interval: Option<ConfidenceInterval>,
    /// Rendered multi-section text report for the stages that ran.
    pub report: String,
}
