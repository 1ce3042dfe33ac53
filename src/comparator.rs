//! Main `TwoSampleComparator` entry point and builder.

use crate::analysis::{confidence_interval, mean_difference_test, variance_ratio_test};
use crate::config::{Config, Consistency, Stages, Tail};
use crate::error::Error;
use crate::output::render_report;
use crate::result::ComparisonResult;

/// Main entry point for comparing two populations.
///
/// Use the builder pattern to configure and run the comparison.
///
/// # Example
///
/// ```
/// use twosample::{Consistency, Tail, TwoSampleComparator};
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 4.0, 6.0, 8.0, 10.0];
///
/// let result = TwoSampleComparator::new()
///     .alpha(0.05)
///     .consistency(Consistency::Equal)
///     .tail(Tail::TwoSided)
///     .compare(&a, &b)
///     .unwrap();
///
/// assert_eq!(result.f_test.statistic, 0.25);
/// println!("{}", result.report);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TwoSampleComparator {
    config: Config,
}

impl TwoSampleComparator {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an assembled configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside (0, 1).
    pub fn alpha(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha < 1.0, "alpha must be in (0, 1)");
        self.config.alpha = alpha;
        self
    }

    /// Set the alternative hypothesis for the variance-ratio stage.
    pub fn consistency(mut self, consistency: Consistency) -> Self {
        self.config.consistency = consistency;
        self
    }

    /// Set the tail selection for the mean-difference stage.
    pub fn tail(mut self, tail: Tail) -> Self {
        self.config.tail = tail;
        self
    }

    /// Treat the samples as matched pairs.
    pub fn matched_pairs(mut self, matched: bool) -> Self {
        self.config.matched_pairs = matched;
        self
    }

    /// Select which optional stages to run.
    pub fn stages(mut self, stages: Stages) -> Self {
        self.config.stages = stages;
        self
    }

    /// Set the report's decimal precision.
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the comparison over two samples.
    ///
    /// The variance-ratio stage always runs; the mean-difference and
    /// confidence-interval stages run when requested via
    /// [`Stages`]. The mean-difference stage branches on the
    /// variance-ratio reject decision to pick the pooled or Welch
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an invalid alpha, samples
    /// with fewer than two observations, or a matched-pairs length
    /// mismatch. No partial results are produced on error.
    pub fn compare(&self, a: &[f64], b: &[f64]) -> Result<ComparisonResult, Error> {
        let config = &self.config;
        config.validate()?;

        if a.len() < 2 || b.len() < 2 {
            return Err(Error::invalid_input(format!(
                "each sample needs at least 2 observations, got {} and {}",
                a.len(),
                b.len()
            )));
        }
        if config.matched_pairs && a.len() != b.len() {
            return Err(Error::invalid_input(format!(
                "matched pairs require equal lengths, got {} and {}",
                a.len(),
                b.len()
            )));
        }

        let f_test = variance_ratio_test(a, b, config.alpha, config.consistency)?;

        let t_test = if config.stages.t_test {
            Some(mean_difference_test(
                a,
                b,
                f_test.reject,
                config.alpha,
                config.tail,
                config.matched_pairs,
            )?)
        } else {
            None
        };

        let interval = if config.stages.interval {
            Some(confidence_interval(
                a,
                b,
                f_test.reject,
                config.alpha,
                config.matched_pairs,
            )?)
        } else {
            None
        };

        let report = render_report(&f_test, t_test.as_ref(), interval.as_ref(), config.precision);

        Ok(ComparisonResult {
            f_test,
            t_test,
            interval,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_config() {
        let comparator = TwoSampleComparator::new()
            .alpha(0.01)
            .consistency(Consistency::Right)
            .tail(Tail::TwoSided)
            .matched_pairs(true)
            .precision(6);
        let config = comparator.config();
        assert_eq!(config.alpha, 0.01);
        assert_eq!(config.consistency, Consistency::Right);
        assert_eq!(config.tail, Tail::TwoSided);
        assert!(config.matched_pairs);
        assert_eq!(config.precision, 6);
    }

    #[test]
    #[should_panic(expected = "alpha must be in (0, 1)")]
    fn builder_rejects_alpha_of_one() {
        let _ = TwoSampleComparator::new().alpha(1.0);
    }

    #[test]
    fn stage_toggles_control_optional_outcomes() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];

        let full = TwoSampleComparator::new().compare(&a, &b).unwrap();
        assert!(full.t_test.is_some() && full.interval.is_some());

        let f_only = TwoSampleComparator::new()
            .stages(Stages::f_test_only())
            .compare(&a, &b)
            .unwrap();
        assert!(f_only.t_test.is_none() && f_only.interval.is_none());
        assert!(!f_only.report.contains("2. t Test"));
    }

    #[test]
    fn invalid_config_fails_before_computation() {
        let config = Config {
            alpha: 1.5,
            ..Config::default()
        };
        let err = TwoSampleComparator::from_config(config)
            .compare(&[1.0, 2.0], &[3.0, 4.0])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
