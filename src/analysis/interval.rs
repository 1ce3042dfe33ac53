//! Confidence-interval stage.
//!
//! Interval for the mean difference at level 1 - alpha. Matched pairs
//! use the difference-series standard error; independent samples use
//! the unpooled standard error (and Satterthwaite df) when the
//! variance-ratio stage rejected equality, the pooled form otherwise.

use statrs::distribution::ContinuousCDF;

use crate::error::Error;
use crate::result::ConfidenceInterval;
use crate::statistics::{
    mean, paired_differences, pooled_standard_error, sample_variance, students_t,
    unpooled_standard_error,
};

/// Compute the confidence interval for the mean difference.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for samples shorter than two
/// observations, or a length mismatch in matched-pairs mode.
pub fn confidence_interval(
    a: &[f64],
    b: &[f64],
    unequal_variances: bool,
    alpha: f64,
    matched_pairs: bool,
) -> Result<ConfidenceInterval, Error> {
    if a.len() < 2 || b.len() < 2 {
        return Err(Error::invalid_input(format!(
            "each sample needs at least 2 observations, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let (center, se, df) = if matched_pairs {
        if a.len() != b.len() {
            return Err(Error::invalid_input(format!(
                "matched pairs require equal lengths, got {} and {}",
                a.len(),
                b.len()
            )));
        }
        let d = paired_differences(a, b);
        let nobs = d.len() as f64;
        (mean(&d), (sample_variance(&d) / nobs).sqrt(), nobs - 1.0)
    } else if unequal_variances {
        let (se, df) = unpooled_standard_error(a, b);
        (mean(a) - mean(b), se, df)
    } else {
        let (se, df) = pooled_standard_error(a, b);
        (mean(a) - mean(b), se, df)
    };

    let margin = students_t(df)?.inverse_cdf(1.0 - alpha / 2.0) * se;
    Ok(ConfidenceInterval {
        lower: center - margin,
        upper: center + margin,
        confidence: 1.0 - alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const B: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

    #[test]
    fn pooled_interval_reference_values() {
        let ci = confidence_interval(&A, &B, false, 0.05, false).unwrap();
        // -3 +/- t_{0.975, 8} * sqrt(2.5)
        assert!((ci.lower - (-6.6462)).abs() < 1e-3);
        assert!((ci.upper - 0.6462).abs() < 1e-3);
        assert_eq!(ci.confidence, 0.95);
    }

    #[test]
    fn interval_contains_mean_difference_for_any_alpha() {
        let diff = mean(&A) - mean(&B);
        for alpha in [0.001, 0.05, 0.2, 0.5, 0.9] {
            for unequal in [false, true] {
                let ci = confidence_interval(&A, &B, unequal, alpha, false).unwrap();
                assert!(ci.contains(diff), "alpha = {alpha}, unequal = {unequal}");
            }
        }
    }

    #[test]
    fn higher_confidence_gives_wider_interval() {
        let narrow = confidence_interval(&A, &B, false, 0.1, false).unwrap();
        let wide = confidence_interval(&A, &B, false, 0.01, false).unwrap();
        assert!(wide.upper - wide.lower > narrow.upper - narrow.lower);
    }

    #[test]
    fn matched_interval_centers_on_difference_mean() {
        let shifted: Vec<f64> = A.iter().map(|x| x + 2.0).collect();
        let ci = confidence_interval(&shifted, &A, false, 0.05, true).unwrap();
        // Constant difference: zero-width interval at the mean.
        assert!((ci.lower - 2.0).abs() < 1e-12);
        assert!((ci.upper - 2.0).abs() < 1e-12);
    }

    #[test]
    fn matched_length_mismatch_is_invalid_input() {
        let err = confidence_interval(&A, &B[..3], false, 0.05, true).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
