//! Variance-ratio (F) stage.
//!
//! Tests H_0: equal variances via the ratio of Bessel-corrected sample
//! variances, whose null distribution is F(n_a - 1, n_b - 1). The
//! configured [`Consistency`] mode selects the alternative and with it
//! the p-value folding and rejection bounds.

use statrs::distribution::ContinuousCDF;

use crate::config::Consistency;
use crate::error::Error;
use crate::result::FTestOutcome;
use crate::statistics::{fisher, sample_variance};

/// Run the variance-ratio test.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either sample has fewer than two
/// observations (variance needs at least one degree of freedom).
pub fn variance_ratio_test(
    a: &[f64],
    b: &[f64],
    alpha: f64,
    consistency: Consistency,
) -> Result<FTestOutcome, Error> {
    if a.len() < 2 || b.len() < 2 {
        return Err(Error::invalid_input(format!(
            "each sample needs at least 2 observations, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let df_a = (a.len() - 1) as f64;
    let df_b = (b.len() - 1) as f64;
    let var_a = sample_variance(a);
    let var_b = sample_variance(b);
    let statistic = var_a / var_b;

    let dist = fisher(df_a, df_b)?;
    let ptmp = dist.cdf(statistic);

    let (p_value, lower_critical, upper_critical, reject) = match consistency {
        Consistency::Equal => {
            // Fold the CDF onto the nearer tail, then double it.
            let tail = if ptmp > 0.5 { 1.0 - ptmp } else { ptmp };
            let lower = dist.inverse_cdf(alpha / 2.0);
            let upper = dist.inverse_cdf(1.0 - alpha / 2.0);
            let reject = statistic < lower || statistic > upper;
            (2.0 * tail, Some(lower), Some(upper), reject)
        }
        Consistency::Right => {
            let upper = dist.inverse_cdf(1.0 - alpha);
            (1.0 - ptmp, None, Some(upper), statistic > upper)
        }
        Consistency::Left => {
            let lower = dist.inverse_cdf(alpha);
            (ptmp, Some(lower), None, statistic < lower)
        }
    };

    Ok(FTestOutcome {
        statistic,
        p_value,
        lower_critical,
        upper_critical,
        reject,
        hypothesis: consistency.hypothesis_label(),
        variances: (var_a, var_b),
        df: (df_a, df_b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const B: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

    #[test]
    fn statistic_is_variance_ratio() {
        let out = variance_ratio_test(&A, &B, 0.05, Consistency::Equal).unwrap();
        assert_eq!(out.statistic, 0.25);
        assert_eq!(out.variances, (2.5, 10.0));
        assert_eq!(out.df, (4.0, 4.0));
    }

    #[test]
    fn two_sided_p_for_reference_sample() {
        // F_CDF(0.25; 4, 4) = I_{0.2}(2, 2) = 3(0.2)^2 - 2(0.2)^3 = 0.104
        let out = variance_ratio_test(&A, &B, 0.05, Consistency::Equal).unwrap();
        assert!((out.p_value - 0.208).abs() < 1e-9);
        assert!(!out.reject);
    }

    #[test]
    fn equal_mode_has_both_bounds() {
        let out = variance_ratio_test(&A, &B, 0.05, Consistency::Equal).unwrap();
        let lower = out.lower_critical.unwrap();
        let upper = out.upper_critical.unwrap();
        assert!(lower < 1.0 && upper > 1.0);
        // F(4,4) quantiles are reciprocal at mirrored probabilities.
        assert!((lower * upper - 1.0).abs() < 1e-6);
    }

    #[test]
    fn one_sided_modes_have_single_bound() {
        let right = variance_ratio_test(&A, &B, 0.05, Consistency::Right).unwrap();
        assert!(right.lower_critical.is_none() && right.upper_critical.is_some());

        let left = variance_ratio_test(&A, &B, 0.05, Consistency::Left).unwrap();
        assert!(left.lower_critical.is_some() && left.upper_critical.is_none());
    }

    #[test]
    fn left_mode_rejects_small_ratio() {
        // var(A)/var(B) = 0.25; at alpha = 0.2 the lower F(4,4) bound
        // exceeds 0.25, so the left-sided claim is accepted.
        let out = variance_ratio_test(&A, &B, 0.2, Consistency::Left).unwrap();
        assert!(out.reject);
        assert!((out.p_value - 0.104).abs() < 1e-9);
    }

    #[test]
    fn swap_inverts_statistic_and_keeps_two_sided_p() {
        let ab = variance_ratio_test(&A, &B, 0.05, Consistency::Equal).unwrap();
        let ba = variance_ratio_test(&B, &A, 0.05, Consistency::Equal).unwrap();
        assert!((ab.statistic * ba.statistic - 1.0).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-9);
    }

    #[test]
    fn short_sample_is_invalid_input() {
        let err = variance_ratio_test(&[1.0], &B, 0.05, Consistency::Equal).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
