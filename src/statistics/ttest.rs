//! Two-sample t-test primitives.
//!
//! Both variants return the observed statistic together with the
//! two-sided p-value; tail handling and decision rules live in the
//! analysis layer.

use statrs::distribution::ContinuousCDF;

use crate::error::Error;
use crate::statistics::descriptive::{mean, sample_variance};
use crate::statistics::dist::students_t;

/// Outcome of a two-sample t-test primitive.
#[derive(Debug, Clone, Copy)]
pub struct TTest {
    /// Observed t statistic.
    pub statistic: f64,
    /// Degrees of freedom the p-value was computed at.
    pub df: f64,
    /// Two-sided p-value.
    pub p_two_sided: f64,
}

/// Pooled-variance (equal-variance) two-sample t-test.
///
/// Degrees of freedom: n_a + n_b - 2.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either sample has fewer than two
/// observations.
pub fn pooled_t_test(a: &[f64], b: &[f64]) -> Result<TTest, Error> {
    require_two_observations(a, b)?;
    let (se, df) = pooled_standard_error(a, b);
    finish(mean(a) - mean(b), se, df)
}

/// Welch's (unequal-variance) two-sample t-test.
///
/// The p-value is computed at the Welch-Satterthwaite degrees of
/// freedom.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either sample has fewer than two
/// observations.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<TTest, Error> {
    require_two_observations(a, b)?;
    let (se, df) = unpooled_standard_error(a, b);
    finish(mean(a) - mean(b), se, df)
}

/// Standard error of the mean difference under the pooled-variance
/// assumption, with its degrees of freedom.
pub(crate) fn pooled_standard_error(a: &[f64], b: &[f64]) -> (f64, f64) {
    let na = a.len() as f64;
    let nb = b.len() as f64;
    let sp2 = ((na - 1.0) * sample_variance(a) + (nb - 1.0) * sample_variance(b))
        / (na + nb - 2.0);
    let se = (sp2 * (1.0 / na + 1.0 / nb)).sqrt();
    (se, na + nb - 2.0)
}

/// Unpooled standard error of the mean difference, with the
/// Welch-Satterthwaite degrees of freedom.
pub(crate) fn unpooled_standard_error(a: &[f64], b: &[f64]) -> (f64, f64) {
    let na = a.len() as f64;
    let nb = b.len() as f64;
    let va = sample_variance(a) / na;
    let vb = sample_variance(b) / nb;
    let se2 = va + vb;
    let den = va.powi(2) / (na - 1.0) + vb.powi(2) / (nb - 1.0);
    let df = if den == 0.0 { f64::INFINITY } else { se2.powi(2) / den };
    (se2.sqrt(), df)
}

fn require_two_observations(a: &[f64], b: &[f64]) -> Result<(), Error> {
    if a.len() < 2 || b.len() < 2 {
        return Err(Error::invalid_input(format!(
            "each sample needs at least 2 observations, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

fn finish(diff: f64, se: f64, df: f64) -> Result<TTest, Error> {
    // Zero spread in both samples: no detectable difference.
    if se == 0.0 {
        return Ok(TTest {
            statistic: 0.0,
            df,
            p_two_sided: 1.0,
        });
    }
    let t = diff / se;
    let dist = students_t(df)?;
    let p_two_sided = 2.0 * (1.0 - dist.cdf(t.abs()));
    Ok(TTest {
        statistic: t,
        df,
        p_two_sided,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const B: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

    #[test]
    fn pooled_reference_values() {
        let res = pooled_t_test(&A, &B).unwrap();
        // sp2 = (4*2.5 + 4*10)/8 = 6.25, se = sqrt(6.25 * 2/5) = sqrt(2.5)
        let expected_t = -3.0 / 2.5f64.sqrt();
        assert!((res.statistic - expected_t).abs() < 1e-12);
        assert_eq!(res.df, 8.0);
        assert!(res.p_two_sided > 0.0 && res.p_two_sided < 1.0);
    }

    #[test]
    fn welch_uses_satterthwaite_df() {
        let res = welch_t_test(&A, &B).unwrap();
        // va = 0.5, vb = 2.0; df = 2.5^2 / (0.25/4 + 4/4) = 6.25/1.0625
        assert!((res.df - 6.25 / 1.0625).abs() < 1e-12);
    }

    #[test]
    fn pooled_and_welch_statistics_agree_for_equal_sizes() {
        // With n_a == n_b the pooled and unpooled standard errors coincide.
        let pooled = pooled_t_test(&A, &B).unwrap();
        let welch = welch_t_test(&A, &B).unwrap();
        assert!((pooled.statistic - welch.statistic).abs() < 1e-12);
    }

    #[test]
    fn identical_constant_samples_yield_zero_statistic() {
        let flat = [3.0, 3.0, 3.0, 3.0];
        let res = pooled_t_test(&flat, &flat).unwrap();
        assert_eq!(res.statistic, 0.0);
        assert_eq!(res.p_two_sided, 1.0);
    }

    #[test]
    fn short_samples_rejected() {
        assert!(pooled_t_test(&[1.0], &A).is_err());
        assert!(welch_t_test(&A, &[1.0]).is_err());
    }
}
