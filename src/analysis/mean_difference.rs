//! Mean-difference (t) stage.
//!
//! Two mutually exclusive algorithms: the matched-pairs test on the
//! element-wise difference series, and the independent-samples test,
//! which picks Welch's unequal-variance form when the variance-ratio
//! stage rejected equality and the pooled form otherwise.

use statrs::distribution::ContinuousCDF;

use crate::config::Tail;
use crate::error::Error;
use crate::result::{TTestMethod, TTestOutcome};
use crate::statistics::{
    mean, paired_differences, pooled_t_test, sample_variance, students_t, welch_t_test,
};

/// Run the mean-difference test.
///
/// `unequal_variances` carries the variance-ratio stage's reject
/// decision and selects the independent-samples algorithm; it is
/// ignored in matched-pairs mode.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for samples shorter than two
/// observations, or a length mismatch in matched-pairs mode.
pub fn mean_difference_test(
    a: &[f64],
    b: &[f64],
    unequal_variances: bool,
    alpha: f64,
    tail: Tail,
    matched_pairs: bool,
) -> Result<TTestOutcome, Error> {
    if matched_pairs {
        matched_pairs_test(a, b, alpha, tail)
    } else {
        independent_test(a, b, unequal_variances, alpha, tail)
    }
}

fn matched_pairs_test(a: &[f64], b: &[f64], alpha: f64, tail: Tail) -> Result<TTestOutcome, Error> {
    if a.len() != b.len() {
        return Err(Error::invalid_input(format!(
            "matched pairs require equal lengths, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    if a.len() < 2 {
        return Err(Error::invalid_input(format!(
            "matched pairs need at least 2 observations, got {}",
            a.len()
        )));
    }

    let d = paired_differences(a, b);
    let nobs = d.len() as f64;
    let df = nobs - 1.0;
    let var_d = sample_variance(&d);

    // Identical paired samples: zero spread, defined as t = 0.
    let statistic = if var_d == 0.0 {
        0.0
    } else {
        mean(&d) / var_d.sqrt() * nobs.sqrt()
    };

    let dist = students_t(df)?;
    let ptmp = dist.cdf(statistic);

    let (p_value, critical) = match tail {
        Tail::Right => (1.0 - ptmp, dist.inverse_cdf(1.0 - alpha)),
        Tail::Left => (ptmp, dist.inverse_cdf(alpha)),
        Tail::TwoSided => {
            let folded = if ptmp > 0.5 { 1.0 - ptmp } else { ptmp };
            (2.0 * folded, dist.inverse_cdf(1.0 - alpha / 2.0))
        }
    };

    Ok(TTestOutcome {
        statistic,
        p_value,
        critical,
        df,
        reject: p_value < alpha,
        method: TTestMethod::MatchedPairs,
        tail,
    })
}

fn independent_test(
    a: &[f64],
    b: &[f64],
    unequal_variances: bool,
    alpha: f64,
    tail: Tail,
) -> Result<TTestOutcome, Error> {
    let (test, method) = if unequal_variances {
        (welch_t_test(a, b)?, TTestMethod::Welch)
    } else {
        (pooled_t_test(a, b)?, TTestMethod::Pooled)
    };

    // The reported df is df_a + df_b in both branches. Welch's p-value
    // was computed at the Satterthwaite df inside the primitive.
    let df = (a.len() - 1) as f64 + (b.len() - 1) as f64;
    let dist = students_t(df)?;

    let (p_value, critical) = match tail {
        Tail::TwoSided => (test.p_two_sided, dist.inverse_cdf(1.0 - alpha / 2.0)),
        Tail::Left => (test.p_two_sided / 2.0, dist.inverse_cdf(alpha)),
        Tail::Right => (test.p_two_sided / 2.0, dist.inverse_cdf(1.0 - alpha)),
    };

    Ok(TTestOutcome {
        statistic: test.statistic,
        p_value,
        critical,
        df,
        reject: p_value < alpha,
        method,
        tail,
    })
}
