//! Descriptive moments in the n-1 (Bessel-corrected) convention.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Unbiased sample variance (n-1 denominator). NaN for fewer than two
/// observations.
pub fn sample_variance(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / ((n as f64) - 1.0)
}

/// Element-wise difference series a - b for matched-pairs analysis.
///
/// Callers must have checked that the slices have equal length.
pub fn paired_differences(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_sample() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn variance_uses_bessel_correction() {
        // var([1..5]) with n-1 denominator is exactly 2.5
        assert_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5);
        assert_eq!(sample_variance(&[2.0, 4.0, 6.0, 8.0, 10.0]), 10.0);
    }

    #[test]
    fn variance_undefined_below_two_observations() {
        assert!(sample_variance(&[]).is_nan());
        assert!(sample_variance(&[1.0]).is_nan());
    }

    #[test]
    fn paired_differences_are_elementwise() {
        let d = paired_differences(&[3.0, 5.0, 7.0], &[1.0, 1.0, 1.0]);
        assert_eq!(d, vec![2.0, 4.0, 6.0]);
    }
}
