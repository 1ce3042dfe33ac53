//! Evidence classification for p-values.
//!
//! Maps a p-value onto a coarse evidence scale using the conventional
//! significance bands. Each band is left-inclusive, so the boundary
//! values 0.01, 0.05 and 0.1 belong to the weaker band.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Strength of evidence against the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EvidenceLevel {
    /// p in [0, 0.01).
    Overwhelming,
    /// p in [0.01, 0.05).
    Strong,
    /// p in [0.05, 0.1).
    Weak,
    /// p in [0.1, inf).
    None,
}

impl EvidenceLevel {
    /// Classify a p-value known to be non-negative.
    ///
    /// Used internally by report rendering, where p-values come from
    /// distribution CDFs and cannot be negative.
    pub(crate) fn from_p(p: f64) -> Self {
        if p < 0.01 {
            Self::Overwhelming
        } else if p < 0.05 {
            Self::Strong
        } else if p < 0.1 {
            Self::Weak
        } else {
            Self::None
        }
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Overwhelming => "Overwhelming Evidence",
            Self::Strong => "Strong Evidence",
            Self::Weak => "Weak Evidence",
            Self::None => "No Evidence",
        };
        f.write_str(label)
    }
}

/// Classify a p-value into an evidence band.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `p` is negative or NaN.
pub fn classify_p_value(p: f64) -> Result<EvidenceLevel, Error> {
    if p.is_nan() || p < 0.0 {
        return Err(Error::invalid_input(format!(
            "p-value must be non-negative, got {p}"
        )));
    }
    Ok(EvidenceLevel::from_p(p))
}
