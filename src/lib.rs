//! # twosample
//!
//! Classical two-sample hypothesis testing with a formatted report.
//!
//! Given two samples, the comparator runs up to three stages:
//! - **F-test** of variance equality (always runs)
//! - **t-test** of mean difference — pooled, Welch, or matched pairs;
//!   the independent-samples variant is picked by the F-stage outcome
//! - **Confidence interval** for the mean difference
//!
//! and returns a structured [`ComparisonResult`] carrying a rendered
//! multi-section text report.
//!
//! ## Quick start
//!
//! ```
//! use twosample::{Consistency, Tail, TwoSampleComparator};
//!
//! let control = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let treatment = [2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! let result = TwoSampleComparator::new()
//!     .alpha(0.05)
//!     .consistency(Consistency::Equal)
//!     .tail(Tail::TwoSided)
//!     .compare(&control, &treatment)
//!     .unwrap();
//!
//! if result.t_test.as_ref().map(|t| t.reject).unwrap_or(false) {
//!     println!("means differ");
//! }
//! println!("{}", result.report);
//! ```
//!
//! Every invocation is independent and stateless; inputs are read-only
//! and outputs are fresh values, so concurrent calls are safe.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod comparator;
mod config;
mod error;
mod evidence;
mod result;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use comparator::TwoSampleComparator;
pub use config::{Config, Consistency, Stages, Tail};
pub use error::Error;
pub use evidence::{classify_p_value, EvidenceLevel};
pub use result::{ComparisonResult, ConfidenceInterval, FTestOutcome, TTestMethod, TTestOutcome};
