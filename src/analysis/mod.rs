//! The three analysis stages of a two-population comparison.
//!
//! Executed in order by the comparator:
//! 1. [`variance_ratio`] — F-test of variance equality (always runs)
//! 2. [`mean_difference`] — t-test, branching on the F-stage decision
//! 3. [`interval`] — confidence interval for the mean difference

pub mod interval;
pub mod mean_difference;
pub mod variance_ratio;

pub use interval::confidence_interval;
pub use mean_difference::mean_difference_test;
pub use variance_ratio::variance_ratio_test;
