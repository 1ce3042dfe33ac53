//! Statistical primitives for the comparison pipeline.
//!
//! This module provides the numeric infrastructure the analysis stages
//! build on:
//! - Descriptive moments in the Bessel-corrected (n-1) convention
//! - Two-sample t-test primitives (pooled and Welch)
//! - Checked constructors for the F and t distributions

mod descriptive;
mod dist;
mod ttest;

pub use descriptive::{mean, paired_differences, sample_variance};
pub use ttest::{pooled_t_test, welch_t_test, TTest};

pub(crate) use dist::{fisher, students_t};
pub(crate) use ttest::{pooled_standard_error, unpooled_standard_error};
