//! Plain-text report assembly.
//!
//! Sections are emitted in stage order (F, then t, then the interval),
//! each under a fixed-width numbered header, with every value rendered
//! at the configured decimal precision.

use std::fmt::Write;

use crate::config::Tail;
use crate::evidence::EvidenceLevel;
use crate::result::{ConfidenceInterval, FTestOutcome, TTestOutcome};

/// Render the multi-section report for the stages that ran.
pub(crate) fn render_report(
    f_test: &FTestOutcome,
    t_test: Option<&TTestOutcome>,
    interval: Option<&ConfidenceInterval>,
    precision: usize,
) -> String {
    let mut out = String::new();
    push_f_section(&mut out, f_test, precision);
    if let Some(t) = t_test {
        push_t_section(&mut out, t, precision);
    }
    if let Some(ci) = interval {
        push_interval_section(&mut out, ci, precision);
    }
    out
}

fn push_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "        {title}      ");
    let _ = writeln!(out, "===================================");
}

fn push_f_section(out: &mut String, f: &FTestOutcome, precision: usize) {
    push_header(out, "1. F Statistics");
    let _ = writeln!(out, "F statistic = {:.precision$}", f.statistic);
    let _ = writeln!(
        out,
        "p-value = {:.precision$} ({})",
        f.p_value,
        EvidenceLevel::from_p(f.p_value)
    );
    let _ = writeln!(out, "Reject H_0 ({}) \u{2192} {}", f.hypothesis, f.reject);
}

fn push_t_section(out: &mut String, t: &TTestOutcome, precision: usize) {
    let tail_label = match t.tail {
        Tail::TwoSided => "two-tail",
        Tail::Left | Tail::Right => "one-tail",
    };
    let _ = writeln!(out);
    push_header(out, "2. t Test");
    let _ = writeln!(out, "t (Observed value) = {:.precision$}", t.statistic);
    let _ = writeln!(
        out,
        "p-value ({tail_label}) = {:.precision$} ({})",
        t.p_value,
        EvidenceLevel::from_p(t.p_value)
    );
    let _ = writeln!(
        out,
        "t (Critical, {tail_label}) = {:.precision$}",
        t.critical
    );
    let _ = writeln!(out, "DF = {:.precision$}", t.df);
    let _ = writeln!(out, "Reject H_0 \u{2192} {}", t.reject);
}

fn push_interval_section(out: &mut String, ci: &ConfidenceInterval, precision: usize) {
    let _ = writeln!(out);
    push_header(out, "3. Confidence Interval");
    let _ = writeln!(
        out,
        "{:.1}% Confidence Interval: [{:.precision$}, {:.precision$}]",
        ci.confidence * 100.0,
        ci.lower,
        ci.upper
    );
}
