//! Colored terminal rendering of a comparison result.

use colored::Colorize;

use crate::evidence::EvidenceLevel;
use crate::result::{ComparisonResult, TTestMethod};

/// Format a [`ComparisonResult`] for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. The headline decision comes
/// from the t stage when it ran, otherwise from the F stage.
pub fn format_result(result: &ComparisonResult) -> String {
    let mut output = String::new();

    let rejected = result
        .t_test
        .as_ref()
        .map(|t| t.reject)
        .unwrap_or(result.f_test.reject);
    let header = if rejected {
        format!("{} {}", "\u{26A0}".yellow().bold(), "REJECT H_0".red().bold())
    } else {
        format!(
            "{} {}",
            "\u{2713}".green().bold(),
            "FAIL TO REJECT H_0".green().bold()
        )
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let f = &result.f_test;
    output.push_str(&format_box_line(&format!(
        "F statistic: {:.4}  (s\u{b2}_a = {:.4}, s\u{b2}_b = {:.4})",
        f.statistic, f.variances.0, f.variances.1
    )));
    output.push_str(&format_box_line(&format!(
        "F p-value:   {}",
        colored_p(f.p_value)
    )));

    if let Some(ref t) = result.t_test {
        output.push_str(&format_box_separator());
        output.push_str(&format_box_line(&format!(
            "t statistic: {:.4}  ({}, DF = {:.1})",
            t.statistic,
            format_method(t.method),
            t.df
        )));
        output.push_str(&format_box_line(&format!(
            "t p-value:   {}",
            colored_p(t.p_value)
        )));
    }

    if let Some(ref ci) = result.interval {
        output.push_str(&format_box_separator());
        output.push_str(&format_box_line(&format!(
            "{:.1}% CI: [{:.4}, {:.4}]",
            ci.confidence * 100.0,
            ci.lower,
            ci.upper
        )));
    }

    output.push_str(&format_box_bottom());
    output
}

/// Color a p-value by its evidence band.
fn colored_p(p: f64) -> String {
    let level = EvidenceLevel::from_p(p);
    let text = format!("{p:.4} ({level})");
    match level {
        EvidenceLevel::Overwhelming | EvidenceLevel::Strong => text.red().to_string(),
        EvidenceLevel::Weak => text.yellow().to_string(),
        EvidenceLevel::None => text.green().to_string(),
    }
}

/// Format TTestMethod for display.
fn format_method(method: TTestMethod) -> &'static str {
    match method {
        TTestMethod::Pooled => "pooled variance",
        TTestMethod::Welch => "Welch",
        TTestMethod::MatchedPairs => "matched pairs",
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tail;
    use crate::result::{ConfidenceInterval, FTestOutcome, TTestOutcome};

    fn make_result(reject_t: bool) -> ComparisonResult {
        ComparisonResult {
            f_test: FTestOutcome {
                statistic: 0.25,
                p_value: 0.208,
                lower_critical: Some(0.1041),
                upper_critical: Some(9.6045),
                reject: false,
                hypothesis: "unequal variances",
                variances: (2.5, 10.0),
                df: (4.0, 4.0),
            },
            t_test: Some(TTestOutcome {
                statistic: -1.8974,
                p_value: if reject_t { 0.003 } else { 0.0944 },
                critical: 2.306,
                df: 8.0,
                reject: reject_t,
                method: TTestMethod::Pooled,
                tail: Tail::TwoSided,
            }),
            interval: Some(ConfidenceInterval {
                lower: -6.6462,
                upper: 0.6462,
                confidence: 0.95,
            }),
            report: String::new(),
        }
    }

    #[test]
    fn retained_null_shows_pass_header() {
        let output = format_result(&make_result(false));
        assert!(output.contains("FAIL TO REJECT H_0"));
        assert!(output.contains("95.0% CI"));
    }

    #[test]
    fn rejected_null_shows_warning_header() {
        let output = format_result(&make_result(true));
        assert!(output.contains("REJECT H_0"));
    }

    #[test]
    fn strip_ansi_codes_removes_color() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
