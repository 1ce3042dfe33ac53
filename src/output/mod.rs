//! Report rendering.
//!
//! The plain-text report is a pure function of the computed outcomes and
//! is stored on the result; the terminal renderer adds color on top of
//! the same content for interactive display.

mod report;
mod terminal;

pub use terminal::format_result;

pub(crate) use report::render_report;
