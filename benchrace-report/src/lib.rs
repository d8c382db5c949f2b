#![warn(missing_docs)]
//! Benchrace Report - Result Formatting
//!
//! Turns ranked measurements into the terminal comparison report:
//! - Percentage differences against the fastest case, with display-friendly
//!   rounding
//! - Semantic styling through an injected [`Styler`] (ANSI or plain)
//! - Line-by-line output through a [`ReportSink`] (stdout or in-memory)

mod percent;
mod render;
mod style;

pub use percent::percentage_diff;
pub use render::{
    FASTEST_LABEL, LOW_ITERATIONS_ADVISORY, MemorySink, REPORT_HEADER, ReportSink, StdoutSink,
    render_low_iterations_advisory, render_report,
};
pub use style::{AnsiStyler, PlainStyler, Style, Styler};

use benchrace_core::MeasuredTime;

/// A single case's reduced measurement, tagged with its input position.
#[derive(Debug, Clone, Copy)]
pub struct CaseResult {
    /// 1-based position of the case in the compared set.
    pub index: usize,
    /// Reduced duration for the case.
    pub time: MeasuredTime,
}
