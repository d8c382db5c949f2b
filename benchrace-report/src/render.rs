//! Report Rendering
//!
//! Builds the comparison report line by line and hands each line to a
//! [`ReportSink`]. Lines are plain strings apart from the substrings routed
//! through the [`Styler`], so sinks stay free to print, buffer, or discard.

use benchrace_core::Stat;
use crate::CaseResult;
use crate::percent::percentage_diff;
use crate::style::{Style, Styler};
use std::io::{self, Write};

/// Header printed before the result lines.
pub const REPORT_HEADER: &str = "Here are your results:";

/// Label attached to every case that ties the fastest time.
pub const FASTEST_LABEL: &str = "Fastest 🏆";

/// Advisory shown when the repetition count is too low for stable numbers.
pub const LOW_ITERATIONS_ADVISORY: &str = "Iteration amount provided is less than 50. \
     To get more accurate results, it's recommended to iterate at least 50 times";

/// Receives finished report lines.
pub trait ReportSink {
    /// Emit one line of report text (no trailing newline).
    fn line(&mut self, text: &str);
}

/// Prints report lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn line(&mut self, text: &str) {
        let _ = writeln!(io::stdout().lock(), "{}", text);
    }
}

/// Collects report lines in memory instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// New empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected lines, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole report as a single newline-joined string.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl ReportSink for MemorySink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Render ranked results to `sink`, one line per case.
///
/// `results` must already be sorted fastest first; the leading entry is the
/// baseline every percentage is computed against. Cases whose difference
/// rounds to zero all carry the fastest label.
pub fn render_report(
    results: &[CaseResult],
    stat: Stat,
    styler: &dyn Styler,
    sink: &mut dyn ReportSink,
) {
    let Some(fastest) = results.first() else {
        return;
    };
    let fastest_ns = fastest.time.as_nanos_f64();

    sink.line(REPORT_HEADER);
    sink.line("");

    for result in results {
        let diff = percentage_diff(fastest_ns, result.time.as_nanos_f64());
        let outcome = if diff == "0" {
            FASTEST_LABEL.to_string()
        } else {
            format!("{}% slower", diff)
        };
        let time = styler.paint(&format!("{}ns", result.time), Style::Time);

        sink.line(&format!(
            "Case {} - {} {} ({})",
            result.index,
            time,
            stat_label(stat),
            outcome
        ));
    }
}

/// Emit the low-iteration advisory, styled, followed by a spacer line.
pub fn render_low_iterations_advisory(styler: &dyn Styler, sink: &mut dyn ReportSink) {
    sink.line(&styler.paint(LOW_ITERATIONS_ADVISORY, Style::Advisory));
    sink.line("");
}

fn stat_label(stat: Stat) -> &'static str {
    match stat {
        Stat::Median => "median",
        Stat::Average => "on average",
    }
}
