#![warn(missing_docs)]
//! # Benchrace
//!
//! Quick head-to-head micro-benchmarks: hand over two or more closures,
//! get back a ranked terminal report naming the fastest and the relative
//! slowdown of everything else.
//!
//! - **Two stat methods**: the middle repetition's duration (median, the
//!   default) or the arithmetic mean over all repetitions (average)
//! - **Exact accumulation**: per-repetition nanoseconds sum in `u128`, so
//!   averages don't shed low-order digits on long runs
//! - **Injected collaborators**: clock, styling, and the output sink are
//!   traits, so reports can be captured, restyled, or silenced
//!
//! ## Quick Start
//!
//! ```no_run
//! use benchrace::prelude::*;
//!
//! let mut cases: Vec<Case> = vec![
//!     Box::new(|| {
//!         std::hint::black_box("abc".repeat(10));
//!     }),
//!     Box::new(|| {
//!         std::hint::black_box("abcabcabcabcabcabcabcabcabcabc".to_string());
//!     }),
//! ];
//!
//! compare(&mut cases, &MeasureConfig::default()).unwrap();
//! ```
//!
//! Prints something like:
//!
//! ```text
//! Here are your results:
//!
//! Case 2 - 46ns median (Fastest 🏆)
//! Case 1 - 99ns median (115.22% slower)
//! ```
//!
//! ## Capturing the report
//!
//! ```
//! use benchrace::{
//!     Case, MeasureConfig, MemorySink, MonotonicClock, PlainStyler, compare_with,
//! };
//!
//! let mut cases: Vec<Case> = vec![Box::new(|| {}), Box::new(|| {})];
//! let mut sink = MemorySink::new();
//!
//! compare_with(
//!     &mut cases,
//!     &MeasureConfig { iterations: 100, ..Default::default() },
//!     &MonotonicClock::new(),
//!     &PlainStyler,
//!     &mut sink,
//! )
//! .unwrap();
//!
//! assert_eq!(sink.lines()[0], "Here are your results:");
//! ```

// Re-export the measurement engine
pub use benchrace_core::{
    Case, Clock, DEFAULT_ITERATIONS, MeasureConfig, MeasuredTime, MonotonicClock, Stat,
    UnsupportedStatError, measure, measure_with_clock,
};

// Re-export report formatting
pub use benchrace_report::{
    AnsiStyler, CaseResult, MemorySink, PlainStyler, ReportSink, StdoutSink, Style, Styler,
    percentage_diff,
};

// Re-export the comparison driver
pub use benchrace_runner::{CompareError, MIN_RECOMMENDED_ITERATIONS, compare, compare_with};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Case, MeasureConfig, MeasuredTime, Stat, compare, measure};
}
