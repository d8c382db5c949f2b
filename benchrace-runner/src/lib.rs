#![warn(missing_docs)]
//! Benchrace Runner - Comparison Driver
//!
//! Validates the candidate set, measures every case sequentially in input
//! order, ranks the results fastest first, and emits the comparison report
//! through the injected collaborators. Nothing reaches the sink until all
//! cases are measured, apart from the low-iteration advisory which always
//! precedes measurement.

use benchrace_core::{
    Case, Clock, MeasureConfig, MonotonicClock, UnsupportedStatError, measure_with_clock,
};
use benchrace_report::{
    AnsiStyler, CaseResult, ReportSink, StdoutSink, Styler, render_low_iterations_advisory,
    render_report,
};

/// Repetition count below which results are too noisy to trust.
pub const MIN_RECOMMENDED_ITERATIONS: u64 = 50;

/// Errors from driving a comparison.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompareError {
    /// Fewer than two cases were supplied.
    #[error(
        "The \"compare\" function expects the first argument to be a slice of functions, with at least 2 cases."
    )]
    InvalidCases,
    /// A stat name failed to parse.
    #[error(transparent)]
    UnsupportedStat(#[from] UnsupportedStatError),
}

/// Compare cases with the wall clock, ANSI styling, and a stdout report.
pub fn compare(cases: &mut [Case<'_>], config: &MeasureConfig) -> Result<(), CompareError> {
    compare_with(
        cases,
        config,
        &MonotonicClock::new(),
        &AnsiStyler,
        &mut StdoutSink,
    )
}

/// Compare cases through explicit clock, styler, and sink collaborators.
///
/// Cases run one after another in input order, each through the full
/// measurement loop, before anything is ranked or rendered. Ties keep
/// their input order in the report.
pub fn compare_with(
    cases: &mut [Case<'_>],
    config: &MeasureConfig,
    clock: &dyn Clock,
    styler: &dyn Styler,
    sink: &mut dyn ReportSink,
) -> Result<(), CompareError> {
    if cases.len() < 2 {
        return Err(CompareError::InvalidCases);
    }

    if config.iterations < MIN_RECOMMENDED_ITERATIONS {
        tracing::warn!(
            iterations = config.iterations,
            "iteration count below recommended minimum"
        );
        render_low_iterations_advisory(styler, sink);
    }

    let mut results = Vec::with_capacity(cases.len());
    for (i, case) in cases.iter_mut().enumerate() {
        let time = measure_with_clock(&mut **case, config, clock);
        tracing::debug!(case = i + 1, %time, "case measured");
        results.push(CaseResult { index: i + 1, time });
    }

    // sort_by is stable, so equal times keep their input order
    results.sort_by(|a, b| a.time.cmp_time(&b.time));

    render_report(&results, config.stat, styler, sink);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchrace_core::Stat;
    use benchrace_report::{LOW_ITERATIONS_ADVISORY, MemorySink, PlainStyler, REPORT_HEADER};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Clock that replays a fixed sequence of readings.
    struct ScriptedClock {
        readings: RefCell<VecDeque<u128>>,
    }

    impl ScriptedClock {
        fn from_durations(durations: &[u128]) -> Self {
            let mut readings = VecDeque::with_capacity(durations.len() * 2);
            let mut now = 0u128;
            for &d in durations {
                readings.push_back(now);
                now += d;
                readings.push_back(now);
            }
            Self {
                readings: RefCell::new(readings),
            }
        }
    }

    impl Clock for ScriptedClock {
        fn now_ns(&self) -> u128 {
            self.readings
                .borrow_mut()
                .pop_front()
                .expect("clock script exhausted")
        }
    }

    fn noop_cases(n: usize) -> Vec<Case<'static>> {
        (0..n).map(|_| Box::new(|| {}) as Case<'static>).collect()
    }

    fn config(iterations: u64, stat: Stat) -> MeasureConfig {
        MeasureConfig { iterations, stat }
    }

    #[test]
    fn test_fewer_than_two_cases_rejected() {
        let mut sink = MemorySink::new();
        let clock = ScriptedClock::from_durations(&[]);

        for n in [0, 1] {
            let err = compare_with(
                &mut noop_cases(n),
                &config(100, Stat::Median),
                &clock,
                &PlainStyler,
                &mut sink,
            )
            .unwrap_err();
            assert!(matches!(err, CompareError::InvalidCases));
        }

        // Validation failures never produce partial output
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_invalid_cases_message() {
        assert_eq!(
            CompareError::InvalidCases.to_string(),
            "The \"compare\" function expects the first argument to be a slice of functions, \
             with at least 2 cases."
        );
    }

    #[test]
    fn test_unsupported_stat_passes_through() {
        let err: CompareError = "bogus".parse::<Stat>().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "The stat method provided (\"bogus\") is not supported. \
             Supported stat methods are: median, average"
        );
    }

    #[test]
    fn test_report_ranked_fastest_first() {
        // iterations = 2 -> each case runs 2 repetitions in median mode.
        // Case 1 medians at 30ns, case 2 at 20ns.
        let clock = ScriptedClock::from_durations(&[10, 30, 5, 20]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(2),
            &config(2, Stat::Median),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        // Advisory (iterations < 50), spacer, header, spacer, two results
        assert_eq!(
            sink.lines(),
            [
                LOW_ITERATIONS_ADVISORY,
                "",
                "Here are your results:",
                "",
                "Case 2 - 20ns median (Fastest 🏆)",
                "Case 1 - 30ns median (50% slower)",
            ]
        );
    }

    #[test]
    fn test_cases_run_sequentially_in_input_order() {
        let invocations = RefCell::new(Vec::new());
        let mut cases: Vec<Case<'_>> = vec![
            Box::new(|| invocations.borrow_mut().push(1)),
            Box::new(|| invocations.borrow_mut().push(2)),
        ];
        let clock = ScriptedClock::from_durations(&[1; 6]);

        compare_with(
            &mut cases,
            &config(4, Stat::Median),
            &clock,
            &PlainStyler,
            &mut MemorySink::new(),
        )
        .unwrap();

        // iterations = 4 -> 3 repetitions per case, never interleaved
        assert_eq!(*invocations.borrow(), [1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let clock = ScriptedClock::from_durations(&[10, 10, 10, 10]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(2),
            &config(2, Stat::Median),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        assert_eq!(sink.lines()[4], "Case 1 - 10ns median (Fastest 🏆)");
        assert_eq!(sink.lines()[5], "Case 2 - 10ns median (Fastest 🏆)");
    }

    #[test]
    fn test_advisory_emitted_once_before_header() {
        let clock = ScriptedClock::from_durations(&[1; 12]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(2),
            &config(10, Stat::Median),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        let advisory_count = sink
            .lines()
            .iter()
            .filter(|line| line.as_str() == LOW_ITERATIONS_ADVISORY)
            .count();
        assert_eq!(advisory_count, 1);
        assert_eq!(sink.lines()[0], LOW_ITERATIONS_ADVISORY);
        assert_eq!(sink.lines()[2], REPORT_HEADER);
    }

    #[test]
    fn test_no_advisory_at_recommended_minimum() {
        // 50 iterations in median mode: 26 repetitions per case
        let clock = ScriptedClock::from_durations(&[1; 52]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(2),
            &config(50, Stat::Median),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        assert_eq!(sink.lines()[0], REPORT_HEADER);
        assert!(
            sink.lines()
                .iter()
                .all(|line| line.as_str() != LOW_ITERATIONS_ADVISORY)
        );
    }

    #[test]
    fn test_zero_iterations_still_reports() {
        // Clamped to one repetition per case, advisory fires
        let clock = ScriptedClock::from_durations(&[7, 3]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(2),
            &config(0, Stat::Median),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        assert_eq!(sink.lines()[0], LOW_ITERATIONS_ADVISORY);
        assert_eq!(sink.lines()[4], "Case 2 - 3ns median (Fastest 🏆)");
        assert_eq!(sink.lines()[5], "Case 1 - 7ns median (133.33% slower)");
    }

    #[test]
    fn test_average_mode_report() {
        // iterations = 2 in average mode: both repetitions run per case.
        // Case 1 averages 15ns, case 2 averages 30ns.
        let clock = ScriptedClock::from_durations(&[10, 20, 25, 35]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(2),
            &config(2, Stat::Average),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        assert_eq!(sink.lines()[4], "Case 1 - 15ns on average (Fastest 🏆)");
        assert_eq!(sink.lines()[5], "Case 2 - 30ns on average (100% slower)");
    }

    #[test]
    fn test_one_line_per_case() {
        let clock = ScriptedClock::from_durations(&[1; 6]);
        let mut sink = MemorySink::new();

        compare_with(
            &mut noop_cases(3),
            &config(2, Stat::Median),
            &clock,
            &PlainStyler,
            &mut sink,
        )
        .unwrap();

        let case_lines: Vec<_> = sink
            .lines()
            .iter()
            .filter(|line| line.starts_with("Case "))
            .collect();
        assert_eq!(case_lines.len(), 3);
        for index in 1..=3 {
            let prefix = format!("Case {} - ", index);
            assert_eq!(
                case_lines
                    .iter()
                    .filter(|line| line.starts_with(&prefix))
                    .count(),
                1
            );
        }
    }
}
