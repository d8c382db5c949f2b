//! Case Measurement
//!
//! The timed repetition loop behind both stat methods. Every repetition is
//! clocked individually; the configured stat decides how many repetitions
//! actually run and how their durations reduce to a single figure.

use crate::clock::{Clock, MonotonicClock};
use crate::config::{MeasureConfig, Stat};
use std::cmp::Ordering;

/// A candidate function under measurement.
pub type Case<'a> = Box<dyn FnMut() + 'a>;

/// A reduced measurement, tagged by the stat method that produced it.
///
/// Median readings keep the exact integer nanosecond duration of the middle
/// repetition; averages necessarily carry a fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasuredTime {
    /// Duration of the middle repetition, in whole nanoseconds.
    Median(u128),
    /// Mean duration across all repetitions, in nanoseconds.
    Average(f64),
}

impl MeasuredTime {
    /// Nanosecond value as a float, for relative arithmetic.
    pub fn as_nanos_f64(self) -> f64 {
        match self {
            MeasuredTime::Median(ns) => ns as f64,
            MeasuredTime::Average(ns) => ns,
        }
    }

    /// Three-way ordering by duration.
    ///
    /// Median readings compare as integers; mixed or average readings fall
    /// back to float comparison, treating incomparable values as equal.
    pub fn cmp_time(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MeasuredTime::Median(a), MeasuredTime::Median(b)) => a.cmp(b),
            _ => self
                .as_nanos_f64()
                .partial_cmp(&other.as_nanos_f64())
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl std::fmt::Display for MeasuredTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasuredTime::Median(ns) => write!(f, "{}", ns),
            MeasuredTime::Average(ns) => write!(f, "{}", ns),
        }
    }
}

/// Measure a single case against the wall clock.
///
/// Runs the case repeatedly per `config` and reduces the per-repetition
/// durations with the configured stat. Median mode stops the loop right
/// after the middle repetition, so it runs `iterations / 2 + 1` times;
/// average mode runs all `iterations` repetitions.
pub fn measure<F>(mut case: F, config: &MeasureConfig) -> MeasuredTime
where
    F: FnMut(),
{
    measure_with_clock(&mut case, config, &MonotonicClock::new())
}

/// Measure a single case against an explicit clock.
pub fn measure_with_clock<F, C>(mut case: F, config: &MeasureConfig, clock: &C) -> MeasuredTime
where
    F: FnMut(),
    C: Clock + ?Sized,
{
    let iterations = config.iterations.max(1);
    let median_index = iterations / 2;
    let mut total: u128 = 0;

    for i in 0..iterations {
        let start = clock.now_ns();
        std::hint::black_box(case());
        let end = clock.now_ns();
        let time = end.saturating_sub(start);

        total += time;

        if config.stat == Stat::Median && i == median_index {
            return MeasuredTime::Median(time);
        }
    }

    // Sum stays exact in u128; only the final division goes through f64.
    MeasuredTime::Average(total as f64 / iterations as f64)
}
