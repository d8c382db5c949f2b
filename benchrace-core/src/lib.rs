#![warn(missing_docs)]
//! Benchrace Core - Measurement Engine
//!
//! This crate times a single candidate function:
//! - A repetition loop that clocks every invocation in nanoseconds
//! - Two stat methods: the middle repetition's duration (median) or the
//!   arithmetic mean over all repetitions (average)
//! - A [`Clock`] trait so the loop can run against scripted timestamps
//!
//! Durations accumulate in `u128`, so long runs of large readings reduce
//! without losing low-order nanoseconds to float rounding.

mod clock;
mod config;
mod measure;

pub use clock::{Clock, MonotonicClock};
pub use config::{DEFAULT_ITERATIONS, MeasureConfig, Stat, UnsupportedStatError};
pub use measure::{Case, MeasuredTime, measure, measure_with_clock};
