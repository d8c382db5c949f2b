//! Relative Slowdown Formatting
//!
//! Percentage differences against the fastest case, rendered the way the
//! report prints them: two decimal places with trailing zeros dropped.

/// Percentage by which `time` exceeds `fastest`, as a display string.
///
/// The value is rounded to two decimals, then trailing zeros and a bare
/// trailing dot are stripped: `15.00` renders as `"15"`, `15.50` as
/// `"15.5"`. A zero baseline yields `"0"`.
pub fn percentage_diff(fastest: f64, time: f64) -> String {
    let percentage = if fastest > 0.0 {
        (time - fastest) / fastest * 100.0
    } else {
        0.0
    };

    let rounded = format!("{:.2}", percentage);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
