//! Styled Text Collaborator
//!
//! Rendering never hardcodes escape sequences; every styled substring goes
//! through a [`Styler`] so callers decide how (or whether) color is applied.

use owo_colors::OwoColorize;

/// Semantic style tags the report attaches to substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// A measured duration inside a result line.
    Time,
    /// An advisory about measurement quality.
    Advisory,
}

/// Applies a visual style to a piece of report text.
pub trait Styler {
    /// Return `text` dressed in `style`.
    fn paint(&self, text: &str, style: Style) -> String;
}

/// ANSI terminal styling: cyan durations, bold yellow advisories.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, text: &str, style: Style) -> String {
        match style {
            Style::Time => text.cyan().to_string(),
            Style::Advisory => text.yellow().bold().to_string(),
        }
    }
}

/// Pass-through styling for plain-text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}
