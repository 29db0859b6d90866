//! Error reports with a source excerpt and a caret under the offending column.

use crate::{error::Error, util::digits};
use std::fmt::Write as _;

/// Formats errors against the source text they were raised for.
#[derive(Debug)]
pub struct ErrorFormatter<'source> {
    lines: Vec<&'source str>,
}

impl<'source> ErrorFormatter<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lines: source.split('\n').collect(),
        }
    }

    /// Render `message` followed by the source line `line` and a caret at
    /// `column`.
    ///
    /// ```text
    /// Error: Unexpected character '^'
    ///
    /// 1 | 2 3 ^
    ///   |     ^
    /// ```
    ///
    /// Only the header is produced when `line` lies outside the source.
    pub fn format_error(&self, message: &str, line: usize, column: usize) -> String {
        let mut out = format!("Error: {}\n\n", message);

        let source_line = match line.checked_sub(1).and_then(|i| self.lines.get(i)) {
            Some(source_line) => source_line.trim_end_matches('\r'),
            None => return out,
        };

        let width = digits(line);
        let _ = writeln!(out, "{:>width$} | {}", line, source_line, width = width);
        let _ = write!(
            out,
            "{:width$} | {:pad$}^",
            "",
            "",
            width = width,
            pad = column.saturating_sub(1)
        );
        out
    }

    /// Shorthand for [`format_error`](Self::format_error) on a pipeline error.
    pub fn format(&self, err: &Error) -> String {
        self.format_error(err.message(), err.line(), err.column())
    }
}
