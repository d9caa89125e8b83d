use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{Files, SimpleFile};
use codespan_reporting::term::termcolor::Buffer;
use codespan_reporting::term::{emit, Config};
use miette::Diagnostic as MietteDiagnostic;
use std::ops::Range;

use crate::analysis::Error as AnalysisError;
use crate::source_location::Location;

/// Converts a 1-based, inclusive line/column location into a byte range of `file`.
/// Columns past the end of a line are clamped to it.
fn byte_range(file: &SimpleFile<&str, &str>, location: &Location) -> Option<Range<usize>> {
    let first = file.line_range((), location.first_line.checked_sub(1)?).ok()?;
    let last = file.line_range((), location.last_line.checked_sub(1)?).ok()?;

    let start = (first.start + location.first_column.saturating_sub(1)).min(first.end);
    let end = (last.start + location.last_column).min(last.end).max(start);
    Some(start..end)
}

fn to_codespan_diagnostic(error: &AnalysisError, file: &SimpleFile<&str, &str>) -> Diagnostic<()> {
    let mut diagnostic = Diagnostic::error().with_message(error.to_string());

    if let Some(code) = error.code() {
        diagnostic = diagnostic.with_code(code.to_string());
    }

    if let Some(range) = byte_range(file, error.location()) {
        diagnostic.labels.push(Label::primary((), range));
    }

    if let Some(help) = error.help() {
        diagnostic.notes.push(format!("help: {}", help));
    }

    diagnostic
}

fn render(error: &AnalysisError, filename: &str, source: &str, mut writer: Buffer) -> String {
    let file = SimpleFile::new(filename, source);
    let diagnostic = to_codespan_diagnostic(error, &file);

    if emit(&mut writer, &Config::default(), &file, &diagnostic).is_err() {
        return format!("error: {} at {}", error, error.location());
    }

    String::from_utf8_lossy(writer.as_slice()).into_owned()
}

/// Renders a semantic error against its source text for a terminal.
pub fn format_diagnostic(error: &AnalysisError, filename: &str, source: &str) -> String {
    render(error, filename, source, Buffer::ansi())
}

/// Like `format_diagnostic`, without color escapes.
pub fn format_diagnostic_plain(error: &AnalysisError, filename: &str, source: &str) -> String {
    render(error, filename, source, Buffer::no_color())
}
