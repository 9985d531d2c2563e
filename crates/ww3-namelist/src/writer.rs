//! Canonical namelist renderer.
//!
//! Output depends only on the typed values and the layout options, never
//! on how the input was spelled. Value spelling is chosen by the kind of
//! the [`TypedScalar`]:
//!
//! | kind      | rendered as                         |
//! |-----------|-------------------------------------|
//! | flag      | bare `T` / `F`                      |
//! | timestamp | bare `YYYYMMDD HHMMSS`              |
//! | integer   | bare decimal literal                |
//! | real      | bare literal, always with a `.`     |
//! | enum      | canonical spelling, quoted per vocabulary |
//! | text      | single-quoted, `'` doubled          |
//! | list      | elements joined with `, `           |

use tracing::debug;
use ww3_model::{Document, Entry, Record, RenderOptions, TypedScalar};

/// Render one value in its canonical external spelling.
pub fn render_value(value: &TypedScalar) -> String {
    match value {
        // Flags first: a flag and an enum token can both read `T`.
        TypedScalar::Flag(true) => "T".to_string(),
        TypedScalar::Flag(false) => "F".to_string(),
        TypedScalar::Timestamp(instant) => instant.to_string(),
        TypedScalar::Integer(value) => value.to_string(),
        TypedScalar::Real(value) => render_real(*value),
        TypedScalar::Enum(value) if value.is_quoted() => quote(value.spelling()),
        TypedScalar::Enum(value) => value.spelling().to_string(),
        TypedScalar::Text(text) => quote(text),
        TypedScalar::List(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Shortest exact spelling of `value`, with a decimal point so the
/// consumer never reads it as an integer.
fn render_real(value: f64) -> String {
    let mut text = format!("{value}");
    if !text.contains('.') {
        text.push('.');
    }
    text
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Render one block: `&NAME`, one `KEY = VALUE` line per field (nested
/// groups inline, in entry order), then `/`.
pub fn render_record(record: &Record, options: &RenderOptions) -> String {
    let mut lines = Vec::new();
    collect_lines(record, &mut lines);

    let width = if options.align_values {
        lines.iter().map(|(key, _)| key.len()).max().unwrap_or(0)
    } else {
        0
    };
    let indent = " ".repeat(options.indent);

    let mut out = String::new();
    out.push('&');
    out.push_str(record.name());
    out.push('\n');
    for (key, value) in &lines {
        out.push_str(&format!("{indent}{key:<width$} = {value}\n"));
    }
    out.push_str("/\n");

    debug!(block = record.name(), lines = lines.len(), "rendered block");
    out
}

fn collect_lines(record: &Record, lines: &mut Vec<(String, String)>) {
    for (name, entry) in record.entries() {
        match entry {
            Entry::Scalar(value) => lines.push((record.key(name), render_value(value))),
            Entry::Group(group) => collect_lines(group, lines),
        }
    }
}

/// Render every block of `records` as one text, in the given order.
pub(crate) fn render_records<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    if let Some(comment) = &options.header_comment {
        for line in comment.lines() {
            out.push_str("! ");
            out.push_str(line);
            out.push('\n');
        }
        if options.blank_line_between_blocks {
            out.push('\n');
        }
    }
    for (idx, record) in records.into_iter().enumerate() {
        if idx > 0 && options.blank_line_between_blocks {
            out.push('\n');
        }
        out.push_str(&render_record(record, options));
    }
    out
}

/// Render a whole document: every block in document order.
pub fn render(document: &Document, options: &RenderOptions) -> String {
    let text = render_records(document.records(), options);
    debug!(
        program = document.program(),
        blocks = document.records().len(),
        bytes = text.len(),
        "rendered document"
    );
    text
}

/// Render a single block of a document, or `None` if it has no such block.
pub fn render_block(document: &Document, name: &str, options: &RenderOptions) -> Option<String> {
    document
        .record(name)
        .map(|record| render_record(record, options))
}
