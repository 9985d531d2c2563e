//! Namelist text reader.
//!
//! Reads `&NAME ... /` blocks into a [`RawDocument`]. The reader knows no
//! schema: every value comes out as [`RawValue::Text`] (or a list of them)
//! and the coercers decide what it means. Keys are `PREFIX%PATH`; the
//! prefix must be the same for every key of a block and is stripped, so
//! `GRID%TYPE` lands at `TYPE` and `CURV%XCOORD%SF` at group `XCOORD`.
//!
//! Supported syntax:
//! - `!` starts a comment outside quotes
//! - single or double quoted strings, with the quote doubled to escape it
//! - comma separated values, read as a list
//! - `&NAME /` for an empty block
//! - one assignment per line; `/` on its own line closes the block

use tracing::debug;
use ww3_model::{NamelistError, PATH_SEPARATOR, RawDocument, RawRecord, RawValue, Result};

/// Parse namelist text.
pub fn parse_namelist(text: &str) -> Result<RawDocument> {
    let mut document = RawDocument::new();
    let mut open: Option<OpenBlock> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some(block) = open.as_mut() else {
            let Some(header) = line.strip_prefix('&') else {
                return Err(NamelistError::syntax(
                    line_no,
                    format!("expected a block header (&NAME), found {line:?}"),
                ));
            };
            let (name, rest) = split_name(header);
            if !is_name(name) {
                return Err(NamelistError::syntax(
                    line_no,
                    format!("invalid block name {name:?}"),
                ));
            }
            let started = OpenBlock::new(name, line_no);
            match rest.trim() {
                "" => open = Some(started),
                "/" => started.close(&mut document)?,
                other => {
                    return Err(NamelistError::syntax(
                        line_no,
                        format!("unexpected text after &{name}: {other:?}"),
                    ));
                }
            }
            continue;
        };

        if line == "/" {
            if let Some(block) = open.take() {
                block.close(&mut document)?;
            }
            continue;
        }
        if line.starts_with('&') {
            return Err(NamelistError::syntax(
                line_no,
                format!("block &{} is not closed before {line}", block.name),
            ));
        }
        block.assign(line, line_no)?;
    }

    if let Some(block) = open {
        return Err(NamelistError::syntax(
            block.line,
            format!("block &{} is never closed with /", block.name),
        ));
    }

    debug!(blocks = document.blocks().len(), "parsed namelist");
    Ok(document)
}

/// Parse namelist bytes. Input that is not UTF-8 is rejected.
pub fn parse_bytes(bytes: &[u8]) -> Result<RawDocument> {
    let text = std::str::from_utf8(bytes)?;
    parse_namelist(text)
}

struct OpenBlock {
    name: String,
    line: usize,
    prefix: Option<String>,
    record: RawRecord,
}

impl OpenBlock {
    fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            line,
            prefix: None,
            record: RawRecord::new(),
        }
    }

    fn assign(&mut self, line: &str, line_no: usize) -> Result<()> {
        let Some(eq) = line.find('=') else {
            return Err(NamelistError::syntax(
                line_no,
                format!("expected KEY = VALUE, found {line:?}"),
            ));
        };
        let key = line[..eq].trim();
        let (prefix, path) = key.split_once(PATH_SEPARATOR).ok_or_else(|| {
            NamelistError::syntax(line_no, format!("key {key:?} has no block prefix"))
        })?;
        if !is_name(prefix) || !path.split(PATH_SEPARATOR).all(is_name) {
            return Err(NamelistError::syntax(
                line_no,
                format!("invalid key {key:?}"),
            ));
        }
        match &self.prefix {
            None => self.prefix = Some(prefix.to_string()),
            Some(expected) if expected.eq_ignore_ascii_case(prefix) => {}
            Some(expected) => {
                return Err(NamelistError::syntax(
                    line_no,
                    format!(
                        "key {key:?} does not use the prefix {expected} of &{}",
                        self.name
                    ),
                ));
            }
        }

        let value = parse_values(&line[eq + 1..], line_no)?;
        if !self.record.insert(path, value) {
            return Err(NamelistError::syntax(
                line_no,
                format!("{key} is assigned more than once in &{}", self.name),
            ));
        }
        Ok(())
    }

    fn close(self, document: &mut RawDocument) -> Result<()> {
        if !document.insert(&self.name, self.record) {
            return Err(NamelistError::syntax(
                self.line,
                format!("block &{} appears more than once", self.name),
            ));
        }
        Ok(())
    }
}

fn split_name(header: &str) -> (&str, &str) {
    let end = header
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(header.len());
    header.split_at(end)
}

fn is_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The line up to a `!` that is not inside quotes.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (idx, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '!' => return &line[..idx],
            None => {}
        }
    }
    line
}

/// Split the right-hand side of an assignment into values.
///
/// One value yields a scalar, several a list. Quoted values are unescaped;
/// unquoted values are trimmed and kept verbatim.
fn parse_values(text: &str, line_no: usize) -> Result<RawValue> {
    let mut values = Vec::new();
    let mut chars = text.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let value = match chars.peek().copied() {
            None | Some(',') => {
                return Err(NamelistError::syntax(line_no, "missing value"));
            }
            Some(q @ ('\'' | '"')) => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        None => {
                            return Err(NamelistError::syntax(line_no, "unterminated string"));
                        }
                        Some(c) if c == q => {
                            if chars.next_if_eq(&q).is_some() {
                                value.push(q);
                            } else {
                                break;
                            }
                        }
                        Some(c) => value.push(c),
                    }
                }
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                if chars.peek().is_some_and(|c| *c != ',') {
                    return Err(NamelistError::syntax(
                        line_no,
                        "expected , or end of line after a quoted value",
                    ));
                }
                value
            }
            Some(_) => {
                let mut value = String::new();
                while let Some(c) = chars.next_if(|c| *c != ',') {
                    if c == '\'' || c == '"' {
                        return Err(NamelistError::syntax(
                            line_no,
                            "quote inside an unquoted value",
                        ));
                    }
                    value.push(c);
                }
                value.trim_end().to_string()
            }
        };
        values.push(RawValue::Text(value));

        if chars.next().is_none() {
            break;
        }
    }

    if values.len() == 1 {
        Ok(values.remove(0))
    } else {
        Ok(RawValue::List(values))
    }
}
