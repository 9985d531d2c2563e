//! Record composer.
//!
//! Collects typed blocks in the order the caller adds them and renders
//! them either as one text or as one text per block.

use std::collections::BTreeMap;

use tracing::debug;
use ww3_model::{Document, Record, RenderOptions};

use crate::hash::sha256_hex;
use crate::writer::{render_record, render_records};

#[derive(Debug, Clone, Default)]
pub struct RecordComposer {
    records: Vec<Record>,
    options: RenderOptions,
}

impl RecordComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            records: Vec::new(),
            options,
        }
    }

    /// Composer over the blocks of a document, in document order.
    pub fn from_document(document: &Document, options: RenderOptions) -> Self {
        Self {
            records: document.records().to_vec(),
            options,
        }
    }

    /// Append a block. A block with the same name replaces the earlier one
    /// in its original position.
    pub fn push(&mut self, record: Record) -> &mut Self {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.name().eq_ignore_ascii_case(record.name()))
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        self
    }

    #[must_use]
    pub fn with_record(mut self, record: Record) -> Self {
        self.push(record);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Rendered text per block name, for callers writing one file per
    /// block.
    pub fn block_map(&self) -> BTreeMap<String, String> {
        self.records
            .iter()
            .map(|record| {
                (
                    record.name().to_string(),
                    render_record(record, &self.options),
                )
            })
            .collect()
    }

    /// All blocks as one text.
    pub fn render_all(&self) -> String {
        let text = render_records(&self.records, &self.options);
        debug!(blocks = self.records.len(), bytes = text.len(), "composed document");
        text
    }

    /// SHA-256 of [`render_all`](Self::render_all), hex encoded.
    pub fn digest(&self) -> String {
        sha256_hex(self.render_all().as_bytes())
    }

    pub fn into_document(self, program: impl Into<String>) -> Document {
        Document::new(program, self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ww3_model::TypedScalar;

    fn block(name: &str, prefix: &str, value: i64) -> Record {
        let mut record = Record::new(name, prefix, 0);
        record.push_scalar("N", TypedScalar::Integer(value));
        record
    }

    #[test]
    fn caller_order_is_kept() {
        let composer = RecordComposer::new()
            .with_record(block("B_NML", "B", 1))
            .with_record(block("A_NML", "A", 2));
        let text = composer.render_all();
        assert!(text.find("&B_NML").unwrap() < text.find("&A_NML").unwrap());
        assert_eq!(composer.len(), 2);
    }

    #[test]
    fn same_name_replaces_in_place() {
        let mut composer = RecordComposer::new();
        composer
            .push(block("A_NML", "A", 1))
            .push(block("B_NML", "B", 2))
            .push(block("a_nml", "A", 3));
        let names: Vec<&str> = composer.records().iter().map(Record::name).collect();
        assert_eq!(names, vec!["a_nml", "B_NML"]);
        assert!(composer.render_all().contains("A%N = 3"));
    }

    #[test]
    fn block_map_matches_combined_render() {
        let composer = RecordComposer::new()
            .with_record(block("A_NML", "A", 1))
            .with_record(block("B_NML", "B", 2));
        let map = composer.block_map();
        assert_eq!(map["A_NML"], "&A_NML\n  A%N = 1\n/\n");
        assert_eq!(
            composer.render_all(),
            format!("{}\n{}", map["A_NML"], map["B_NML"])
        );
    }

    #[test]
    fn digest_tracks_content() {
        let one = RecordComposer::new().with_record(block("A_NML", "A", 1));
        let same = RecordComposer::new().with_record(block("A_NML", "A", 1));
        let other = RecordComposer::new().with_record(block("A_NML", "A", 2));
        assert_eq!(one.digest(), same.digest());
        assert_ne!(one.digest(), other.digest());
        assert_eq!(one.digest().len(), 64);
    }
}
