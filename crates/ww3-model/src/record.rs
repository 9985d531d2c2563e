//! Records and documents, raw and typed.
//!
//! The raw side ([`RawDocument`], [`RawRecord`]) is what entry surfaces
//! produce: an ordered, case-preserving tree of names and [`RawValue`]s.
//! The typed side ([`Document`], [`Record`]) is produced by coercion only
//! and is ordered by schema, not by input.

use crate::schema::PATH_SEPARATOR;
use crate::value::{RawValue, TypedScalar};

/// One entry of a raw record: a value or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEntry {
    Value(RawValue),
    Group(RawRecord),
}

/// Ordered, uncoerced field tree for one block or group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    entries: Vec<(String, RawEntry)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, RawEntry)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup of a direct entry.
    pub fn get(&self, name: &str) -> Option<&RawEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, entry)| entry)
    }

    /// Insert a value at a `%`-separated path, creating groups on the way.
    ///
    /// Returns `false` when the path is already taken (a repeated key, or a
    /// key that collides with a group of the same name).
    pub fn insert(&mut self, path: &str, value: RawValue) -> bool {
        let parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        self.insert_parts(&parts, value)
    }

    fn insert_parts(&mut self, parts: &[&str], value: RawValue) -> bool {
        let Some((head, rest)) = parts.split_first() else {
            return false;
        };
        if rest.is_empty() {
            if self.get(head).is_some() {
                return false;
            }
            self.entries
                .push(((*head).to_string(), RawEntry::Value(value)));
            return true;
        }
        let position = self
            .entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(head));
        match position {
            Some(idx) => match &mut self.entries[idx].1 {
                RawEntry::Group(group) => group.insert_parts(rest, value),
                RawEntry::Value(_) => false,
            },
            None => {
                let mut group = RawRecord::new();
                let inserted = group.insert_parts(rest, value);
                self.entries
                    .push(((*head).to_string(), RawEntry::Group(group)));
                inserted
            }
        }
    }

    /// Attach a whole group. Returns `false` if the name is taken.
    pub fn insert_group(&mut self, name: &str, group: RawRecord) -> bool {
        if self.get(name).is_some() {
            return false;
        }
        self.entries.push((name.to_string(), RawEntry::Group(group)));
        true
    }

    /// Insert or overwrite the value at a path. Used by the edit path, where
    /// a field of an already-built record is replaced before re-coercion.
    pub fn set(&mut self, path: &str, value: RawValue) {
        let parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        self.set_parts(&parts, value);
    }

    fn set_parts(&mut self, parts: &[&str], value: RawValue) {
        let Some((head, rest)) = parts.split_first() else {
            return;
        };
        let position = self
            .entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(head));
        if rest.is_empty() {
            match position {
                Some(idx) => self.entries[idx].1 = RawEntry::Value(value),
                None => self
                    .entries
                    .push(((*head).to_string(), RawEntry::Value(value))),
            }
            return;
        }
        let idx = match position {
            Some(idx) => {
                if !matches!(self.entries[idx].1, RawEntry::Group(_)) {
                    self.entries[idx].1 = RawEntry::Group(RawRecord::new());
                }
                idx
            }
            None => {
                self.entries
                    .push(((*head).to_string(), RawEntry::Group(RawRecord::new())));
                self.entries.len() - 1
            }
        };
        if let RawEntry::Group(group) = &mut self.entries[idx].1 {
            group.set_parts(rest, value);
        }
    }

    /// Remove the entry at a path. Returns `true` if something was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let Some((parent, name)) = path.rsplit_once(PATH_SEPARATOR) else {
            let before = self.entries.len();
            self.entries.retain(|(key, _)| !key.eq_ignore_ascii_case(path));
            return self.entries.len() != before;
        };
        let mut current = self;
        for part in parent.split(PATH_SEPARATOR) {
            let found = current
                .entries
                .iter_mut()
                .find(|(key, _)| key.eq_ignore_ascii_case(part));
            match found {
                Some((_, RawEntry::Group(group))) => current = group,
                _ => return false,
            }
        }
        current.remove(name)
    }

    /// Builder-style insert for programmatic construction and tests.
    /// Repeated paths keep the first value.
    #[must_use]
    pub fn with(mut self, path: &str, value: impl Into<RawValue>) -> Self {
        self.insert(path, value.into());
        self
    }
}

/// Ordered, uncoerced blocks of one external file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    blocks: Vec<(String, RawRecord)>,
}

impl RawDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[(String, RawRecord)] {
        &self.blocks
    }

    pub fn block(&self, name: &str) -> Option<&RawRecord> {
        self.blocks
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, record)| record)
    }

    /// Add a block. Returns `false` if a block of that name exists.
    pub fn insert(&mut self, name: &str, record: RawRecord) -> bool {
        if self.block(name).is_some() {
            return false;
        }
        self.blocks.push((name.to_string(), record));
        true
    }

    #[must_use]
    pub fn with_block(mut self, name: &str, record: RawRecord) -> Self {
        self.insert(name, record);
        self
    }
}

/// One entry of a typed record.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Scalar(TypedScalar),
    Group(Record),
}

/// A typed block, or a nested group of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    prefix: String,
    depth: usize,
    entries: Vec<(String, Entry)>,
}

impl Record {
    /// `prefix` is the full key prefix of the entries (e.g. `CURV%XCOORD`).
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            depth,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 0 for a block, 1 for its groups, and so on.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn entries(&self) -> &[(String, Entry)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push_scalar(&mut self, name: impl Into<String>, value: TypedScalar) {
        self.entries.push((name.into(), Entry::Scalar(value)));
    }

    pub fn push_group(&mut self, name: impl Into<String>, group: Record) {
        self.entries.push((name.into(), Entry::Group(group)));
    }

    /// Entry at a `%`-separated path relative to this record.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        let mut current = self;
        let mut parts = path.split(PATH_SEPARATOR).peekable();
        while let Some(part) = parts.next() {
            let entry = current
                .entries
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(part))
                .map(|(_, entry)| entry)?;
            if parts.peek().is_none() {
                return Some(entry);
            }
            match entry {
                Entry::Group(group) => current = group,
                Entry::Scalar(_) => return None,
            }
        }
        None
    }

    pub fn scalar(&self, path: &str) -> Option<&TypedScalar> {
        match self.get(path)? {
            Entry::Scalar(value) => Some(value),
            Entry::Group(_) => None,
        }
    }

    pub fn group(&self, path: &str) -> Option<&Record> {
        match self.get(path)? {
            Entry::Group(group) => Some(group),
            Entry::Scalar(_) => None,
        }
    }

    /// Full external key for a path relative to this record.
    pub fn key(&self, path: &str) -> String {
        format!("{}{PATH_SEPARATOR}{path}", self.prefix)
    }

    /// Back to the raw side, for the edit path. Values keep their typed
    /// form, so re-coercion is lossless.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        for (name, entry) in &self.entries {
            match entry {
                Entry::Scalar(value) => {
                    raw.insert(name, value.to_raw());
                }
                Entry::Group(group) => {
                    raw.insert_group(name, group.to_raw());
                }
            }
        }
        raw
    }

    /// Number of scalar entries, counting nested groups.
    pub fn field_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, entry)| match entry {
                Entry::Scalar(_) => 1,
                Entry::Group(group) => group.field_count(),
            })
            .sum()
    }
}

/// A typed configuration document: the blocks of one external file, in
/// the order the consuming program reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    program: String,
    records: Vec<Record>,
}

impl Document {
    pub fn new(program: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            program: program.into(),
            records,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.record(name).is_some()
    }

    pub fn block_names(&self) -> Vec<&str> {
        self.records.iter().map(Record::name).collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn to_raw(&self) -> RawDocument {
        let mut raw = RawDocument::new();
        for record in &self.records {
            raw.insert(record.name(), record.to_raw());
        }
        raw
    }
}
