//! File-reference collaborator.
//!
//! The engine never opens files itself. The surrounding application hands
//! it a [`DataSource`] that resolves logical identifiers to byte streams.

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};

use tracing::debug;
use ww3_model::{NamelistError, RawDocument, Result};

/// Resolves a logical data-source identifier to a readable stream.
pub trait DataSource {
    fn open(&self, id: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// Structured input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredFormat {
    Json,
    Toml,
}

impl StructuredFormat {
    /// Format from a file-name extension, if recognised.
    pub fn from_extension(id: &str) -> Option<Self> {
        let (_, extension) = id.rsplit_once('.')?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// In-memory source, for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(id, bytes);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(id.into(), bytes.into());
    }
}

impl DataSource for MemorySource {
    fn open(&self, id: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.entries.get(id) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no entry named {id}"),
            )),
        }
    }
}

fn read_all(source: &dyn DataSource, id: &str) -> Result<Vec<u8>> {
    let mut reader = source.open(id).map_err(|err| NamelistError::io(id, err))?;
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|err| NamelistError::io(id, err))?;
    debug!(source = id, bytes = bytes.len(), "read data source");
    Ok(bytes)
}

/// Read and parse a namelist file from `source`.
pub fn read_namelist_from(source: &dyn DataSource, id: &str) -> Result<RawDocument> {
    let bytes = read_all(source, id)?;
    ww3_namelist::parse_bytes(&bytes)
}

/// Read structured input from `source`.
pub fn read_structured_from(
    source: &dyn DataSource,
    id: &str,
    format: StructuredFormat,
) -> Result<RawDocument> {
    let bytes = read_all(source, id)?;
    let text = std::str::from_utf8(&bytes)?;
    match format {
        StructuredFormat::Json => crate::from_json_str(text),
        StructuredFormat::Toml => crate::from_toml_str(text),
    }
}
