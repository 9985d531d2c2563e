//! Structured entry surface.
//!
//! Nested JSON / TOML mappings in, [`RawDocument`](ww3_model::RawDocument)
//! out, plus the reverse export and the [`DataSource`] seam through which
//! callers hand over bytes.

#![deny(unsafe_code)]

mod export;
mod source;
mod structured;

pub use export::{to_json_value, to_toml_value};
pub use source::{
    DataSource, MemorySource, StructuredFormat, read_namelist_from, read_structured_from,
};
pub use structured::{from_json_str, from_json_value, from_toml_str, from_toml_value};
