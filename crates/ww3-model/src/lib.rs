//! Typed data model for WAVEWATCH III namelist configuration.
//!
//! - **vocabulary**: closed token sets and resolved enum values
//! - **value**: raw input union, typed scalars, timestamps, schema defaults
//! - **schema**: field, group, block and program schemas plus rule types
//! - **record**: raw and typed records and documents
//! - **conformance**: validation violations and reports
//! - **error**: the coercion and load error taxonomy
//! - **options**: render/load configuration

pub mod conformance;
pub mod error;
pub mod options;
pub mod record;
pub mod schema;
pub mod value;
pub mod vocabulary;

pub use conformance::{ValidationReport, Violation};
pub use error::{
    ACCEPTED_FLAG_FORMS, ACCEPTED_TIMESTAMP_FORMS, CoerceError, NamelistError, ResolveError,
    Result,
};
pub use options::{EngineConfig, LoadOptions, RenderOptions};
pub use record::{Document, Entry, RawDocument, RawEntry, RawRecord, Record};
pub use schema::{
    BlockSchema, DocumentRule, FieldDescriptor, FieldKind, GroupDescriptor, PATH_SEPARATOR,
    Presence, ProgramSchema, Rule, Sign,
};
pub use value::{DefaultValue, RawValue, TIMESTAMP_FORMAT, Timestamp, TypedScalar};
pub use vocabulary::{EnumValue, Term, Vocabulary};
