//! Coercion path: raw values in, typed records out.
//!
//! - **resolve**: vocabulary resolution with fixed precedence
//! - **normalization**: per-kind coercers, including the single timestamp
//!   validator
//! - **coerce**: field dispatch, record and document building, edit path

pub mod coerce;
pub mod normalization;
pub mod resolve;

pub use coerce::{
    build_document, build_record, clear_field, coerce_field, coerce_kind, program_schema,
    replace_field,
};
pub use normalization::{
    TimestampError, coerce_flag, coerce_integer, coerce_list, coerce_real, coerce_text,
    coerce_timestamp, parse_real, parse_timestamp,
};
pub use resolve::{resolve, resolve_str};
