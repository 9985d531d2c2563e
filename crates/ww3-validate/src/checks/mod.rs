//! Validation check modules.
//!
//! Each module evaluates one rule kind and returns the violations it finds.
//! A rule that reads an absent field yields nothing: presence is decided by
//! field nullability during coercion.

pub mod exclusive;
pub mod numeric;
pub mod order;
pub mod selector;

use ww3_model::{Record, TypedScalar};

/// Number at `path`, if present and numeric.
pub(crate) fn number(record: &Record, path: &str) -> Option<f64> {
    record.scalar(path).and_then(TypedScalar::as_f64)
}

/// Render a number the way a person writes it in a message.
pub(crate) fn show(value: f64) -> String {
    format!("{value}")
}
