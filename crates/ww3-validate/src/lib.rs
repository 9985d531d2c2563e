//! Validation layer.
//!
//! Runs after coercion succeeded, over fully typed records. Checks are
//! pure and report every violation at once rather than failing fast.

pub mod checks;
mod engine;

pub use engine::{validate_document, validate_record};
