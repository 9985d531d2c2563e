#![deny(unsafe_code)]

//! Canonical vocabularies and block schemas for the supported programs.
//!
//! Everything here is static data. [`registry`] indexes it for lookup and
//! [`doctor`] checks it for internal consistency.

pub mod doctor;
pub mod programs;
pub mod registry;
pub mod vocabularies;

pub use crate::doctor::{DoctorIssue, DoctorReport, doctor};
pub use crate::registry::{program, program_names, programs, vocabularies, vocabulary};
