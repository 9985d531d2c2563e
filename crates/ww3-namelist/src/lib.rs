//! Namelist text: canonical renderer, record composer and reader.
//!
//! Rendering is a pure function of the typed records and the
//! [`RenderOptions`](ww3_model::RenderOptions): two documents holding the
//! same values render to the same bytes.
//!
//! ```
//! use ww3_model::{Record, RenderOptions, TypedScalar};
//! use ww3_namelist::render_record;
//!
//! let mut record = Record::new("TIMESTEPS_NML", "TIMESTEPS", 0);
//! record.push_scalar("DTMAX", TypedScalar::Real(480.0));
//! assert_eq!(
//!     render_record(&record, &RenderOptions::default()),
//!     "&TIMESTEPS_NML\n  TIMESTEPS%DTMAX = 480.\n/\n"
//! );
//! ```

#![deny(unsafe_code)]

mod composer;
pub mod hash;
mod reader;
mod writer;

pub use composer::RecordComposer;
pub use reader::{parse_bytes, parse_namelist};
pub use writer::{render, render_block, render_record, render_value};
