//! WAVEWATCH III namelist engine.
//!
//! Facade over the workspace crates: load namelist text or structured
//! input, coerce it against a program schema, validate it, and render it
//! back in canonical form.
//!
//! ```
//! use ww3_core::{load_namelist, render_all};
//! use ww3_model::RenderOptions;
//!
//! let text = "&DOMAIN_NML\n  DOMAIN%START = '2010-01-01'\n  DOMAIN%STOP = 20100102\n/\n";
//! let document = load_namelist("ww3_shel", text)?;
//! assert_eq!(
//!     render_all(&document, &RenderOptions::default()),
//!     "&DOMAIN_NML\n  DOMAIN%IOSTYP = 1\n  DOMAIN%START  = 20100101 000000\n  DOMAIN%STOP   = 20100102 000000\n/\n"
//! );
//! # Ok::<(), ww3_model::NamelistError>(())
//! ```

#![deny(unsafe_code)]

pub mod logging;
mod pipeline;

pub use pipeline::{
    Engine, clear, edit, load_from, load_namelist, load_namelist_with, load_structured,
    load_structured_with, render_all, render_block, validate,
};
