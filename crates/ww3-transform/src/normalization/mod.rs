//! Per-kind coercers.
//!
//! - **timestamp**: absolute, zone-free timestamps
//! - **numeric**: bounded integers and finite reals
//! - **flag**: strict `T`/`F` flags
//! - **text**: opaque free text
//! - **list**: comma-separated lists of primitives

pub mod flag;
pub mod list;
pub mod numeric;
pub mod text;
pub mod timestamp;

pub use flag::coerce_flag;
pub use list::coerce_list;
pub use numeric::{coerce_integer, coerce_real, parse_real};
pub use text::coerce_text;
pub use timestamp::{TimestampError, coerce_timestamp, parse_timestamp};
