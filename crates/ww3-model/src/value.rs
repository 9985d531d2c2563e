//! Raw input values and typed scalars.
//!
//! [`RawValue`] is the boundary type: one explicit variant per input shape
//! the engine accepts, whichever surface produced it (namelist text,
//! structured JSON/TOML, or programmatic construction). [`TypedScalar`] is
//! what survives coercion; once a field holds a typed scalar no string form
//! of the original input remains.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::vocabulary::EnumValue;

/// Canonical external layout of an absolute timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d %H%M%S";

/// An absolute, zone-free timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// True when [`canonical`](Self::canonical) reads back to this exact
    /// instant: a four-digit year and whole seconds, leap seconds excluded.
    pub fn has_canonical_form(&self) -> bool {
        (0..=9999).contains(&self.0.year()) && self.0.nanosecond() == 0
    }

    /// The 15-character `YYYYMMDD HHMMSS` token.
    pub fn canonical(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// A loosely-typed input value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Bool(bool),
    Timestamp(Timestamp),
    Enum(EnumValue),
    List(Vec<RawValue>),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Short name of the input shape, for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            RawValue::Text(_) => "text",
            RawValue::Integer(_) => "integer",
            RawValue::Real(_) => "real",
            RawValue::Bool(_) => "boolean",
            RawValue::Timestamp(_) => "timestamp",
            RawValue::Enum(_) => "enumeration",
            RawValue::List(_) => "list",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => write!(f, "{s:?}"),
            RawValue::Integer(i) => write!(f, "{i}"),
            RawValue::Real(r) => write!(f, "{r:?}"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Timestamp(t) => write!(f, "{t}"),
            RawValue::Enum(e) => write!(f, "{e:?}"),
            RawValue::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Timestamp> for RawValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<EnumValue> for RawValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

/// A coerced field value. The internal representation is the sole source
/// of truth for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedScalar {
    Timestamp(Timestamp),
    Integer(i64),
    Real(f64),
    Flag(bool),
    Enum(EnumValue),
    Text(String),
    List(Vec<TypedScalar>),
}

impl TypedScalar {
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypedScalar::Timestamp(_) => "timestamp",
            TypedScalar::Integer(_) => "integer",
            TypedScalar::Real(_) => "real",
            TypedScalar::Flag(_) => "flag",
            TypedScalar::Enum(_) => "enumeration",
            TypedScalar::Text(_) => "text",
            TypedScalar::List(_) => "list",
        }
    }

    /// Numeric view used by cross-field checks.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedScalar::Integer(i) => Some(*i as f64),
            TypedScalar::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            TypedScalar::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            TypedScalar::Enum(e) => Some(*e),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            TypedScalar::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedScalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The equivalent raw value. Coercing it again yields `self`.
    pub fn to_raw(&self) -> RawValue {
        match self {
            TypedScalar::Timestamp(t) => RawValue::Timestamp(*t),
            TypedScalar::Integer(i) => RawValue::Integer(*i),
            TypedScalar::Real(r) => RawValue::Real(*r),
            TypedScalar::Flag(b) => RawValue::Bool(*b),
            TypedScalar::Enum(e) => RawValue::Enum(*e),
            TypedScalar::Text(s) => RawValue::Text(s.clone()),
            TypedScalar::List(items) => {
                RawValue::List(items.iter().map(TypedScalar::to_raw).collect())
            }
        }
    }
}

/// Schema default for a field. Defaults go through the same coercion path
/// as user input, so they can never bypass a vocabulary or a bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(i64),
    Real(f64),
    Flag(bool),
    /// Canonical spelling of a vocabulary member.
    Enum(&'static str),
}

impl DefaultValue {
    pub fn to_raw(self) -> RawValue {
        match self {
            DefaultValue::Text(s) | DefaultValue::Enum(s) => RawValue::Text(s.to_string()),
            DefaultValue::Integer(i) => RawValue::Integer(i),
            DefaultValue::Real(r) => RawValue::Real(r),
            DefaultValue::Flag(b) => RawValue::Bool(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_renders_fifteen_characters() {
        let ts = Timestamp::new(
            NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        assert_eq!(ts.canonical(), "20230101 000000");
        assert_eq!(ts.canonical().len(), 15);
        assert_eq!(ts.to_string(), ts.canonical());
        assert!(ts.has_canonical_form());
    }

    #[test]
    fn only_four_digit_whole_second_instants_have_a_token() {
        let date = |y| NaiveDate::from_ymd_opt(y, 12, 31).unwrap();
        let five_digit = Timestamp::new(date(12345).and_hms_opt(0, 0, 0).unwrap());
        assert!(!five_digit.has_canonical_form());
        let negative = Timestamp::new(date(-1).and_hms_opt(0, 0, 0).unwrap());
        assert!(!negative.has_canonical_form());

        let leap = Timestamp::new(date(2016).and_hms_milli_opt(23, 59, 59, 1_000).unwrap());
        assert_eq!(leap.canonical(), "20161231 235960");
        assert!(!leap.has_canonical_form());
        let fractional = Timestamp::new(date(2016).and_hms_milli_opt(12, 0, 0, 500).unwrap());
        assert!(!fractional.has_canonical_form());

        assert!(Timestamp::new(date(9999).and_hms_opt(23, 59, 59).unwrap()).has_canonical_form());
    }

    #[test]
    fn numeric_view_covers_integers_and_reals() {
        assert_eq!(TypedScalar::Integer(900).as_f64(), Some(900.0));
        assert_eq!(TypedScalar::Real(2.5).as_f64(), Some(2.5));
        assert_eq!(TypedScalar::Flag(true).as_f64(), None);
    }

    #[test]
    fn raw_value_display_is_unambiguous() {
        assert_eq!(RawValue::text("RECT").to_string(), "\"RECT\"");
        assert_eq!(RawValue::Integer(3600).to_string(), "3600");
        assert_eq!(RawValue::Real(1.0).to_string(), "1.0");
        assert_eq!(
            RawValue::List(vec![RawValue::Integer(1), RawValue::text("a")]).to_string(),
            "[1, \"a\"]"
        );
    }

    #[test]
    fn defaults_convert_to_raw_input() {
        assert_eq!(DefaultValue::Enum("RECT").to_raw(), RawValue::text("RECT"));
        assert_eq!(DefaultValue::Flag(true).to_raw(), RawValue::Bool(true));
    }
}
