//! Integer and real coercion.

use std::num::IntErrorKind;

use ww3_model::{CoerceError, RawValue};

/// Parse a real written in any spelling the external format uses:
/// Fortran `D` exponents (`1.0D-3`) and a bare trailing point (`3.`).
pub fn parse_real(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Rust would otherwise accept "inf" and "NaN".
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E' | b'd' | b'D'))
    {
        return None;
    }
    let normalized = trimmed.replace(['d', 'D'], "e");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce to an integer within `min..=max`.
///
/// `"3600"`, `"3600.0"` and `3600` are all accepted; a non-zero fraction
/// is an error, never rounded away.
pub fn coerce_integer(field: &str, raw: &RawValue, min: i64, max: i64) -> Result<i64, CoerceError> {
    let invalid = |value: String, reason: String| CoerceError::InvalidInteger {
        field: field.to_string(),
        value,
        reason,
    };

    let out_of_range = format!("outside the range {min}..={max}");
    let value = match raw {
        RawValue::Integer(value) => *value,
        RawValue::Real(value) => whole(*value)
            .map_err(|kind| invalid(value.to_string(), kind.reason(&out_of_range)))?,
        RawValue::Text(text) => {
            let trimmed = text.trim();
            match trimmed.parse::<i64>() {
                Ok(value) => value,
                Err(err)
                    if matches!(
                        err.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    return Err(invalid(text.clone(), out_of_range));
                }
                Err(_) => {
                    let real = parse_real(trimmed)
                        .ok_or_else(|| invalid(text.clone(), "not a number".to_string()))?;
                    whole(real)
                        .map_err(|kind| invalid(text.clone(), kind.reason(&out_of_range)))?
                }
            }
        }
        other => {
            return Err(invalid(
                other.to_string(),
                format!("expected an integer, found {}", other.shape()),
            ));
        }
    };

    if !(min..=max).contains(&value) {
        return Err(invalid(value.to_string(), out_of_range));
    }
    Ok(value)
}

/// Coerce to a finite real within the optional inclusive bounds.
pub fn coerce_real(
    field: &str,
    raw: &RawValue,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<f64, CoerceError> {
    let invalid = |value: String, reason: String| CoerceError::InvalidReal {
        field: field.to_string(),
        value,
        reason,
    };

    let value = match raw {
        RawValue::Real(value) if value.is_finite() => *value,
        RawValue::Real(value) => {
            return Err(invalid(value.to_string(), "not finite".to_string()));
        }
        RawValue::Integer(value) => *value as f64,
        RawValue::Text(text) => {
            parse_real(text).ok_or_else(|| invalid(text.clone(), "not a number".to_string()))?
        }
        other => {
            return Err(invalid(
                other.to_string(),
                format!("expected a real, found {}", other.shape()),
            ));
        }
    };

    if let Some(min) = min
        && value < min
    {
        return Err(invalid(value.to_string(), format!("below the minimum {min}")));
    }
    if let Some(max) = max
        && value > max
    {
        return Err(invalid(value.to_string(), format!("above the maximum {max}")));
    }
    Ok(value)
}

/// Why a real has no exact integer counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotWhole {
    NotFinite,
    Fractional,
    Overflow,
}

impl NotWhole {
    fn reason(self, out_of_range: &str) -> String {
        match self {
            NotWhole::NotFinite => "not finite".to_string(),
            NotWhole::Fractional => "has a non-zero fractional part".to_string(),
            NotWhole::Overflow => out_of_range.to_string(),
        }
    }
}

/// The value as an integer if it has no fractional part.
fn whole(value: f64) -> Result<i64, NotWhole> {
    if !value.is_finite() {
        Err(NotWhole::NotFinite)
    } else if value.fract() != 0.0 {
        Err(NotWhole::Fractional)
    } else if value.abs() >= i64::MAX as f64 {
        Err(NotWhole::Overflow)
    } else {
        Ok(value as i64)
    }
}
