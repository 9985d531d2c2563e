//! Strict two-valued flags.
//!
//! Only the letters `T` and `F` (either case) and native booleans are
//! accepted. Fields with more than two legal letters are enumerations and
//! never reach this coercer.

use ww3_model::{CoerceError, RawValue};

pub fn coerce_flag(field: &str, raw: &RawValue) -> Result<bool, CoerceError> {
    match raw {
        RawValue::Bool(value) => Ok(*value),
        RawValue::Text(text) => match text.trim() {
            "T" | "t" => Ok(true),
            "F" | "f" => Ok(false),
            _ => Err(CoerceError::InvalidFlag {
                field: field.to_string(),
                value: text.clone(),
            }),
        },
        other => Err(CoerceError::InvalidFlag {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_booleans_are_accepted() {
        assert_eq!(coerce_flag("RUN%FLCX", &RawValue::text("T")), Ok(true));
        assert_eq!(coerce_flag("RUN%FLCX", &RawValue::text("t")), Ok(true));
        assert_eq!(coerce_flag("RUN%FLCX", &RawValue::Bool(true)), Ok(true));
        assert_eq!(coerce_flag("RUN%FLCX", &RawValue::text(" f ")), Ok(false));
        assert_eq!(coerce_flag("RUN%FLCX", &RawValue::Bool(false)), Ok(false));
    }

    #[test]
    fn multi_valued_letters_are_not_flags() {
        let err = coerce_flag("RUN%FLCX", &RawValue::text("H")).unwrap_err();
        assert_eq!(
            err,
            CoerceError::InvalidFlag {
                field: "RUN%FLCX".to_string(),
                value: "H".to_string(),
            }
        );
    }

    #[test]
    fn spelled_out_booleans_are_rejected() {
        for text in ["true", "FALSE", ".TRUE.", "yes", "1", ""] {
            assert!(coerce_flag("RUN%FLCX", &RawValue::text(text)).is_err(), "{text:?}");
        }
        assert!(coerce_flag("RUN%FLCX", &RawValue::Integer(1)).is_err());
    }
}
