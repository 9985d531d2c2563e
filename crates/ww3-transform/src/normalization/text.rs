//! Free text.

use ww3_model::{CoerceError, RawValue};

/// Text passes through untouched. Quoting is the renderer's concern.
///
/// Numbers are accepted and spelled in decimal, so a file name such as
/// `2010` survives structured input that typed it as a number.
pub fn coerce_text(field: &str, raw: &RawValue) -> Result<String, CoerceError> {
    let text = match raw {
        RawValue::Text(text) => text.clone(),
        RawValue::Integer(value) => value.to_string(),
        other => {
            return Err(CoerceError::InvalidText {
                field: field.to_string(),
                value: other.to_string(),
                reason: format!("expected text, found {}", other.shape()),
            });
        }
    };
    if text.contains(['\n', '\r']) {
        return Err(CoerceError::InvalidText {
            field: field.to_string(),
            value: text,
            reason: "contains a line break".to_string(),
        });
    }
    Ok(text)
}
