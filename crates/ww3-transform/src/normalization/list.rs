//! Comma-separated lists of primitives.

use ww3_model::{CoerceError, FieldKind, RawValue, TypedScalar};

use crate::coerce::coerce_kind;

/// Coerce every element with the declared element kind.
///
/// A single scalar is accepted as a one-element list. Nested lists and
/// empty lists are rejected.
pub fn coerce_list(
    field: &str,
    raw: &RawValue,
    element: &FieldKind,
    max_len: Option<usize>,
) -> Result<Vec<TypedScalar>, CoerceError> {
    let items = match raw {
        RawValue::List(items) => items.as_slice(),
        scalar => std::slice::from_ref(scalar),
    };
    if items.is_empty() {
        return Err(CoerceError::InvalidList {
            field: field.to_string(),
            reason: "list is empty".to_string(),
        });
    }
    if let Some(max_len) = max_len
        && items.len() > max_len
    {
        return Err(CoerceError::InvalidList {
            field: field.to_string(),
            reason: format!("{} elements, at most {max_len} allowed", items.len()),
        });
    }
    if matches!(element, FieldKind::List { .. }) {
        return Err(CoerceError::InvalidList {
            field: field.to_string(),
            reason: "nested lists are not supported".to_string(),
        });
    }

    items
        .iter()
        .map(|item| match item {
            RawValue::List(_) => Err(CoerceError::InvalidList {
                field: field.to_string(),
                reason: "nested lists are not supported".to_string(),
            }),
            item => coerce_kind(field, element, item),
        })
        .collect()
}
