//! Ratio and sign constraints between numeric fields of one record.

use ww3_model::{Record, Sign, Violation};

use super::{number, show};

pub fn check_ratio(
    record: &Record,
    numerator: &str,
    denominator: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> Option<Violation> {
    let top = number(record, numerator)?;
    let bottom = number(record, denominator)?;
    let num_key = record.key(numerator);
    let den_key = record.key(denominator);

    let requirement = match (min, max) {
        (Some(min), Some(max)) => {
            format!("{} <= {num_key} / {den_key} <= {}", show(min), show(max))
        }
        (Some(min), None) => format!("{num_key} / {den_key} >= {}", show(min)),
        (None, Some(max)) => format!("{num_key} / {den_key} <= {}", show(max)),
        (None, None) => return None,
    };

    let violation = |found: String| Violation::CrossFieldConstraint {
        block: record.name().to_string(),
        fields: vec![num_key.clone(), den_key.clone()],
        requirement: requirement.clone(),
        found,
    };

    if bottom == 0.0 {
        return Some(violation(format!("{den_key} = 0")));
    }
    let ratio = top / bottom;
    let below = min.is_some_and(|min| ratio < min);
    let above = max.is_some_and(|max| ratio > max);
    if below || above {
        return Some(violation(format!(
            "{num_key} = {}, {den_key} = {}, ratio {}",
            show(top),
            show(bottom),
            show(ratio)
        )));
    }
    None
}

pub fn check_sign(record: &Record, field: &str, sign: Sign) -> Option<Violation> {
    let value = number(record, field)?;
    if sign.holds(value) {
        return None;
    }
    let key = record.key(field);
    Some(Violation::CrossFieldConstraint {
        block: record.name().to_string(),
        fields: vec![key.clone()],
        requirement: format!("{key} {}", sign.describe()),
        found: format!("{key} = {}", show(value)),
    })
}
