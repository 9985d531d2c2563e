//! Start/stop ordering between timestamps of one record.

use ww3_model::{Record, TypedScalar, Violation};

pub fn check_order(record: &Record, earlier: &str, later: &str) -> Option<Violation> {
    let start = record.scalar(earlier).and_then(TypedScalar::as_timestamp)?;
    let stop = record.scalar(later).and_then(TypedScalar::as_timestamp)?;
    if stop >= start {
        return None;
    }
    let start_key = record.key(earlier);
    let stop_key = record.key(later);
    Some(Violation::CrossFieldConstraint {
        block: record.name().to_string(),
        fields: vec![start_key.clone(), stop_key.clone()],
        requirement: format!("{stop_key} not before {start_key}"),
        found: format!("{start_key} = {start}, {stop_key} = {stop}"),
    })
}
