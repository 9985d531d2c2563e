//! Structured export of typed documents.
//!
//! The output reads back through [`from_json_value`](crate::from_json_value)
//! and [`from_toml_value`](crate::from_toml_value) into an equal document.
//! Enum values export as their canonical spelling, timestamps as
//! `YYYYMMDD HHMMSS` strings.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use ww3_model::{Document, Entry, Record, TypedScalar};

pub fn to_json_value(document: &Document) -> JsonValue {
    let blocks: JsonMap<String, JsonValue> = document
        .records()
        .iter()
        .map(|record| (record.name().to_string(), json_record(record)))
        .collect();
    JsonValue::Object(blocks)
}

fn json_record(record: &Record) -> JsonValue {
    let entries: JsonMap<String, JsonValue> = record
        .entries()
        .iter()
        .map(|(name, entry)| {
            let value = match entry {
                Entry::Scalar(value) => json_scalar(value),
                Entry::Group(group) => json_record(group),
            };
            (name.clone(), value)
        })
        .collect();
    JsonValue::Object(entries)
}

fn json_scalar(value: &TypedScalar) -> JsonValue {
    match value {
        TypedScalar::Timestamp(instant) => JsonValue::String(instant.to_string()),
        TypedScalar::Integer(value) => JsonValue::Number((*value).into()),
        // Reals are always finite after coercion.
        TypedScalar::Real(value) => {
            Number::from_f64(*value).map_or(JsonValue::Null, JsonValue::Number)
        }
        TypedScalar::Flag(flag) => JsonValue::Bool(*flag),
        TypedScalar::Enum(value) => JsonValue::String(value.spelling().to_string()),
        TypedScalar::Text(text) => JsonValue::String(text.clone()),
        TypedScalar::List(items) => JsonValue::Array(items.iter().map(json_scalar).collect()),
    }
}

pub fn to_toml_value(document: &Document) -> toml::Value {
    let blocks: toml::Table = document
        .records()
        .iter()
        .map(|record| (record.name().to_string(), toml_record(record)))
        .collect();
    toml::Value::Table(blocks)
}

fn toml_record(record: &Record) -> toml::Value {
    let entries: toml::Table = record
        .entries()
        .iter()
        .map(|(name, entry)| {
            let value = match entry {
                Entry::Scalar(value) => toml_scalar(value),
                Entry::Group(group) => toml_record(group),
            };
            (name.clone(), value)
        })
        .collect();
    toml::Value::Table(entries)
}

fn toml_scalar(value: &TypedScalar) -> toml::Value {
    match value {
        TypedScalar::Timestamp(instant) => toml::Value::String(instant.to_string()),
        TypedScalar::Integer(value) => toml::Value::Integer(*value),
        TypedScalar::Real(value) => toml::Value::Float(*value),
        TypedScalar::Flag(flag) => toml::Value::Boolean(*flag),
        TypedScalar::Enum(value) => toml::Value::String(value.spelling().to_string()),
        TypedScalar::Text(text) => toml::Value::String(text.clone()),
        TypedScalar::List(items) => toml::Value::Array(items.iter().map(toml_scalar).collect()),
    }
}
