//! Nested-mapping input: block name -> field name -> value or group.
//!
//! JSON and TOML land on the same [`RawDocument`] the namelist reader
//! produces, so both surfaces share one coercion path.
//!
//! | input                 | raw shape                    |
//! |-----------------------|------------------------------|
//! | string                | `Text`                       |
//! | integer               | `Integer`                    |
//! | float                 | `Real`                       |
//! | boolean               | `Bool`                       |
//! | TOML datetime         | `Text` (checked by the timestamp coercer) |
//! | array                 | `List`                       |
//! | mapping               | nested group                 |
//! | JSON `null`           | dropped (absent field)       |

use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;
use ww3_model::{NamelistError, RawDocument, RawRecord, RawValue, Result};

pub fn from_json_str(text: &str) -> Result<RawDocument> {
    let value: JsonValue = serde_json::from_str(text)
        .map_err(|err| NamelistError::structured(format!("malformed JSON: {err}")))?;
    from_json_value(&value)
}

pub fn from_json_value(value: &JsonValue) -> Result<RawDocument> {
    let JsonValue::Object(blocks) = value else {
        return Err(NamelistError::structured(format!(
            "expected a mapping of block names, found {}",
            json_shape(value)
        )));
    };

    let mut document = RawDocument::new();
    for (name, body) in blocks {
        let record = match body {
            JsonValue::Object(fields) => json_record(name, fields)?,
            // An empty block may be written as `null`.
            JsonValue::Null => RawRecord::new(),
            other => {
                return Err(NamelistError::structured(format!(
                    "block {name}: expected a mapping of fields, found {}",
                    json_shape(other)
                )));
            }
        };
        insert_block(&mut document, name, record)?;
    }
    debug!(blocks = document.blocks().len(), "read JSON document");
    Ok(document)
}

fn json_record(path: &str, entries: &JsonMap<String, JsonValue>) -> Result<RawRecord> {
    let mut record = RawRecord::new();
    for (name, entry) in entries {
        let key = format!("{path}.{name}");
        match entry {
            JsonValue::Null => {}
            JsonValue::Object(nested) => {
                let group = json_record(&key, nested)?;
                insert_group(&mut record, &key, name, group)?;
            }
            other => {
                let value = json_scalar(&key, other)?;
                insert_value(&mut record, &key, name, value)?;
            }
        }
    }
    Ok(record)
}

fn json_scalar(key: &str, value: &JsonValue) -> Result<RawValue> {
    match value {
        JsonValue::String(text) => Ok(RawValue::Text(text.clone())),
        JsonValue::Bool(flag) => Ok(RawValue::Bool(*flag)),
        JsonValue::Number(number) => match number.as_i64() {
            Some(integer) => Ok(RawValue::Integer(integer)),
            None => number.as_f64().map(RawValue::Real).ok_or_else(|| {
                NamelistError::structured(format!("{key}: number {number} is out of range"))
            }),
        },
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::Array(_) | JsonValue::Object(_) | JsonValue::Null => {
                    Err(NamelistError::structured(format!(
                        "{key}: list elements must be scalars, found {}",
                        json_shape(item)
                    )))
                }
                scalar => json_scalar(key, scalar),
            })
            .collect::<Result<Vec<_>>>()
            .map(RawValue::List),
        JsonValue::Null | JsonValue::Object(_) => Err(NamelistError::structured(format!(
            "{key}: expected a value, found {}",
            json_shape(value)
        ))),
    }
}

fn json_shape(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "a mapping",
    }
}

pub fn from_toml_str(text: &str) -> Result<RawDocument> {
    let table: toml::Table = toml::from_str(text)
        .map_err(|err| NamelistError::structured(format!("malformed TOML: {err}")))?;
    from_toml_table(&table)
}

pub fn from_toml_value(value: &toml::Value) -> Result<RawDocument> {
    match value {
        toml::Value::Table(table) => from_toml_table(table),
        other => Err(NamelistError::structured(format!(
            "expected a table of block names, found {}",
            other.type_str()
        ))),
    }
}

fn from_toml_table(table: &toml::Table) -> Result<RawDocument> {
    let mut document = RawDocument::new();
    for (name, body) in table {
        let toml::Value::Table(fields) = body else {
            return Err(NamelistError::structured(format!(
                "block {name}: expected a table of fields, found {}",
                body.type_str()
            )));
        };
        let record = toml_record(name, fields)?;
        insert_block(&mut document, name, record)?;
    }
    debug!(blocks = document.blocks().len(), "read TOML document");
    Ok(document)
}

fn toml_record(path: &str, table: &toml::Table) -> Result<RawRecord> {
    let mut record = RawRecord::new();
    for (name, entry) in table {
        let key = format!("{path}.{name}");
        match entry {
            toml::Value::Table(nested) => {
                let group = toml_record(&key, nested)?;
                insert_group(&mut record, &key, name, group)?;
            }
            other => {
                let value = toml_scalar(&key, other)?;
                insert_value(&mut record, &key, name, value)?;
            }
        }
    }
    Ok(record)
}

fn toml_scalar(key: &str, value: &toml::Value) -> Result<RawValue> {
    match value {
        toml::Value::String(text) => Ok(RawValue::Text(text.clone())),
        toml::Value::Integer(integer) => Ok(RawValue::Integer(*integer)),
        toml::Value::Float(real) => Ok(RawValue::Real(*real)),
        toml::Value::Boolean(flag) => Ok(RawValue::Bool(*flag)),
        toml::Value::Datetime(datetime) => Ok(RawValue::Text(datetime.to_string())),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    Err(NamelistError::structured(format!(
                        "{key}: list elements must be scalars, found {}",
                        item.type_str()
                    )))
                }
                scalar => toml_scalar(key, scalar),
            })
            .collect::<Result<Vec<_>>>()
            .map(RawValue::List),
        toml::Value::Table(_) => Err(NamelistError::structured(format!(
            "{key}: expected a value, found a table"
        ))),
    }
}

fn insert_block(document: &mut RawDocument, name: &str, record: RawRecord) -> Result<()> {
    if document.insert(name, record) {
        Ok(())
    } else {
        Err(NamelistError::structured(format!(
            "block {name} appears more than once"
        )))
    }
}

fn insert_value(record: &mut RawRecord, key: &str, name: &str, value: RawValue) -> Result<()> {
    // Names are matched without case, so `nx` and `NX` collide.
    if !record.insert(name, value) {
        return Err(NamelistError::structured(format!("{key} is given more than once")));
    }
    Ok(())
}

fn insert_group(record: &mut RawRecord, key: &str, name: &str, group: RawRecord) -> Result<()> {
    if !record.insert_group(name, group) {
        return Err(NamelistError::structured(format!("{key} is given more than once")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ww3_model::RawEntry;

    #[test]
    fn json_shapes_map_to_raw_values() {
        let document = from_json_str(
            r#"{
                "CURV_NML": {
                    "NX": 10,
                    "XCOORD": {"SF": 0.5, "FILENAME": "x.inp", "IDF": null},
                    "FLAG": true,
                    "VAR": ["u", "v"]
                },
                "RUN_NML": null
            }"#,
        )
        .unwrap();

        let curv = document.block("CURV_NML").unwrap();
        assert_eq!(curv.get("NX"), Some(&RawEntry::Value(RawValue::Integer(10))));
        assert_eq!(curv.get("FLAG"), Some(&RawEntry::Value(RawValue::Bool(true))));
        assert_eq!(
            curv.get("VAR"),
            Some(&RawEntry::Value(RawValue::List(vec![
                RawValue::text("u"),
                RawValue::text("v")
            ])))
        );
        let Some(RawEntry::Group(xcoord)) = curv.get("XCOORD") else {
            panic!("expected group");
        };
        assert_eq!(xcoord.get("SF"), Some(&RawEntry::Value(RawValue::Real(0.5))));
        assert!(xcoord.get("IDF").is_none());
        assert!(document.block("RUN_NML").unwrap().is_empty());
    }

    #[test]
    fn json_rejects_shapes_outside_the_union() {
        for input in [
            "[1, 2]",
            r#"{"A_NML": 3}"#,
            r#"{"A_NML": {"X": [[1]]}}"#,
            r#"{"A_NML": {"X": [null]}}"#,
            r#"{"A_NML": {"X": 1, "x": 2}}"#,
            "{not json",
        ] {
            let err = from_json_str(input).unwrap_err();
            assert!(
                matches!(err, NamelistError::Structured { .. }),
                "input {input}: {err:?}"
            );
        }
    }

    #[test]
    fn toml_tables_become_groups() {
        let document = from_toml_str(
            "[DOMAIN_NML]\nSTART = 2023-01-01T00:00:00\nSTOP = \"20230102 000000\"\n\n\
             [TIMESTEPS_NML]\nDTMAX = 480.0\nDTXY = 160\n\n\
             [OUTPUT_DATE_NML.FIELD]\nSTRIDE = 3600\n",
        )
        .unwrap();

        let domain = document.block("DOMAIN_NML").unwrap();
        assert_eq!(
            domain.get("START"),
            Some(&RawEntry::Value(RawValue::text("2023-01-01T00:00:00")))
        );
        let timesteps = document.block("TIMESTEPS_NML").unwrap();
        assert_eq!(
            timesteps.get("DTMAX"),
            Some(&RawEntry::Value(RawValue::Real(480.0)))
        );
        let Some(RawEntry::Group(field)) = document.block("OUTPUT_DATE_NML").unwrap().get("FIELD")
        else {
            panic!("expected group");
        };
        assert_eq!(field.get("STRIDE"), Some(&RawEntry::Value(RawValue::Integer(3600))));
    }

    #[test]
    fn toml_rejects_non_table_blocks() {
        let err = from_toml_str("GRID_NML = 1\n").unwrap_err();
        assert!(err.to_string().contains("block GRID_NML"));
        assert!(from_toml_str("[A_NML]\nX = [[1]]\n").is_err());
    }
}
