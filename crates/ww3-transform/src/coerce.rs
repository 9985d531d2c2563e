//! Field, record and document coercion.
//!
//! Coercion is all-or-nothing: a field either yields a [`TypedScalar`] or
//! an error naming its full key, and a record is only built when every one
//! of its fields coerced. Entries are emitted in schema order whatever the
//! input order was.

use tracing::{debug, warn};
use ww3_model::{
    BlockSchema, CoerceError, Document, FieldDescriptor, FieldKind, GroupDescriptor,
    PATH_SEPARATOR, ProgramSchema, RawDocument, RawEntry, RawRecord, RawValue, Record,
    TypedScalar,
};

use crate::normalization::{
    coerce_flag, coerce_integer, coerce_list, coerce_real, coerce_text, coerce_timestamp,
};
use crate::resolve::resolve;

/// Coerce one raw value with a declared kind. `field` is only used in
/// error messages.
pub fn coerce_kind(
    field: &str,
    kind: &FieldKind,
    raw: &RawValue,
) -> Result<TypedScalar, CoerceError> {
    match kind {
        FieldKind::Enum(vocabulary) => resolve(*vocabulary, raw)
            .map(TypedScalar::Enum)
            .map_err(|err| CoerceError::from_resolve(field, err)),
        FieldKind::Timestamp => coerce_timestamp(field, raw).map(TypedScalar::Timestamp),
        FieldKind::Integer { min, max } => {
            coerce_integer(field, raw, *min, *max).map(TypedScalar::Integer)
        }
        FieldKind::Real { min, max } => coerce_real(field, raw, *min, *max).map(TypedScalar::Real),
        FieldKind::Flag => coerce_flag(field, raw).map(TypedScalar::Flag),
        FieldKind::Text => coerce_text(field, raw).map(TypedScalar::Text),
        FieldKind::List { element, max_len } => {
            coerce_list(field, raw, element, *max_len).map(TypedScalar::List)
        }
        FieldKind::Unspecified { note } => Err(CoerceError::UnspecifiedVocabulary {
            field: field.to_string(),
            note: *note,
        }),
    }
}

/// Coerce a value for a described field. `key` is the full external key
/// (`TIMESTEPS%DTMAX`, `CURV%XCOORD%SF`).
pub fn coerce_field(
    key: &str,
    descriptor: &FieldDescriptor,
    raw: &RawValue,
) -> Result<TypedScalar, CoerceError> {
    coerce_kind(key, &descriptor.kind, raw).inspect_err(|err| {
        warn!(field = key, kind = descriptor.kind.name(), error = %err, "rejected field value");
    })
}

/// Build a typed record for one block.
///
/// Unknown entries are rejected. Absent fields take their default when
/// one is declared; absent required fields are an error; absent optional
/// fields are omitted.
pub fn build_record(schema: &BlockSchema, raw: &RawRecord) -> Result<Record, CoerceError> {
    let record = build_group(schema.name, schema.name, schema.prefix, &schema.body(), raw, 0)?;
    debug!(
        block = schema.name,
        fields = record.field_count(),
        "coerced block"
    );
    Ok(record)
}

fn build_group(
    block: &str,
    name: &str,
    prefix: &str,
    group: &GroupDescriptor,
    raw: &RawRecord,
    depth: usize,
) -> Result<Record, CoerceError> {
    let key = |entry: &str| format!("{prefix}{PATH_SEPARATOR}{entry}");

    for (entry_name, entry) in raw.entries() {
        match (group.field(entry_name), group.group(entry_name), entry) {
            (Some(_), _, RawEntry::Value(_)) | (_, Some(_), RawEntry::Group(_)) => {}
            (Some(field), _, RawEntry::Group(_)) => {
                return Err(CoerceError::ShapeMismatch {
                    field: key(field.name),
                    expected: field.kind.name(),
                    found: "group",
                });
            }
            (_, Some(nested), RawEntry::Value(value)) => {
                return Err(CoerceError::ShapeMismatch {
                    field: key(nested.name),
                    expected: "group",
                    found: value.shape(),
                });
            }
            (None, None, _) => {
                return Err(CoerceError::UnknownField {
                    block: block.to_string(),
                    field: key(entry_name),
                });
            }
        }
    }

    let mut record = Record::new(name, prefix, depth);

    for field in group.fields {
        let field_key = key(field.name);
        let value = match raw.get(field.name) {
            Some(RawEntry::Value(value)) => coerce_field(&field_key, field, value)?,
            _ => match field.default {
                Some(default) => coerce_field(&field_key, field, &default.to_raw())?,
                None if field.nullable => continue,
                None => return Err(CoerceError::MissingField { field: field_key }),
            },
        };
        record.push_scalar(field.name, value);
    }

    let empty = RawRecord::new();
    for nested in group.groups {
        let nested_raw = match raw.get(nested.name) {
            Some(RawEntry::Group(nested_raw)) => nested_raw,
            _ if nested.nullable => continue,
            _ => &empty,
        };
        let built = build_group(
            block,
            nested.name,
            &key(nested.name),
            nested,
            nested_raw,
            depth + 1,
        )?;
        // An empty optional group renders to nothing, so it is not kept.
        if nested.nullable && built.is_empty() {
            continue;
        }
        record.push_group(nested.name, built);
    }

    Ok(record)
}

/// Build a typed document for `program`.
///
/// Blocks come out in the program's canonical order. Unknown blocks and
/// missing required blocks are errors.
pub fn build_document(
    program: &'static ProgramSchema,
    raw: &RawDocument,
) -> Result<Document, CoerceError> {
    for (name, _) in raw.blocks() {
        if program.block(name).is_none() {
            return Err(CoerceError::UnknownBlock {
                program: program.name.to_string(),
                block: name.clone(),
                known: program.block_names(),
            });
        }
    }

    let mut records = Vec::new();
    for schema in program.blocks {
        match raw.block(schema.name) {
            Some(block) => records.push(build_record(schema, block)?),
            None if schema.required => {
                return Err(CoerceError::MissingBlock {
                    program: program.name.to_string(),
                    block: schema.name.to_string(),
                });
            }
            None => {}
        }
    }

    debug!(
        program = program.name,
        blocks = records.len(),
        "coerced document"
    );
    Ok(Document::new(program.name, records))
}

/// Look up a program schema, failing with the list of known programs.
pub fn program_schema(name: &str) -> Result<&'static ProgramSchema, CoerceError> {
    ww3_standards::program(name).ok_or_else(|| CoerceError::UnknownProgram {
        program: name.to_string(),
        known: ww3_standards::program_names(),
    })
}

/// Edit path: replace one field of a built document and re-coerce the
/// whole document, so the new value goes through the same checks as
/// loaded input. `path` is relative to the block (`XCOORD%SF`).
pub fn replace_field(
    program: &'static ProgramSchema,
    document: &Document,
    block: &str,
    path: &str,
    value: RawValue,
) -> Result<Document, CoerceError> {
    let schema = program
        .block(block)
        .ok_or_else(|| CoerceError::UnknownBlock {
            program: program.name.to_string(),
            block: block.to_string(),
            known: program.block_names(),
        })?;

    let mut value = Some(value);
    let mut raw = RawDocument::new();
    for (name, existing) in document.to_raw().blocks() {
        let mut record = existing.clone();
        if name.eq_ignore_ascii_case(schema.name)
            && let Some(value) = value.take()
        {
            record.set(path, value);
        }
        raw.insert(name, record);
    }
    if let Some(value) = value {
        let mut record = RawRecord::new();
        record.set(path, value);
        raw.insert(schema.name, record);
    }

    build_document(program, &raw)
}

/// Edit path: drop one field of a built document and re-coerce it. A
/// field with a default falls back to that default.
pub fn clear_field(
    program: &'static ProgramSchema,
    document: &Document,
    block: &str,
    path: &str,
) -> Result<Document, CoerceError> {
    let mut raw = RawDocument::new();
    for (name, existing) in document.to_raw().blocks() {
        let mut record = existing.clone();
        if name.eq_ignore_ascii_case(block) {
            record.remove(path);
        }
        raw.insert(name, record);
    }
    build_document(program, &raw)
}
