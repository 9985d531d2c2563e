//! Rule engine: evaluates schema rules over typed records and documents.
//!
//! Evaluation never stops early. Every rule of every block runs, and the
//! report carries all violations at once.

use tracing::{debug, warn};
use ww3_model::{
    BlockSchema, Document, DocumentRule, ProgramSchema, Record, Rule, ValidationReport,
};

use crate::checks::exclusive::check_exclusive;
use crate::checks::numeric::{check_ratio, check_sign};
use crate::checks::order::check_order;
use crate::checks::selector::check_selector;

/// Evaluate the rules of one block over its typed record.
pub fn validate_record(schema: &BlockSchema, record: &Record) -> ValidationReport {
    let mut report = ValidationReport::new();
    for rule in schema.rules {
        let violation = match rule {
            Rule::Ratio {
                numerator,
                denominator,
                min,
                max,
            } => check_ratio(record, numerator, denominator, *min, *max),
            Rule::Sign { field, sign } => check_sign(record, field, *sign),
            Rule::Order { earlier, later } => check_order(record, earlier, later),
            Rule::Exclusive { groups, presence } => {
                check_exclusive(record.name(), groups, *presence, |name| {
                    record.group(name).is_some()
                })
            }
        };
        if let Some(violation) = violation {
            report.push(violation);
        }
    }
    debug!(
        block = schema.name,
        violations = report.len(),
        "validated block"
    );
    report
}

/// Evaluate every block rule and every document rule of `program`.
pub fn validate_document(program: &ProgramSchema, document: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();

    for record in document.records() {
        match program.block(record.name()) {
            Some(schema) => report.extend(validate_record(schema, record)),
            None => warn!(
                program = program.name,
                block = record.name(),
                "record has no schema in program; its rules were not evaluated"
            ),
        }
    }

    for rule in program.rules {
        let violation = match rule {
            DocumentRule::Exclusive { blocks, presence } => {
                check_exclusive(program.name, blocks, *presence, |name| {
                    document.contains(name)
                })
            }
            DocumentRule::Selector {
                block,
                field,
                choices,
            } => check_selector(document, block, field, choices),
        };
        if let Some(violation) = violation {
            report.push(violation);
        }
    }

    debug!(
        program = program.name,
        violations = report.len(),
        "validated document"
    );
    report
}
