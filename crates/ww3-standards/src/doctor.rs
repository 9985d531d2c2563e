#![deny(unsafe_code)]

//! Self-check of the static registry.
//!
//! Schemas are plain data, so a typo in a rule path or a selector choice
//! would only surface when a document happens to exercise it. The doctor
//! walks every vocabulary and program once and reports such problems.

use std::collections::BTreeSet;

use serde::Serialize;
use ww3_model::{
    BlockSchema, DefaultValue, DocumentRule, FieldDescriptor, FieldKind, GroupDescriptor,
    PATH_SEPARATOR, ProgramSchema, Rule, Vocabulary,
};

use crate::registry;

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub counts: DoctorCounts,
    pub programs: Vec<ProgramSummary>,
    pub issues: Vec<DoctorIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorCounts {
    pub vocabularies: usize,
    pub terms: usize,
    pub programs: usize,
    pub blocks: usize,
    pub block_rules: usize,
    pub document_rules: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramSummary {
    pub name: String,
    pub blocks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorIssue {
    /// `vocabulary`, `program/block` or `program`.
    pub scope: String,
    pub message: String,
}

impl DoctorIssue {
    fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
        }
    }
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check the built-in registry.
pub fn doctor() -> DoctorReport {
    check(registry::vocabularies(), registry::programs())
}

/// Check an arbitrary set of vocabularies and programs.
pub fn check(vocabularies: &[&Vocabulary], programs: &[&ProgramSchema]) -> DoctorReport {
    let mut issues = Vec::new();

    let mut ids = BTreeSet::new();
    for vocabulary in vocabularies {
        if !ids.insert(vocabulary.id) {
            issues.push(DoctorIssue::new(vocabulary.id, "duplicate vocabulary id"));
        }
        check_vocabulary(vocabulary, &mut issues);
    }

    let mut names = BTreeSet::new();
    for program in programs {
        if !names.insert(program.name.to_ascii_lowercase()) {
            issues.push(DoctorIssue::new(program.name, "duplicate program name"));
        }
        check_program(program, &mut issues);
    }

    DoctorReport {
        schema: "ww3-namelist.registry-doctor".to_string(),
        schema_version: 1,
        counts: DoctorCounts {
            vocabularies: vocabularies.len(),
            terms: vocabularies.iter().map(|v| v.terms.len()).sum(),
            programs: programs.len(),
            blocks: programs.iter().map(|p| p.blocks.len()).sum(),
            block_rules: programs
                .iter()
                .flat_map(|p| p.blocks.iter())
                .map(|b| b.rules.len())
                .sum(),
            document_rules: programs.iter().map(|p| p.rules.len()).sum(),
        },
        programs: programs
            .iter()
            .map(|p| ProgramSummary {
                name: p.name.to_string(),
                blocks: p.blocks.iter().map(|b| b.name.to_string()).collect(),
            })
            .collect(),
        issues,
    }
}

fn check_vocabulary(vocabulary: &Vocabulary, issues: &mut Vec<DoctorIssue>) {
    if vocabulary.name.trim().is_empty() {
        issues.push(DoctorIssue::new(vocabulary.id, "vocabulary has no name"));
    }
    if vocabulary.terms.is_empty() {
        issues.push(DoctorIssue::new(vocabulary.id, "vocabulary has no terms"));
    }
    let mut spellings = BTreeSet::new();
    let mut symbols = BTreeSet::new();
    for term in vocabulary.terms {
        if term.spelling.trim() != term.spelling || term.spelling.is_empty() {
            issues.push(DoctorIssue::new(
                vocabulary.id,
                format!("spelling {:?} is empty or padded", term.spelling),
            ));
        }
        if !spellings.insert(term.spelling.to_ascii_uppercase()) {
            issues.push(DoctorIssue::new(
                vocabulary.id,
                format!("spelling {:?} is not unique ignoring case", term.spelling),
            ));
        }
        if !symbols.insert(term.symbol.to_ascii_uppercase()) {
            issues.push(DoctorIssue::new(
                vocabulary.id,
                format!("symbol {:?} is not unique ignoring case", term.symbol),
            ));
        }
        if term.description.trim().is_empty() {
            issues.push(DoctorIssue::new(
                vocabulary.id,
                format!("term {} is undocumented", term.symbol),
            ));
        }
    }
}

fn check_program(program: &ProgramSchema, issues: &mut Vec<DoctorIssue>) {
    if program.doc.trim().is_empty() {
        issues.push(DoctorIssue::new(program.name, "program is undocumented"));
    }
    let mut blocks = BTreeSet::new();
    for block in program.blocks {
        let scope = format!("{}/{}", program.name, block.name);
        if !blocks.insert(block.name.to_ascii_uppercase()) {
            issues.push(DoctorIssue::new(&scope, "duplicate block name"));
        }
        if block.doc.trim().is_empty() {
            issues.push(DoctorIssue::new(&scope, "block is undocumented"));
        }
        check_group(&scope, "", &block.body(), issues);
        for rule in block.rules {
            check_rule(&scope, block, rule, issues);
        }
    }

    for rule in program.rules {
        match rule {
            DocumentRule::Exclusive { blocks, .. } => {
                for name in *blocks {
                    if program.block(name).is_none() {
                        issues.push(DoctorIssue::new(
                            program.name,
                            format!("exclusive set names unknown block {name}"),
                        ));
                    }
                }
            }
            DocumentRule::Selector {
                block,
                field,
                choices,
            } => check_selector(program, block, field, choices, issues),
        }
    }
}

fn check_group(
    scope: &str,
    path: &str,
    group: &GroupDescriptor,
    issues: &mut Vec<DoctorIssue>,
) {
    let mut names = BTreeSet::new();
    for field in group.fields {
        if !names.insert(field.name.to_ascii_uppercase()) {
            issues.push(DoctorIssue::new(
                scope,
                format!("duplicate entry {path}{}", field.name),
            ));
        }
        if field.doc.trim().is_empty() {
            issues.push(DoctorIssue::new(
                scope,
                format!("field {path}{} is undocumented", field.name),
            ));
        }
        check_default(scope, path, field, issues);
    }
    for nested in group.groups {
        if !names.insert(nested.name.to_ascii_uppercase()) {
            issues.push(DoctorIssue::new(
                scope,
                format!("duplicate entry {path}{}", nested.name),
            ));
        }
        let nested_path = format!("{path}{}{PATH_SEPARATOR}", nested.name);
        check_group(scope, &nested_path, nested, issues);
    }
}

fn check_default(
    scope: &str,
    path: &str,
    field: &FieldDescriptor,
    issues: &mut Vec<DoctorIssue>,
) {
    let Some(default) = field.default else {
        return;
    };
    let fits = match (field.kind, default) {
        (FieldKind::Enum(vocabulary), DefaultValue::Enum(spelling)) => {
            vocabulary.term(spelling).is_some()
        }
        (FieldKind::Integer { min, max }, DefaultValue::Integer(value)) => {
            (min..=max).contains(&value)
        }
        (FieldKind::Real { min, max }, DefaultValue::Real(value)) => {
            min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
        }
        (FieldKind::Flag, DefaultValue::Flag(_)) | (FieldKind::Text, DefaultValue::Text(_)) => {
            true
        }
        _ => false,
    };
    if !fits {
        issues.push(DoctorIssue::new(
            scope,
            format!(
                "default {default:?} does not fit {} field {path}{}",
                field.kind.name(),
                field.name
            ),
        ));
    }
}

fn expect_kind(
    scope: &str,
    block: &BlockSchema,
    path: &str,
    accepts: fn(&FieldKind) -> bool,
    what: &str,
    issues: &mut Vec<DoctorIssue>,
) {
    match block.descriptor(path) {
        Some(descriptor) if accepts(&descriptor.kind) => {}
        Some(descriptor) => issues.push(DoctorIssue::new(
            scope,
            format!(
                "rule reads {path} as {what}, but it is declared {}",
                descriptor.kind.name()
            ),
        )),
        None => issues.push(DoctorIssue::new(
            scope,
            format!("rule names unknown field {path}"),
        )),
    }
}

fn is_numeric(kind: &FieldKind) -> bool {
    matches!(kind, FieldKind::Integer { .. } | FieldKind::Real { .. })
}

fn is_timestamp(kind: &FieldKind) -> bool {
    matches!(kind, FieldKind::Timestamp)
}

fn check_rule(scope: &str, block: &BlockSchema, rule: &Rule, issues: &mut Vec<DoctorIssue>) {
    match rule {
        Rule::Ratio {
            numerator,
            denominator,
            ..
        } => {
            expect_kind(scope, block, numerator, is_numeric, "a number", issues);
            expect_kind(scope, block, denominator, is_numeric, "a number", issues);
        }
        Rule::Sign { field, .. } => {
            expect_kind(scope, block, field, is_numeric, "a number", issues);
        }
        Rule::Order { earlier, later } => {
            expect_kind(scope, block, earlier, is_timestamp, "a timestamp", issues);
            expect_kind(scope, block, later, is_timestamp, "a timestamp", issues);
        }
        Rule::Exclusive { groups, .. } => {
            for name in *groups {
                if block.groups.iter().all(|g| !g.name.eq_ignore_ascii_case(name)) {
                    issues.push(DoctorIssue::new(
                        scope,
                        format!("exclusive set names unknown group {name}"),
                    ));
                }
            }
        }
    }
}

fn check_selector(
    program: &ProgramSchema,
    block: &str,
    field: &str,
    choices: &[(&str, &str)],
    issues: &mut Vec<DoctorIssue>,
) {
    let Some(schema) = program.block(block) else {
        issues.push(DoctorIssue::new(
            program.name,
            format!("selector names unknown block {block}"),
        ));
        return;
    };
    let Some(FieldKind::Enum(vocabulary)) = schema.descriptor(field).map(|d| d.kind) else {
        issues.push(DoctorIssue::new(
            program.name,
            format!("selector field {block} {field} is not an enumeration"),
        ));
        return;
    };
    for (spelling, target) in choices {
        if vocabulary.term(spelling).is_none() {
            issues.push(DoctorIssue::new(
                program.name,
                format!("selector choice {spelling:?} is not in {}", vocabulary.id),
            ));
        }
        if program.block(target).is_none() {
            issues.push(DoctorIssue::new(
                program.name,
                format!("selector target {target} is not a block"),
            ));
        }
    }
}
