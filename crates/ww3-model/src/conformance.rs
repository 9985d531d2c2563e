//! Validation results.
//!
//! Validation never stops at the first problem: a [`ValidationReport`]
//! carries every violation found in a record or document so a caller can
//! fix an invalid configuration in one pass.

use std::fmt;

use serde::Serialize;

/// A cross-field or structural violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Violation {
    /// A relationship between fields of one record does not hold.
    CrossFieldConstraint {
        /// Block the fields belong to.
        block: String,
        /// Full keys of every field the rule reads.
        fields: Vec<String>,
        /// The relationship that must hold, e.g. `2 <= A / B <= 10`.
        requirement: String,
        /// What was found instead.
        found: String,
    },

    /// Alternate groups (or blocks) are present in a forbidden combination.
    MutualExclusivity {
        /// Block name for group exclusivity, program name for blocks.
        scope: String,
        /// Every member of the exclusive set.
        groups: Vec<String>,
        /// Members actually present.
        present: Vec<String>,
        /// `exactly one` or `at most one`.
        requirement: String,
    },
}

impl Violation {
    /// Taxonomy name of the violation.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::CrossFieldConstraint { .. } => "CrossFieldConstraintViolation",
            Violation::MutualExclusivity { .. } => "MutualExclusivityViolation",
        }
    }

    pub fn scope(&self) -> &str {
        match self {
            Violation::CrossFieldConstraint { block, .. } => block,
            Violation::MutualExclusivity { scope, .. } => scope,
        }
    }

    /// True when the violation names `key` (a field key or group name).
    pub fn mentions(&self, key: &str) -> bool {
        match self {
            Violation::CrossFieldConstraint { fields, .. } => {
                fields.iter().any(|f| f.eq_ignore_ascii_case(key))
            }
            Violation::MutualExclusivity { groups, .. } => {
                groups.iter().any(|g| g.eq_ignore_ascii_case(key))
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::CrossFieldConstraint {
                block,
                fields,
                requirement,
                found,
            } => write!(
                f,
                "[{}] {block}: {} requires {requirement} (found {found})",
                self.kind(),
                fields.join(", ")
            ),
            Violation::MutualExclusivity {
                scope,
                groups,
                present,
                requirement,
            } => {
                let present = if present.is_empty() {
                    "none".to_string()
                } else {
                    present.join(", ")
                };
                write!(
                    f,
                    "[{}] {scope}: {requirement} of {} may be present (present: {present})",
                    self.kind(),
                    groups.join(", ")
                )
            }
        }
    }
}

/// All violations found by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when valid, otherwise the whole report as the error.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
