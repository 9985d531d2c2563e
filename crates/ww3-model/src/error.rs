use thiserror::Error;

use crate::conformance::ValidationReport;

/// Timestamp spellings accepted on input, listed in error messages.
pub const ACCEPTED_TIMESTAMP_FORMS: &[&str] = &[
    "YYYYMMDD HHMMSS",
    "YYYY-MM-DD HH:MM:SS",
    "YYYY-MM-DDTHH:MM:SS",
    "YYYY-MM-DD",
    "YYYYMMDD",
];

/// Flag spellings accepted on input, listed in error messages. The letters
/// match case-insensitively; booleans are native values, never text.
pub const ACCEPTED_FLAG_FORMS: &[&str] = &["T", "F", "native boolean"];

/// Failure to map a scalar onto exactly one vocabulary member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{value:?} is not a member of {vocabulary} (accepted: {})", .accepted.join(", "))]
    Invalid {
        vocabulary: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },

    #[error("{value:?} is ambiguous in {vocabulary} (candidates: {})", .candidates.join(", "))]
    Ambiguous {
        vocabulary: &'static str,
        value: String,
        candidates: Vec<&'static str>,
    },
}

/// Per-field coercion failure. Coercion is all-or-nothing per field, so
/// one of these means no typed value exists for `field`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoerceError {
    #[error("{field}: {value:?} is not a member of {vocabulary} (accepted: {})", .accepted.join(", "))]
    InvalidEnumValue {
        field: String,
        vocabulary: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },

    #[error("{field}: {value:?} matches more than one member of {vocabulary} (candidates: {})", .candidates.join(", "))]
    AmbiguousEnumValue {
        field: String,
        vocabulary: &'static str,
        value: String,
        candidates: Vec<&'static str>,
    },

    #[error("{field}: {value:?} is not a timestamp (accepted: {})", ACCEPTED_TIMESTAMP_FORMS.join(", "))]
    InvalidTimestamp { field: String, value: String },

    #[error("{field}: {value:?} carries a time zone; namelist timestamps are zone-free")]
    TimezoneNotSupported { field: String, value: String },

    #[error("{field}: {value:?} is not a valid integer: {reason}")]
    InvalidInteger {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field}: {value:?} is not a valid real: {reason}")]
    InvalidReal {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field}: {value:?} is not a flag (accepted: {})", ACCEPTED_FLAG_FORMS.join(", "))]
    InvalidFlag { field: String, value: String },

    #[error("{field}: {value:?} is not valid text: {reason}")]
    InvalidText {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field}: invalid list: {reason}")]
    InvalidList { field: String, reason: String },

    #[error("{field}: value set is not specified ({note}); no value is accepted")]
    UnspecifiedVocabulary { field: String, note: &'static str },

    #[error("unknown program {program:?} (known: {})", .known.join(", "))]
    UnknownProgram {
        program: String,
        known: Vec<&'static str>,
    },

    #[error("{program}: unknown block {block:?} (known: {})", .known.join(", "))]
    UnknownBlock {
        program: String,
        block: String,
        known: Vec<&'static str>,
    },

    #[error("{block}: unknown field {field:?}")]
    UnknownField { block: String, field: String },

    #[error("{field}: required field is missing")]
    MissingField { field: String },

    #[error("{program}: required block {block} is missing")]
    MissingBlock { program: String, block: String },

    #[error("{field}: expected {expected}, found {found}")]
    ShapeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl CoerceError {
    /// Key of the offending field, or the block/program for structural errors.
    pub fn field(&self) -> &str {
        match self {
            CoerceError::InvalidEnumValue { field, .. }
            | CoerceError::AmbiguousEnumValue { field, .. }
            | CoerceError::InvalidTimestamp { field, .. }
            | CoerceError::TimezoneNotSupported { field, .. }
            | CoerceError::InvalidInteger { field, .. }
            | CoerceError::InvalidReal { field, .. }
            | CoerceError::InvalidFlag { field, .. }
            | CoerceError::InvalidText { field, .. }
            | CoerceError::InvalidList { field, .. }
            | CoerceError::UnspecifiedVocabulary { field, .. }
            | CoerceError::MissingField { field }
            | CoerceError::ShapeMismatch { field, .. } => field,
            CoerceError::UnknownField { field, .. } => field,
            CoerceError::UnknownBlock { block, .. } | CoerceError::MissingBlock { block, .. } => {
                block
            }
            CoerceError::UnknownProgram { program, .. } => program,
        }
    }

    /// Attach a field key to a vocabulary resolution failure.
    pub fn from_resolve(field: impl Into<String>, error: ResolveError) -> Self {
        let field = field.into();
        match error {
            ResolveError::Invalid {
                vocabulary,
                value,
                accepted,
            } => CoerceError::InvalidEnumValue {
                field,
                vocabulary,
                value,
                accepted,
            },
            ResolveError::Ambiguous {
                vocabulary,
                value,
                candidates,
            } => CoerceError::AmbiguousEnumValue {
                field,
                vocabulary,
                value,
                candidates,
            },
        }
    }
}

/// Errors surfaced by the load/render entry points.
#[derive(Debug, Error)]
pub enum NamelistError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Coerce(#[from] CoerceError),

    #[error("{0}")]
    Validation(ValidationReport),

    #[error("invalid structured input: {message}")]
    Structured { message: String },

    #[error("invalid engine configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read source {id}: {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },
}

impl NamelistError {
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    pub fn structured(message: impl Into<String>) -> Self {
        Self::Structured {
            message: message.into(),
        }
    }

    pub fn io(id: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            id: id.into(),
            source,
        }
    }
}

impl From<ValidationReport> for NamelistError {
    fn from(report: ValidationReport) -> Self {
        Self::Validation(report)
    }
}

pub type Result<T> = std::result::Result<T, NamelistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_error_lists_every_accepted_spelling() {
        let err = CoerceError::InvalidEnumValue {
            field: "GRID%TYPE".to_string(),
            vocabulary: "grid_type",
            value: "xyz".to_string(),
            accepted: vec!["RECT", "CURV"],
        };
        assert_eq!(
            err.to_string(),
            "GRID%TYPE: \"xyz\" is not a member of grid_type (accepted: RECT, CURV)"
        );
        assert_eq!(err.field(), "GRID%TYPE");
    }

    #[test]
    fn flag_error_lists_accepted_tokens() {
        let err = CoerceError::InvalidFlag {
            field: "RUN%FLCX".to_string(),
            value: "H".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("RUN%FLCX"));
        assert!(text.contains("\"H\""));
        assert!(text.contains("T, F, native boolean"));
    }

    #[test]
    fn resolve_errors_gain_a_field() {
        let err = CoerceError::from_resolve(
            "GRID%COORD",
            ResolveError::Ambiguous {
                vocabulary: "coord_system",
                value: "x".to_string(),
                candidates: vec!["a", "A"],
            },
        );
        assert!(matches!(err, CoerceError::AmbiguousEnumValue { .. }));
        assert_eq!(err.field(), "GRID%COORD");
    }
}
