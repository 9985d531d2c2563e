//! Static field, block and program schemas.
//!
//! Everything here is `const`-constructible so the registry in
//! `ww3-standards` can declare whole programs as plain statics.
//!
//! Paths inside a block use the external separator: `DTMAX` for a top-level
//! field, `XCOORD%SF` for a field of a nested group.

use std::fmt;

use crate::value::DefaultValue;
use crate::vocabulary::Vocabulary;

/// Separator between a block prefix, group names and field names.
pub const PATH_SEPARATOR: char = '%';

/// Declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Member of a closed vocabulary.
    Enum(&'static Vocabulary),
    /// Absolute, zone-free timestamp.
    Timestamp,
    /// Integer within inclusive bounds.
    Integer { min: i64, max: i64 },
    /// Finite real, optionally bounded (inclusive).
    Real { min: Option<f64>, max: Option<f64> },
    /// Two-valued `T`/`F` flag.
    Flag,
    /// Opaque text (file names, identifiers). Never normalized.
    Text,
    /// Comma-separated list of primitives.
    List {
        element: &'static FieldKind,
        max_len: Option<usize>,
    },
    /// The legal value set is not known yet. Every input is rejected.
    Unspecified { note: &'static str },
}

impl FieldKind {
    /// Integer bounded to the model's default 32-bit integer range.
    pub const INTEGER: FieldKind = FieldKind::Integer {
        min: i32::MIN as i64,
        max: i32::MAX as i64,
    };

    /// Non-negative 32-bit integer.
    pub const COUNT: FieldKind = FieldKind::Integer {
        min: 0,
        max: i32::MAX as i64,
    };

    pub const REAL: FieldKind = FieldKind::Real {
        min: None,
        max: None,
    };

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Enum(_) => "enumeration",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Integer { .. } => "integer",
            FieldKind::Real { .. } => "real",
            FieldKind::Flag => "flag",
            FieldKind::Text => "text",
            FieldKind::List { .. } => "list",
            FieldKind::Unspecified { .. } => "unspecified",
        }
    }
}

/// Static metadata for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: Option<DefaultValue>,
    /// `false`: the field must end up present (from input or default).
    pub nullable: bool,
    pub doc: &'static str,
}

impl FieldDescriptor {
    /// Optional field with no default.
    pub const fn optional(name: &'static str, kind: FieldKind, doc: &'static str) -> Self {
        Self {
            name,
            kind,
            default: None,
            nullable: true,
            doc,
        }
    }

    /// Required field with no default: input must supply it.
    pub const fn required(name: &'static str, kind: FieldKind, doc: &'static str) -> Self {
        Self {
            name,
            kind,
            default: None,
            nullable: false,
            doc,
        }
    }

    /// Field that is always rendered, falling back to `default`.
    pub const fn defaulted(
        name: &'static str,
        kind: FieldKind,
        default: DefaultValue,
        doc: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
            nullable: false,
            doc,
        }
    }
}

/// A nested `GROUP%KEY` group inside a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
    pub groups: &'static [GroupDescriptor],
    /// `false`: the group is materialised even when input omits it.
    pub nullable: bool,
}

impl GroupDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn group(&self, name: &str) -> Option<&'static GroupDescriptor> {
        self.groups.iter().find(|g| g.name.eq_ignore_ascii_case(name))
    }
}

/// Inclusive comparison used by sign rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    NonNegative,
    Negative,
    NonPositive,
}

impl Sign {
    pub fn holds(self, value: f64) -> bool {
        match self {
            Sign::Positive => value > 0.0,
            Sign::NonNegative => value >= 0.0,
            Sign::Negative => value < 0.0,
            Sign::NonPositive => value <= 0.0,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Sign::Positive => "> 0",
            Sign::NonNegative => ">= 0",
            Sign::Negative => "< 0",
            Sign::NonPositive => "<= 0",
        }
    }
}

/// How many members of an exclusive set may be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    ExactlyOne,
    AtMostOne,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::ExactlyOne => f.write_str("exactly one"),
            Presence::AtMostOne => f.write_str("at most one"),
        }
    }
}

/// Cross-field rule evaluated over one fully-typed record.
///
/// Rules referencing an absent field are skipped; presence is the job of
/// descriptor nullability, not of cross-field rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// `min <= numerator / denominator <= max`.
    Ratio {
        numerator: &'static str,
        denominator: &'static str,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Sign constraint on one numeric field.
    Sign { field: &'static str, sign: Sign },
    /// Timestamp `later` must not precede `earlier`.
    Order {
        earlier: &'static str,
        later: &'static str,
    },
    /// Alternate nested groups of this record.
    Exclusive {
        groups: &'static [&'static str],
        presence: Presence,
    },
}

/// Rule evaluated over a whole document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentRule {
    /// Alternate blocks of the document.
    Exclusive {
        blocks: &'static [&'static str],
        presence: Presence,
    },
    /// An enumerated field selects which alternate block must be present.
    /// `choices` maps canonical spelling to block name.
    Selector {
        block: &'static str,
        field: &'static str,
        choices: &'static [(&'static str, &'static str)],
    },
}

/// Schema of one external block (`&NAME ... /`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSchema {
    /// Block name as written after `&` (e.g. `GRID_NML`).
    pub name: &'static str,
    /// Key prefix (e.g. `GRID` in `GRID%TYPE`).
    pub prefix: &'static str,
    pub fields: &'static [FieldDescriptor],
    pub groups: &'static [GroupDescriptor],
    pub rules: &'static [Rule],
    /// `true`: a document for this program must contain the block.
    pub required: bool,
    pub doc: &'static str,
}

impl BlockSchema {
    /// View of the block body as a group, so nested groups and the block
    /// itself share one traversal.
    pub fn body(&self) -> GroupDescriptor {
        GroupDescriptor {
            name: self.prefix,
            fields: self.fields,
            groups: self.groups,
            nullable: !self.required,
        }
    }

    /// Resolve a `%`-separated path to its descriptor.
    pub fn descriptor(&self, path: &str) -> Option<&'static FieldDescriptor> {
        let mut parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let field = parts.pop()?;
        let mut fields = self.fields;
        let mut groups = self.groups;
        for part in parts {
            let group = groups.iter().find(|g| g.name.eq_ignore_ascii_case(part))?;
            fields = group.fields;
            groups = group.groups;
        }
        fields.iter().find(|f| f.name.eq_ignore_ascii_case(field))
    }

    /// Full external key for a path (e.g. `CURV%XCOORD%SF`).
    pub fn key(&self, path: &str) -> String {
        format!("{}{PATH_SEPARATOR}{path}", self.prefix)
    }
}

/// All blocks one external program reads, in the order it reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramSchema {
    /// Program name (e.g. `ww3_grid`).
    pub name: &'static str,
    pub blocks: &'static [BlockSchema],
    pub rules: &'static [DocumentRule],
    pub doc: &'static str,
}

impl ProgramSchema {
    pub fn block(&self, name: &str) -> Option<&'static BlockSchema> {
        self.blocks.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    pub fn block_names(&self) -> Vec<&'static str> {
        self.blocks.iter().map(|b| b.name).collect()
    }

    /// Position of a block in the canonical order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NESTED: BlockSchema = BlockSchema {
        name: "CURV_NML",
        prefix: "CURV",
        fields: &[FieldDescriptor::required("NX", FieldKind::COUNT, "")],
        groups: &[GroupDescriptor {
            name: "XCOORD",
            fields: &[FieldDescriptor::optional("SF", FieldKind::REAL, "")],
            groups: &[],
            nullable: true,
        }],
        rules: &[],
        required: false,
        doc: "",
    };

    #[test]
    fn descriptor_resolves_nested_paths_case_insensitively() {
        assert_eq!(NESTED.descriptor("NX").map(|d| d.name), Some("NX"));
        assert_eq!(NESTED.descriptor("xcoord%sf").map(|d| d.name), Some("SF"));
        assert!(NESTED.descriptor("YCOORD%SF").is_none());
        assert!(NESTED.descriptor("XCOORD").is_none());
    }

    #[test]
    fn key_joins_prefix_and_path() {
        assert_eq!(NESTED.key("XCOORD%SF"), "CURV%XCOORD%SF");
    }

    #[test]
    fn sign_rules_are_inclusive_where_declared() {
        assert!(Sign::NonPositive.holds(0.0));
        assert!(!Sign::Negative.holds(0.0));
        assert!(Sign::NonNegative.holds(0.0));
        assert!(!Sign::Positive.holds(0.0));
    }
}
