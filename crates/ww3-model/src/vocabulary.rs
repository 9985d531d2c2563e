//! Closed vocabularies for enumerated namelist fields.
//!
//! A vocabulary is a fixed set of [`Term`]s. Every term has exactly one
//! canonical spelling (the only form ever rendered) and a symbolic name that
//! callers may use as an alias. Vocabularies are static data: they are built
//! at compile time and never mutated.
//!
//! ## Example: `GRID%TYPE`
//!
//! ```text
//! Vocabulary grid_type (quoted):
//!   RECT <- RECTILINEAR
//!   CURV <- CURVILINEAR
//!   UNST <- UNSTRUCTURED
//!   SMC  <- SPHERICAL_MULTIPLE_CELL
//! ```
//!
//! Resolving input against a vocabulary lives in `ww3-transform`; this module
//! only describes the data.

use std::fmt;

/// A single member of a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Symbolic name (e.g. `RECTILINEAR`). Accepted case-insensitively.
    pub symbol: &'static str,

    /// Canonical spelling (e.g. `RECT`). This is what the model reads.
    pub spelling: &'static str,

    /// Short human description (e.g. "Rectilinear grid"). The registry
    /// doctor reports terms that lack one.
    pub description: &'static str,
}

impl Term {
    pub const fn new(
        symbol: &'static str,
        spelling: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            symbol,
            spelling,
            description,
        }
    }
}

/// A closed set of terms for one enumerated field family.
#[derive(Debug)]
pub struct Vocabulary {
    /// Registry identifier (e.g. `grid_type`).
    pub id: &'static str,

    /// Human-readable name (e.g. "Grid type").
    pub name: &'static str,

    /// Whether rendered tokens are wrapped in single quotes.
    ///
    /// The model reads character variables through quotes and integer
    /// codes without them, so this is a property of the vocabulary rather
    /// than of the individual field.
    pub quoted: bool,

    /// Members in declaration order. Error messages list them in this order.
    pub terms: &'static [Term],
}

impl Vocabulary {
    /// All canonical spellings, in declaration order.
    pub fn canonical_spellings(&self) -> Vec<&'static str> {
        self.terms.iter().map(|t| t.spelling).collect()
    }

    /// Look up a term by its exact canonical spelling.
    pub fn term(&self, spelling: &str) -> Option<&'static Term> {
        self.terms.iter().find(|t| t.spelling == spelling)
    }

    /// Build the enum value for a term of this vocabulary.
    pub fn value_of(&'static self, term: &'static Term) -> EnumValue {
        EnumValue {
            vocabulary: self,
            term,
        }
    }

    /// Build the enum value for an exact canonical spelling.
    pub fn value(&'static self, spelling: &str) -> Option<EnumValue> {
        self.term(spelling).map(|term| self.value_of(term))
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vocabulary {}

/// A resolved vocabulary member.
///
/// Holds only references into static data; the raw input that produced it
/// is never retained.
#[derive(Clone, Copy)]
pub struct EnumValue {
    vocabulary: &'static Vocabulary,
    term: &'static Term,
}

impl EnumValue {
    pub fn vocabulary(&self) -> &'static Vocabulary {
        self.vocabulary
    }

    pub fn term(&self) -> &'static Term {
        self.term
    }

    /// Canonical spelling (the rendered token, without quotes).
    pub fn spelling(&self) -> &'static str {
        self.term.spelling
    }

    pub fn symbol(&self) -> &'static str {
        self.term.symbol
    }

    /// Whether this value renders inside single quotes.
    pub fn is_quoted(&self) -> bool {
        self.vocabulary.quoted
    }

    /// True when this value belongs to `vocabulary`.
    pub fn belongs_to(&self, vocabulary: &Vocabulary) -> bool {
        self.vocabulary.id == vocabulary.id
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.vocabulary.id == other.vocabulary.id && self.term.spelling == other.term.spelling
    }
}

impl Eq for EnumValue {}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.vocabulary.id, self.term.spelling)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.term.spelling)
    }
}
