//! Vocabulary resolution.
//!
//! Input is trimmed, then matched in three steps, first match wins:
//!
//! 1. exact canonical spelling
//! 2. canonical spelling, ignoring ASCII case
//! 3. symbolic name, ignoring ASCII case
//!
//! Punctuation and separators are never folded: `multi-cell` and
//! `multicell` are different inputs.

use ww3_model::{EnumValue, RawValue, ResolveError, Term, Vocabulary};

/// Resolve a raw value to exactly one member of `vocabulary`.
///
/// An [`EnumValue`] already belonging to `vocabulary` passes through.
/// Integers are matched by their decimal spelling, which is how integer
/// codes (`IDLA`, `IDFM`, ...) arrive from structured input.
pub fn resolve(
    vocabulary: &'static Vocabulary,
    input: &RawValue,
) -> Result<EnumValue, ResolveError> {
    match input {
        RawValue::Enum(value) if value.belongs_to(vocabulary) => Ok(*value),
        RawValue::Text(text) => resolve_str(vocabulary, text),
        RawValue::Integer(code) => resolve_str(vocabulary, &code.to_string()),
        RawValue::Real(code) if code.is_finite() && code.fract() == 0.0 => {
            resolve_str(vocabulary, &format!("{code:.0}"))
        }
        other => Err(invalid(vocabulary, other.to_string())),
    }
}

/// Resolve text to exactly one member of `vocabulary`.
pub fn resolve_str(
    vocabulary: &'static Vocabulary,
    input: &str,
) -> Result<EnumValue, ResolveError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(vocabulary, input.to_string()));
    }

    let steps: [fn(&Term, &str) -> bool; 3] = [
        |term, value| term.spelling == value,
        |term, value| term.spelling.eq_ignore_ascii_case(value),
        |term, value| term.symbol.eq_ignore_ascii_case(value),
    ];

    for matches in steps {
        let candidates: Vec<&'static Term> = vocabulary
            .terms
            .iter()
            .filter(|term| matches(term, trimmed))
            .collect();
        match candidates.as_slice() {
            [] => continue,
            [term] => return Ok(vocabulary.value_of(*term)),
            tied => {
                return Err(ResolveError::Ambiguous {
                    vocabulary: vocabulary.id,
                    value: trimmed.to_string(),
                    candidates: tied.iter().map(|term| term.spelling).collect(),
                });
            }
        }
    }

    Err(invalid(vocabulary, trimmed.to_string()))
}

fn invalid(vocabulary: &'static Vocabulary, value: String) -> ResolveError {
    ResolveError::Invalid {
        vocabulary: vocabulary.id,
        value,
        accepted: vocabulary.canonical_spellings(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHAPE: Vocabulary = Vocabulary {
        id: "shape",
        name: "Shape",
        quoted: true,
        terms: &[Term::new("A", "rect", ""), Term::new("B", "curv", "")],
    };

    static CASE_TWINS: Vocabulary = Vocabulary {
        id: "case_twins",
        name: "Case twins",
        quoted: true,
        terms: &[Term::new("LOWER", "x", ""), Term::new("UPPER", "X", "")],
    };

    static SYMBOL_CLASH: Vocabulary = Vocabulary {
        id: "symbol_clash",
        name: "Symbol clash",
        quoted: false,
        terms: &[Term::new("ONE", "1", ""), Term::new("one", "2", "")],
    };

    #[test]
    fn every_alias_lands_on_the_same_member() {
        for input in ["rect", "RECT", "Rect", "A", "a", "  rect\t"] {
            let value = resolve_str(&SHAPE, input).unwrap();
            assert_eq!(value.spelling(), "rect", "input {input:?}");
        }
    }

    #[test]
    fn unknown_input_lists_every_spelling() {
        let err = resolve_str(&SHAPE, "xyz").unwrap_err();
        assert_eq!(
            err,
            ResolveError::Invalid {
                vocabulary: "shape",
                value: "xyz".to_string(),
                accepted: vec!["rect", "curv"],
            }
        );
    }

    #[test]
    fn exact_spelling_beats_case_folding() {
        assert_eq!(resolve_str(&CASE_TWINS, "x").unwrap().symbol(), "LOWER");
        assert_eq!(resolve_str(&CASE_TWINS, "X").unwrap().symbol(), "UPPER");
    }

    #[test]
    fn ties_within_one_step_are_ambiguous() {
        let err = resolve_str(&SYMBOL_CLASH, "One").unwrap_err();
        let ResolveError::Ambiguous { candidates, .. } = err else {
            panic!("expected ambiguity, got {err:?}");
        };
        assert_eq!(candidates, vec!["1", "2"]);
    }

    #[test]
    fn punctuation_is_not_folded() {
        assert!(resolve_str(&SHAPE, "re-ct").is_err());
        assert!(resolve_str(&SHAPE, "r e c t").is_err());
    }

    #[test]
    fn resolved_values_pass_through_only_for_their_vocabulary() {
        let curv = SHAPE.value("curv").unwrap();
        assert_eq!(resolve(&SHAPE, &RawValue::Enum(curv)).unwrap(), curv);
        assert!(resolve(&CASE_TWINS, &RawValue::Enum(curv)).is_err());
    }

    #[test]
    fn integer_codes_match_their_spelling() {
        assert_eq!(
            resolve(&SYMBOL_CLASH, &RawValue::Integer(2)).unwrap().spelling(),
            "2"
        );
        assert_eq!(
            resolve(&SYMBOL_CLASH, &RawValue::Real(1.0)).unwrap().spelling(),
            "1"
        );
        assert!(resolve(&SYMBOL_CLASH, &RawValue::Real(1.5)).is_err());
        assert!(resolve(&SYMBOL_CLASH, &RawValue::Bool(true)).is_err());
    }
}
