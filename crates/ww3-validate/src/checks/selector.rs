//! An enumerated field choosing which alternate block must be present.

use ww3_model::{Document, Violation};

pub fn check_selector(
    document: &Document,
    block: &str,
    field: &str,
    choices: &[(&str, &str)],
) -> Option<Violation> {
    let record = document.record(block)?;
    let chosen = record.scalar(field)?.as_enum()?;
    let key = record.key(field);

    let expected = choices
        .iter()
        .find(|(spelling, _)| *spelling == chosen.spelling())
        .map(|(_, target)| *target);
    let present: Vec<&str> = choices
        .iter()
        .map(|(_, target)| *target)
        .filter(|target| document.contains(target))
        .collect();

    let requirement = match expected {
        Some(target) => format!("{key} = {chosen} requires {target}"),
        None => format!("{key} = {chosen} has no matching block"),
    };
    let agrees = match expected {
        Some(target) => present == [target],
        None => false,
    };
    if agrees {
        return None;
    }

    let found = if present.is_empty() {
        "no alternate block present".to_string()
    } else {
        format!("present: {}", present.join(", "))
    };
    let mut fields = vec![key];
    fields.extend(expected.map(str::to_string));
    Some(Violation::CrossFieldConstraint {
        block: record.name().to_string(),
        fields,
        requirement,
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ww3_model::{Record, Term, TypedScalar, Vocabulary};

    static SHAPE: Vocabulary = Vocabulary {
        id: "shape",
        name: "Shape",
        quoted: true,
        terms: &[Term::new("R", "RECT", ""), Term::new("C", "CURV", "")],
    };

    const CHOICES: &[(&str, &str)] = &[("RECT", "RECT_NML"), ("CURV", "CURV_NML")];

    fn document(shape: &str, blocks: &[&str]) -> Document {
        let mut grid = Record::new("GRID_NML", "GRID", 0);
        grid.push_scalar("TYPE", TypedScalar::Enum(SHAPE.value(shape).unwrap()));
        let mut records = vec![grid];
        records.extend(blocks.iter().map(|name| Record::new(*name, "X", 0)));
        Document::new("ww3_grid", records)
    }

    #[test]
    fn matching_block_passes() {
        let doc = document("RECT", &["RECT_NML"]);
        assert!(check_selector(&doc, "GRID_NML", "TYPE", CHOICES).is_none());
    }

    #[test]
    fn wrong_block_is_a_cross_field_violation() {
        let doc = document("RECT", &["CURV_NML"]);
        let violation = check_selector(&doc, "GRID_NML", "TYPE", CHOICES).unwrap();
        assert_eq!(
            violation,
            Violation::CrossFieldConstraint {
                block: "GRID_NML".to_string(),
                fields: vec!["GRID%TYPE".to_string(), "RECT_NML".to_string()],
                requirement: "GRID%TYPE = RECT requires RECT_NML".to_string(),
                found: "present: CURV_NML".to_string(),
            }
        );
    }

    #[test]
    fn extra_alternates_are_reported() {
        let doc = document("CURV", &["RECT_NML", "CURV_NML"]);
        assert!(check_selector(&doc, "GRID_NML", "TYPE", CHOICES).is_some());
    }

    #[test]
    fn absent_selector_skips_the_rule() {
        let doc = Document::new("ww3_grid", vec![Record::new("RECT_NML", "RECT", 0)]);
        assert!(check_selector(&doc, "GRID_NML", "TYPE", CHOICES).is_none());
    }
}
