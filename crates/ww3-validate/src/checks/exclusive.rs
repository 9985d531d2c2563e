//! Mutual exclusivity between alternate groups or blocks.

use ww3_model::{Presence, Violation};

/// Check how many members of an exclusive set are present.
///
/// `scope` is the block (for nested groups) or the program (for blocks).
pub fn check_exclusive(
    scope: &str,
    members: &[&str],
    presence: Presence,
    is_present: impl Fn(&str) -> bool,
) -> Option<Violation> {
    let present: Vec<String> = members
        .iter()
        .filter(|member| is_present(member))
        .map(|member| (*member).to_string())
        .collect();
    let holds = match presence {
        Presence::ExactlyOne => present.len() == 1,
        Presence::AtMostOne => present.len() <= 1,
    };
    if holds {
        return None;
    }
    Some(Violation::MutualExclusivity {
        scope: scope.to_string(),
        groups: members.iter().map(|member| (*member).to_string()).collect(),
        present,
        requirement: presence.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: &[&str] = &["RECT_NML", "CURV_NML", "UNST_NML", "SMC_NML"];

    #[test]
    fn exactly_one_rejects_none_and_many() {
        let rect_only = |b: &str| b == "RECT_NML";
        assert!(check_exclusive("ww3_grid", SHAPES, Presence::ExactlyOne, rect_only).is_none());

        let none = check_exclusive("ww3_grid", SHAPES, Presence::ExactlyOne, |_| false).unwrap();
        assert_eq!(
            none.to_string(),
            "[MutualExclusivityViolation] ww3_grid: exactly one of RECT_NML, CURV_NML, UNST_NML, SMC_NML may be present (present: none)"
        );

        let two = check_exclusive("ww3_grid", SHAPES, Presence::ExactlyOne, |b| {
            b == "RECT_NML" || b == "CURV_NML"
        })
        .unwrap();
        let Violation::MutualExclusivity { present, .. } = two else {
            panic!("expected exclusivity violation");
        };
        assert_eq!(present, vec!["RECT_NML", "CURV_NML"]);
    }

    #[test]
    fn at_most_one_allows_none() {
        assert!(check_exclusive("X", SHAPES, Presence::AtMostOne, |_| false).is_none());
        assert!(check_exclusive("X", SHAPES, Presence::AtMostOne, |_| true).is_some());
    }
}
