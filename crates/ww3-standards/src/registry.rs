#![deny(unsafe_code)]

//! Process-wide lookup over the static vocabularies and program schemas.
//!
//! The tables are built once on first use and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use ww3_model::{ProgramSchema, Vocabulary};

use crate::programs as program_tables;
use crate::vocabularies as vocabulary_tables;

static VOCABULARY_INDEX: LazyLock<BTreeMap<&'static str, &'static Vocabulary>> =
    LazyLock::new(|| {
        vocabulary_tables::ALL
            .iter()
            .map(|vocabulary| (vocabulary.id, *vocabulary))
            .collect()
    });

static PROGRAM_INDEX: LazyLock<BTreeMap<String, &'static ProgramSchema>> = LazyLock::new(|| {
    program_tables::ALL
        .iter()
        .map(|program| (program.name.to_ascii_lowercase(), *program))
        .collect()
});

/// Look up a vocabulary by id (`grid_type`, `forcing_flag`, ...).
pub fn vocabulary(id: &str) -> Option<&'static Vocabulary> {
    VOCABULARY_INDEX.get(id.trim()).copied()
}

/// Every vocabulary in registry order.
pub fn vocabularies() -> &'static [&'static Vocabulary] {
    vocabulary_tables::ALL
}

/// Look up a program schema by name, case-insensitively.
pub fn program(name: &str) -> Option<&'static ProgramSchema> {
    PROGRAM_INDEX
        .get(&name.trim().to_ascii_lowercase())
        .copied()
}

/// Every program in registry order.
pub fn programs() -> &'static [&'static ProgramSchema] {
    program_tables::ALL
}

pub fn program_names() -> Vec<&'static str> {
    program_tables::ALL.iter().map(|program| program.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programs_are_found_case_insensitively() {
        assert_eq!(program("ww3_grid").map(|p| p.name), Some("ww3_grid"));
        assert_eq!(program(" WW3_SHEL ").map(|p| p.name), Some("ww3_shel"));
        assert!(program("ww3_multi").is_none());
    }

    #[test]
    fn vocabulary_ids_are_unique() {
        assert_eq!(VOCABULARY_INDEX.len(), vocabularies().len());
        assert_eq!(PROGRAM_INDEX.len(), programs().len());
    }

    #[test]
    fn file_nml_is_resolved_per_program() {
        let prnc = program("ww3_prnc").unwrap().block("FILE_NML").unwrap();
        let ounf = program("ww3_ounf").unwrap().block("FILE_NML").unwrap();
        assert!(prnc.descriptor("FILENAME").is_some());
        assert!(ounf.descriptor("FILENAME").is_none());
        assert!(ounf.descriptor("NETCDF").is_some());
    }
}
