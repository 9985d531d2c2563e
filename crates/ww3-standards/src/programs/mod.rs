//! Block schemas for each supported program.
//!
//! Blocks are listed in the order the program reads them; the composer
//! renders documents in this order.

pub mod bounc;
pub mod grid;
pub mod ounf;
pub mod prnc;
pub mod shel;

use ww3_model::{FieldDescriptor, FieldKind, ProgramSchema};

use crate::vocabularies::{FORMAT_CODE, LAYOUT_CODE};

/// Fortran unit numbers usable for input files.
pub(crate) const UNIT_NUMBER: FieldKind = FieldKind::Integer { min: 1, max: 999 };

/// Fields shared by every gridded input file description.
pub(crate) const GRIDDED_INPUT: &[FieldDescriptor] = &[
    FieldDescriptor::optional("SF", FieldKind::REAL, "Scale factor applied to values read"),
    FieldDescriptor::optional("OFF", FieldKind::REAL, "Offset added to values read"),
    FieldDescriptor::optional("FILENAME", FieldKind::Text, "Input file name"),
    FieldDescriptor::optional("IDF", UNIT_NUMBER, "Fortran unit number"),
    FieldDescriptor::optional(
        "IDLA",
        FieldKind::Enum(&LAYOUT_CODE),
        "Layout indicator",
    ),
    FieldDescriptor::optional("IDFM", FieldKind::Enum(&FORMAT_CODE), "Format indicator"),
    FieldDescriptor::optional("FORMAT", FieldKind::Text, "Fortran format for IDFM = 2"),
];

/// Every program, in registry order.
pub static ALL: &[&ProgramSchema] = &[
    &grid::WW3_GRID,
    &shel::WW3_SHEL,
    &prnc::WW3_PRNC,
    &ounf::WW3_OUNF,
    &bounc::WW3_BOUNC,
];
