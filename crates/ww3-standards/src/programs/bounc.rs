//! `ww3_bounc`: boundary nest file conversion.

use ww3_model::{BlockSchema, DefaultValue, FieldDescriptor, FieldKind, ProgramSchema};

use crate::vocabularies::BOUNDARY_MODE;

pub const BOUND_NML: BlockSchema = BlockSchema {
    name: "BOUND_NML",
    prefix: "BOUND",
    fields: &[
        FieldDescriptor::defaulted(
            "MODE",
            FieldKind::Enum(&BOUNDARY_MODE),
            DefaultValue::Enum("WRITE"),
            "Read or write the nest file",
        ),
        FieldDescriptor::defaulted(
            "INTERP",
            FieldKind::Integer { min: 1, max: 2 },
            DefaultValue::Integer(2),
            "Interpolation: 1 nearest, 2 linear",
        ),
        FieldDescriptor::defaulted(
            "VERBOSE",
            FieldKind::Integer { min: 0, max: 2 },
            DefaultValue::Integer(1),
            "Verbosity level",
        ),
        FieldDescriptor::defaulted(
            "FILE",
            FieldKind::Text,
            DefaultValue::Text("spec.list"),
            "List of spectral input files",
        ),
    ],
    groups: &[],
    rules: &[],
    required: true,
    doc: "Boundary conversion",
};

pub static WW3_BOUNC: ProgramSchema = ProgramSchema {
    name: "ww3_bounc",
    blocks: &[BOUND_NML],
    rules: &[],
    doc: "Boundary nest conversion",
};
