//! `ww3_ounf`: gridded output to NetCDF.

use ww3_model::{BlockSchema, DefaultValue, FieldDescriptor, FieldKind, ProgramSchema};

use crate::vocabularies::{NETCDF_VERSION, TIME_SPLIT};

pub const FIELD_NML: BlockSchema = BlockSchema {
    name: "FIELD_NML",
    prefix: "FIELD",
    fields: &[
        FieldDescriptor::required("TIMESTART", FieldKind::Timestamp, "First output time"),
        FieldDescriptor::defaulted(
            "TIMESTRIDE",
            FieldKind::Integer {
                min: 0,
                max: i32::MAX as i64,
            },
            DefaultValue::Integer(0),
            "Output interval (s)",
        ),
        FieldDescriptor::defaulted(
            "TIMECOUNT",
            FieldKind::Integer {
                min: 1,
                max: i32::MAX as i64,
            },
            DefaultValue::Integer(1_000_000_000),
            "Number of output times",
        ),
        FieldDescriptor::defaulted(
            "TIMESPLIT",
            FieldKind::Enum(&TIME_SPLIT),
            DefaultValue::Enum("6"),
            "Output file split",
        ),
        FieldDescriptor::required("LIST", FieldKind::Text, "Space-separated output field names"),
        FieldDescriptor::optional("PARTITION", FieldKind::Text, "Partition indices"),
        FieldDescriptor::optional("SAMEFILE", FieldKind::Flag, "All fields in one file"),
        FieldDescriptor::defaulted(
            "TYPE",
            FieldKind::Integer { min: 2, max: 4 },
            DefaultValue::Integer(3),
            "Output variable type",
        ),
    ],
    groups: &[],
    rules: &[],
    required: true,
    doc: "Output field selection",
};

pub const FILE_NML: BlockSchema = BlockSchema {
    name: "FILE_NML",
    prefix: "FILE",
    fields: &[
        FieldDescriptor::defaulted(
            "PREFIX",
            FieldKind::Text,
            DefaultValue::Text("ww3."),
            "Output file name prefix",
        ),
        FieldDescriptor::defaulted(
            "NETCDF",
            FieldKind::Enum(&NETCDF_VERSION),
            DefaultValue::Enum("3"),
            "NetCDF version",
        ),
        FieldDescriptor::optional("IX0", FieldKind::COUNT, "First x index"),
        FieldDescriptor::optional("IXN", FieldKind::COUNT, "Last x index"),
        FieldDescriptor::optional("IY0", FieldKind::COUNT, "First y index"),
        FieldDescriptor::optional("IYN", FieldKind::COUNT, "Last y index"),
    ],
    groups: &[],
    rules: &[],
    required: false,
    doc: "Output file layout",
};

pub static WW3_OUNF: ProgramSchema = ProgramSchema {
    name: "ww3_ounf",
    blocks: &[FIELD_NML, FILE_NML],
    rules: &[],
    doc: "Gridded NetCDF output",
};
