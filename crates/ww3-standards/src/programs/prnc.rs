//! `ww3_prnc`: NetCDF forcing preprocessor.

use ww3_model::{BlockSchema, FieldDescriptor, FieldKind, GroupDescriptor, ProgramSchema, Rule};

pub const FORCING_NML: BlockSchema = BlockSchema {
    name: "FORCING_NML",
    prefix: "FORCING",
    fields: &[
        FieldDescriptor::optional("TIMESTART", FieldKind::Timestamp, "First forcing time"),
        FieldDescriptor::optional("TIMESTOP", FieldKind::Timestamp, "Last forcing time"),
    ],
    groups: &[
        GroupDescriptor {
            name: "FIELD",
            fields: &[
                FieldDescriptor::optional("ICE_PARAM1", FieldKind::Flag, "Ice thickness"),
                FieldDescriptor::optional("ICE_PARAM2", FieldKind::Flag, "Ice viscosity"),
                FieldDescriptor::optional("MUD_DENSITY", FieldKind::Flag, "Mud density"),
                FieldDescriptor::optional("WATER_LEVELS", FieldKind::Flag, "Water levels"),
                FieldDescriptor::optional("CURRENTS", FieldKind::Flag, "Currents"),
                FieldDescriptor::optional("WINDS", FieldKind::Flag, "Winds"),
                FieldDescriptor::optional(
                    "WINDS_AST",
                    FieldKind::Flag,
                    "Winds with air-sea temperature difference",
                ),
                FieldDescriptor::optional("ICE_CONC", FieldKind::Flag, "Ice concentration"),
                FieldDescriptor::optional("ATM_MOMENTUM", FieldKind::Flag, "Atmospheric momentum"),
                FieldDescriptor::optional("AIR_DENSITY", FieldKind::Flag, "Air density"),
            ],
            groups: &[],
            nullable: true,
        },
        GroupDescriptor {
            name: "GRID",
            fields: &[
                FieldDescriptor::optional("ASIS", FieldKind::Flag, "Use the forcing grid as is"),
                FieldDescriptor::optional(
                    "LATLON",
                    FieldKind::Flag,
                    "Forcing grid is regular lat-lon",
                ),
            ],
            groups: &[],
            nullable: true,
        },
    ],
    rules: &[Rule::Order {
        earlier: "TIMESTART",
        later: "TIMESTOP",
    }],
    required: true,
    doc: "Forcing selection",
};

pub const FILE_NML: BlockSchema = BlockSchema {
    name: "FILE_NML",
    prefix: "FILE",
    fields: &[
        FieldDescriptor::required("FILENAME", FieldKind::Text, "NetCDF input file"),
        FieldDescriptor::optional("LONGITUDE", FieldKind::Text, "Longitude variable name"),
        FieldDescriptor::optional("LATITUDE", FieldKind::Text, "Latitude variable name"),
        FieldDescriptor::optional(
            "VAR",
            FieldKind::List {
                element: &FieldKind::Text,
                max_len: Some(3),
            },
            "Field variable names",
        ),
    ],
    groups: &[],
    rules: &[],
    required: true,
    doc: "Forcing input file",
};

pub static WW3_PRNC: ProgramSchema = ProgramSchema {
    name: "ww3_prnc",
    blocks: &[FORCING_NML, FILE_NML],
    rules: &[],
    doc: "Forcing preprocessor",
};
