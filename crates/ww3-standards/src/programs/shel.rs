//! `ww3_shel`: the model driver.

use ww3_model::{
    BlockSchema, DefaultValue, FieldDescriptor, FieldKind, GroupDescriptor, ProgramSchema, Rule,
};

use crate::vocabularies::{FORCING_FLAG, SERVER_TYPE};

pub const DOMAIN_NML: BlockSchema = BlockSchema {
    name: "DOMAIN_NML",
    prefix: "DOMAIN",
    fields: &[
        FieldDescriptor::defaulted(
            "IOSTYP",
            FieldKind::Enum(&SERVER_TYPE),
            DefaultValue::Enum("1"),
            "Output server type",
        ),
        FieldDescriptor::required("START", FieldKind::Timestamp, "Start of the run"),
        FieldDescriptor::required("STOP", FieldKind::Timestamp, "End of the run"),
    ],
    groups: &[],
    rules: &[Rule::Order {
        earlier: "START",
        later: "STOP",
    }],
    required: true,
    doc: "Run window",
};

const FORCING_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::optional("WATER_LEVELS", FieldKind::Enum(&FORCING_FLAG), "Water levels"),
    FieldDescriptor::optional("CURRENTS", FieldKind::Enum(&FORCING_FLAG), "Currents"),
    FieldDescriptor::optional("WINDS", FieldKind::Enum(&FORCING_FLAG), "Winds"),
    FieldDescriptor::optional("ICE_CONC", FieldKind::Enum(&FORCING_FLAG), "Ice concentration"),
    FieldDescriptor::optional(
        "ATM_MOMENTUM",
        FieldKind::Enum(&FORCING_FLAG),
        "Atmospheric momentum",
    ),
    FieldDescriptor::optional("AIR_DENSITY", FieldKind::Enum(&FORCING_FLAG), "Air density"),
];

pub const INPUT_NML: BlockSchema = BlockSchema {
    name: "INPUT_NML",
    prefix: "INPUT",
    fields: &[],
    groups: &[
        GroupDescriptor {
            name: "FORCING",
            fields: FORCING_FIELDS,
            groups: &[],
            nullable: true,
        },
        GroupDescriptor {
            name: "ASSIM",
            fields: &[
                FieldDescriptor::optional("MEAN", FieldKind::Flag, "Assimilate mean parameters"),
                FieldDescriptor::optional("SPEC1D", FieldKind::Flag, "Assimilate 1-D spectra"),
                FieldDescriptor::optional("SPEC2D", FieldKind::Flag, "Assimilate 2-D spectra"),
            ],
            groups: &[],
            nullable: true,
        },
    ],
    rules: &[],
    required: false,
    doc: "Forcing and assimilation inputs",
};

pub const OUTPUT_TYPE_NML: BlockSchema = BlockSchema {
    name: "OUTPUT_TYPE_NML",
    prefix: "TYPE",
    fields: &[],
    groups: &[
        GroupDescriptor {
            name: "FIELD",
            fields: &[FieldDescriptor::optional(
                "LIST",
                FieldKind::Text,
                "Space-separated output field names",
            )],
            groups: &[],
            nullable: true,
        },
        GroupDescriptor {
            name: "POINT",
            fields: &[FieldDescriptor::optional(
                "FILE",
                FieldKind::Text,
                "Output point list file",
            )],
            groups: &[],
            nullable: true,
        },
        GroupDescriptor {
            name: "TRACK",
            fields: &[FieldDescriptor::optional(
                "FORMAT",
                FieldKind::Flag,
                "Formatted track output",
            )],
            groups: &[],
            nullable: true,
        },
        GroupDescriptor {
            name: "PARTITION",
            fields: &[
                FieldDescriptor::optional("X0", FieldKind::COUNT, "First x index"),
                FieldDescriptor::optional("XN", FieldKind::COUNT, "Last x index"),
                FieldDescriptor::optional("NX", FieldKind::COUNT, "x stride"),
                FieldDescriptor::optional("Y0", FieldKind::COUNT, "First y index"),
                FieldDescriptor::optional("YN", FieldKind::COUNT, "Last y index"),
                FieldDescriptor::optional("NY", FieldKind::COUNT, "y stride"),
                FieldDescriptor::optional(
                    "FORMAT",
                    FieldKind::Unspecified {
                        note: "legal partition output formats are not established",
                    },
                    "Partition output format",
                ),
            ],
            groups: &[],
            nullable: true,
        },
        GroupDescriptor {
            name: "RESTART",
            fields: &[FieldDescriptor::optional(
                "EXTRA",
                FieldKind::Text,
                "Extra restart fields",
            )],
            groups: &[],
            nullable: true,
        },
    ],
    rules: &[],
    required: false,
    doc: "Output type selection",
};

/// START / STRIDE / STOP triple shared by every output date group.
const OUTPUT_WINDOW: &[FieldDescriptor] = &[
    FieldDescriptor::required("START", FieldKind::Timestamp, "First output time"),
    FieldDescriptor::required(
        "STRIDE",
        FieldKind::Integer {
            min: 0,
            max: i32::MAX as i64,
        },
        "Output interval (s), 0 disables",
    ),
    FieldDescriptor::required("STOP", FieldKind::Timestamp, "Last output time"),
];

const fn output_window(name: &'static str) -> GroupDescriptor {
    GroupDescriptor {
        name,
        fields: OUTPUT_WINDOW,
        groups: &[],
        nullable: true,
    }
}

pub const OUTPUT_DATE_NML: BlockSchema = BlockSchema {
    name: "OUTPUT_DATE_NML",
    prefix: "DATE",
    fields: &[],
    groups: &[
        output_window("FIELD"),
        output_window("POINT"),
        output_window("TRACK"),
        output_window("RESTART"),
        output_window("BOUNDARY"),
        output_window("PARTITION"),
    ],
    rules: &[
        Rule::Order {
            earlier: "FIELD%START",
            later: "FIELD%STOP",
        },
        Rule::Order {
            earlier: "POINT%START",
            later: "POINT%STOP",
        },
        Rule::Order {
            earlier: "TRACK%START",
            later: "TRACK%STOP",
        },
        Rule::Order {
            earlier: "RESTART%START",
            later: "RESTART%STOP",
        },
        Rule::Order {
            earlier: "BOUNDARY%START",
            later: "BOUNDARY%STOP",
        },
        Rule::Order {
            earlier: "PARTITION%START",
            later: "PARTITION%STOP",
        },
    ],
    required: false,
    doc: "Output dates",
};

pub const HOMOG_COUNT_NML: BlockSchema = BlockSchema {
    name: "HOMOG_COUNT_NML",
    prefix: "HOMOG_COUNT",
    fields: &[
        FieldDescriptor::optional("N_LEV", FieldKind::COUNT, "Homogeneous water levels"),
        FieldDescriptor::optional("N_CUR", FieldKind::COUNT, "Homogeneous currents"),
        FieldDescriptor::optional("N_WND", FieldKind::COUNT, "Homogeneous winds"),
        FieldDescriptor::optional("N_ICE", FieldKind::COUNT, "Homogeneous ice"),
        FieldDescriptor::optional("N_TAU", FieldKind::COUNT, "Homogeneous momentum"),
        FieldDescriptor::optional("N_RHO", FieldKind::COUNT, "Homogeneous air density"),
        FieldDescriptor::optional("N_MOV", FieldKind::COUNT, "Moving grid updates"),
    ],
    groups: &[],
    rules: &[],
    required: false,
    doc: "Homogeneous input counts",
};

pub static WW3_SHEL: ProgramSchema = ProgramSchema {
    name: "ww3_shel",
    blocks: &[
        DOMAIN_NML,
        INPUT_NML,
        OUTPUT_TYPE_NML,
        OUTPUT_DATE_NML,
        HOMOG_COUNT_NML,
    ],
    rules: &[],
    doc: "Model driver",
};
