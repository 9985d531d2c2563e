//! `ww3_grid`: spectral and spatial grid preprocessing.

use ww3_model::{
    BlockSchema, DefaultValue, DocumentRule, FieldDescriptor, FieldKind, GroupDescriptor,
    Presence, ProgramSchema, Rule, Sign,
};

use super::{GRIDDED_INPUT, UNIT_NUMBER};
use crate::vocabularies::{COORD_SYSTEM, FORMAT_CODE, GRID_CLOSURE, GRID_TYPE, LAYOUT_CODE};

/// At least two points along each axis.
const GRID_POINTS: FieldKind = FieldKind::Integer {
    min: 2,
    max: i32::MAX as i64,
};

pub const SPECTRUM_NML: BlockSchema = BlockSchema {
    name: "SPECTRUM_NML",
    prefix: "SPECTRUM",
    fields: &[
        FieldDescriptor::defaulted(
            "XFR",
            FieldKind::Real {
                min: Some(1.0),
                max: None,
            },
            DefaultValue::Real(1.1),
            "Frequency increment factor",
        ),
        FieldDescriptor::defaulted(
            "FREQ1",
            FieldKind::REAL,
            DefaultValue::Real(0.04118),
            "First frequency (Hz)",
        ),
        FieldDescriptor::defaulted(
            "NK",
            FieldKind::Integer { min: 3, max: 200 },
            DefaultValue::Integer(32),
            "Number of frequencies",
        ),
        FieldDescriptor::defaulted(
            "NTH",
            FieldKind::Integer { min: 4, max: 720 },
            DefaultValue::Integer(24),
            "Number of directions",
        ),
        FieldDescriptor::optional(
            "THOFF",
            FieldKind::Real {
                min: Some(-0.5),
                max: Some(0.5),
            },
            "Relative offset of first direction",
        ),
    ],
    groups: &[],
    rules: &[
        Rule::Sign {
            field: "FREQ1",
            sign: Sign::Positive,
        },
    ],
    required: true,
    doc: "Spectral discretization",
};

pub const RUN_NML: BlockSchema = BlockSchema {
    name: "RUN_NML",
    prefix: "RUN",
    fields: &[
        FieldDescriptor::optional("FLDRY", FieldKind::Flag, "Dry run (I/O only)"),
        FieldDescriptor::optional("FLCX", FieldKind::Flag, "X-component of propagation"),
        FieldDescriptor::optional("FLCY", FieldKind::Flag, "Y-component of propagation"),
        FieldDescriptor::optional("FLCTH", FieldKind::Flag, "Direction shift"),
        FieldDescriptor::optional("FLCK", FieldKind::Flag, "Wavenumber shift"),
        FieldDescriptor::optional("FLSOU", FieldKind::Flag, "Source terms"),
    ],
    groups: &[],
    rules: &[],
    required: false,
    doc: "Model run switches",
};

pub const TIMESTEPS_NML: BlockSchema = BlockSchema {
    name: "TIMESTEPS_NML",
    prefix: "TIMESTEPS",
    fields: &[
        FieldDescriptor::required("DTMAX", FieldKind::REAL, "Maximum global time step (s)"),
        FieldDescriptor::required("DTXY", FieldKind::REAL, "Maximum CFL time step for x-y (s)"),
        FieldDescriptor::required(
            "DTKTH",
            FieldKind::REAL,
            "Maximum CFL time step for k-theta (s)",
        ),
        FieldDescriptor::required("DTMIN", FieldKind::REAL, "Minimum source term time step (s)"),
    ],
    groups: &[],
    rules: &[
        Rule::Sign {
            field: "DTMAX",
            sign: Sign::Positive,
        },
        Rule::Sign {
            field: "DTXY",
            sign: Sign::Positive,
        },
        Rule::Sign {
            field: "DTKTH",
            sign: Sign::Positive,
        },
        Rule::Sign {
            field: "DTMIN",
            sign: Sign::Positive,
        },
        Rule::Ratio {
            numerator: "DTMAX",
            denominator: "DTXY",
            min: Some(1.0),
            max: Some(4.0),
        },
        Rule::Ratio {
            numerator: "DTMAX",
            denominator: "DTKTH",
            min: Some(2.0),
            max: Some(10.0),
        },
        Rule::Ratio {
            numerator: "DTMAX",
            denominator: "DTMIN",
            min: Some(1.0),
            max: None,
        },
    ],
    required: true,
    doc: "Time steps",
};

pub const GRID_NML: BlockSchema = BlockSchema {
    name: "GRID_NML",
    prefix: "GRID",
    fields: &[
        FieldDescriptor::required("NAME", FieldKind::Text, "Grid name (30 characters)"),
        FieldDescriptor::defaulted(
            "NML",
            FieldKind::Text,
            DefaultValue::Text("namelists.nml"),
            "Namelist file with physics parameters",
        ),
        FieldDescriptor::required("TYPE", FieldKind::Enum(&GRID_TYPE), "Grid type"),
        FieldDescriptor::required("COORD", FieldKind::Enum(&COORD_SYSTEM), "Coordinate system"),
        FieldDescriptor::defaulted(
            "CLOS",
            FieldKind::Enum(&GRID_CLOSURE),
            DefaultValue::Enum("NONE"),
            "Grid closure",
        ),
        FieldDescriptor::defaulted(
            "ZLIM",
            FieldKind::REAL,
            DefaultValue::Real(0.0),
            "Coastline limit depth (m, below mean sea level)",
        ),
        FieldDescriptor::defaulted(
            "DMIN",
            FieldKind::REAL,
            DefaultValue::Real(0.0),
            "Absolute minimum water depth (m)",
        ),
    ],
    groups: &[],
    rules: &[
        Rule::Sign {
            field: "ZLIM",
            sign: Sign::NonPositive,
        },
        Rule::Sign {
            field: "DMIN",
            sign: Sign::NonNegative,
        },
    ],
    required: true,
    doc: "Grid definition",
};

pub const RECT_NML: BlockSchema = BlockSchema {
    name: "RECT_NML",
    prefix: "RECT",
    fields: &[
        FieldDescriptor::required("NX", GRID_POINTS, "Number of points along x"),
        FieldDescriptor::required("NY", GRID_POINTS, "Number of points along y"),
        FieldDescriptor::required("SX", FieldKind::REAL, "Grid increment along x"),
        FieldDescriptor::required("SY", FieldKind::REAL, "Grid increment along y"),
        FieldDescriptor::defaulted(
            "SF",
            FieldKind::REAL,
            DefaultValue::Real(1.0),
            "Scaling division factor for increments",
        ),
        FieldDescriptor::required("X0", FieldKind::REAL, "x-coordinate of lower-left corner"),
        FieldDescriptor::required("Y0", FieldKind::REAL, "y-coordinate of lower-left corner"),
        FieldDescriptor::defaulted(
            "SF0",
            FieldKind::REAL,
            DefaultValue::Real(1.0),
            "Scaling division factor for corner",
        ),
    ],
    groups: &[],
    rules: &[
        Rule::Sign {
            field: "SX",
            sign: Sign::Positive,
        },
        Rule::Sign {
            field: "SY",
            sign: Sign::Positive,
        },
        Rule::Sign {
            field: "SF",
            sign: Sign::Positive,
        },
    ],
    required: false,
    doc: "Rectilinear grid shape",
};

const COORD_GROUP_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::defaulted("SF", FieldKind::REAL, DefaultValue::Real(1.0), "Scale factor"),
    FieldDescriptor::defaulted("OFF", FieldKind::REAL, DefaultValue::Real(0.0), "Add offset"),
    FieldDescriptor::required("FILENAME", FieldKind::Text, "Coordinate file name"),
    FieldDescriptor::optional("IDF", UNIT_NUMBER, "Fortran unit number"),
    FieldDescriptor::defaulted(
        "IDLA",
        FieldKind::Enum(&LAYOUT_CODE),
        DefaultValue::Enum("1"),
        "Layout indicator",
    ),
    FieldDescriptor::defaulted(
        "IDFM",
        FieldKind::Enum(&FORMAT_CODE),
        DefaultValue::Enum("1"),
        "Format indicator",
    ),
    FieldDescriptor::optional("FORMAT", FieldKind::Text, "Fortran format for IDFM = 2"),
];

pub const CURV_NML: BlockSchema = BlockSchema {
    name: "CURV_NML",
    prefix: "CURV",
    fields: &[
        FieldDescriptor::required("NX", GRID_POINTS, "Number of points along x"),
        FieldDescriptor::required("NY", GRID_POINTS, "Number of points along y"),
    ],
    groups: &[
        GroupDescriptor {
            name: "XCOORD",
            fields: COORD_GROUP_FIELDS,
            groups: &[],
            nullable: false,
        },
        GroupDescriptor {
            name: "YCOORD",
            fields: COORD_GROUP_FIELDS,
            groups: &[],
            nullable: false,
        },
    ],
    rules: &[],
    required: false,
    doc: "Curvilinear grid shape",
};

pub const UNST_NML: BlockSchema = BlockSchema {
    name: "UNST_NML",
    prefix: "UNST",
    fields: &[
        FieldDescriptor::defaulted(
            "SF",
            FieldKind::REAL,
            DefaultValue::Real(-1.0),
            "Depth scale factor",
        ),
        FieldDescriptor::required("FILENAME", FieldKind::Text, "Mesh file name"),
        FieldDescriptor::optional("IDF", UNIT_NUMBER, "Fortran unit number"),
        FieldDescriptor::optional("IDLA", FieldKind::Enum(&LAYOUT_CODE), "Layout indicator"),
        FieldDescriptor::optional("IDFM", FieldKind::Enum(&FORMAT_CODE), "Format indicator"),
        FieldDescriptor::optional("FORMAT", FieldKind::Text, "Fortran format for IDFM = 2"),
        FieldDescriptor::optional("UGOBCFILE", FieldKind::Text, "Open boundary condition file"),
    ],
    groups: &[],
    rules: &[],
    required: false,
    doc: "Unstructured mesh shape",
};

pub const SMC_NML: BlockSchema = BlockSchema {
    name: "SMC_NML",
    prefix: "SMC",
    fields: &[],
    groups: &[
        GroupDescriptor {
            name: "MCEL",
            fields: GRIDDED_INPUT,
            groups: &[],
            nullable: false,
        },
        GroupDescriptor {
            name: "ISIDE",
            fields: GRIDDED_INPUT,
            groups: &[],
            nullable: false,
        },
        GroupDescriptor {
            name: "JSIDE",
            fields: GRIDDED_INPUT,
            groups: &[],
            nullable: false,
        },
        GroupDescriptor {
            name: "SUBTR",
            fields: GRIDDED_INPUT,
            groups: &[],
            nullable: true,
        },
    ],
    rules: &[],
    required: false,
    doc: "Spherical multiple-cell grid shape",
};

pub const DEPTH_NML: BlockSchema = BlockSchema {
    name: "DEPTH_NML",
    prefix: "DEPTH",
    fields: GRIDDED_INPUT,
    groups: &[],
    rules: &[],
    required: false,
    doc: "Bathymetry input",
};

pub const MASK_NML: BlockSchema = BlockSchema {
    name: "MASK_NML",
    prefix: "MASK",
    fields: GRIDDED_INPUT,
    groups: &[],
    rules: &[],
    required: false,
    doc: "Point status map input",
};

pub const OBST_NML: BlockSchema = BlockSchema {
    name: "OBST_NML",
    prefix: "OBST",
    fields: GRIDDED_INPUT,
    groups: &[],
    rules: &[],
    required: false,
    doc: "Sub-grid obstruction input",
};

pub static WW3_GRID: ProgramSchema = ProgramSchema {
    name: "ww3_grid",
    blocks: &[
        SPECTRUM_NML,
        RUN_NML,
        TIMESTEPS_NML,
        GRID_NML,
        RECT_NML,
        CURV_NML,
        UNST_NML,
        SMC_NML,
        DEPTH_NML,
        MASK_NML,
        OBST_NML,
    ],
    rules: &[
        DocumentRule::Exclusive {
            blocks: &["RECT_NML", "CURV_NML", "UNST_NML", "SMC_NML"],
            presence: Presence::ExactlyOne,
        },
        DocumentRule::Selector {
            block: "GRID_NML",
            field: "TYPE",
            choices: &[
                ("RECT", "RECT_NML"),
                ("CURV", "CURV_NML"),
                ("UNST", "UNST_NML"),
                ("SMC", "SMC_NML"),
            ],
        },
    ],
    doc: "Grid preprocessor",
};
