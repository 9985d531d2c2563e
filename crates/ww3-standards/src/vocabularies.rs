#![deny(unsafe_code)]

//! Canonical vocabularies.
//!
//! Character-valued codes are quoted on output; integer codes are not.
//! Symbolic names are the spelled-out meaning of each code and are accepted
//! as aliases on input.

use ww3_model::{Term, Vocabulary};

pub static GRID_TYPE: Vocabulary = Vocabulary {
    id: "grid_type",
    name: "Grid type",
    quoted: true,
    terms: &[
        Term::new("RECTILINEAR", "RECT", "Regular rectilinear grid"),
        Term::new("CURVILINEAR", "CURV", "Curvilinear grid from coordinate files"),
        Term::new("UNSTRUCTURED", "UNST", "Unstructured triangular mesh"),
        Term::new(
            "SPHERICAL_MULTIPLE_CELL",
            "SMC",
            "Spherical multiple-cell grid",
        ),
    ],
};

pub static COORD_SYSTEM: Vocabulary = Vocabulary {
    id: "coord_system",
    name: "Coordinate system",
    quoted: true,
    terms: &[
        Term::new("SPHERICAL", "SPHE", "Spherical (degrees)"),
        Term::new("CARTESIAN", "CART", "Cartesian (meters)"),
    ],
};

pub static GRID_CLOSURE: Vocabulary = Vocabulary {
    id: "grid_closure",
    name: "Grid closure",
    quoted: true,
    terms: &[
        Term::new("NO_CLOSURE", "NONE", "No closure"),
        Term::new("SIMPLE", "SMPL", "Simple longitudinal closure"),
        Term::new("TRIPOLE", "TRPL", "Tripole closure"),
    ],
};

/// Forcing input switch. This is a multi-valued flag: it shares the `T`/`F`
/// letters with strict flags but is read as a character code by the model.
pub static FORCING_FLAG: Vocabulary = Vocabulary {
    id: "forcing_flag",
    name: "Forcing input",
    quoted: true,
    terms: &[
        Term::new("DISABLED", "F", "No forcing"),
        Term::new("EXTERNAL_FILE", "T", "Forcing read from file"),
        Term::new("HOMOGENEOUS", "H", "Homogeneous forcing from the namelist"),
        Term::new("COUPLED", "C", "Forcing from a coupler"),
    ],
};

/// IDLA: layout indicator for gridded input files.
pub static LAYOUT_CODE: Vocabulary = Vocabulary {
    id: "layout_code",
    name: "Layout indicator",
    quoted: false,
    terms: &[
        Term::new("BOTTOM_UP", "1", "Read line by line, bottom to top"),
        Term::new("BOTTOM_UP_SINGLE_READ", "2", "As 1, single read statement"),
        Term::new("TOP_DOWN", "3", "Read line by line, top to bottom"),
        Term::new("TOP_DOWN_SINGLE_READ", "4", "As 3, single read statement"),
    ],
};

/// IDFM: format indicator for gridded input files.
pub static FORMAT_CODE: Vocabulary = Vocabulary {
    id: "format_code",
    name: "Format indicator",
    quoted: false,
    terms: &[
        Term::new("FREE", "1", "Free format"),
        Term::new("FIXED", "2", "Fixed format"),
        Term::new("UNFORMATTED", "3", "Unformatted"),
    ],
};

pub static TIME_SPLIT: Vocabulary = Vocabulary {
    id: "time_split",
    name: "Output file time split",
    quoted: false,
    terms: &[
        Term::new("NONE", "0", "Single file"),
        Term::new("YEARLY", "4", "One file per year"),
        Term::new("MONTHLY", "6", "One file per month"),
        Term::new("DAILY", "8", "One file per day"),
        Term::new("HOURLY", "10", "One file per hour"),
    ],
};

pub static NETCDF_VERSION: Vocabulary = Vocabulary {
    id: "netcdf_version",
    name: "NetCDF version",
    quoted: false,
    terms: &[
        Term::new("NETCDF3", "3", "NetCDF classic"),
        Term::new("NETCDF4", "4", "NetCDF-4/HDF5"),
    ],
};

pub static BOUNDARY_MODE: Vocabulary = Vocabulary {
    id: "output_mode",
    name: "Boundary file mode",
    quoted: true,
    terms: &[
        Term::new("WRITE_BOUNDARY", "WRITE", "Write nest file"),
        Term::new("READ_BOUNDARY", "READ", "Read nest file"),
    ],
};

/// IOSTYP: output server type.
pub static SERVER_TYPE: Vocabulary = Vocabulary {
    id: "server_type",
    name: "Output server type",
    quoted: false,
    terms: &[
        Term::new("NO_SERVER", "0", "No data server processes"),
        Term::new("SINGLE_PROCESS", "1", "Fields and points on one process"),
        Term::new("LAST_PROCESS", "2", "Dedicated last process"),
        Term::new("MULTIPLE_PROCESSES", "3", "Multiple dedicated processes"),
    ],
};

/// Every vocabulary, in registry order.
pub static ALL: &[&Vocabulary] = &[
    &GRID_TYPE,
    &COORD_SYSTEM,
    &GRID_CLOSURE,
    &FORCING_FLAG,
    &LAYOUT_CODE,
    &FORMAT_CODE,
    &TIME_SPLIT,
    &NETCDF_VERSION,
    &BOUNDARY_MODE,
    &SERVER_TYPE,
];
