//! Rendering documents coerced against the built-in schemas.

use ww3_model::{Document, RawDocument, RawRecord, RawValue, RenderOptions};
use ww3_namelist::{RecordComposer, parse_namelist, render, render_block};
use ww3_transform::{build_document, program_schema};

fn grid_document() -> Document {
    let raw = RawDocument::new()
        .with_block("SPECTRUM_NML", RawRecord::new())
        .with_block(
            "TIMESTEPS_NML",
            RawRecord::new()
                .with("DTMAX", "480")
                .with("DTXY", 160i64)
                .with("DTKTH", "240.")
                .with("DTMIN", 10.0),
        )
        .with_block(
            "GRID_NML",
            RawRecord::new()
                .with("NAME", "Test grid")
                .with("TYPE", "rectilinear")
                .with("COORD", "sphe"),
        )
        .with_block(
            "RECT_NML",
            RawRecord::new()
                .with("NX", "10")
                .with("NY", 10i64)
                .with("SX", 0.5)
                .with("SY", "0.5")
                .with("X0", -10.0)
                .with("Y0", "20"),
        );
    build_document(program_schema("ww3_grid").unwrap(), &raw).unwrap()
}

#[test]
fn grid_document_renders_canonically() {
    let text = render(&grid_document(), &RenderOptions::default());
    insta::assert_snapshot!(text, @r"
    &SPECTRUM_NML
      SPECTRUM%XFR   = 1.1
      SPECTRUM%FREQ1 = 0.04118
      SPECTRUM%NK    = 32
      SPECTRUM%NTH   = 24
    /

    &TIMESTEPS_NML
      TIMESTEPS%DTMAX = 480.
      TIMESTEPS%DTXY  = 160.
      TIMESTEPS%DTKTH = 240.
      TIMESTEPS%DTMIN = 10.
    /

    &GRID_NML
      GRID%NAME  = 'Test grid'
      GRID%NML   = 'namelists.nml'
      GRID%TYPE  = 'RECT'
      GRID%COORD = 'SPHE'
      GRID%CLOS  = 'NONE'
      GRID%ZLIM  = 0.
      GRID%DMIN  = 0.
    /

    &RECT_NML
      RECT%NX  = 10
      RECT%NY  = 10
      RECT%SX  = 0.5
      RECT%SY  = 0.5
      RECT%SF  = 1.
      RECT%X0  = -10.
      RECT%Y0  = 20.
      RECT%SF0 = 1.
    /
    ");
}

#[test]
fn shel_values_render_by_kind() {
    let raw = RawDocument::new()
        .with_block(
            "DOMAIN_NML",
            RawRecord::new()
                .with("IOSTYP", 2i64)
                .with("START", "2023-01-01")
                .with("STOP", "20230102 060000"),
        )
        .with_block(
            "INPUT_NML",
            RawRecord::new()
                .with("FORCING%WINDS", "t")
                .with("FORCING%CURRENTS", "homogeneous")
                .with("ASSIM%MEAN", true),
        )
        .with_block(
            "OUTPUT_DATE_NML",
            RawRecord::new()
                .with("FIELD%START", "2023-01-01 00:00:00")
                .with("FIELD%STRIDE", "3600")
                .with("FIELD%STOP", "2023-01-02T06:00:00"),
        );
    let document = build_document(program_schema("ww3_shel").unwrap(), &raw).unwrap();
    let options = RenderOptions::new().with_blank_line_between_blocks(false);

    insta::assert_snapshot!(render(&document, &options), @r"
    &DOMAIN_NML
      DOMAIN%IOSTYP = 2
      DOMAIN%START  = 20230101 000000
      DOMAIN%STOP   = 20230102 060000
    /
    &INPUT_NML
      INPUT%FORCING%CURRENTS = 'H'
      INPUT%FORCING%WINDS    = 'T'
      INPUT%ASSIM%MEAN       = T
    /
    &OUTPUT_DATE_NML
      DATE%FIELD%START  = 20230101 000000
      DATE%FIELD%STRIDE = 3600
      DATE%FIELD%STOP   = 20230102 060000
    /
    ");
}

#[test]
fn input_spelling_does_not_reach_the_output() {
    let program = program_schema("ww3_grid").unwrap();
    let respelled = parse_namelist(
        "&spectrum_nml\n/\n\
         &TIMESTEPS_NML\n timesteps%dtmax = 4.8D2\n TIMESTEPS%DTXY = 160\n \
         TIMESTEPS%DTKTH = 240.0\n TIMESTEPS%DTMIN = 1.0e1\n/\n\
         &GRID_NML\n GRID%NAME = \"Test grid\"\n GRID%TYPE = Rect\n GRID%COORD = 'SPHERICAL'\n/\n\
         &RECT_NML\n RECT%NX = 10.\n RECT%NY = 10\n RECT%SX = .5\n RECT%SY = 0.50\n \
         RECT%X0 = -10\n RECT%Y0 = 2.0e1\n/\n",
    )
    .unwrap();
    let document = build_document(program, &respelled).unwrap();
    let options = RenderOptions::default();
    assert_eq!(render(&document, &options), render(&grid_document(), &options));
}

#[test]
fn render_block_and_composer_agree_with_render() {
    let document = grid_document();
    let options = RenderOptions::default();
    let composer = RecordComposer::from_document(&document, options.clone());

    assert_eq!(composer.render_all(), render(&document, &options));
    assert_eq!(
        composer.block_map().get("GRID_NML"),
        render_block(&document, "GRID_NML", &options).as_ref()
    );
    assert_eq!(composer.digest(), RecordComposer::from_document(&document, options).digest());
}

#[test]
fn flags_and_forcing_tokens_stay_distinct() {
    let program = program_schema("ww3_shel").unwrap();
    let raw = RawDocument::new()
        .with_block(
            "DOMAIN_NML",
            RawRecord::new()
                .with("START", "20230101")
                .with("STOP", "20230102"),
        )
        .with_block(
            "INPUT_NML",
            RawRecord::new().with("ASSIM%SPEC1D", RawValue::text("H")),
        );
    let err = build_document(program, &raw).unwrap_err();
    assert_eq!(err.field(), "INPUT%ASSIM%SPEC1D");
}
