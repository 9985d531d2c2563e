//! End-to-end behaviour of the load / edit / render entry points.

use ww3_core::{
    Engine, clear, edit, load_from, load_namelist, load_namelist_with, load_structured,
    render_all, render_block, validate,
};
use ww3_ingest::{MemorySource, from_json_str};
use ww3_model::{
    CoerceError, LoadOptions, NamelistError, RawDocument, RawRecord, RawValue, RenderOptions,
    TypedScalar, Violation,
};

const GRID: &str = "\
! rectilinear test grid
&SPECTRUM_NML
  SPECTRUM%XFR = 1.1
  SPECTRUM%NK = 25
/
&TIMESTEPS_NML
  TIMESTEPS%DTMAX = 480.
  TIMESTEPS%DTXY = 160.
  TIMESTEPS%DTKTH = 240.
  TIMESTEPS%DTMIN = 10.
/
&GRID_NML
  GRID%NAME = 'Test grid'
  GRID%TYPE = 'RECT'
  GRID%COORD = 'SPHE'
  GRID%ZLIM = -0.1
/
&RECT_NML
  RECT%NX = 360
  RECT%NY = 181
  RECT%SX = 1.
  RECT%SY = 1.
  RECT%X0 = 0.
  RECT%Y0 = -90.
/
";

fn domain(start: &str) -> String {
    format!("&DOMAIN_NML\n  DOMAIN%START = {start}\n  DOMAIN%STOP = 20230102 000000\n/\n")
}

#[test]
fn timestamps_in_any_accepted_spelling_render_canonically() {
    for start in [
        "20230101 000000",
        "'2023-01-01 00:00:00'",
        "'2023-01-01'",
        "2023-01-01T00:00:00",
    ] {
        let document = load_namelist("ww3_shel", &domain(start)).unwrap();
        let text = render_block(&document, "DOMAIN_NML", &RenderOptions::default()).unwrap();
        assert!(
            text.contains("DOMAIN%START  = 20230101 000000\n"),
            "{start}: {text}"
        );
    }
}

#[test]
fn zone_bearing_timestamps_are_rejected() {
    let err = load_namelist("ww3_shel", &domain("'2023-01-01T00:00:00Z'")).unwrap_err();
    assert!(matches!(
        err,
        NamelistError::Coerce(CoerceError::TimezoneNotSupported { ref field, .. })
            if field == "DOMAIN%START"
    ));
}

#[test]
fn timestamps_without_an_exact_token_are_not_loaded() {
    for start in ["'+12345-01-01'", "'2016-12-31 23:59:60'"] {
        let err = load_namelist("ww3_shel", &domain(start)).unwrap_err();
        assert!(
            matches!(err, NamelistError::Coerce(CoerceError::InvalidTimestamp { .. })),
            "{start}: {err:?}"
        );
    }
    for start in ["'2023-01-01T00:00:00.000Z'", "'2023-01-01T00:00:00.5+01:00'"] {
        let err = load_namelist("ww3_shel", &domain(start)).unwrap_err();
        assert!(
            matches!(err, NamelistError::Coerce(CoerceError::TimezoneNotSupported { .. })),
            "{start}: {err:?}"
        );
    }
}

#[test]
fn integers_render_bare_from_text_or_native_input() {
    let window = |stride: RawValue| {
        let raw = RawDocument::new()
            .with_block(
                "DOMAIN_NML",
                RawRecord::new()
                    .with("START", "20230101")
                    .with("STOP", "20230102"),
            )
            .with_block(
                "OUTPUT_DATE_NML",
                RawRecord::new()
                    .with("FIELD%START", "20230101")
                    .with("FIELD%STRIDE", stride)
                    .with("FIELD%STOP", "20230102"),
            );
        let document = load_structured("ww3_shel", &raw).unwrap();
        render_block(&document, "OUTPUT_DATE_NML", &RenderOptions::default()).unwrap()
    };

    let from_text = window(RawValue::text("3600"));
    assert!(from_text.contains("DATE%FIELD%STRIDE = 3600\n"));
    assert!(!from_text.contains("'3600'"));
    assert_eq!(window(RawValue::Integer(3600)), from_text);
}

#[test]
fn flags_are_strict() {
    let run = |value: &str| {
        let mut text = GRID.to_string();
        text.push_str(&format!("&RUN_NML\n  RUN%FLCX = {value}\n/\n"));
        load_namelist("ww3_grid", &text)
    };

    for value in ["T", "t"] {
        let document = run(value).unwrap();
        let text = render_block(&document, "RUN_NML", &RenderOptions::default()).unwrap();
        assert_eq!(text, "&RUN_NML\n  RUN%FLCX = T\n/\n");
    }

    let err = run("H").unwrap_err();
    assert!(err.to_string().contains("T, F, native boolean"));
    let NamelistError::Coerce(CoerceError::InvalidFlag { field, value }) = err else {
        panic!("expected an invalid flag, got {err:?}");
    };
    assert_eq!(field, "RUN%FLCX");
    assert_eq!(value, "H");
}

#[test]
fn ratio_violations_name_both_fields() {
    let text = GRID.replace("TIMESTEPS%DTMAX = 480.", "TIMESTEPS%DTMAX = 900.");
    let err = load_namelist("ww3_grid", &text).unwrap_err();
    let NamelistError::Validation(report) = err else {
        panic!("expected a validation failure, got {err:?}");
    };
    assert_eq!(report.len(), 1);
    assert!(report.violations()[0].mentions("TIMESTEPS%DTMAX"));
    assert!(report.violations()[0].mentions("TIMESTEPS%DTXY"));

    let document = load_namelist_with("ww3_grid", &text, &LoadOptions::coerce_only()).unwrap();
    assert_eq!(validate(&document).unwrap(), report);
}

#[test]
fn every_violation_is_reported_together() {
    let text = GRID
        .replace("TIMESTEPS%DTMIN = 10.", "TIMESTEPS%DTMIN = 0.")
        .replace("GRID%ZLIM = -0.1", "GRID%ZLIM = 5.")
        .replace("GRID%TYPE = 'RECT'", "GRID%TYPE = 'CURV'");
    let err = load_namelist("ww3_grid", &text).unwrap_err();
    let NamelistError::Validation(report) = err else {
        panic!("expected a validation failure, got {err:?}");
    };
    insta::assert_snapshot!(report.to_string(), @r"
    4 validation violation(s)
      [CrossFieldConstraintViolation] TIMESTEPS_NML: TIMESTEPS%DTMIN requires TIMESTEPS%DTMIN > 0 (found TIMESTEPS%DTMIN = 0)
      [CrossFieldConstraintViolation] TIMESTEPS_NML: TIMESTEPS%DTMAX, TIMESTEPS%DTMIN requires TIMESTEPS%DTMAX / TIMESTEPS%DTMIN >= 1 (found TIMESTEPS%DTMIN = 0)
      [CrossFieldConstraintViolation] GRID_NML: GRID%ZLIM requires GRID%ZLIM <= 0 (found GRID%ZLIM = 5)
      [CrossFieldConstraintViolation] GRID_NML: GRID%TYPE, CURV_NML requires GRID%TYPE = CURV requires CURV_NML (found present: RECT_NML)
    ");
}

#[test]
fn edits_are_recoerced_and_revalidated() {
    let document = load_namelist("ww3_grid", GRID).unwrap();

    let edited = edit(&document, "RECT_NML", "NX", RawValue::text("720")).unwrap();
    assert_eq!(
        edited.record("RECT_NML").unwrap().scalar("NX"),
        Some(&TypedScalar::Integer(720))
    );

    let err = edit(&document, "TIMESTEPS_NML", "DTXY", RawValue::Real(60.0)).unwrap_err();
    let NamelistError::Validation(report) = err else {
        panic!("expected a validation failure, got {err:?}");
    };
    assert!(report.violations().iter().all(|v| v.mentions("TIMESTEPS%DTXY")));

    let err = edit(&document, "GRID_NML", "TYPE", RawValue::text("multi-cell")).unwrap_err();
    assert!(matches!(
        err,
        NamelistError::Coerce(CoerceError::InvalidEnumValue { .. })
    ));

    let cleared = clear(&document, "SPECTRUM_NML", "NK").unwrap();
    assert_eq!(
        cleared.record("SPECTRUM_NML").unwrap().scalar("NK"),
        Some(&TypedScalar::Integer(32))
    );
}

#[test]
fn structured_and_namelist_surfaces_agree() {
    let raw = from_json_str(
        r#"{
            "SPECTRUM_NML": {"XFR": 1.1, "NK": 25},
            "TIMESTEPS_NML": {"DTMAX": 480, "DTXY": 160, "DTKTH": 240, "DTMIN": 10},
            "GRID_NML": {"NAME": "Test grid", "TYPE": "rect", "COORD": "spherical", "ZLIM": -0.1},
            "RECT_NML": {"NX": "360", "NY": 181, "SX": 1, "SY": 1, "X0": 0, "Y0": -90}
        }"#,
    )
    .unwrap();
    assert_eq!(
        load_structured("ww3_grid", &raw).unwrap(),
        load_namelist("ww3_grid", GRID).unwrap()
    );
}

#[test]
fn sources_are_read_by_extension() {
    let source = MemorySource::new()
        .with("ww3_grid.nml", GRID)
        .with(
            "ww3_shel.toml",
            "[DOMAIN_NML]\nSTART = 2023-01-01\nSTOP = \"20230102 000000\"\n",
        );
    let options = LoadOptions::default();

    let grid = load_from(&source, "ww3_grid.nml", "ww3_grid", &options).unwrap();
    assert_eq!(grid.records().len(), 4);
    let shel = load_from(&source, "ww3_shel.toml", "ww3_shel", &options).unwrap();
    assert!(shel.contains("DOMAIN_NML"));

    let err = load_from(&source, "missing.nml", "ww3_grid", &options).unwrap_err();
    assert!(matches!(err, NamelistError::Io { .. }));
}

#[test]
fn unknown_programs_list_the_known_ones() {
    let err = load_namelist("ww3_multi", GRID).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown program \"ww3_multi\" (known: ww3_grid, ww3_shel, ww3_prnc, ww3_ounf, ww3_bounc)"
    );
}

#[test]
fn engine_config_changes_layout_only() {
    let engine = Engine::from_toml_str(
        "[render]\nindent = 0\nalign_values = false\nheader_comment = \"ww3_grid\"\n",
    )
    .unwrap();
    let document = engine.load_namelist("ww3_grid", GRID).unwrap();
    assert_eq!(document, load_namelist("ww3_grid", GRID).unwrap());

    let text = engine.render_all(&document);
    assert!(text.starts_with("! ww3_grid\n\n&SPECTRUM_NML\nSPECTRUM%XFR = 1.1\n"));
    assert_eq!(
        engine.render_block(&document, "RUN_NML"),
        None,
        "absent blocks are not rendered"
    );
    assert_eq!(engine.composer(&document).render_all(), text);

    let lenient = Engine::from_toml_str("[load]\nvalidate = false\n").unwrap();
    let text = GRID.replace("GRID%ZLIM = -0.1", "GRID%ZLIM = 5.");
    assert!(lenient.load_namelist("ww3_grid", &text).is_ok());
    assert!(load_namelist("ww3_grid", &text).is_err());
}

#[test]
fn render_is_deterministic_across_independent_loads() {
    let options = RenderOptions::default();
    let first = render_all(&load_namelist("ww3_grid", GRID).unwrap(), &options);
    let second = render_all(&load_namelist("ww3_grid", GRID).unwrap(), &options);
    assert_eq!(first, second);
    assert_eq!(
        render_all(&load_namelist("ww3_grid", &first).unwrap(), &options),
        first
    );
}

#[test]
fn shape_exclusivity_is_enforced() {
    let text = format!("{GRID}&UNST_NML\n  UNST%FILENAME = 'mesh.msh'\n/\n");
    let err = load_namelist("ww3_grid", &text).unwrap_err();
    let NamelistError::Validation(report) = err else {
        panic!("expected a validation failure, got {err:?}");
    };
    assert!(report.violations().iter().any(|v| matches!(
        v,
        Violation::MutualExclusivity { present, .. } if present == &["RECT_NML", "UNST_NML"]
    )));
}
