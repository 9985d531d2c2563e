#[test]
fn doctor_report_snapshot_is_stable() {
    let report = ww3_standards::doctor();
    assert!(report.is_healthy());

    insta::assert_json_snapshot!(serde_json::to_value(report).unwrap(), @r#"
    {
      "counts": {
        "block_rules": 21,
        "blocks": 21,
        "document_rules": 2,
        "programs": 5,
        "terms": 33,
        "vocabularies": 10
      },
      "issues": [],
      "programs": [
        {
          "blocks": [
            "SPECTRUM_NML",
            "RUN_NML",
            "TIMESTEPS_NML",
            "GRID_NML",
            "RECT_NML",
            "CURV_NML",
            "UNST_NML",
            "SMC_NML",
            "DEPTH_NML",
            "MASK_NML",
            "OBST_NML"
          ],
          "name": "ww3_grid"
        },
        {
          "blocks": [
            "DOMAIN_NML",
            "INPUT_NML",
            "OUTPUT_TYPE_NML",
            "OUTPUT_DATE_NML",
            "HOMOG_COUNT_NML"
          ],
          "name": "ww3_shel"
        },
        {
          "blocks": [
            "FORCING_NML",
            "FILE_NML"
          ],
          "name": "ww3_prnc"
        },
        {
          "blocks": [
            "FIELD_NML",
            "FILE_NML"
          ],
          "name": "ww3_ounf"
        },
        {
          "blocks": [
            "BOUND_NML"
          ],
          "name": "ww3_bounc"
        }
      ],
      "schema": "ww3-namelist.registry-doctor",
      "schema_version": 1
    }
    "#);
}
