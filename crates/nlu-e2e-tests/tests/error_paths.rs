//! E2E tests for error paths and edge cases.

mod helpers;

use helpers::{TestHarness, section_row};
use nlu_report_types::LabelType;

/// Malformed JSON is fatal and names the offending file.
#[test]
fn e2e_malformed_report() {
    let h = TestHarness::with_two_runs();
    h.write_report("broken", LabelType::Intents, "{\"greet\": {\"support\": 3,");
    let out = h.arg("out.md");

    let err = h
        .run(&["compare", &h.input("main"), &h.input("broken"), "--outfile", &out])
        .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("malformed report"), "{msg}");
    assert!(msg.contains("intent_report.json"), "{msg}");
    assert!(!h.path("out.md").exists());
}

/// A non-numeric metric value is rejected rather than silently dropped.
#[test]
fn e2e_string_metric_rejected() {
    let h = TestHarness::empty();
    h.write_report("odd", LabelType::Intents, r#"{"greet": {"support": "many"}}"#);
    let out = h.arg("out.md");

    let err = h
        .run(&["format", &h.arg("odd"), "--outfile", &out])
        .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("greet"), "{msg}");
}

#[test]
fn e2e_unknown_baseline() {
    let h = TestHarness::with_two_runs();
    let out = h.arg("out.md");

    let err = h
        .run(&[
            "compare",
            &h.input("main"),
            &h.input("branch"),
            "--outfile",
            &out,
            "--baseline",
            "nightly",
        ])
        .unwrap_err();
    assert!(format!("{err:#}").contains("unknown baseline result set: nightly"));
}

/// A single run has nothing to diff, but the baseline must still name it.
#[test]
fn e2e_unknown_baseline_single_run() {
    let h = TestHarness::with_two_runs();
    let out = h.arg("out.md");

    let err = h
        .run(&[
            "compare",
            &h.input("main"),
            "--outfile",
            &out,
            "--baseline",
            "ghost",
        ])
        .unwrap_err();
    assert!(format!("{err:#}").contains("unknown baseline result set: ghost"));
    assert!(!h.path("out.md").exists());
}

#[test]
fn e2e_duplicate_result_set_names() {
    let h = TestHarness::with_two_runs();
    let out = h.arg("out.md");
    let a = format!("{}=same", h.arg("main"));
    let b = format!("{}=same", h.arg("branch"));

    let err = h
        .run(&["compare", &a, &b, "--outfile", &out])
        .unwrap_err();
    assert!(format!("{err:#}").contains("result set same appears more than once"));
}

/// Report files are ambiguous without --label-type.
#[test]
fn e2e_report_file_needs_label_type() {
    let h = TestHarness::with_two_runs();
    let out = h.arg("out.md");

    let err = h
        .run(&[
            "compare",
            &h.report_input("main", LabelType::Intents, "old"),
            &h.report_input("branch", LabelType::Intents, "new"),
            "--outfile",
            &out,
        ])
        .unwrap_err();
    assert!(format!("{err:#}").contains("--label-type"));
}

#[test]
fn e2e_bad_flags_rejected() {
    let h = TestHarness::with_two_runs();

    assert!(h.run(&["compare", "--label-type", "slots"]).is_err());
    assert!(h.run(&["compare", "--format", "pdf"]).is_err());
    assert!(h.run(&["compare", "=nameless"]).is_err());
}

/// --previous must point at an existing combined report.
#[test]
fn e2e_previous_missing() {
    let h = TestHarness::with_two_runs();
    let out = h.arg("out.md");
    let previous = h.arg("missing.json");

    let err = h
        .run(&[
            "compare",
            &h.input("branch"),
            "--previous",
            &previous,
            "--outfile",
            &out,
        ])
        .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("failed to load previous results"), "{msg}");
    assert!(msg.contains("report not found"), "{msg}");
}

#[test]
fn e2e_config_file_missing() {
    let h = TestHarness::with_two_runs();
    let config = h.arg("nope.toml");

    assert!(h.run(&["--config", &config, "format", &h.arg("main")]).is_err());
}

/// A missing results directory counts as an empty result set: everything
/// is "only present" in the other run, and sections the first run lacks
/// are skipped.
#[test]
fn e2e_missing_first_run_is_empty() {
    let h = TestHarness::with_two_runs();
    let out = h.arg("out.md");

    h.run(&["compare", &h.input("ghost"), &h.input("main"), "--outfile", &out])
        .unwrap();
    let md = h.read("out.md");

    assert!(!md.contains("Entity Extraction Results"));
    let greet = section_row(&md, "Intent Prediction Results", "greet");
    assert_eq!(
        greet,
        vec![
            "greet",
            "N/A",
            "40",
            "+40",
            "N/A",
            "0.900",
            "Label only present in main",
            "N/A",
            "bye(2)",
        ]
    );
}
