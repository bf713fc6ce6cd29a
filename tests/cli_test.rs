//! CLI integration tests
//!
//! End-to-end tests for the svgpatch command-line interface: routing
//! decisions, batch ordering, and failure isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for the svgpatch binary
fn svgpatch() -> Command {
    Command::cargo_bin("svgpatch").expect("Failed to find svgpatch binary")
}

/// Create a fixture file and return its path
fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_help_output() {
    svgpatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SVGPATCH CLI"));
}

#[test]
fn test_version_output() {
    svgpatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("svgpatch"));
}

#[test]
fn test_no_inputs_is_a_usage_error() {
    svgpatch().arg("patch").assert().failure();
}

#[test]
fn test_unknown_command_fails_and_names_it() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.svg", "<svg/>");
    svgpatch()
        .arg("optimize")
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("optimize"));
}

#[test]
fn test_default_routing_streams_each_document_with_a_newline() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.svg", "<svg id=\"a\"/>");
    let b = fixture(&dir, "b.svg", "<svg id=\"b\"/>");
    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("<svg id=\"a\"/>\n<svg id=\"b\"/>\n");
}

#[test]
fn test_single_input_output_flag_writes_the_file() {
    let dir = TempDir::new().unwrap();
    let content = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <rect width=\"4\"/>\n</svg>";
    let a = fixture(&dir, "a.svg", content);
    let out = dir.path().join("out.svg");

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    // Passthrough run: the written file is the serialized parse of the
    // input, byte for byte.
    assert_eq!(fs::read_to_string(&out).unwrap(), content);
}

#[test]
fn test_output_flag_is_ignored_for_multi_input_batches() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.svg", "<svg id=\"a\"/>");
    let b = fixture(&dir, "b.svg", "<svg id=\"b\"/>");
    let out = dir.path().join("out.svg");

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("<svg id=\"a\"/>\n<svg id=\"b\"/>\n");

    assert!(!out.exists());
}

#[test]
fn test_self_overwrites_the_source_and_beats_output() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.svg", "<svg><!-- x --><rect/></svg>");
    let out = dir.path().join("out.svg");

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg("--self")
        .arg("-o")
        .arg(&out)
        .arg("--remove-comments")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&a).unwrap(), "<svg><rect/></svg>");
    assert!(!out.exists());
}

#[test]
fn test_failed_read_is_skipped_silently_in_a_multi_input_batch() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.svg", "<svg id=\"a\"/>");
    let missing = dir.path().join("missing.svg");
    let c = fixture(&dir, "c.svg", "<svg id=\"c\"/>");

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg(&missing)
        .arg(&c)
        .assert()
        .success()
        .stdout("<svg id=\"a\"/>\n<svg id=\"c\"/>\n")
        .stderr(predicate::str::contains("cannot load").not());
}

#[test]
fn test_failed_read_is_reported_for_a_single_input_batch() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.svg");

    svgpatch()
        .arg("patch")
        .arg(&missing)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("cannot load"))
        .stderr(predicate::str::contains("missing.svg"));
}

#[test]
fn test_malformed_input_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();
    let bad = fixture(&dir, "bad.svg", "<svg><g></svg>");
    let good = fixture(&dir, "good.svg", "<svg/>");

    svgpatch()
        .arg("patch")
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_icon_preset_expands_to_its_primitive_flags() {
    let dir = TempDir::new().unwrap();
    let a = fixture(
        &dir,
        "a.svg",
        "<svg id=\"root\">\n\n  <!-- note -->\n  <rect id=\"r\" style=\"opacity:1\"/>\n</svg>",
    );

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg("--icon")
        .assert()
        .success()
        .stdout("<svg>\n  <rect class=\"primary\"/>\n</svg>\n");
}

#[test]
fn test_prefix_ids_rewrites_references() {
    let dir = TempDir::new().unwrap();
    let a = fixture(
        &dir,
        "a.svg",
        "<svg><linearGradient id=\"g\"/><rect fill=\"url(#g)\"/></svg>",
    );

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg("--prefix-ids")
        .arg("nav-")
        .assert()
        .success()
        .stdout("<svg><linearGradient id=\"nav-g\"/><rect fill=\"url(#nav-g)\"/></svg>\n");
}

#[test]
fn test_self_overwrite_applies_to_every_input_in_a_batch() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.svg", "<svg><!-- a --></svg>");
    let b = fixture(&dir, "b.svg", "<svg><!-- b --></svg>");

    svgpatch()
        .arg("patch")
        .arg(&a)
        .arg(&b)
        .arg("--self")
        .arg("--remove-comments")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&a).unwrap(), "<svg></svg>");
    assert_eq!(fs::read_to_string(&b).unwrap(), "<svg></svg>");
}
