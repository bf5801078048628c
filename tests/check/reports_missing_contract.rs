use crate::harness::{REQUIRED_FILES, TestContext};
use predicates::prelude::*;

#[test]
fn empty_layout_reports_every_file_under_current_root() {
    let ctx = TestContext::new();

    let output = ctx.check().output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Missing required weight files:\n"));
    for filename in REQUIRED_FILES {
        let expected = format!("- {}", ctx.weights_dir().join(filename).display());
        assert!(stdout.contains(&expected), "missing line for {filename}:\n{stdout}");
    }
    assert!(!stdout.contains(&ctx.legacy_dir().display().to_string()));
}

#[test]
fn report_includes_remediation_guidance() {
    let ctx = TestContext::new();

    ctx.check()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("How to fix:"))
        .stdout(predicate::str::contains("WEIGHTS_DIR=/path/to/weights check-weights"))
        .stdout(predicate::str::contains("$env:WEIGHTS_DIR="))
        .stdout(predicate::str::contains("See weights/README.md for expected filenames."))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn only_absent_files_are_listed() {
    let ctx = TestContext::new();
    ctx.place_current("hypertension.pt");
    ctx.place_legacy("vessel.pth");

    ctx.check()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cimt_reg.pth (CIMT)"))
        .stdout(predicate::str::contains("fusion_cvd_notskewed.pth (Fusion)"))
        .stdout(predicate::str::contains("hypertension.pt").not())
        .stdout(predicate::str::contains("vessel.pth (Vessel)").not());
}

#[test]
fn unknown_device_does_not_mask_missing_report() {
    let ctx = TestContext::new();

    ctx.check()
        .env("DEVICE", "tpu")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Missing required weight files:\n"))
        .stderr(predicate::str::is_empty());
}
