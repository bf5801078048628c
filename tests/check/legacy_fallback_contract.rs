use crate::harness::{REQUIRED_FILES, TestContext};
use predicates::prelude::*;

#[test]
fn legacy_only_layout_passes() {
    let ctx = TestContext::new();
    for filename in REQUIRED_FILES {
        ctx.place_legacy(filename);
    }

    ctx.check()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK: All required weights found in"));
}

#[test]
fn mixed_layout_passes() {
    let ctx = TestContext::new();
    ctx.place_current("hypertension.pt");
    ctx.place_legacy("cimt_reg.pth");
    ctx.place_legacy("vessel.pth");
    ctx.place_legacy("fusion_cvd_notskewed.pth");

    ctx.check().assert().code(0);
}

#[test]
fn legacy_fallback_is_logged_when_requested() {
    let ctx = TestContext::new();
    for filename in REQUIRED_FILES {
        ctx.place_legacy(filename);
    }

    ctx.check()
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("found only in legacy directory"));
}
