use crate::harness::{REQUIRED_FILES, TestContext};
use predicates::prelude::*;

#[test]
fn nonexistent_override_reports_paths_under_override() {
    let ctx = TestContext::new();
    let override_dir = ctx.project_root().join("elsewhere/models");

    let output = ctx.check().env("WEIGHTS_DIR", &override_dir).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let listed: Vec<&str> = stdout.lines().filter(|line| line.starts_with("- ")).collect();
    assert_eq!(listed.len(), REQUIRED_FILES.len());
    for line in listed {
        assert!(
            line.starts_with(&format!("- {}", override_dir.display())),
            "unexpected root in {line}"
        );
    }
    assert!(!stdout.contains(&ctx.weights_dir().display().to_string()));
}

#[test]
fn override_directory_is_searched_instead_of_default() {
    let ctx = TestContext::new();
    let override_dir = ctx.project_root().join("mounted");
    for filename in REQUIRED_FILES {
        ctx.place(&override_dir, filename);
    }

    let expected = format!("OK: All required weights found in {}\n", override_dir.display());
    ctx.check()
        .env("WEIGHTS_DIR", &override_dir)
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn legacy_root_still_backs_an_override() {
    let ctx = TestContext::new();
    let override_dir = ctx.project_root().join("mounted");
    for filename in REQUIRED_FILES {
        ctx.place_legacy(filename);
    }

    ctx.check().env("WEIGHTS_DIR", &override_dir).assert().success();
}
