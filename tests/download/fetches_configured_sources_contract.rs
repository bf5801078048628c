use crate::harness::{REQUIRED_FILES, TestContext};
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn write_manifest(ctx: &TestContext, base_url: &str) {
    let mut content = String::from("[sources]\n");
    for filename in REQUIRED_FILES {
        content.push_str(&format!("\"{filename}\" = \"{base_url}/{filename}\"\n"));
    }
    fs::write(ctx.weights_dir().join("sources.toml"), content).unwrap();
}

#[test]
fn downloads_missing_files_and_skips_existing() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mocks: Vec<_> = REQUIRED_FILES[1..]
        .iter()
        .map(|filename| {
            server
                .mock("GET", format!("/{filename}").as_str())
                .with_status(200)
                .with_body(format!("remote {filename}"))
                .expect(1)
                .create()
        })
        .collect();
    let untouched = server.mock("GET", "/hypertension.pt").expect(0).create();
    write_manifest(&ctx, &server.url());
    ctx.place_current("hypertension.pt");

    ctx.download()
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping existing"))
        .stdout(predicate::str::contains("Downloading vessel.pth..."))
        .stdout(predicate::str::ends_with("All downloads complete.\n"));

    for mock in mocks {
        mock.assert();
    }
    untouched.assert();

    let weights = assert_fs::fixture::ChildPath::new(ctx.weights_dir());
    weights.child("vessel.pth").assert("remote vessel.pth");
    weights.child("hypertension.pt").assert("hypertension.pt");
    weights.child("vessel.pth.part").assert(predicate::path::missing());

    ctx.check().assert().success();
}

#[test]
fn http_failure_exits_nonzero_without_partial_file() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _ok = server.mock("GET", "/hypertension.pt").with_status(200).with_body("w").create();
    let _missing = server.mock("GET", "/cimt_reg.pth").with_status(404).create();
    write_manifest(&ctx, &server.url());

    ctx.download()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Download failed for"))
        .stderr(predicate::str::contains("404"));

    let weights = assert_fs::fixture::ChildPath::new(ctx.weights_dir());
    weights.child("hypertension.pt").assert(predicate::path::exists());
    weights.child("cimt_reg.pth").assert(predicate::path::missing());
    weights.child("cimt_reg.pth.part").assert(predicate::path::missing());
}
