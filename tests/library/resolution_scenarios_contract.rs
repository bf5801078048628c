use crate::harness::{REQUIRED_FILES, TestContext};
use cvd_weights::{Origin, Settings, resolve_model_paths};

#[test]
fn legacy_root_serves_every_file_when_current_is_empty() {
    let ctx = TestContext::new();
    for filename in REQUIRED_FILES {
        ctx.place_legacy(filename);
    }
    let settings = Settings::new(ctx.project_root());

    let resolved = resolve_model_paths(&settings);

    assert_eq!(resolved.len(), 4);
    for (entry, filename) in resolved.iter().zip(REQUIRED_FILES) {
        assert_eq!(entry.origin, Origin::Legacy);
        assert_eq!(entry.path, ctx.legacy_dir().join(filename));
    }
}

#[test]
fn empty_roots_resolve_to_current_candidates() {
    let ctx = TestContext::new();
    let settings = Settings::new(ctx.project_root());

    let resolved = resolve_model_paths(&settings);

    for (entry, filename) in resolved.iter().zip(REQUIRED_FILES) {
        assert_eq!(entry.origin, Origin::Absent);
        assert_eq!(entry.path, ctx.weights_dir().join(filename));
    }
}

#[test]
fn per_file_fallback_mixes_roots() {
    let ctx = TestContext::new();
    ctx.place_current("hypertension.pt");
    ctx.place_legacy("hypertension.pt");
    ctx.place_legacy("cimt_reg.pth");
    ctx.place_legacy("vessel.pth");
    ctx.place_legacy("fusion_cvd_notskewed.pth");
    let settings = Settings::new(ctx.project_root());

    let resolved = resolve_model_paths(&settings);

    assert_eq!(resolved.get("HTN"), Some(ctx.weights_dir().join("hypertension.pt").as_path()));
    assert_eq!(resolved.origin("CIMT"), Some(Origin::Legacy));
    assert_eq!(resolved.origin("Vessel"), Some(Origin::Legacy));
    assert_eq!(resolved.origin("Fusion"), Some(Origin::Legacy));
}
