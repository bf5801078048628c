//! Weight check command implementation.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::domain::settings::WEIGHTS_DIR_VAR;
use crate::domain::{AppError, CHECK_COMMAND, MissingArtifacts, ResolvedPaths, Settings};
use crate::ports::WeightsFilesystem;
use crate::services::{PathResolver, Validator};

/// Documentation listing the expected filenames.
pub const WEIGHTS_README: &str = "weights/README.md";

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub resolved: ResolvedPaths,
    pub missing: Option<MissingArtifacts>,
    pub exit_code: i32,
}

/// Resolve and validate all weights, writing the operator report to `out`.
///
/// Missing weights are an expected outcome: they produce a report and exit
/// code 1, never an `Err`.
pub fn execute<F: WeightsFilesystem + ?Sized>(
    settings: &Settings,
    fs: &F,
    out: &mut dyn Write,
) -> Result<CheckOutcome, AppError> {
    let resolved = PathResolver::resolve(&settings.roots(), settings.artifacts(), fs);

    match Validator::validate(&resolved, fs) {
        Ok(()) => {
            writeln!(out, "{}", render_ok(settings.weights_dir()))?;
            Ok(CheckOutcome { resolved, missing: None, exit_code: 0 })
        }
        Err(missing) => {
            write!(out, "{}", render_missing_report(&missing))?;
            Ok(CheckOutcome { resolved, missing: Some(missing), exit_code: 1 })
        }
    }
}

pub fn render_ok(weights_dir: &Path) -> String {
    format!("OK: All required weights found in {}", weights_dir.display())
}

/// Operator report: one line per missing file, then remediation steps.
pub fn render_missing_report(missing: &MissingArtifacts) -> String {
    let mut report = String::from("Missing required weight files:\n");
    for entry in missing.entries() {
        let _ = writeln!(report, "- {} ({})", entry.path.display(), entry.name);
    }

    let _ = writeln!(report, "\nHow to fix:");
    let _ = writeln!(report, "1) Place the files listed above into the weights directory.");
    let _ = writeln!(
        report,
        "2) If your weights live elsewhere, set {WEIGHTS_DIR_VAR} to that folder."
    );
    let _ = writeln!(
        report,
        "   Example (macOS/Linux): {WEIGHTS_DIR_VAR}=/path/to/weights {CHECK_COMMAND}"
    );
    let _ = writeln!(
        report,
        "   Example (PowerShell): $env:{WEIGHTS_DIR_VAR}='C:\\path\\to\\weights'; {CHECK_COMMAND}"
    );
    let _ = writeln!(report, "\nSee {WEIGHTS_README} for expected filenames.");
    report
}
