//! CLI Adapter.

use clap::Parser;
use env_logger::Env;

use crate::domain::AppError;

/// Verify that every required model-weight file can be found.
#[derive(Parser)]
#[command(name = "check-weights")]
#[command(version)]
#[command(
    about = "Verify that all required model weights are present",
    long_about = "Searches WEIGHTS_DIR (default <project>/weights), falling back to the \
                  legacy <project>/pth directory, and reports any missing weight files."
)]
struct CheckCli {}

/// Fetch configured weight files into the weights directory.
#[derive(Parser)]
#[command(name = "download-weights")]
#[command(version)]
#[command(
    about = "Download model weights listed in sources.toml",
    long_about = "Downloads each weight file configured in the sources manifest into \
                  WEIGHTS_DIR, skipping files that already exist."
)]
struct DownloadCli {}

/// Entry point for `check-weights`.
pub fn run_check() {
    let _cli = CheckCli::parse();
    init_logging();

    exit_with(
        crate::app::api::load_settings()
            .and_then(|settings| crate::app::api::check(&settings))
            .map(|outcome| outcome.exit_code),
    );
}

/// Entry point for `download-weights`.
pub fn run_download() {
    let _cli = DownloadCli::parse();
    init_logging();

    exit_with(
        crate::app::api::load_settings()
            .and_then(|settings| crate::app::api::download(&settings))
            .map(|outcome| outcome.exit_code),
    );
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

fn exit_with(result: Result<i32, AppError>) {
    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
