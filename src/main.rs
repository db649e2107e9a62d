use clap::Parser;
use colored::*;
use std::process::ExitCode;

use app_launcher::{logging, Launcher, LauncherConfig, Platform, SystemRunner};

#[derive(Parser)]
#[command(name = "app-launcher")]
#[command(about = "Bootstrap launcher: check Python, install requirements, start main.py", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("{} {}", "⚠".yellow(), e);
    }
    logging::log_system_info();

    let platform = Platform::detect();
    tracing::debug!(platform = platform.name(), "Detected platform");

    let config = LauncherConfig::for_platform(platform).with_readiness_probe();
    let launcher = Launcher::new(config, SystemRunner);

    exit_code(launcher.run_to_exit_code())
}

/// Exit codes outside 0..=255 (e.g. Windows NTSTATUS values) collapse to 1.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
