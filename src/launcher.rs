//! The bootstrap sequence: interpreter check, dependency install, launch.
//!
//! Each gate must succeed before the next runs. The first failure is reported
//! once and ends the sequence with exit status 1; otherwise the application's
//! own exit status becomes the launcher's.

use colored::Colorize;
use std::path::Path;

use crate::app::AppLauncher;
use crate::config::LauncherConfig;
use crate::deps::DependencyInstaller;
use crate::error::Result;
use crate::interpreter::InterpreterCheck;
use crate::messages;
use crate::process::{ProcessExit, ProcessRunner};

/// Exit status used when the application ended without one (killed by a signal).
pub const SIGNALED_EXIT_CODE: i32 = 1;

pub struct Launcher<R: ProcessRunner> {
    config: LauncherConfig,
    runner: R,
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Run all steps and return the application's exit status.
    pub fn run(&self) -> Result<ProcessExit> {
        println!("{}", messages::CHECKING_INTERPRETER.blue().bold());
        InterpreterCheck::new(&self.config, &self.runner).check()?;

        self.preflight();

        println!("{}", messages::INSTALLING_DEPENDENCIES.blue().bold());
        DependencyInstaller::new(&self.config, &self.runner).install()?;

        AppLauncher::new(&self.config, &self.runner).launch()
    }

    /// Run all steps and map the outcome to a process exit code, printing any
    /// failure to stderr.
    pub fn run_to_exit_code(&self) -> i32 {
        match self.run() {
            Ok(exit) => exit.code.unwrap_or(SIGNALED_EXIT_CODE),
            Err(e) => {
                eprintln!("{}", e.to_string().trim_end());
                tracing::debug!(error = ?e, "Launcher failed");
                e.exit_code()
            }
        }
    }

    /// Warn about missing project files; the steps still run and report the
    /// real failure themselves.
    fn preflight(&self) {
        for path in [&self.config.manifest, &self.config.entry_point] {
            let resolved = self.config.resolve(path);
            if !resolved.exists() {
                warn_missing(&resolved);
            }
        }
    }
}

fn warn_missing(path: &Path) {
    println!(
        "{} {} {}",
        "⚠".yellow(),
        messages::MISSING_FILE,
        path.display().to_string().yellow()
    );
    tracing::warn!(path = %path.display(), "Expected project file is missing");
}
