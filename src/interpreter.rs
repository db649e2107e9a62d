//! Step 1: make sure the Python interpreter can be run.

use anyhow::Result as AnyResult;
use colored::Colorize;

use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use crate::logging;
use crate::messages;
use crate::process::{Invocation, ProcessRunner};

/// Oldest interpreter the application is known to run on.
pub const MIN_PYTHON_VERSION: &str = "3.8.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    pub command: String,
    pub version: Option<String>,
}

pub struct InterpreterCheck<'a, R: ProcessRunner + ?Sized> {
    config: &'a LauncherConfig,
    runner: &'a R,
}

impl<'a, R: ProcessRunner + ?Sized> InterpreterCheck<'a, R> {
    pub fn new(config: &'a LauncherConfig, runner: &'a R) -> Self {
        Self { config, runner }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.config.interpreter)
            .arg("--version")
            .current_dir(self.config.working_dir.clone())
    }

    pub fn check(&self) -> Result<InterpreterInfo> {
        let invocation = self.invocation();
        logging::log_step("interpreter", &invocation.to_string());

        if let Ok(path) = which::which(&self.config.interpreter) {
            tracing::debug!(path = %path.display(), "Resolved interpreter");
        }

        let output = self.runner.capture(&invocation).map_err(|e| {
            LaunchError::interpreter_not_found(
                &self.config.interpreter,
                self.config.platform,
                messages::failed_to_start(&format!("{e:#}")),
            )
        })?;
        logging::log_process_exit("interpreter", &output.exit);

        if !output.exit.success() {
            let reason = match output.exit.code {
                Some(code) => messages::exited_with_status(code),
                None => messages::terminated_by_signal(),
            };
            return Err(LaunchError::interpreter_not_found(
                &self.config.interpreter,
                self.config.platform,
                reason,
            ));
        }

        // Python 2 printed its version on stderr.
        let version = parse_python_version(&output.stdout)
            .or_else(|| parse_python_version(&output.stderr));

        match &version {
            Some(v) => {
                println!("{} Python {}", "✓".green(), v.cyan());
                warn_if_outdated(v);
            }
            None => tracing::debug!("Could not parse interpreter version output"),
        }

        Ok(InterpreterInfo {
            command: self.config.interpreter.clone(),
            version,
        })
    }
}

/// Extract the version from `python --version` output, e.g. `Python 3.11.4`.
pub fn parse_python_version(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Python "))
        .and_then(|rest| rest.split_whitespace().next())
        .filter(|v| v.starts_with(|c: char| c.is_ascii_digit()))
        .map(|v| v.to_string())
}

/// Normalize a Python version such as `3.12.0rc1` or `3.9` into semver form.
pub fn to_semver(version: &str) -> Option<semver::Version> {
    let numeric: Vec<u64> = version
        .split('.')
        .take(3)
        .map_while(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        })
        .collect();

    match numeric.as_slice() {
        [major, minor, patch] => Some(semver::Version::new(*major, *minor, *patch)),
        [major, minor] => Some(semver::Version::new(*major, *minor, 0)),
        [major] => Some(semver::Version::new(*major, 0, 0)),
        _ => None,
    }
}

/// The minimum version as shown to users, e.g. `3.8`.
pub fn min_python_display() -> String {
    to_semver(MIN_PYTHON_VERSION)
        .map(|v| format!("{}.{}", v.major, v.minor))
        .unwrap_or_else(|| MIN_PYTHON_VERSION.to_string())
}

pub fn is_outdated(version: &str) -> AnyResult<bool> {
    let minimum = semver::Version::parse(MIN_PYTHON_VERSION)?;
    Ok(to_semver(version).is_some_and(|installed| installed < minimum))
}

fn warn_if_outdated(version: &str) {
    match is_outdated(version) {
        Ok(true) => {
            println!(
                "{} {} Python {}+ (当前: {})",
                "⚠".yellow(),
                messages::OLD_INTERPRETER,
                min_python_display(),
                version
            );
            tracing::warn!(version = version, "Interpreter older than supported minimum");
        }
        Ok(false) => {}
        Err(e) => tracing::debug!(error = %e, "Version comparison failed"),
    }
}
