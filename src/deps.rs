//! Step 2: install the application's dependencies from the manifest.

use colored::Colorize;

use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use crate::logging;
use crate::messages;
use crate::process::{Invocation, ProcessRunner};

pub struct DependencyInstaller<'a, R: ProcessRunner + ?Sized> {
    config: &'a LauncherConfig,
    runner: &'a R,
}

impl<'a, R: ProcessRunner + ?Sized> DependencyInstaller<'a, R> {
    pub fn new(config: &'a LauncherConfig, runner: &'a R) -> Self {
        Self { config, runner }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.config.package_manager)
            .args(["install", "-r"])
            .arg(self.config.manifest.to_string_lossy())
            .current_dir(self.config.working_dir.clone())
    }

    /// Run the package manager in the foreground so its progress is visible.
    pub fn install(&self) -> Result<()> {
        let invocation = self.invocation();
        logging::log_step("dependencies", &invocation.to_string());

        let exit = self.runner.run(&invocation).map_err(|e| {
            tracing::debug!(error = %e, "Package manager could not be spawned");
            LaunchError::dependency_install_failed(
                &self.config.package_manager,
                &self.config.manifest,
                None,
                messages::failed_to_start(&format!("{e:#}")),
            )
        })?;
        logging::log_process_exit("dependencies", &exit);

        if !exit.success() {
            let reason = match exit.code {
                Some(code) => messages::exited_with_status(code),
                None => messages::terminated_by_signal(),
            };
            return Err(LaunchError::dependency_install_failed(
                &self.config.package_manager,
                &self.config.manifest,
                exit.code,
                reason,
            ));
        }

        println!("{} {}", "✓".green(), messages::DEPENDENCIES_INSTALLED);
        Ok(())
    }
}
