//! Step 3: hand off to the application entry point.

use anyhow::Context;
use colored::Colorize;

use crate::config::LauncherConfig;
use crate::error::Result;
use crate::logging;
use crate::messages;
use crate::probe::ReadinessProbe;
use crate::process::{Invocation, ProcessExit, ProcessRunner};

pub struct AppLauncher<'a, R: ProcessRunner + ?Sized> {
    config: &'a LauncherConfig,
    runner: &'a R,
}

impl<'a, R: ProcessRunner + ?Sized> AppLauncher<'a, R> {
    pub fn new(config: &'a LauncherConfig, runner: &'a R) -> Self {
        Self { config, runner }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.config.interpreter)
            .arg(self.config.entry_point.to_string_lossy())
            .current_dir(self.config.working_dir.clone())
    }

    pub fn announce(&self) -> Result<()> {
        let docs = self.config.docs_url()?;
        println!("{}", messages::STARTING_APP.blue().bold());
        println!(
            "  {} {}: {}",
            "→".green(),
            messages::LISTEN_ADDRESS,
            self.config.listen_url().cyan()
        );
        println!(
            "  {} {}: {}",
            "→".green(),
            messages::DOCS_ADDRESS,
            docs.as_str().cyan()
        );
        println!("  {}", messages::STOP_HINT.dimmed());
        Ok(())
    }

    /// Print the addresses, then run the entry point until it exits.
    pub fn launch(&self) -> Result<ProcessExit> {
        self.announce()?;

        let invocation = self.invocation();
        logging::log_step("app", &invocation.to_string());

        let probe = if self.config.readiness_probe {
            Some(ReadinessProbe::spawn(self.config.health_url()?))
        } else {
            None
        };

        let result = self
            .runner
            .run(&invocation)
            .with_context(|| format!("Failed to launch {}", self.config.entry_point.display()));

        if let Some(probe) = probe {
            probe.finish();
        }

        let exit = result?;
        logging::log_process_exit("app", &exit);
        Ok(exit)
    }
}
