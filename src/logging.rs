use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::process::ProcessExit;

/// Initialize structured logging. `RUST_LOG` overrides the default filter.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("app_launcher=info,warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Log the start of a launcher step
pub fn log_step(step: &str, command: &str) {
    tracing::debug!(step = step, command = command, "Launcher step started");
}

/// Log how a subprocess ended
pub fn log_process_exit(step: &str, exit: &ProcessExit) {
    match exit.code {
        Some(0) => tracing::debug!(step = step, "Process exited successfully"),
        Some(code) => tracing::debug!(step = step, code = code, "Process exited with failure"),
        None => tracing::debug!(step = step, "Process terminated by signal"),
    }
}

/// Log system information for debugging
pub fn log_system_info() {
    tracing::debug!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "System information"
    );
}
