pub mod app;
pub mod config;
pub mod deps;
pub mod error;
pub mod interpreter;
pub mod launcher;
pub mod logging;
pub mod messages;
pub mod platform;
pub mod probe;
pub mod process;

pub use config::LauncherConfig;
pub use error::LaunchError;
pub use launcher::Launcher;
pub use platform::Platform;
pub use process::{ProcessRunner, SystemRunner};

#[cfg(test)]
mod interpreter_proptest;
