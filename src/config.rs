//! Launcher configuration
//!
//! All values have fixed defaults matching the per-platform launcher scripts.
//! The builder methods exist so the launcher can be pointed at other
//! toolchains and directories (tests rely on this).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

use crate::platform::Platform;

pub const DEFAULT_MANIFEST: &str = "requirements.txt";
pub const DEFAULT_ENTRY_POINT: &str = "main.py";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub platform: Platform,
    pub interpreter: String,
    pub package_manager: String,
    pub manifest: PathBuf,
    pub entry_point: PathBuf,
    pub working_dir: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub readiness_probe: bool,
}

impl LauncherConfig {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            interpreter: platform.interpreter().to_string(),
            package_manager: platform.package_manager().to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            entry_point: PathBuf::from(DEFAULT_ENTRY_POINT),
            working_dir: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            readiness_probe: false,
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_package_manager(mut self, package_manager: impl Into<String>) -> Self {
        self.package_manager = package_manager.into();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_readiness_probe(mut self) -> Self {
        self.readiness_probe = true;
        self
    }

    /// The address printed to the user before launch, without a trailing slash.
    pub fn listen_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.listen_url())
            .with_context(|| format!("Invalid listen address: {}", self.listen_url()))?;
        base.join(path)
            .with_context(|| format!("Invalid endpoint path: {path}"))
    }

    pub fn docs_url(&self) -> Result<Url> {
        self.endpoint("docs")
    }

    pub fn health_url(&self) -> Result<Url> {
        self.endpoint("health")
    }

    /// Resolve a configured path against the working directory, if one is set.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
