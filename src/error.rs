use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

use crate::messages;
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallMethod {
    pub name: &'static str,
    pub command: &'static str,
}

const WINDOWS_PYTHON: &[InstallMethod] = &[
    InstallMethod {
        name: "winget",
        command: "winget install Python.Python.3.12",
    },
    InstallMethod {
        name: "Python.org",
        command: "https://www.python.org/downloads/",
    },
];

const MACOS_PYTHON: &[InstallMethod] = &[
    InstallMethod {
        name: "Homebrew",
        command: "brew install python@3.12",
    },
    InstallMethod {
        name: "Python.org",
        command: "https://www.python.org/downloads/",
    },
];

const LINUX_PYTHON: &[InstallMethod] = &[
    InstallMethod {
        name: "apt (Debian/Ubuntu)",
        command: "sudo apt update && sudo apt install python3 python3-pip",
    },
    InstallMethod {
        name: "dnf (Fedora/RHEL)",
        command: "sudo dnf install python3 python3-pip",
    },
];

pub fn python_install_methods(platform: Platform) -> &'static [InstallMethod] {
    match platform {
        Platform::Windows => WINDOWS_PYTHON,
        Platform::MacOS => MACOS_PYTHON,
        Platform::Linux => LINUX_PYTHON,
    }
}

#[derive(Debug)]
pub enum LaunchError {
    InterpreterNotFound {
        interpreter: String,
        platform: Platform,
        reason: String,
    },
    DependencyInstallFailed {
        package_manager: String,
        manifest: PathBuf,
        exit_code: Option<i32>,
        reason: String,
    },
    Other(anyhow::Error),
}

impl LaunchError {
    pub fn interpreter_not_found(
        interpreter: impl Into<String>,
        platform: Platform,
        reason: impl Into<String>,
    ) -> Self {
        Self::InterpreterNotFound {
            interpreter: interpreter.into(),
            platform,
            reason: reason.into(),
        }
    }

    pub fn dependency_install_failed(
        package_manager: impl Into<String>,
        manifest: impl Into<PathBuf>,
        exit_code: Option<i32>,
        reason: impl Into<String>,
    ) -> Self {
        Self::DependencyInstallFailed {
            package_manager: package_manager.into(),
            manifest: manifest.into(),
            exit_code,
            reason: reason.into(),
        }
    }

    /// Every launcher failure is fatal and exits with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InterpreterNotFound {
                interpreter,
                platform,
                reason,
            } => {
                writeln!(
                    f,
                    "{} {}",
                    "✗".red().bold(),
                    messages::INTERPRETER_NOT_FOUND.red().bold()
                )?;
                writeln!(f, "  {} {}: {}", "→".blue(), interpreter.yellow(), reason)?;
                writeln!(
                    f,
                    "  {} {}",
                    "→".blue(),
                    messages::install_interpreter_hint(
                        *platform,
                        &crate::interpreter::min_python_display()
                    )
                )?;
                for method in python_install_methods(*platform) {
                    writeln!(f, "  {} {}", "•".blue(), method.name.bold())?;
                    writeln!(f, "    {} {}", "$".cyan(), method.command)?;
                }
                Ok(())
            }
            Self::DependencyInstallFailed {
                package_manager,
                manifest,
                reason,
                ..
            } => {
                writeln!(
                    f,
                    "{} {}",
                    "✗".red().bold(),
                    messages::DEPENDENCY_INSTALL_FAILED.red().bold()
                )?;
                writeln!(
                    f,
                    "  {} {}: {}",
                    "→".blue(),
                    package_manager.yellow(),
                    reason
                )?;
                writeln!(
                    f,
                    "  {} {}",
                    "→".blue(),
                    messages::install_dependencies_hint(
                        package_manager,
                        &manifest.display().to_string()
                    )
                )?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {:#}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for LaunchError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
