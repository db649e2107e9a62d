//! Subprocess execution seam
//!
//! Every step of the launcher goes through [`ProcessRunner`], so the step
//! ordering and exit-code handling can be tested without a real interpreter.

use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A single subprocess call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.current_dir = dir;
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a subprocess ended. `code` is `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Output captured from a subprocess whose stdio is not shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub exit: ProcessExit,
    pub stdout: String,
    pub stderr: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run with inherited stdio and wait for completion.
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit>;

    /// Run with captured stdout/stderr and wait for completion.
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput>;
}

/// Runs real processes with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit> {
        tracing::debug!(command = %invocation, "Spawning process");

        let status = invocation
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to execute command: {}", invocation.program))?;

        Ok(ProcessExit {
            code: status.code(),
        })
    }

    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        tracing::debug!(command = %invocation, "Spawning process (captured)");

        let output = invocation
            .to_command()
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute command: {}", invocation.program))?;

        Ok(CapturedOutput {
            exit: ProcessExit {
                code: output.status.code(),
            },
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
