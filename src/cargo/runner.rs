//! Runner trait for the Cargo subcommands the audit reads from

use std::path::{Path, PathBuf};
use std::process::Stdio;

#[cfg(test)]
use mockall::automock;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::cargo::error::CargoError;

/// Trait for invoking Cargo and capturing its output
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CargoRunner: Send + Sync {
    /// Runs `cargo metadata --no-deps` and returns its JSON document
    ///
    /// # Arguments
    /// * `manifest_path` - Manifest to inspect; `None` lets Cargo discover it
    async fn metadata<'a>(&self, manifest_path: Option<&'a Path>) -> Result<String, CargoError>;

    /// Runs `cargo tree` with ASCII rendering and returns its output
    ///
    /// Fails if Cargo exits unsuccessfully, even when it already printed
    /// part of a tree.
    async fn tree<'a>(&self, manifest_path: Option<&'a Path>) -> Result<String, CargoError>;
}

/// Runner that spawns the `cargo` executable
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    /// Creates a runner for the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses `$CARGO` when set (as it is under `cargo run`), otherwise `cargo`
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into()))
    }

    fn args(subcommand: &[&str], manifest_path: Option<&Path>) -> Vec<String> {
        let mut args: Vec<String> = subcommand.iter().map(|s| s.to_string()).collect();
        if let Some(path) = manifest_path {
            args.push(format!("--manifest-path={}", path.display()));
        }
        args
    }

    fn command_line(&self, args: &[String]) -> String {
        format!("{} {}", self.program.display(), args.join(" "))
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait::async_trait]
impl CargoRunner for ProcessRunner {
    async fn metadata<'a>(&self, manifest_path: Option<&'a Path>) -> Result<String, CargoError> {
        let args = Self::args(
            &["metadata", "--format-version=1", "--no-deps", "--all-features"],
            manifest_path,
        );
        let command = self.command_line(&args);
        debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CargoError::Io {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} exited with {}", command, output.status);
            return Err(CargoError::CommandFailed {
                command,
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn tree<'a>(&self, manifest_path: Option<&'a Path>) -> Result<String, CargoError> {
        let args = Self::args(&["tree", "--all-features", "--charset", "ascii"], manifest_path);
        let command = self.command_line(&args);
        debug!("Running {}", command);

        let io_error = |source: std::io::Error| CargoError::Io {
            command: command.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(io_error)?;

        let (Some(stdout), Some(mut stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(io_error(std::io::Error::other("child output was not captured")));
        };

        // Drained separately so a chatty stderr cannot block stdout
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf).await.map(|_| buf)
        });

        let mut output = String::new();
        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await.map_err(io_error)? {
            trace!("cargo tree: {}", line);
            output.push_str(&line);
            output.push('\n');
        }

        let status = child.wait().await.map_err(io_error)?;
        let stderr = stderr_task
            .await
            .map_err(|e| io_error(std::io::Error::other(e)))?
            .map_err(io_error)?;

        if !status.success() {
            warn!("{} exited with {}", command, status);
            return Err(CargoError::CommandFailed {
                command,
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}
