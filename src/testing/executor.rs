//! External command execution

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::common::{Error, Result};

/// Captured result of one external command
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs shell command lines
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str) -> Result<CommandOutput>;
}

/// Executes commands through the platform shell so globs expand
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    working_dir: PathBuf,
    /// Stream output to the terminal instead of capturing it
    inherit_output: bool,
}

impl ShellExecutor {
    pub fn new(working_dir: &Path, inherit_output: bool) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            inherit_output,
        }
    }

    fn shell_command(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> Result<CommandOutput> {
        tracing::debug!(command, dir = %self.working_dir.display(), "Executing");

        let mut cmd = Self::shell_command(command);
        cmd.current_dir(&self.working_dir).stdin(Stdio::null());

        if self.inherit_output {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(|e| Error::command_spawn(command, &e))?;
            return Ok(CommandOutput {
                success: status.success(),
                code: status.code(),
                ..CommandOutput::default()
            });
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::command_spawn(command, &e))?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_captures_output_and_status() {
        let dir = tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path(), false);

        let ok = executor.execute("echo hello").await.unwrap();
        assert!(ok.success);
        assert_eq!(ok.stdout.trim(), "hello");

        let failed = executor.execute("echo oops >&2; exit 3").await.unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(3));
        assert_eq!(failed.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn test_runs_in_working_dir_and_expands_globs() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a_test.dart"), "").unwrap();
        std::fs::write(dir.path().join("b_test.dart"), "").unwrap();
        let executor = ShellExecutor::new(dir.path(), false);

        let out = executor.execute("ls *_test.dart").await.unwrap();
        assert!(out.stdout.contains("a_test.dart"));
        assert!(out.stdout.contains("b_test.dart"));
    }
}
