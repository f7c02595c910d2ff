//! # Lasrun Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Builds argument vectors for external executables and runs them without a
//! shell. Nothing here knows about LAStools flags; the toolbox commands and the
//! Potree pipeline assemble their `CommandLine` and hand it to a `Runner`.
//!
//! ## Architecture
//!
//! - **`CommandLine`**: program path plus ordered tokens. Tokens pushed with
//!   `path`/`path_arg` are marked as paths so the rendered command line can quote
//!   them the way the toolbox prints it; the child process always receives the
//!   raw, unquoted values.
//! - **`CaptureMode`**: `Console` inherits stdio, `Captured` sends stdout and
//!   stderr to one sink so the output keeps its interleaving.
//! - **`ExecutionResult`**: exit code (absent when killed by a signal) and the
//!   captured text.
//! - **`Runner`**: the seam between command construction and the OS, so tests
//!   can substitute a recording runner. `SystemRunner` is the real implementation.
//!
//! ## Usage
//!
//! ```rust
//! let mut cmd = CommandLine::new("/opt/lastools/bin/lasthin64");
//! cmd.path_arg("-i", "in.las").flag("-highest");
//! let result = SystemRunner.run(&cmd, CaptureMode::Captured)?;
//! ```
//!
use crate::core::error::{LasrunError, Result};
use anyhow::Context;
use std::fmt;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A single command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Plain(String),
    Path(String),
}

impl Token {
    fn as_str(&self) -> &str {
        match self {
            Token::Plain(s) | Token::Path(s) => s,
        }
    }
}

/// Ordered argument vector for an external executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    tokens: Vec<Token>,
}

impl CommandLine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            tokens: Vec::new(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Appends a bare token such as `-extra_pass` or a class code.
    pub fn flag(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(Token::Plain(token.into()));
        self
    }

    /// Appends a flag followed by a plain value.
    pub fn arg(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.flag(flag).flag(value)
    }

    /// Appends a path token, rendered quoted.
    pub fn path(&mut self, value: impl Into<String>) -> &mut Self {
        self.tokens.push(Token::Path(value.into()));
        self
    }

    /// Appends a flag followed by a path value.
    pub fn path_arg(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.flag(flag).path(value)
    }

    /// Appends each whitespace-separated word of `text` verbatim.
    pub fn split_words(&mut self, text: &str) -> &mut Self {
        for word in text.split_whitespace() {
            self.flag(word);
        }
        self
    }

    /// The raw arguments handed to the child process.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::as_str)
    }

    /// True when `window` appears as consecutive arguments.
    #[cfg(test)]
    pub fn contains_sequence(&self, window: &[&str]) -> bool {
        let args: Vec<&str> = self.args().collect();
        !window.is_empty() && args.windows(window.len()).any(|w| w == window)
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

/// Renders the command line the way the toolbox prints it: program and path
/// tokens in double quotes, everything else bare.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.program.display())?;
        for token in &self.tokens {
            match token {
                Token::Plain(s) => write!(f, " {}", s)?,
                Token::Path(s) => write!(f, " \"{}\"", s)?,
            }
        }
        Ok(())
    }
}

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Inherit stdio; nothing is captured.
    Console,
    /// stdout and stderr share one sink, returned as text.
    Captured,
}

/// Outcome of a single child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub output: String,
}

/// Runs a `CommandLine` to completion.
pub trait Runner {
    fn run(&self, command: &CommandLine, mode: CaptureMode) -> Result<ExecutionResult>;
}

/// Runs commands with `std::process::Command`, never through a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, command: &CommandLine, mode: CaptureMode) -> Result<ExecutionResult> {
        info!("Running {}", command);
        let mut child_cmd = command.to_command();
        let program = command.program().display().to_string();
        let spawn_err = |source| LasrunError::Spawn {
            program: program.clone(),
            source,
        };

        match mode {
            CaptureMode::Console => {
                let status = child_cmd.status().map_err(spawn_err)?;
                debug!("{} exited with {}", program, status);
                Ok(ExecutionResult {
                    code: status.code(),
                    output: String::new(),
                })
            }
            CaptureMode::Captured => {
                // Both streams write through clones of one file handle, so the
                // sink sees them in the order the child emitted them.
                let mut sink = tempfile::tempfile().context("Failed to create output sink")?;
                let stderr_sink = sink.try_clone().context("Failed to clone output sink")?;
                let stdout_sink = sink.try_clone().context("Failed to clone output sink")?;
                let status = child_cmd
                    .stdin(Stdio::null())
                    .stdout(Stdio::from(stdout_sink))
                    .stderr(Stdio::from(stderr_sink))
                    .status()
                    .map_err(spawn_err)?;
                debug!("{} exited with {}", program, status);

                let mut bytes = Vec::new();
                sink.seek(SeekFrom::Start(0))
                    .context("Failed to rewind output sink")?;
                sink.read_to_end(&mut bytes)
                    .context("Failed to read captured output")?;
                Ok(ExecutionResult {
                    code: status.code(),
                    output: String::from_utf8_lossy(&bytes).into_owned(),
                })
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_program_and_paths() {
        let mut cmd = CommandLine::new("/opt/lastools/bin/las2iso64");
        cmd.flag("-v").path_arg("-i", "in.las").arg("-keep_class", "2");
        assert_eq!(
            cmd.to_string(),
            "\"/opt/lastools/bin/las2iso64\" -v -i \"in.las\" -keep_class 2"
        );
        // The child never sees the quotes.
        assert_eq!(
            cmd.args().collect::<Vec<_>>(),
            vec!["-v", "-i", "in.las", "-keep_class", "2"]
        );
    }

    #[test]
    fn test_split_words_keeps_tokens_verbatim() {
        let mut cmd = CommandLine::new("lasthin64");
        cmd.split_words("  -keep_xy 0 0 10   10 -drop_z_below,3 ");
        assert_eq!(
            cmd.args().collect::<Vec<_>>(),
            vec!["-keep_xy", "0", "0", "10", "10", "-drop_z_below,3"]
        );
    }

    #[test]
    fn test_contains_sequence() {
        let mut cmd = CommandLine::new("x");
        cmd.arg("-keep_class", "2").flag("-extra_pass");
        assert!(cmd.contains_sequence(&["-keep_class", "2", "-extra_pass"]));
        assert!(!cmd.contains_sequence(&["-keep_class", "3"]));
        assert!(!cmd.contains_sequence(&[]));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_both_streams() -> Result<()> {
        let mut cmd = CommandLine::new("/bin/sh");
        cmd.arg("-c", "echo out; echo err 1>&2; exit 4");
        let result = SystemRunner.run(&cmd, CaptureMode::Captured)?;
        assert_eq!(result.code, Some(4));
        assert_eq!(result.output, "out\nerr\n");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_console_mode_has_no_output() -> Result<()> {
        let mut cmd = CommandLine::new("/bin/sh");
        cmd.arg("-c", "exit 0");
        let result = SystemRunner.run(&cmd, CaptureMode::Console)?;
        assert_eq!(result.code, Some(0));
        assert!(result.output.is_empty());
        Ok(())
    }

    #[test]
    fn test_system_runner_missing_program() {
        let cmd = CommandLine::new("/definitely/not/here/las2las64");
        let err = SystemRunner
            .run(&cmd, CaptureMode::Captured)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }
}
