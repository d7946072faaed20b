//! # Subprocess Execution
//!
//! External commands are built as explicit argument vectors
//! ([`CommandLine`]) and executed through the [`Runner`] trait. Building
//! argv directly, instead of concatenating a shell string, means filenames
//! and URLs containing spaces pass through as single arguments and nothing
//! is ever re-tokenized by a shell.
//!
//! The production implementation, [`StreamRunner`], spawns the system git
//! binary, so credential helpers, SSH keys, tokens, and everything else
//! configured in the ambient git setup apply without this tool knowing
//! about authentication at all.
//!
//! Execution is synchronous: the child's stdout is drained line by line
//! before the call returns. Stderr is inherited, so git's own progress and
//! error reporting reaches the terminal untouched.

use std::fmt;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// A fully tokenized external command: program plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Start building a command for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument. Never split or quoted; spaces survive intact.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    /// Shell-readable rendering for log and error messages only; execution
    /// always goes through the argv form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.chars().any(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Executes a [`CommandLine`] and reports whether it succeeded.
///
/// Batch loops depend on this trait rather than on [`StreamRunner`] so
/// tests can substitute a recording implementation and assert which
/// commands would have been spawned.
pub trait Runner {
    /// Run the command to completion. `Ok(true)` iff the exit code is
    /// exactly 0; spawn failures are errors, non-zero exits are not.
    fn run(&self, cmd: &CommandLine) -> Result<bool>;
}

/// Runs commands on the real system, relaying stdout as it arrives.
#[derive(Debug, Default)]
pub struct StreamRunner;

impl Runner for StreamRunner {
    fn run(&self, cmd: &CommandLine) -> Result<bool> {
        debug!("running {}", cmd);

        let mut child = Command::new(cmd.program())
            .args(cmd.args())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                command: cmd.to_string(),
                source,
            })?;

        // Relay each line as it is produced rather than buffering until
        // exit, so long clones show progress. stdout was piped above.
        let stdout = child.stdout.take().expect("child stdout was piped");
        for line in BufReader::new(stdout).lines() {
            println!("{}", line?.trim_end());
        }

        let status = child.wait()?;
        Ok(status.code() == Some(0))
    }
}
