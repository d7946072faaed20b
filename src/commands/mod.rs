//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `class-repo` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! Each command module typically contains an `Args` struct derived with
//! `clap` and an `execute` function that performs the command's logic by
//! calling into the `class_repo` library.

pub mod clone;
pub mod init;
pub mod pull;
pub mod sync;

use std::path::Path;

use anyhow::Result;

use class_repo::config::{self, Classroom};
use class_repo::output::{emoji, OutputConfig};

/// Load `.classroom.yaml` from the current directory.
///
/// A missing file is not an error: the user gets a pointer to `init` and
/// the caller aborts its operation cleanly with `None`. A file that exists
/// but fails to parse is fatal.
pub(crate) fn load_classroom(out: &OutputConfig) -> Result<Option<Classroom>> {
    let path = Path::new(config::CONFIG_FILE);
    if !path.exists() {
        println!(
            "{} No {} found in the current directory",
            emoji(out, "❌", "[ERROR]"),
            config::CONFIG_FILE
        );
        println!(
            "{} Run `class-repo init` to create one",
            emoji(out, "💡", "[HINT]")
        );
        return Ok(None);
    }

    Ok(Some(config::from_file(path)?))
}
