//! # Pull Command Implementation
//!
//! This module implements the `pull` subcommand: run `git pull` in every
//! previously cloned, non-skipped student repository for an assignment.
//! Students without a local clone are reported as skipped.

use anyhow::Result;
use clap::Args;

use class_repo::batch;
use class_repo::output::{emoji, OutputConfig};
use class_repo::runner::StreamRunner;

/// Pull every previously cloned student repository for an assignment
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Assignment name; clones are expected under `<assignment>/<student-key>`
    pub assignment: String,
}

/// Execute the `pull` command.
pub fn execute(args: PullArgs, out: &OutputConfig) -> Result<()> {
    let Some(classroom) = super::load_classroom(out)? else {
        return Ok(());
    };

    println!(
        "{} Pulling {} for {} students",
        emoji(out, "🔄", "[PULL]"),
        args.assignment,
        classroom.roster.len()
    );

    batch::pull_assignment(&classroom, &args.assignment, &StreamRunner, out)?;
    Ok(())
}
