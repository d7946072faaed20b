//! # Clone Command Implementation
//!
//! This module implements the `clone` subcommand: wipe any previous local
//! checkout of the assignment, then clone every non-skipped student's
//! repository into `<assignment>/<student-key>`.

use anyhow::Result;
use clap::Args;

use class_repo::batch;
use class_repo::output::{emoji, OutputConfig};
use class_repo::runner::StreamRunner;

/// Clone every student's repository for an assignment
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Assignment name; remote repos are named `<assignment>-<github-handle>`
    pub assignment: String,
}

/// Execute the `clone` command.
pub fn execute(args: CloneArgs, out: &OutputConfig) -> Result<()> {
    let Some(classroom) = super::load_classroom(out)? else {
        return Ok(());
    };

    println!(
        "{} Cloning {} for {} students from {}",
        emoji(out, "📦", "[CLONE]"),
        args.assignment,
        classroom.roster.len(),
        classroom.organization
    );

    batch::clone_assignment(&classroom, &args.assignment, &StreamRunner, out)?;
    Ok(())
}
