//! # Sync Command Implementation
//!
//! Placeholder for reconciling each student's fork with the upstream
//! starter-code repository. The roster is loaded so a missing config is
//! reported the same way as for `clone`/`pull`, but no git commands run.

use anyhow::Result;
use clap::Args;

use class_repo::batch;
use class_repo::output::OutputConfig;

/// Reconcile student forks with the starter repository (not implemented)
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Assignment whose student forks would be reconciled
    pub assignment: String,
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs, out: &OutputConfig) -> Result<()> {
    let Some(classroom) = super::load_classroom(out)? else {
        return Ok(());
    };

    batch::sync_assignment(&classroom, &args.assignment, out)?;
    Ok(())
}
