//! # Batch Operations
//!
//! The roster-driven loops behind `clone`, `pull`, and `sync`. Each
//! operation walks the roster in file order, builds one git command per
//! non-skipped student, and keeps going past individual failures: one
//! student's broken repository must never abort the rest of the class.
//!
//! Every student counts toward the total, including skipped ones, and each
//! run ends with a `<succeeded> out of <total> in <elapsed>s` summary line.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::config::{Classroom, Student};
use crate::error::Result;
use crate::output::{emoji, OutputConfig};
use crate::runner::{CommandLine, Runner};

/// Outcome of one batch run over the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Students considered, including skipped ones.
    pub total: usize,
    /// Students whose command exited 0.
    pub succeeded: usize,
    /// Wall-clock duration of the whole batch.
    pub elapsed: Duration,
}

/// Restores the saved working directory when dropped, on every exit path.
struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new() -> std::io::Result<Self> {
        Ok(Self {
            original: env::current_dir()?,
        })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(
                "could not restore working directory {}: {}",
                self.original.display(),
                e
            );
        }
    }
}

/// Remote repository URL for one student's assignment submission.
fn clone_url(organization: &str, assignment: &str, student: &Student) -> String {
    format!(
        "https://github.com/{}/{}-{}",
        organization, assignment, student.github
    )
}

/// Clone every non-skipped student's repository for `assignment`.
///
/// Any pre-existing local `<assignment>` directory is deleted first, so a
/// re-run always produces a clean set of checkouts. Each repository lands
/// in `<assignment>/<student-key>`.
pub fn clone_assignment(
    classroom: &Classroom,
    assignment: &str,
    runner: &dyn Runner,
    out: &OutputConfig,
) -> Result<BatchSummary> {
    let start = Instant::now();

    let assignment_dir = Path::new(assignment);
    if assignment_dir.exists() {
        debug!("removing existing {} directory", assignment);
        fs::remove_dir_all(assignment_dir)?;
    }

    let mut total = 0;
    let mut succeeded = 0;
    for (key, student) in &classroom.roster {
        total += 1;
        if student.skip {
            println!("{} {} (skipped)", emoji(out, "⏭️ ", "[SKIP]"), key);
            continue;
        }

        println!("{} {} ({})", emoji(out, "📦", "[CLONE]"), key, student.name);
        let cmd = CommandLine::new("git")
            .arg("clone")
            .arg(clone_url(&classroom.organization, assignment, student))
            .arg(format!("{}/{}", assignment, key));
        match runner.run(&cmd) {
            Ok(true) => succeeded += 1,
            Ok(false) => println!(
                "{} {} (clone failed, skipping)",
                emoji(out, "⚠️ ", "[FAIL]"),
                key
            ),
            Err(e) => println!("{} {} ({}, skipping)", emoji(out, "⚠️ ", "[FAIL]"), key, e),
        }
    }

    let summary = BatchSummary {
        total,
        succeeded,
        elapsed: start.elapsed(),
    };
    print_summary(&summary, out);
    Ok(summary)
}

/// Pull every non-skipped student repository previously cloned for
/// `assignment`.
///
/// A student with no local clone (or a directory without `.git` metadata)
/// is reported as skipped, not failed. The pull runs with the student's
/// repository as the working directory; the original directory is restored
/// when the batch finishes, however it finishes.
pub fn pull_assignment(
    classroom: &Classroom,
    assignment: &str,
    runner: &dyn Runner,
    out: &OutputConfig,
) -> Result<BatchSummary> {
    let start = Instant::now();
    let guard = CwdGuard::new()?;

    let mut total = 0;
    let mut succeeded = 0;
    for (key, student) in &classroom.roster {
        total += 1;
        if student.skip {
            println!("{} {} (skipped)", emoji(out, "⏭️ ", "[SKIP]"), key);
            continue;
        }

        let repo_dir = guard.original.join(assignment).join(key);
        if !repo_dir.join(".git").is_dir() {
            println!(
                "{} {} (no local clone, skipped)",
                emoji(out, "⏭️ ", "[SKIP]"),
                key
            );
            continue;
        }

        println!("{} {} ({})", emoji(out, "🔄", "[PULL]"), key, student.name);
        if let Err(e) = env::set_current_dir(&repo_dir) {
            println!("{} {} ({}, skipping)", emoji(out, "⚠️ ", "[FAIL]"), key, e);
            continue;
        }
        match runner.run(&CommandLine::new("git").arg("pull")) {
            Ok(true) => succeeded += 1,
            Ok(false) => println!(
                "{} {} (pull failed, skipping)",
                emoji(out, "⚠️ ", "[FAIL]"),
                key
            ),
            Err(e) => println!("{} {} ({}, skipping)", emoji(out, "⚠️ ", "[FAIL]"), key, e),
        }
    }

    // Back to the original directory before reporting
    drop(guard);

    let summary = BatchSummary {
        total,
        succeeded,
        elapsed: start.elapsed(),
    };
    print_summary(&summary, out);
    Ok(summary)
}

/// Reconcile every student's fork with the upstream starter repository.
///
/// Not implemented. The intended behavior is to fetch the starter repo and
/// fast-forward each student fork's default branch; the conflict policy for
/// diverged forks is still undecided, so for now the command only reports
/// itself as a stub.
// TODO: implement fork reconciliation once the diverged-fork policy is settled
pub fn sync_assignment(classroom: &Classroom, assignment: &str, out: &OutputConfig) -> Result<()> {
    println!(
        "{} sync is not implemented yet; {} student repositories for {} were left untouched",
        emoji(out, "🚧", "[TODO]"),
        classroom.roster.len(),
        assignment
    );
    Ok(())
}

fn print_summary(summary: &BatchSummary, out: &OutputConfig) {
    println!(
        "{} {} out of {} in {:.2}s",
        emoji(out, "✅", "[DONE]"),
        summary.succeeded,
        summary.total,
        summary.elapsed.as_secs_f64()
    );
}
