//! # Roster Configuration
//!
//! This module defines the data structures that represent the
//! `.classroom.yaml` roster file, together with explicit serialization
//! functions for reading and writing it.
//!
//! ## Schema
//!
//! ```yaml
//! organization: your-github-org
//! classroom: systems-101
//! roster:
//!   ada:
//!     name: Ada Lovelace
//!     email: ada@example.edu
//!     github: ada-lovelace
//!     skip: false
//! ```
//!
//! The roster key (`ada` above) is a short local identifier chosen by the
//! instructor; it names the per-student directory and is independent of the
//! student's GitHub handle. The roster is an [`IndexMap`], so the order
//! students are written in the file is the order every batch operation
//! visits them in, and a load/save round trip preserves it.
//!
//! The file is the single source of truth: `clone`/`pull`/`sync` only ever
//! read it, and `init` refuses to overwrite an existing one.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the roster file, looked up in the invocation directory.
pub const CONFIG_FILE: &str = ".classroom.yaml";

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Full display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// GitHub username; forms the remote repository name suffix.
    pub github: String,
    /// When true, every batch operation bypasses this student while still
    /// counting them toward the total.
    #[serde(default)]
    pub skip: bool,
}

/// A classroom: the GitHub organization, a display name, and the roster.
///
/// Field declaration order here is the serialization order in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// GitHub organization that owns the student repositories.
    pub organization: String,
    /// Human-readable classroom name.
    pub classroom: String,
    /// Student key to student record, in file order.
    #[serde(default)]
    pub roster: IndexMap<String, Student>,
}

/// Starter classroom written by `init`: one example student, not skipped.
pub fn template() -> Classroom {
    let mut roster = IndexMap::new();
    roster.insert(
        "ada".to_string(),
        Student {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.edu".to_string(),
            github: "ada-lovelace".to_string(),
            skip: false,
        },
    );

    Classroom {
        organization: "your-github-org".to_string(),
        classroom: "systems-101".to_string(),
        roster,
    }
}

/// Parse a classroom from YAML text.
pub fn parse(yaml: &str) -> Result<Classroom> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a classroom from a roster file on disk.
///
/// Malformed YAML and missing required fields are both fatal; callers are
/// expected to check for the file's existence first and treat absence as
/// "operation aborted" rather than an error.
pub fn from_file(path: &Path) -> Result<Classroom> {
    let contents = fs::read_to_string(path)?;
    parse(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a classroom to YAML text.
pub fn to_yaml(classroom: &Classroom) -> Result<String> {
    Ok(serde_yaml::to_string(classroom)?)
}

/// Write a classroom to a roster file on disk.
pub fn save(classroom: &Classroom, path: &Path) -> Result<()> {
    fs::write(path, to_yaml(classroom)?)?;
    Ok(())
}
