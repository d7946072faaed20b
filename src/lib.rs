//! # Classroom Repository Library
//!
//! Core functionality for the `class-repo` command-line tool: a typed model
//! of the `.classroom.yaml` roster, explicit YAML serialization, a
//! tokenized subprocess runner, and the roster-driven batch git operations.
//!
//! ## Quick Example
//!
//! ```
//! use class_repo::config;
//!
//! let yaml = r#"
//! organization: my-org
//! classroom: systems-101
//! roster:
//!   ada:
//!     name: Ada Lovelace
//!     email: ada@example.edu
//!     github: ada-lovelace
//! "#;
//!
//! let classroom = config::parse(yaml).unwrap();
//! assert_eq!(classroom.organization, "my-org");
//! assert!(!classroom.roster["ada"].skip);
//! ```
//!
//! ## Execution Flow
//!
//! 1. The CLI loads `.classroom.yaml` into a [`config::Classroom`].
//! 2. A batch operation ([`batch`]) walks the roster in file order and
//!    builds one git command per non-skipped student.
//! 3. [`runner::StreamRunner`] spawns each command, relaying its stdout to
//!    the console as it arrives.
//! 4. The batch loop aggregates a [`batch::BatchSummary`] and reports
//!    `<succeeded> out of <total>`; individual failures never abort a run.

pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;
