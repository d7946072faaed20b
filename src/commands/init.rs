//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates a starter
//! `.classroom.yaml` roster in the current directory.
//!
//! Running `init` when a roster already exists is not an error: the
//! existing file is parsed and printed back, and left untouched. The file
//! therefore exists after `init` in both branches.

use std::path::Path;

use anyhow::Result;

use class_repo::config;
use class_repo::output::{emoji, OutputConfig};

/// Execute the `init` command.
pub fn execute(out: &OutputConfig) -> Result<()> {
    let path = Path::new(config::CONFIG_FILE);

    if path.exists() {
        // Idempotent: report the parsed roster instead of overwriting
        let classroom = config::from_file(path)?;
        println!(
            "{} {} already exists:",
            emoji(out, "📋", "[INFO]"),
            config::CONFIG_FILE
        );
        println!();
        print!("{}", config::to_yaml(&classroom)?);
        return Ok(());
    }

    config::save(&config::template(), path)?;
    println!(
        "{} Created {}",
        emoji(out, "✅", "[OK]"),
        config::CONFIG_FILE
    );
    println!(
        "{} Fill in the roster, then run `class-repo clone <assignment>`",
        emoji(out, "💡", "[HINT]")
    );
    Ok(())
}
