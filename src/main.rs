// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! skiff CLI - inspection tooling for the Skiff script loader
//!
//! Scans module files for their static `require()` dependencies and
//! resolves module ids against a loader configuration, using the same
//! front end the loader itself runs.

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use skiff_loader::{define::deps, paths, LoaderConfig, VERSION};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "skiff",
    about = "Inspection tooling for the Skiff script loader",
    version = VERSION,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the static require() dependencies of a module file
    Deps {
        /// Module file to scan
        file: PathBuf,

        /// Emit the dependency list as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Resolve a module id to its canonical URI
    Resolve {
        /// Module id to resolve
        id: String,

        /// Loader configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("skiff=debug,skiff_loader=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("skiff=warn,skiff_loader=warn")
            .init();
    }

    match cli.command {
        Commands::Deps { file, json } => {
            let found = scan_file(&file)?;

            if json {
                println!("{}", serde_json::to_string(&found)?);
            } else if found.is_empty() {
                eprintln!(
                    "{}: no static require() calls in {}",
                    "note".yellow().bold(),
                    file.display()
                );
            } else {
                for dep in &found {
                    println!("{}", dep);
                }
            }
        }
        Commands::Resolve { id, config } => {
            let config = match config {
                Some(path) => LoaderConfig::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => LoaderConfig::default(),
            };
            let base = config.base_url()?;
            println!("{}", paths::id2uri(&base, &config, &id));
        }
    }

    Ok(())
}

/// Read a module file and extract its static dependencies.
fn scan_file(file: &Path) -> anyhow::Result<Vec<String>> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("{}: failed to read {}", "error".red().bold(), file.display()))?;
    tracing::debug!("scanning {} ({} bytes)", file.display(), source.len());
    Ok(deps::extract(&source))
}
