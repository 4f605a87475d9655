//! CLI argument definitions for stubkit.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "stubkit",
    version,
    about = "Stub generation pipeline for Maven and Android platform packages",
    long_about = "stubkit resolves the transitive dependency closure of a seed list of \
                  Maven coordinates, enumerates every stable published version per \
                  artifact, and drives an external stub generator for each coordinate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve transitive dependencies of the seed list
    Resolve {
        /// Seed packages file
        #[arg(long, default_value = "packages-0-base.txt")]
        base: String,
        /// Output file for the resolved list
        #[arg(long, default_value = "packages-1-resolved.txt")]
        out: String,
    },

    /// Enumerate all stable published versions per artifact
    Versions {
        /// Input packages file
        #[arg(long, default_value = "packages-1-resolved.txt")]
        base: String,
        /// Output file for the full version list
        #[arg(long, default_value = "packages-2-all.txt")]
        out: String,
    },

    /// Generate stub packages for every coordinate
    Generate {
        /// Input packages file
        #[arg(long, default_value = "packages-2-all.txt")]
        packages: String,
        /// Delete the autogen directory before generating
        #[arg(long)]
        clean: bool,
    },

    /// Manage the POM cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show cache location and size
    Stats,
    /// Delete the cache directory
    Clean,
}

pub fn parse() -> Cli {
    Cli::parse()
}
