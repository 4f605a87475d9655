//! Command dispatch and handler modules.

mod cache;
mod generate;
mod resolve;
mod versions;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve { base, out } => resolve::exec(&base, &out),
        Command::Versions { base, out } => versions::exec(&base, &out),
        Command::Generate { packages, clean } => generate::exec(&packages, clean),
        Command::Cache { action } => cache::exec(action),
    }
}
