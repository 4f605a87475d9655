//! Handler for `stubkit cache`.

use miette::Result;

use crate::cli::CacheAction;
use stubkit_util::errors::StubkitError;

pub fn exec(action: CacheAction) -> Result<()> {
    let root = std::env::current_dir().map_err(StubkitError::Io)?;
    match action {
        CacheAction::Stats => stubkit_ops::ops_cache::stats(&root),
        CacheAction::Clean => stubkit_ops::ops_cache::clean(&root),
    }
}
