//! Handler for `stubkit resolve`.

use miette::Result;

use stubkit_util::errors::StubkitError;

pub fn exec(base: &str, out: &str) -> Result<()> {
    let root = std::env::current_dir().map_err(StubkitError::Io)?;

    let rt = tokio::runtime::Runtime::new().map_err(|e| StubkitError::Generic {
        message: format!("Failed to start async runtime: {e}"),
    })?;

    rt.block_on(stubkit_ops::ops_resolve::resolve(
        &root,
        &root.join(base),
        &root.join(out),
    ))
}
