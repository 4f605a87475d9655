//! Handler for `stubkit generate`.

use miette::Result;

use stubkit_util::errors::StubkitError;

pub fn exec(packages: &str, clean: bool) -> Result<()> {
    let root = std::env::current_dir().map_err(StubkitError::Io)?;
    stubkit_ops::ops_generate::generate(&root, &root.join(packages), clean)
}
