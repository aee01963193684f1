//! Filesystem helpers shared by the writers.

use std::path::Path;

use anyhow::{Context, Result};

/// Creates the parent directory of an output path if it does not exist.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
