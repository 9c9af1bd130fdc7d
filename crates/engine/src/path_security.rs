//! Root path validation.
//!
//! Every root handed to the walker must exist and be a directory. A file
//! given as a root is reported as [`EngineError::NotADirectory`].

use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};

/// Validate a single walk root.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains null bytes
/// - The path cannot be stat'ed (doesn't exist, permission denied, etc.)
/// - The path exists but is not a directory
pub fn validate_root(path: &Path) -> Result<()> {
    if path.to_string_lossy().contains('\0') {
        return Err(EngineError::Config(format!(
            "Path contains null bytes: {}",
            path.display()
        )));
    }

    // Follows symlinks, so a link to a directory is an acceptable root.
    let meta = std::fs::metadata(path).map_err(|e| EngineError::RootAccess {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !meta.is_dir() {
        return Err(EngineError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Validate multiple roots at once, failing on the first bad one.
///
/// # Errors
///
/// Returns the error of the first root that fails [`validate_root`].
pub fn validate_roots(roots: &[PathBuf]) -> Result<()> {
    if roots.is_empty() {
        return Err(EngineError::Config("No root directories given".into()));
    }
    roots.iter().try_for_each(|root| validate_root(root))
}
