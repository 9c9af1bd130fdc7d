use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::PathBuf;

/// Files discovered by [`walk`], plus the walk errors skipped in non-strict
/// mode.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Depth-first recursive walk over every root.
///
/// Standard ignore filters are off unless `git_ignore` is set, so hidden
/// files and ignored paths are visited too. Symlink cycles are detected by
/// the walker and skipped with a warning.
///
/// # Errors
///
/// In strict mode the first walk error (unreadable directory, broken link)
/// is returned. Otherwise errors are collected in [`WalkOutcome::errors`].
pub fn walk(options: &WalkOptions, strict: bool) -> Result<WalkOutcome> {
    let mut outcome = WalkOutcome::default();
    let Some((first, rest)) = options.roots.split_first() else {
        return Ok(outcome);
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .standard_filters(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_loop(&err) => {
                warn!("Skipping symlink cycle: {err}");
                continue;
            }
            Err(err) => {
                if strict {
                    return Err(err.into());
                }
                outcome.errors.push((error_path(&err), err.into()));
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }

        if file_type.is_file() {
            outcome.files.push(entry.into_path());
        } else if file_type.is_symlink() {
            debug!("Not following symlink {}", entry.path().display());
        } else {
            warn!("Skipping non-regular file {}", entry.path().display());
        }
    }

    debug!(
        "Walk found {} files under {} root(s)",
        outcome.files.len(),
        options.roots.len()
    );
    Ok(outcome)
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        ignore::Error::Partial(errs) => !errs.is_empty() && errs.iter().all(is_loop),
        _ => false,
    }
}

fn error_path(err: &ignore::Error) -> PathBuf {
    match err {
        ignore::Error::WithPath { path, .. } => path.clone(),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => PathBuf::from("<walk>"),
    }
}
