// crates/engine/src/lib.rs
use log::debug;
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod path_security;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileLineCount, RunResult};

/// Run the line counting engine.
///
/// Returns a `RunResult` holding the line count of every file reached from
/// the configured roots. Aggregate it with [`RunResult::totals`].
///
/// # Errors
///
/// Invalid roots always fail. In strict mode (the default) the first walk or
/// file error aborts the run; otherwise failures are collected in
/// `RunResult::errors` and the remaining files are still counted.
pub fn run(config: &Config) -> Result<RunResult> {
    path_security::validate_roots(&config.walk.roots)?;

    let walked = filesystem::walk(&config.walk, config.strict)?;
    let mut result = RunResult {
        files: FileLineCount::with_capacity(walked.files.len()),
        errors: walked.errors,
    };

    let threads = config.effective_threads();
    let counted: Vec<(PathBuf, Result<usize>)> = if threads > 1 {
        debug!("Counting {} files on {threads} threads", walked.files.len());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        pool.install(|| {
            walked
                .files
                .into_par_iter()
                .map(|path| {
                    let lines = processor::count_file(&path);
                    (path, lines)
                })
                .collect()
        })
    } else {
        walked
            .files
            .into_iter()
            .map(|path| {
                let lines = processor::count_file(&path);
                (path, lines)
            })
            .collect()
    };

    merge_counts(&mut result, counted, config.strict)?;
    Ok(result)
}

fn merge_counts(
    result: &mut RunResult,
    counted: Vec<(PathBuf, Result<usize>)>,
    strict: bool,
) -> Result<()> {
    for (path, lines) in counted {
        match lines {
            Ok(lines) => {
                result.files.insert(path, lines);
            }
            Err(e) if strict => return Err(e),
            Err(e) => result.errors.push((path, e)),
        }
    }
    Ok(())
}

/// Convenience wrapper: count `roots` strictly and return only the per-file
/// counts.
///
/// # Errors
///
/// See [`run`].
pub fn count_roots(roots: Vec<PathBuf>) -> Result<FileLineCount> {
    let walk = config::WalkOptionsBuilder::default()
        .roots(roots)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;
    let config = config::ConfigBuilder::default()
        .walk(walk)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;
    Ok(run(&config)?.files)
}
