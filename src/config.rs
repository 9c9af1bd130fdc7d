// src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use devscripts_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use std::path::PathBuf;

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(args)?;

        Ok(ConfigBuilder::default()
            .walk(walk)
            .threads(args.scan.jobs)
            .strict(!args.behavior.keep_going)
            .build()?)
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let scan = &args.scan;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    Ok(WalkOptionsBuilder::default()
        .roots(roots)
        .follow_links(!scan.no_follow)
        .max_depth(scan.max_depth)
        .git_ignore(scan.git_ignore)
        .build()?)
}
