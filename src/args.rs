// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

/// `count_lines` arguments.
#[derive(Parser, Debug)]
#[command(
    name = "count_lines",
    version = crate::VERSION,
    about = "Recursively count lines of every file, totalled per extension"
)]
pub struct Args {
    /// Directories to scan (default: current directory)
    #[arg(value_hint = ValueHint::DirPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub log: LogOptions,
}

/// Traversal options
#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Maximum recursion depth (0 = roots only)
    #[arg(long, help_heading = "Scan")]
    pub max_depth: Option<usize>,

    /// Do not follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub no_follow: bool,

    /// Honour .gitignore/.ignore files and skip hidden entries
    #[arg(long, help_heading = "Scan")]
    pub git_ignore: bool,

    /// Counting threads (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 1, help_heading = "Scan")]
    pub jobs: usize,
}

/// Output options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(short, long, value_enum, default_value_t, help_heading = "Output")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

/// Error handling options
#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Skip unreadable or non-UTF-8 files instead of aborting
    #[arg(long, help_heading = "Behavior")]
    pub keep_going: bool,
}

/// Logging options shared by both tools
#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct LogOptions {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}

/// `gen_font_inc` arguments.
///
/// The font path is optional so that a bare invocation can print the usage
/// line and exit successfully.
#[derive(Parser, Debug)]
#[command(
    name = "gen_font_inc",
    version = crate::VERSION,
    about = "Print an 8x8 bitmap font file as rows of hex byte literals"
)]
pub struct FontArgs {
    /// 8x8 .fnt font file
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    /// Arguments after the font path are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Bytes per output row
    #[arg(
        long,
        default_value_t = devscripts_fontinc::BYTES_PER_ROW,
        value_parser = parsers::parse_positive_usize
    )]
    pub per_row: usize,

    #[command(flatten)]
    pub log: LogOptions,
}
