use clap::Parser;
use devscripts::args::Args;
use devscripts::config::Config;
use devscripts::error::Result;
use devscripts::{logging, presentation};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init(args.log) {
        eprintln!("Failed to initialise logging: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let result = devscripts_engine::run(&config)?;

    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    let totals = result.totals();
    log::info!(
        "Counted {} files across {} extensions",
        result.files.len(),
        totals.len()
    );

    match &args.output.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            presentation::write_totals(&mut out, &totals, result.files.len(), args.output.format)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            presentation::write_totals(&mut out, &totals, result.files.len(), args.output.format)?;
        }
    }
    Ok(())
}
