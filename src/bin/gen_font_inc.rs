use anyhow::Context;
use clap::Parser;
use devscripts::args::FontArgs;
use devscripts::{FONT_USAGE, logging};
use devscripts_fontinc::{ByteBuffer, write_rows};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = FontArgs::parse();
    if let Err(e) = logging::init(args.log) {
        eprintln!("Failed to initialise logging: {e}");
    }

    if !args.rest.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.rest);
    }

    let Some(path) = args.path.as_deref() else {
        println!("{FONT_USAGE}");
        return ExitCode::SUCCESS;
    };

    match run(path, args.per_row) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &std::path::Path, per_row: usize) -> anyhow::Result<()> {
    let buffer = ByteBuffer::load(path)?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_rows(&mut out, buffer.as_bytes(), per_row)
        .with_context(|| format!("writing rows for {}", buffer.path().display()))?;
    out.flush()?;
    Ok(())
}
