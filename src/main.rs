//! Chunkcopy CLI: copy SOURCE to DEST in bounded-size chunks and report the elapsed time.

use anyhow::Result;
use chunkcopy::engine::arg_parser::Cli;
use chunkcopy::engine::handle_run;
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> Result<ExitCode> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    let copied = handle_run(&cli)?;
    println!(
        "File read, processed, and written in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(if copied {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
