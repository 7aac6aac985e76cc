//! CLI command handler: merge config file and flags, run the copy, report the outcome.

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::engine::arg_parser::Cli;
use crate::engine::progress::{finish_progress_bar, progress_callback, setup_progress};
use crate::pipeline::run;
use crate::utils::{apply_file_to_opts, load_chunkcopy_toml, setup_logging};
use crate::{CopyOpts, CopyOutcome, Opts};

/// Overwrite opts field from CLI when the flag was given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $cli.$field {
            $opts.$field = v;
        }
    };
}

/// Defaults, then `.chunkcopy.toml` in `config_dir`, then CLI flags.
pub fn resolve_opts(cli: &Cli, config_dir: &Path) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = load_chunkcopy_toml(config_dir) {
        apply_file_to_opts(&file, &mut opts);
    }
    apply_cli_opt!(cli, opts, chunk_bytes);
    apply_cli_opt!(cli, opts, avg_line_bytes);
    apply_cli_opt!(cli, opts, verbose);
    apply_cli_opt!(cli, opts, threaded);
    opts
}

/// Run one copy. Returns whether it succeeded; a failure has already been logged by the
/// pipeline, so it is not reported again here.
pub fn handle_run(cli: &Cli) -> Result<bool> {
    let opts = resolve_opts(cli, Path::new("."));
    setup_logging(opts.verbose);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let source_len = std::fs::metadata(&cli.source).map(|m| m.len()).unwrap_or(0);
    let bar = setup_progress(opts.verbose && source_len > 0, source_len);
    let copy_opts = CopyOpts {
        on_chunk: progress_callback(&bar),
        ..CopyOpts::from(&opts)
    };

    match run(&cli.source, &cli.destination, copy_opts) {
        CopyOutcome::Copied(report) => {
            if let Some(bar) = &bar {
                finish_progress_bar(bar);
            }
            debug!("{} chunks, {} bytes", report.chunks, report.bytes);
            Ok(true)
        }
        CopyOutcome::EmptySource => {
            debug!("Source was empty");
            Ok(true)
        }
        CopyOutcome::Failed(_) => Ok(false),
    }
}
