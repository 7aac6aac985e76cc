//! Config tests: `.chunkcopy.toml` parsing and CLI precedence.

use chunkcopy::engine::{Cli, handle_run, resolve_opts};
use chunkcopy::utils::{ChunkConsts, apply_file_to_opts, parse_chunkcopy_toml};
use chunkcopy::{CopyOpts, Opts};
use clap::Parser;
use std::fs;

#[test]
fn test_defaults() {
    let opts = Opts::default();
    assert_eq!(opts.chunk_bytes, ChunkConsts::CHUNK_BYTES);
    assert_eq!(opts.avg_line_bytes, ChunkConsts::AVG_LINE_BYTES);
    assert!(!opts.verbose);
    assert!(!opts.threaded);
}

#[test]
fn test_file_overrides_only_present_fields() {
    let file =
        parse_chunkcopy_toml("[settings]\nchunk_bytes = 4096\nthreaded = true\n").unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);

    assert_eq!(opts.chunk_bytes, 4096);
    assert!(opts.threaded);
    assert_eq!(opts.avg_line_bytes, ChunkConsts::AVG_LINE_BYTES);
    assert!(!opts.verbose);
}

#[test]
fn test_file_without_settings_table() {
    let file = parse_chunkcopy_toml("").unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.chunk_bytes, ChunkConsts::CHUNK_BYTES);
}

#[test]
fn test_malformed_file_is_error() {
    assert!(parse_chunkcopy_toml("[settings]\nchunk_bytes = \"big\"\n").is_err());
}

#[test]
fn test_cli_defaults_paths() {
    let cli = Cli::parse_from(["chunkcopy"]);
    assert_eq!(cli.source.to_str(), Some("data.csv"));
    assert_eq!(cli.destination.to_str(), Some("data_copy.csv"));
}

#[test]
fn test_cli_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".chunkcopy.toml"),
        "[settings]\nchunk_bytes = 4096\navg_line_bytes = 64\nverbose = true\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "chunkcopy",
        "in.txt",
        "out.txt",
        "--chunk-bytes",
        "1000",
        "--threaded",
    ]);
    let opts = resolve_opts(&cli, dir.path());

    assert_eq!(opts.chunk_bytes, 1000);
    assert_eq!(opts.avg_line_bytes, 64);
    assert!(opts.verbose);
    assert!(opts.threaded);
    assert_eq!(CopyOpts::from(&opts).lines_per_chunk(), 15);
}

#[test]
fn test_missing_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::parse_from(["chunkcopy", "in.txt", "out.txt"]);
    let opts = resolve_opts(&cli, dir.path());

    assert_eq!(opts.chunk_bytes, ChunkConsts::CHUNK_BYTES);
    assert!(!opts.threaded);
}

// --- handle_run ---

#[test]
fn test_handle_run_reports_outcome_as_bool() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.txt");
    let dst = dir.path().join("dst.txt");
    let missing = dir.path().join("missing.txt");
    fs::write(&src, "Line 1\n").unwrap();

    let ok = Cli::parse_from([
        "chunkcopy",
        src.to_str().unwrap(),
        dst.to_str().unwrap(),
    ]);
    assert!(handle_run(&ok).unwrap());
    assert_eq!(fs::read_to_string(&dst).unwrap(), "Line 1\n");

    // Failure is already logged by the pipeline; no Err to print twice.
    let failed = Cli::parse_from([
        "chunkcopy",
        missing.to_str().unwrap(),
        dst.to_str().unwrap(),
    ]);
    assert!(!handle_run(&failed).unwrap());
}
