//! Load `.chunkcopy.toml` from a directory (CLI only). Lib callers pass [`CopyOpts`](crate::CopyOpts) directly.

use serde::Deserialize;
use std::path::Path;

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct ChunkcopyToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    chunk_bytes: Option<usize>,
    avg_line_bytes: Option<usize>,
    verbose: Option<bool>,
    threaded: Option<bool>,
}

/// Parse config text. Errors are returned so the caller decides whether to warn.
pub fn parse_chunkcopy_toml(s: &str) -> Result<ChunkcopyToml, toml::de::Error> {
    toml::from_str(s)
}

/// Load the config file from `dir` if present. Returns None if missing, unreadable or malformed (malformed is logged).
pub fn load_chunkcopy_toml(dir: &Path) -> Option<ChunkcopyToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    parse_chunkcopy_toml(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $sec.$field {
            $opts.$field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_opts(file: &ChunkcopyToml, opts: &mut Opts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, chunk_bytes);
    apply_file_opt!(sec, opts, avg_line_bytes);
    apply_file_opt!(sec, opts, verbose);
    apply_file_opt!(sec, opts, threaded);
}
