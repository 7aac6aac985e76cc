pub mod chunkcopy_toml;
pub mod config;
pub mod logger;

pub use chunkcopy_toml::{apply_file_to_opts, load_chunkcopy_toml, parse_chunkcopy_toml};
pub use config::*;
pub use logger::setup_logging;
