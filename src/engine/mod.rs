//! Engine module: chunk reader and writer, plus CLI plumbing

pub mod arg_parser;
pub mod cli;
pub mod progress;
pub mod reader;
pub mod writer;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::{handle_run, resolve_opts};
pub use reader::{ChunkReader, Chunks, validate_source_path};
pub use writer::ChunkWriter;
