//! Application configuration constants.
//! Chunk sizing and package-derived names in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// File config name looked up in the working directory (e.g. `.chunkcopy.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Chunking ----

/// Chunk sizing defaults.
pub struct ChunkConsts;

impl ChunkConsts {
    /// Target chunk size (bytes). 8 MB.
    pub const CHUNK_BYTES: usize = 8 * 1024 * 1024;
    /// Estimated average line size (bytes). Lines per chunk = CHUNK_BYTES / AVG_LINE_BYTES.
    pub const AVG_LINE_BYTES: usize = 100;
    /// Placeholder chunk the reader emits for an empty source when the sentinel is enabled.
    pub const EMPTY_SENTINEL: &'static str = "Empty File";
}

// ---- I/O buffers ----

/// Buffer sizes for the source and destination handles.
pub struct BufferConsts;

impl BufferConsts {
    /// Read buffer for the source handle (bytes). 1 MB.
    pub const READ_BUFFER_SIZE: usize = 1024 * 1024;
    /// Write buffer for the destination handle (bytes). 1 MB. Chunks larger than this bypass it.
    pub const WRITE_BUFFER_SIZE: usize = 1024 * 1024;
}

// ---- CLI defaults ----

pub struct DefaultPaths;

impl DefaultPaths {
    pub const SOURCE: &'static str = "data.csv";
    pub const DESTINATION: &'static str = "data_copy.csv";
}
