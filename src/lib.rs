//! Precompress: build-time gzip and brotli compression for static sites
//!
//! This library walks a site output directory and writes a `.gz` and a `.br`
//! sibling next to every compressible text asset, so a web server can serve
//! pre-built variants instead of compressing on the fly.

use std::path::PathBuf;

pub mod cli;
pub mod compressor;
pub mod error;
pub mod stats;
pub mod walker;

pub use error::CompressError;

/// Result type for precompress operations
pub type Result<T> = std::result::Result<T, CompressError>;

/// Configuration for a compression run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to walk
    pub root: PathBuf,
    /// Show progress spinner
    pub show_progress: bool,
    /// Verbose output
    pub verbose: bool,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(constants::DEFAULT_ROOT),
            show_progress: true,
            verbose: false,
            follow_links: false,
        }
    }
}

/// Constants used throughout the library
pub mod constants {
    /// Conventional site output directory, used when no root is given
    pub const DEFAULT_ROOT: &str = "_site";
    /// Extensions considered compressible, matched case-insensitively
    pub const COMPRESSIBLE_EXTENSIONS: [&str; 8] =
        ["html", "css", "js", "xml", "json", "svg", "txt", "md"];
    /// Suffixes of artifacts this tool produces; never re-compressed
    pub const ARTIFACT_SUFFIXES: [&str; 2] = ["gz", "br"];
    /// Gzip compression level (maximum)
    pub const GZIP_LEVEL: u32 = 9;
    /// Brotli quality (maximum)
    pub const BROTLI_QUALITY: i32 = 11;
}
