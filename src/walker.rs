use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::compressor::Compressor;
use crate::constants::{ARTIFACT_SUFFIXES, COMPRESSIBLE_EXTENSIONS};
use crate::stats::RunStats;
use crate::{Config, Result};

/// Walks a directory tree and compresses every eligible file.
///
/// Traversal is depth-first in directory-listing order, one file at a
/// time; each file is fully compressed before the next entry is visited.
/// The first error aborts the remaining walk.
pub struct Walker {
    config: Config,
}

impl Walker {
    /// Creates a walker for the configured root
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the walk, dispatching eligible files to `compressor`.
    ///
    /// Prints one confirmation line per processed file and returns
    /// aggregate statistics for the run. Symbolic links are skipped
    /// unless the config opts into following them; directories, FIFOs,
    /// sockets and other non-regular entries are never compression
    /// candidates.
    pub fn run(
        &self,
        compressor: &Compressor,
        progress: Option<&ProgressBar>,
    ) -> Result<RunStats> {
        let mut stats = RunStats::new();
        let walk = WalkDir::new(&self.config.root).follow_links(self.config.follow_links);

        for entry in walk {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !is_eligible(path) {
                debug!(path = %path.display(), "skipped: not eligible");
                continue;
            }

            if let Some(pb) = progress {
                pb.set_message(format!("compressing {}", path.display()));
            }
            let artifacts = compressor.compress_file(path)?;
            stats.record(artifacts);

            let line = format!("  ✓ {}", path.display());
            match progress {
                Some(pb) => pb.println(line),
                None => println!("{}", line),
            }
        }

        info!(
            files = stats.files(),
            bytes = stats.original_bytes(),
            "walk complete"
        );
        Ok(stats)
    }
}

/// Whether a file should be compressed.
///
/// True when the extension is on the compressible allow-list
/// (case-insensitive) and the file is not itself a previously generated
/// `.gz`/`.br` artifact.
pub fn is_eligible(path: &Path) -> bool {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return false,
    };

    if ARTIFACT_SUFFIXES.contains(&ext.as_str()) {
        return false;
    }
    COMPRESSIBLE_EXTENSIONS.contains(&ext.as_str())
}
