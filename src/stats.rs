use crate::compressor::FileArtifacts;

/// Aggregate statistics for one compression run.
///
/// The run is strictly sequential, so plain fields are enough; there is
/// no shared mutable state to protect.
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    files: u64,
    original_bytes: u64,
    gzip_bytes: u64,
    brotli_bytes: u64,
}

impl RunStats {
    /// Creates an empty statistics accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the artifacts produced for one file
    pub fn record(&mut self, artifacts: FileArtifacts) {
        self.files += 1;
        self.original_bytes += artifacts.original_bytes;
        self.gzip_bytes += artifacts.gzip_bytes;
        self.brotli_bytes += artifacts.brotli_bytes;
    }

    /// Number of files processed
    pub fn files(&self) -> u64 {
        self.files
    }

    /// Total uncompressed input bytes
    pub fn original_bytes(&self) -> u64 {
        self.original_bytes
    }

    /// Total bytes written as `.gz` artifacts
    pub fn gzip_bytes(&self) -> u64 {
        self.gzip_bytes
    }

    /// Total bytes written as `.br` artifacts
    pub fn brotli_bytes(&self) -> u64 {
        self.brotli_bytes
    }

    /// Space saved by gzip, as a fraction of the input size
    pub fn gzip_ratio(&self) -> f64 {
        ratio(self.gzip_bytes, self.original_bytes)
    }

    /// Space saved by brotli, as a fraction of the input size
    pub fn brotli_ratio(&self) -> f64 {
        ratio(self.brotli_bytes, self.original_bytes)
    }
}

fn ratio(compressed: u64, original: u64) -> f64 {
    if original == 0 {
        0.0
    } else {
        1.0 - (compressed as f64 / original as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut stats = RunStats::new();
        stats.record(FileArtifacts {
            original_bytes: 1000,
            gzip_bytes: 300,
            brotli_bytes: 250,
        });
        stats.record(FileArtifacts {
            original_bytes: 500,
            gzip_bytes: 200,
            brotli_bytes: 150,
        });

        assert_eq!(stats.files(), 2);
        assert_eq!(stats.original_bytes(), 1500);
        assert_eq!(stats.gzip_bytes(), 500);
        assert_eq!(stats.brotli_bytes(), 400);
    }

    #[test]
    fn test_ratios() {
        let mut stats = RunStats::new();
        stats.record(FileArtifacts {
            original_bytes: 1000,
            gzip_bytes: 250,
            brotli_bytes: 100,
        });

        assert!((stats.gzip_ratio() - 0.75).abs() < f64::EPSILON);
        assert!((stats.brotli_ratio() - 0.90).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_run_has_zero_ratio() {
        let stats = RunStats::new();
        assert_eq!(stats.files(), 0);
        assert_eq!(stats.gzip_ratio(), 0.0);
        assert_eq!(stats.brotli_ratio(), 0.0);
    }
}
