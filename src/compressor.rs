use std::fmt;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use brotli::enc::BrotliEncoderParams;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::constants::{BROTLI_QUALITY, GZIP_LEVEL};
use crate::error::CompressError;
use crate::Result;

/// Compressed output formats produced for each eligible file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Gzip,
    Brotli,
}

impl Codec {
    /// File suffix appended to the original path
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Gzip => "gz",
            Self::Brotli => "br",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gzip => write!(f, "gzip"),
            Self::Brotli => write!(f, "brotli"),
        }
    }
}

/// Byte counts for one processed file and its two artifacts
#[derive(Debug, Clone, Copy)]
pub struct FileArtifacts {
    /// Uncompressed input size
    pub original_bytes: u64,
    /// Size of the written `.gz` artifact
    pub gzip_bytes: u64,
    /// Size of the written `.br` artifact
    pub brotli_bytes: u64,
}

/// Compressor that writes maximum-effort gzip and brotli siblings.
///
/// Parameters are fixed (gzip level 9, brotli quality 11) so artifacts
/// are fully determined by the input bytes and repeated runs are
/// byte-identical.
pub struct Compressor {
    gzip_level: Compression,
    brotli_params: BrotliEncoderParams,
}

impl Compressor {
    /// Creates a compressor with maximum-effort settings for both codecs
    pub fn new() -> Self {
        Self {
            gzip_level: Compression::new(GZIP_LEVEL),
            brotli_params: BrotliEncoderParams {
                quality: BROTLI_QUALITY,
                ..Default::default()
            },
        }
    }

    /// Compresses one file into `<path>.gz` and `<path>.br` siblings.
    ///
    /// Reads the whole file into memory, encodes it with both codecs, and
    /// overwrites any existing artifact at either destination. Returns the
    /// input and artifact sizes on success.
    pub fn compress_file(&self, path: &Path) -> Result<FileArtifacts> {
        let data = fs::read(path).map_err(|source| CompressError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let gzipped = self.gzip(&data).map_err(|source| CompressError::Encode {
            codec: Codec::Gzip,
            path: path.to_path_buf(),
            source,
        })?;
        write_artifact(path, Codec::Gzip, &gzipped)?;

        let brotlied = self.brotli(&data).map_err(|source| CompressError::Encode {
            codec: Codec::Brotli,
            path: path.to_path_buf(),
            source,
        })?;
        write_artifact(path, Codec::Brotli, &brotlied)?;

        debug!(
            path = %path.display(),
            original = data.len(),
            gzip = gzipped.len(),
            brotli = brotlied.len(),
            "compressed"
        );

        Ok(FileArtifacts {
            original_bytes: data.len() as u64,
            gzip_bytes: gzipped.len() as u64,
            brotli_bytes: brotlied.len() as u64,
        })
    }

    /// Encodes `data` as a gzip stream at the configured level
    pub fn gzip(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), self.gzip_level);
        encoder.write_all(data)?;
        encoder.finish()
    }

    /// Encodes `data` as a brotli stream at the configured quality
    pub fn brotli(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut compressed = Vec::new();
        brotli::BrotliCompress(&mut Cursor::new(data), &mut compressed, &self.brotli_params)?;
        Ok(compressed)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination path for one artifact: the original path with the codec
/// suffix appended, e.g. `index.html` -> `index.html.gz`
pub fn artifact_path(path: &Path, codec: Codec) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(codec.suffix());
    PathBuf::from(name)
}

fn write_artifact(path: &Path, codec: Codec, data: &[u8]) -> Result<()> {
    let dest = artifact_path(path, codec);
    fs::write(&dest, data).map_err(|source| CompressError::Write { path: dest, source })
}
