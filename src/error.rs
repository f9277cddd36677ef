use std::path::PathBuf;
use thiserror::Error;

use crate::compressor::Codec;

/// Errors raised during a compression run.
///
/// None of these are recovered locally: the first error aborts the
/// remaining walk and surfaces at the top level. Artifacts written before
/// the failure stay on disk.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{codec} encoding failed for {path}: {source}")]
    Encode {
        codec: Codec,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("root is not a directory: {path}")]
    InvalidRoot { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CompressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = CompressError::Read {
            path: PathBuf::from("_site/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("_site/index.html"));
        assert!(msg.contains("gone"));

        let err = CompressError::InvalidRoot {
            path: PathBuf::from("missing"),
        };
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_walk_error_converts() {
        // Walking a nonexistent root yields a walkdir error that must
        // convert through the From impl.
        let err = walkdir::WalkDir::new("definitely/not/here")
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();
        let converted: CompressError = err.into();
        assert!(matches!(converted, CompressError::Walk(_)));
    }
}
