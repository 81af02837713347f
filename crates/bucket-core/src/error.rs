//! Error types for bucket

use std::io;
use std::path::PathBuf;

/// Bucket error type
///
/// Every fatal I/O failure names the operation that failed, the path
/// involved and the underlying OS error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open '{path}' because: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open '{path}' for writing because: {source}")]
    OpenBucket {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not seek to the end of '{path}' because: {source}")]
    SeekBucket {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not rename '{from}' to '{to}' because: {source}")]
    RenameBackup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write to '{path}' because: {source}")]
    WriteBucket {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read from input because: {source}")]
    ReadInput {
        #[source]
        source: io::Error,
    },
}

/// Result type alias for bucket
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_path() {
        let err = Error::OpenBucket {
            path: PathBuf::from("out.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out.log"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_rename_error_names_both_paths() {
        let err = Error::RenameBackup {
            from: PathBuf::from("bucket.out"),
            to: PathBuf::from("bucket.out.1"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("bucket.out"));
        assert!(msg.contains("bucket.out.1"));
    }
}
