//! Run configuration for the bucket engine

use std::path::PathBuf;

use crate::constants;
use crate::units;

/// Configuration for one bucket run
///
/// Built once at startup and never mutated afterwards. The input source
/// and the optional echo sink are not part of the record; the engine
/// takes those as separate handles.
#[derive(Debug, Clone)]
pub struct BucketConfig {
    /// Base filename of the active bucket; backups live at
    /// `<destination>.1 .. <destination>.N`
    pub destination: PathBuf,
    /// Never append to an existing bucket, always rotate first
    pub force_new_bucket: bool,
    /// Number of rotated backup buckets to retain
    pub backup_depth: u32,
    /// Byte threshold that triggers rotation; `0` means unbounded
    pub overflow_threshold: u64,
    /// Echo every written chunk to standard output
    pub echo_to_stdout: bool,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(constants::DEFAULT_BUCKET_FILE),
            force_new_bucket: false,
            backup_depth: constants::DEFAULT_BACKUP_DEPTH,
            overflow_threshold: units::parse_size(constants::DEFAULT_BUCKET_SIZE),
            echo_to_stdout: false,
        }
    }
}

impl BucketConfig {
    /// Path of the backup slot at `index` (`base.1`, `base.2`, ...)
    pub fn backup_path(&self, index: u32) -> PathBuf {
        let name = self
            .destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.destination.with_file_name(format!("{}.{}", name, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BucketConfig::default();
        assert_eq!(config.destination, PathBuf::from("bucket.out"));
        assert!(!config.force_new_bucket);
        assert_eq!(config.backup_depth, 5);
        assert_eq!(config.overflow_threshold, 1024 * 1024);
        assert!(!config.echo_to_stdout);
    }

    #[test]
    fn test_backup_path() {
        let config = BucketConfig {
            destination: PathBuf::from("/var/spool/bucket.out"),
            ..Default::default()
        };
        assert_eq!(
            config.backup_path(1),
            PathBuf::from("/var/spool/bucket.out.1")
        );
        assert_eq!(
            config.backup_path(12),
            PathBuf::from("/var/spool/bucket.out.12")
        );
    }
}
