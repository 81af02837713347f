//! Backup chain rotation

use std::fs;

use bucket_core::{BucketConfig, Error, Result};
use tracing::debug;

/// Shift the backup chain one slot to make room for the active bucket.
///
/// Slots are processed from `backup_depth` down to `1`, so no rename
/// overwrites a file still needed as a later source. Slot 1 receives
/// the active bucket itself; every other slot receives its predecessor.
/// Missing sources are skipped, chains shorter than `backup_depth` are
/// normal while the chain warms up. Whatever sat in the highest slot is
/// discarded by the rename into it.
///
/// With `backup_depth == 0` this is a no-op and the active bucket is
/// simply not preserved.
pub fn rotate_backups(config: &BucketConfig) -> Result<()> {
    for index in (1..=config.backup_depth).rev() {
        let source = if index > 1 {
            config.backup_path(index - 1)
        } else {
            config.destination.clone()
        };
        let target = config.backup_path(index);

        match fs::metadata(&source) {
            Ok(meta) if meta.is_file() => {
                debug!("rotating {} -> {}", source.display(), target.display());
                fs::rename(&source, &target).map_err(|err| Error::RenameBackup {
                    from: source,
                    to: target,
                    source: err,
                })?;
            }
            // Missing or non-regular sources are not an error
            _ => {}
        }
    }

    Ok(())
}
