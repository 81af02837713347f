//! Bucket selection - resume an existing bucket or rotate and start fresh

use std::fs::{self, File, OpenOptions};
use std::io::{Seek, SeekFrom};

use bucket_core::{BucketConfig, Error, Result};
use tracing::debug;

use crate::rotation::rotate_backups;

/// The bucket currently open for writing, with the byte count already
/// in it. Dropping it closes the file.
pub struct ActiveBucket {
    pub file: File,
    pub size: u64,
}

/// Pick the bucket for the next copy cycle.
///
/// An existing regular file at the destination is resumed (opened for
/// writing, positioned at the end, its size adopted as the starting
/// count) when appending is allowed and the file is still below the
/// overflow threshold. In every other case the backup chain rotates
/// first and a fresh, truncated bucket is created.
pub fn select_bucket(config: &BucketConfig) -> Result<ActiveBucket> {
    if !config.force_new_bucket {
        if let Ok(meta) = fs::metadata(&config.destination) {
            let below_threshold =
                config.overflow_threshold == 0 || meta.len() < config.overflow_threshold;
            if meta.is_file() && below_threshold {
                debug!("resuming bucket {}", config.destination.display());
                let mut file = OpenOptions::new()
                    .write(true)
                    .open(&config.destination)
                    .map_err(|err| Error::OpenBucket {
                        path: config.destination.clone(),
                        source: err,
                    })?;
                let size = file.seek(SeekFrom::End(0)).map_err(|err| Error::SeekBucket {
                    path: config.destination.clone(),
                    source: err,
                })?;
                return Ok(ActiveBucket { file, size });
            }
        }
    }

    rotate_backups(config)?;

    debug!("starting fresh bucket {}", config.destination.display());
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&config.destination)
        .map_err(|err| Error::OpenBucket {
            path: config.destination.clone(),
            source: err,
        })?;

    Ok(ActiveBucket { file, size: 0 })
}
