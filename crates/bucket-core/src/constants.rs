//! Constants and default values for bucket

/// Default bucket base filename
pub const DEFAULT_BUCKET_FILE: &str = "bucket.out";

/// Default number of backup buckets to keep
pub const DEFAULT_BACKUP_DEPTH: u32 = 5;

/// Default overflow threshold as a size string (1 MiB)
pub const DEFAULT_BUCKET_SIZE: &str = "1M";

/// Transfer buffer size in bytes (32 KiB)
///
/// The engine clamps this down to the overflow threshold when the
/// threshold is smaller, so a tiny bucket never allocates more than
/// it can hold.
pub const TRANSFER_BUFFER_SIZE: usize = 32 * 1024;
