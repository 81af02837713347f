//! Bucket engine - backup rotation, bucket selection and the
//! copy-and-overflow loop

mod engine;
mod rotation;
mod selector;

pub use engine::{BucketEngine, RunSummary};
pub use rotation::rotate_backups;
pub use selector::{select_bucket, ActiveBucket};
