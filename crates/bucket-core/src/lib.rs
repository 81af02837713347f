//! Core types and configuration for bucket

pub mod config;
pub mod constants;
pub mod error;
pub mod units;

pub use config::BucketConfig;
pub use error::{Error, Result};
