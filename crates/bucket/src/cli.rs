//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use bucket_core::{constants, units, BucketConfig};

#[derive(Parser)]
#[command(name = "bucket")]
#[command(version, about = "Split a byte stream into size-bounded, rotated bucket files")]
pub struct Cli {
    /// Input file to read; '-' or absent means standard input
    pub input: Option<PathBuf>,

    /// Filename of the bucket file
    #[arg(short, long, value_name = "NAME", default_value = constants::DEFAULT_BUCKET_FILE)]
    pub file: PathBuf,

    /// Force creation of a new bucket file (never append)
    #[arg(short, long)]
    pub new_bucket: bool,

    /// Number of backup buckets
    #[arg(short, long, value_name = "NUMBER", default_value_t = constants::DEFAULT_BACKUP_DEPTH)]
    pub backup: u32,

    /// Size of a bucket in bytes (k/K, m/M, g/G suffixes allowed); 0 means unbounded
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value = constants::DEFAULT_BUCKET_SIZE,
        value_parser = parse_size_arg
    )]
    pub size: u64,

    /// Write every chunk to standard output as well
    #[arg(short = 'c', long = "stdout")]
    pub echo_stdout: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// True when input should come from standard input
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }

    pub fn to_config(&self) -> BucketConfig {
        BucketConfig {
            destination: self.file.clone(),
            force_new_bucket: self.new_bucket,
            backup_depth: self.backup,
            overflow_threshold: self.size,
            echo_to_stdout: self.echo_stdout,
        }
    }
}

/// Lenient by contract: an unparsable size means "unbounded", not a
/// usage error.
fn parse_size_arg(s: &str) -> Result<u64, String> {
    Ok(units::parse_size(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bucket"]);
        assert!(cli.reads_stdin());
        assert_eq!(cli.file, PathBuf::from("bucket.out"));
        assert!(!cli.new_bucket);
        assert_eq!(cli.backup, 5);
        assert_eq!(cli.size, 1024 * 1024);
        assert!(!cli.echo_stdout);
    }

    #[test]
    fn test_dash_means_stdin() {
        let cli = Cli::parse_from(["bucket", "-"]);
        assert!(cli.reads_stdin());

        let cli = Cli::parse_from(["bucket", "input.dat"]);
        assert!(!cli.reads_stdin());
    }

    #[test]
    fn test_size_suffix() {
        let cli = Cli::parse_from(["bucket", "-s", "2k"]);
        assert_eq!(cli.size, 2048);
    }

    #[test]
    fn test_unparsable_size_is_unbounded() {
        let cli = Cli::parse_from(["bucket", "--size", "whatever"]);
        assert_eq!(cli.size, 0);
    }

    #[test]
    fn test_to_config() {
        let cli = Cli::parse_from([
            "bucket", "-f", "out.log", "-n", "-b", "2", "-s", "100", "-c",
        ]);
        let config = cli.to_config();
        assert_eq!(config.destination, PathBuf::from("out.log"));
        assert!(config.force_new_bucket);
        assert_eq!(config.backup_depth, 2);
        assert_eq!(config.overflow_threshold, 100);
        assert!(config.echo_to_stdout);
    }
}
