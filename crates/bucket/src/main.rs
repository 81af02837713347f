//! bucket CLI - copies a byte stream into size-bounded, rotated files

use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bucket_core::Error;
use bucket_engine::BucketEngine;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bucket={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).without_time())
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut input: Box<dyn Read> = if cli.reads_stdin() {
        Box::new(io::stdin())
    } else {
        let path = cli.input.clone().unwrap_or_default();
        let file = File::open(&path).map_err(|err| Error::OpenInput {
            path: path.clone(),
            source: err,
        })?;
        Box::new(file)
    };

    let config = cli.to_config();
    let mut stdout = io::stdout();
    let echo: Option<&mut dyn Write> = if config.echo_to_stdout {
        Some(&mut stdout)
    } else {
        None
    };

    let mut engine = BucketEngine::new(config);
    let summary = engine.run(&mut input, echo)?;

    debug!(
        bytes = summary.bytes_copied,
        buckets = summary.buckets_filled,
        "done"
    );

    Ok(())
}
