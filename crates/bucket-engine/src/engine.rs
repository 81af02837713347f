//! The copy-and-overflow loop and its driving state machine

use std::io::{Read, Write};

use bucket_core::{constants, BucketConfig, Error, Result};
use tracing::{debug, warn};

use crate::selector::{select_bucket, ActiveBucket};

/// Totals reported after a clean run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Bytes written to buckets over the whole run
    pub bytes_copied: u64,
    /// Buckets that filled up and were rotated away
    pub buckets_filled: u64,
}

/// One cycle of the inner copy loop ends either because the bucket hit
/// the threshold or because the input ran dry.
enum CopyOutcome {
    Overflow,
    Eof,
}

/// Engine states; errors leave the loop through `?` directly.
enum State {
    SelectBucket,
    Copying(ActiveBucket),
    Done(RunSummary),
}

/// Owns the transfer buffer and drives buckets through
/// select / copy / overflow cycles until the input is exhausted.
pub struct BucketEngine {
    config: BucketConfig,
    buffer: Vec<u8>,
}

impl BucketEngine {
    pub fn new(config: BucketConfig) -> Self {
        let mut len = constants::TRANSFER_BUFFER_SIZE;
        if config.overflow_threshold > 0 {
            len = len.min(config.overflow_threshold as usize);
        }
        Self {
            config,
            buffer: vec![0; len],
        }
    }

    /// Pump `input` into the bucket chain until EOF or a fatal error.
    ///
    /// When `echo` is given, every chunk is also written there before it
    /// goes to the bucket. Echo failures are logged and ignored; the
    /// bucket write always proceeds.
    pub fn run<R: Read>(
        &mut self,
        input: &mut R,
        mut echo: Option<&mut dyn Write>,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut state = State::SelectBucket;

        loop {
            state = match state {
                State::SelectBucket => State::Copying(select_bucket(&self.config)?),
                State::Copying(bucket) => {
                    match self.pump(input, echo.as_deref_mut(), bucket, &mut summary)? {
                        CopyOutcome::Overflow => {
                            summary.buckets_filled += 1;
                            State::SelectBucket
                        }
                        CopyOutcome::Eof => State::Done(summary),
                    }
                }
                State::Done(summary) => {
                    debug!(
                        bytes = summary.bytes_copied,
                        buckets = summary.buckets_filled,
                        "input exhausted"
                    );
                    return Ok(summary);
                }
            };
        }
    }

    /// Copy into one bucket until it overflows or the input ends.
    /// The bucket handle is dropped (closed) on every exit path.
    fn pump<R: Read>(
        &mut self,
        input: &mut R,
        mut echo: Option<&mut (dyn Write + '_)>,
        mut bucket: ActiveBucket,
        summary: &mut RunSummary,
    ) -> Result<CopyOutcome> {
        loop {
            // Clamp the read so the bucket never exceeds the threshold
            let max_read = if self.config.overflow_threshold == 0 {
                self.buffer.len()
            } else {
                let remain = (self.config.overflow_threshold - bucket.size) as usize;
                remain.min(self.buffer.len())
            };

            let n = input
                .read(&mut self.buffer[..max_read])
                .map_err(|err| Error::ReadInput { source: err })?;
            if n == 0 {
                return Ok(CopyOutcome::Eof);
            }
            let chunk = &self.buffer[..n];

            if let Some(sink) = echo.as_deref_mut() {
                // Best-effort: a failing echo sink never stops the run
                if let Err(err) = sink.write_all(chunk).and_then(|()| sink.flush()) {
                    warn!("could not write to stdout because: {}", err);
                }
            }

            bucket
                .file
                .write_all(chunk)
                .map_err(|err| Error::WriteBucket {
                    path: self.config.destination.clone(),
                    source: err,
                })?;
            bucket.size += n as u64;
            summary.bytes_copied += n as u64;

            if self.config.overflow_threshold > 0 && bucket.size >= self.config.overflow_threshold {
                return Ok(CopyOutcome::Overflow);
            }
        }
    }
}
