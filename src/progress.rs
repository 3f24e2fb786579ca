//! Progress reporting for stream adapters
//!
//! Progress is a side channel: it never influences the data moved.

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Byte count and elapsed time of a finished transfer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferStats {
    /// Bytes moved through the adapter
    pub bytes: u64,
    /// Time between opening and closing the adapter
    pub elapsed: Duration,
}

impl TransferStats {
    /// Throughput in KiB per second
    pub fn rate_kib(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes as f64 / (secs * 1024.0)
        } else {
            0.0
        }
    }
}

/// Create the byte transfer progress bar style
fn create_progress_bar_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template("{prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) {msg}")?
        .progress_chars("#>-"))
}

/// Progress bar for one transfer
///
/// A bar that is dropped without being finished is abandoned, so an early
/// error return still leaves the terminal in a sane state.
pub struct Progress {
    pb: ProgressBar,
    label: String,
    start: Instant,
}

impl Progress {
    /// Start a bar labelled `label` counting up to `total` bytes
    pub fn new(label: &str, total: u64, visible: bool) -> Result<Self> {
        let pb = if visible {
            ProgressBar::new(total)
        } else {
            let pb = ProgressBar::hidden();
            pb.set_length(total);
            pb
        };
        pb.set_style(create_progress_bar_style()?);
        pb.set_prefix(label.to_string());
        Ok(Self {
            pb,
            label: label.to_string(),
            start: Instant::now(),
        })
    }

    /// Set the cumulative number of bytes transferred
    pub fn update(&self, bytes: u64) {
        self.pb.set_position(bytes);
    }

    /// Finish the bar with a closing message and return the stats
    pub fn finish(&self, bytes: u64, outcome: &str) -> TransferStats {
        let stats = TransferStats {
            bytes,
            elapsed: self.start.elapsed(),
        };
        self.pb.finish_with_message(outcome.to_string());
        log::info!("{}: {}", self.label, outcome);
        stats
    }

    /// Elapsed time since the bar was started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.abandon_with_message("aborted");
            log::debug!("{}: aborted at {} bytes", self.label, self.pb.position());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate() {
        let stats = TransferStats {
            bytes: 2048,
            elapsed: Duration::from_secs(2),
        };
        assert!((stats.rate_kib() - 1.0).abs() < f64::EPSILON);

        let instant = TransferStats {
            bytes: 10,
            elapsed: Duration::ZERO,
        };
        assert_eq!(instant.rate_kib(), 0.0);
    }

    #[test]
    fn test_hidden_bar_finishes() {
        let progress = Progress::new("Testing", 4, false).unwrap();
        assert_eq!(progress.pb.length(), Some(4));
        progress.update(4);
        let stats = progress.finish(4, "done");
        assert_eq!(stats.bytes, 4);
        assert!(progress.pb.is_finished());
    }

    #[test]
    fn test_drop_unfinished_abandons() {
        let progress = Progress::new("Testing", 8, false).unwrap();
        let pb = progress.pb.clone();
        progress.update(3);
        drop(progress);
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 3);
    }
}
