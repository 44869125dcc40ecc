//! Run statistics for encode/decode operations.
//!
//! Collected by the caller around codec calls; the codec itself stays free
//! of reporting concerns. Single-threaded updates only.

use std::time::{Duration, Instant};

/// Statistics for a single codec run.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    /// Bytes of original input
    pub input_bytes: u64,

    /// Bytes of the produced archive (tree section + payload)
    pub archive_bytes: u64,

    /// Distinct byte values in the input
    pub distinct_symbols: usize,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            archive_bytes: 0,
            distinct_symbols: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compression ratio (archive / input).
    ///
    /// Returns 0.0 if no input was processed. Values above 1.0 mean the
    /// archive is larger than the input (common for tiny or uniform-random
    /// inputs, where the leaf listing dominates).
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.archive_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Codec Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!("Input:    {} bytes", self.input_bytes);
        println!("Archive:  {} bytes", self.archive_bytes);
        println!("Distinct symbols: {}", self.distinct_symbols);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
    }

    /// Export as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             archive_bytes={}\n\
             distinct_symbols={}\n\
             compression_ratio={:.4}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.archive_bytes,
            self.distinct_symbols,
            self.compression_ratio(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
