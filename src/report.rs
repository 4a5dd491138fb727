//! Per-output results and the end-of-run summary.

use crate::constants::SUMMARY_PREFIX;
use crate::utils::{calculate_compression_ratio, format_bytes_grouped, format_file_size};
use std::fmt;

/// Which output of an original a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// The primary web image in the requested format
    Web,
    /// The extra WebP sibling requested with `--webp`
    WebP,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Web => write!(f, "Web"),
            OutputKind::WebP => write!(f, "WebP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationStats {
    pub original_size: u64,
    pub optimized_size: u64,
    /// Percentage reduction, negative when the output grew
    pub compression_ratio: f64,
}

impl OptimizationStats {
    pub fn from_sizes(original_size: u64, optimized_size: u64) -> Self {
        Self {
            original_size,
            optimized_size,
            compression_ratio: calculate_compression_ratio(original_size, optimized_size),
        }
    }
}

/// Outcome of producing one output file.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub filename: String,
    pub kind: OutputKind,
    /// Sizes on success, the error text on failure
    pub outcome: Result<OptimizationStats, String>,
}

impl OptimizationResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn stats(&self) -> Option<&OptimizationStats> {
        self.outcome.as_ref().ok()
    }
}

/// Everything one `optimize_all` run produced, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<OptimizationResult>,
}

impl BatchReport {
    pub fn push(&mut self, result: OptimizationResult) {
        self.results.push(result);
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &OptimizationStats> {
        self.results.iter().filter_map(OptimizationResult::stats)
    }

    pub fn processed_count(&self) -> usize {
        self.successes().count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }

    pub fn total_original(&self) -> u64 {
        self.successes().map(|s| s.original_size).sum()
    }

    pub fn total_optimized(&self) -> u64 {
        self.successes().map(|s| s.optimized_size).sum()
    }

    /// Size-weighted ratio over all successful outputs
    pub fn average_compression(&self) -> f64 {
        calculate_compression_ratio(self.total_original(), self.total_optimized())
    }

    pub fn bytes_saved(&self) -> i64 {
        self.total_original() as i64 - self.total_optimized() as i64
    }

    /// Prints the aggregate block. Nothing is printed when no output succeeded.
    pub fn print_summary(&self) {
        if self.processed_count() == 0 {
            if self.failed_count() > 0 {
                warn!("All {} outputs failed", self.failed_count());
            }
            return;
        }

        let before = self.total_original();
        let after = self.total_optimized();

        info!("\n{} Optimization Summary:", SUMMARY_PREFIX);
        info!("  📁 Files processed: {}", self.processed_count());
        info!(
            "  📊 Total size: {} -> {} bytes",
            format_bytes_grouped(before),
            format_bytes_grouped(after)
        );
        info!("  🎯 Average compression: {:.1}%", self.average_compression());

        let saved = self.bytes_saved();
        if saved >= 0 {
            info!(
                "  💾 Saved: {} bytes ({})",
                format_bytes_grouped(saved as u64),
                format_file_size(saved as u64)
            );
        } else {
            info!(
                "  ⚠️  Grew by: {} bytes ({})",
                format_bytes_grouped(saved.unsigned_abs()),
                format_file_size(saved.unsigned_abs())
            );
        }

        if self.failed_count() > 0 {
            info!("  ❌ Failed outputs: {}", self.failed_count());
        }
    }
}
