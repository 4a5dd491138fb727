use crate::constants::{PROCESS_PREFIX, SUCCESS_PREFIX};
use crate::formats::OutputFormat;
use crate::optimizer::ImageOptimizer;
use crate::report::{BatchReport, OptimizationResult, OutputKind};
use crate::utils::{create_progress_bar, format_bytes_grouped};
use std::path::{Path, PathBuf};
use std::time::Instant;

impl ImageOptimizer {
    /// Optimizes every archived original into the output directory.
    ///
    /// Each original yields one web image in `web_format`, plus a WebP sibling
    /// when `create_webp` is set and `web_format` is not already WebP. A failed
    /// output is recorded and the batch moves on. A missing or empty archive
    /// is reported and produces an empty report.
    pub fn optimize_all(&self, web_format: OutputFormat, create_webp: bool) -> BatchReport {
        let mut report = BatchReport::default();

        let originals = match self.collect_originals() {
            Ok(files) => files,
            Err(e) => {
                error!("{}", e);
                return report;
            }
        };

        let start_time = Instant::now();
        let outputs = plan_outputs(web_format, create_webp);
        info!("\n🚀 Optimizing {} images...", originals.len());

        let progress = create_progress_bar((originals.len() * outputs.len()) as u64);

        for original in &originals {
            let display_name = original
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            info!("\n{} {}", PROCESS_PREFIX, display_name);

            for &(kind, format) in &outputs {
                let result = self.optimize_output(original, kind, format);
                print_result(&result);
                report.push(result);
                progress.inc(1);
            }
        }

        progress.finish_and_clear();
        tracing::debug!(
            outputs = report.results.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "batch finished"
        );

        report.print_summary();
        report
    }

    fn optimize_output(
        &self,
        original: &Path,
        kind: OutputKind,
        format: OutputFormat,
    ) -> OptimizationResult {
        let output_path = output_path_for(original, &self.config().optimized_dir, format);
        let filename = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome = self
            .optimize_image(original, &output_path, self.config().web_size, format)
            .map_err(|e| e.to_string());

        OptimizationResult {
            filename,
            kind,
            outcome,
        }
    }
}

/// The outputs produced for each original, primary first.
pub fn plan_outputs(web_format: OutputFormat, create_webp: bool) -> Vec<(OutputKind, OutputFormat)> {
    let mut outputs = vec![(OutputKind::Web, web_format)];
    if create_webp && web_format != OutputFormat::WebP {
        outputs.push((OutputKind::WebP, OutputFormat::WebP));
    }
    outputs
}

/// `<output_dir>/<stem>.<ext>` for an original such as `acme-logo.png`.
pub fn output_path_for(original: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

fn print_result(result: &OptimizationResult) {
    match &result.outcome {
        Ok(stats) => {
            info!("   {} {}: {}", SUCCESS_PREFIX, result.kind, result.filename);
            info!(
                "      Size: {} -> {} bytes",
                format_bytes_grouped(stats.original_size),
                format_bytes_grouped(stats.optimized_size)
            );
            info!("      Compression: {:.1}%", stats.compression_ratio);
        }
        Err(e) => {
            error!("   {} {}: {}", result.kind, result.filename, e);
        }
    }
}
