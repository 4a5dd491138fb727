use anyhow::{Context, Result};
use clap::Parser;
use logo_squeeze::cli::Args;
use logo_squeeze::constants::{BACKUP_PREFIX, SUCCESS_PREFIX};
use logo_squeeze::{info, logger, ImageOptimizer, OptimizerConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);
    logger::init_tracing(args.verbose);

    let config = OptimizerConfig::new(&args.root, args.size, args.jpeg_quality, args.webp_quality)
        .context("invalid optimizer settings")?;
    let optimizer = ImageOptimizer::new(config);
    optimizer
        .ensure_directories()
        .context("failed to prepare originals and output directories")?;

    if args.move_originals {
        let moved = optimizer
            .move_originals()
            .context("failed to move originals into the archive")?;
        info!("{} Saved {} file(s) as originals.", BACKUP_PREFIX, moved);

        if moved > 0 {
            info!("\nOriginals saved. Run again without --move-originals to optimize.");
            return Ok(());
        }
    }

    optimizer.optimize_all(args.format, args.webp);
    info!("\n{} Optimization complete!", SUCCESS_PREFIX);

    Ok(())
}
