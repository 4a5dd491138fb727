use crate::formats::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logo-squeeze",
    about = "Resize and recompress logo images for web delivery",
    long_about = "logo-squeeze regenerates web-ready logos from an archive of originals. \
                  Every assets/originals/*-logo.png is crop-filled to a square and written to \
                  public/question-sets/ as PNG (oxipng-optimized), WebP or JPEG.",
    version,
    after_help = "EXAMPLES:\n  \
    logo-squeeze --move-originals\n  \
    logo-squeeze --format PNG --webp\n  \
    logo-squeeze --format WEBP --root ./site -q"
)]
pub struct Args {
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Png,
        help = "Output format for the web image",
        long_help = "Output format for the web image. PNG is losslessly optimized, \
                     WEBP and JPEG are lossy."
    )]
    pub format: OutputFormat,

    #[arg(
        long,
        help = "Also create a WebP version of each image",
        long_help = "Also write a WebP sibling next to each web image. \
                     Ignored when --format is already WEBP."
    )]
    pub webp: bool,

    #[arg(
        long,
        help = "Move existing *-logo.png outputs into the originals folder",
        long_help = "Move *-logo.png files from public/question-sets into assets/originals, \
                     skipping names that are already archived. If anything was moved the \
                     program stops; run again without this flag to optimize."
    )]
    pub move_originals: bool,

    #[arg(
        long,
        default_value = ".",
        help = "Project root containing assets/ and public/"
    )]
    pub root: PathBuf,

    #[arg(
        short = 's',
        long,
        help = "Output edge length in pixels (default: 256)",
        long_help = "Images are scaled to cover a square of this size and centre-cropped."
    )]
    pub size: Option<u32>,

    #[arg(long, help = "JPEG quality (1-100, default: 85)")]
    pub jpeg_quality: Option<u8>,

    #[arg(long, help = "WebP quality (1-100, default: 80)")]
    pub webp_quality: Option<u8>,

    #[arg(short, long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short, long, help = "Print extra detail and debug diagnostics")]
    pub verbose: bool,
}
