#[macro_use]
pub mod logger;

pub mod archive;
pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod optimizer;
pub mod processing;
pub mod report;
pub mod utils;

pub use archive::{find_logo_files, is_logo_file};
pub use batch::{output_path_for, plan_outputs};
pub use config::OptimizerConfig;
pub use error::{OptimizerError, Result};
pub use formats::OutputFormat;
pub use optimizer::ImageOptimizer;
pub use processing::{encode_image, fit_to_size, load_image_with_metadata};
pub use report::{BatchReport, OptimizationResult, OptimizationStats, OutputKind};
