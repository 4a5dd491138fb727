use crate::config::OptimizerConfig;

/// Resizes and re-encodes archived logos into the web output directory.
///
/// The operations live next to their concern: directory handling in
/// [`crate::archive`], single-image work in [`crate::processing`] and the
/// batch loop in [`crate::batch`].
#[derive(Debug, Clone)]
pub struct ImageOptimizer {
    config: OptimizerConfig,
}

impl ImageOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}
