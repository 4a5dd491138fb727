use crate::constants::{BACKUP_PREFIX, LOGO_SUFFIX, OPTIMIZED_PREFIX, ORIGINALS_PREFIX};
use crate::error::{OptimizerError, Result};
use crate::optimizer::ImageOptimizer;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

impl ImageOptimizer {
    /// Creates the originals and output directories if they are missing.
    pub fn ensure_directories(&self) -> Result<()> {
        let config = self.config();
        for dir in [&config.originals_dir, &config.optimized_dir] {
            fs::create_dir_all(dir)
                .map_err(|_| OptimizerError::DirectoryCreationFailed(dir.clone()))?;
        }

        info!("{} {}", ORIGINALS_PREFIX, config.originals_dir.display());
        info!("{} {}", OPTIMIZED_PREFIX, config.optimized_dir.display());
        Ok(())
    }

    /// Moves `*-logo.png` files from the output directory into the archive.
    ///
    /// Files whose name already exists in the archive are left where they
    /// are, so a second run moves nothing.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of files moved
    pub fn move_originals(&self) -> Result<usize> {
        let config = self.config();
        let mut moved_count = 0;

        for image_file in find_logo_files(&config.optimized_dir)? {
            let Some(name) = image_file.file_name() else {
                continue;
            };
            let original_path = config.originals_dir.join(name);

            if original_path.exists() {
                verbose!("Already archived, skipping {}", name.to_string_lossy());
                continue;
            }

            fs::rename(&image_file, &original_path)?;
            info!("{} Backed up {}", BACKUP_PREFIX, name.to_string_lossy());
            moved_count += 1;
        }

        tracing::debug!(moved_count, "archived originals");
        Ok(moved_count)
    }

    /// Lists the archived originals, sorted by file name.
    ///
    /// # Returns
    /// * `Err(OptimizerError::ArchiveMissing)` - The archive directory does not exist
    /// * `Err(OptimizerError::NoOriginalsFound)` - It holds no `*-logo.png` files
    pub fn collect_originals(&self) -> Result<Vec<PathBuf>> {
        let originals_dir = &self.config().originals_dir;
        if !originals_dir.is_dir() {
            return Err(OptimizerError::ArchiveMissing(originals_dir.clone()));
        }

        let files = find_logo_files(originals_dir)?;
        if files.is_empty() {
            return Err(OptimizerError::NoOriginalsFound(originals_dir.clone()));
        }
        Ok(files)
    }
}

/// Finds regular files named `*-logo.png` directly inside `dir`.
pub fn find_logo_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*{}",
        Pattern::escape(&dir.to_string_lossy()),
        LOGO_SUFFIX
    );

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .flatten()
        .filter(|path| path.is_file() && is_logo_file(path))
        .collect();
    files.sort();
    Ok(files)
}

pub fn is_logo_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.len() > LOGO_SUFFIX.len() && name.ends_with(LOGO_SUFFIX))
        .unwrap_or(false)
}
