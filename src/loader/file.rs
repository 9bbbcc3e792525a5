use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::format::SuffixFormat;
use super::{decode_tables, SuffixLoader};
use crate::error::{LoadErrorKind, Result, SuffixError};
use crate::list::{SuffixList, SuffixListOptions};

/// File-based loader with format auto-detection.
///
/// The list is read once and shared; `reload` drops the cached copy.
pub struct FileSuffixLoader {
    path: Option<PathBuf>,
    format: Option<SuffixFormat>,
    options: SuffixListOptions,

    cached: RwLock<Option<Arc<SuffixList>>>,
}

impl FileSuffixLoader {
    /// Create a new FileSuffixLoader
    pub fn new() -> Self {
        Self {
            path: None,
            format: None,
            options: SuffixListOptions::default(),
            cached: RwLock::new(None),
        }
    }

    /// Set the list file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set explicit format (overrides auto-detection)
    pub fn with_format(mut self, format: SuffixFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set suffix list options
    pub fn with_options(mut self, options: SuffixListOptions) -> Self {
        self.options = options;
        self
    }

    /// Get format (explicit or detected from path)
    fn get_format(&self) -> Option<SuffixFormat> {
        self.format
            .or_else(|| self.path.as_ref().and_then(SuffixFormat::detect))
    }

    /// Drop the cached list; the next `load` reads the file again
    pub fn reload(&self) {
        *self.cached.write() = None;
    }

    fn read_list(&self) -> Result<SuffixList> {
        let path = self.path.as_ref().ok_or_else(|| {
            SuffixError::load(LoadErrorKind::NotConfigured, "List path not configured")
        })?;

        let format = self.get_format().ok_or_else(|| {
            SuffixError::load(
                LoadErrorKind::UnknownFormat,
                format!("Cannot detect list format of '{}'", path.display()),
            )
        })?;

        let text = fs::read_to_string(path).map_err(|e| {
            SuffixError::load(
                LoadErrorKind::FileError,
                format!("Failed to read list file '{}': {}", path.display(), e),
            )
        })?;

        let tables = decode_tables(&text, format)?;
        log::info!(
            "loaded {} public suffix rules from {}",
            tables.len(),
            path.display()
        );
        Ok(SuffixList::with_options(tables, self.options.clone()))
    }
}

impl Default for FileSuffixLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixLoader for FileSuffixLoader {
    fn load(&self) -> Result<Arc<SuffixList>> {
        if let Some(list) = self.cached.read().as_ref() {
            return Ok(list.clone());
        }

        let list = Arc::new(self.read_list()?);

        let mut cached = self.cached.write();
        // Another thread may have finished loading first
        if let Some(existing) = cached.as_ref() {
            return Ok(existing.clone());
        }
        *cached = Some(list.clone());
        Ok(list)
    }
}
