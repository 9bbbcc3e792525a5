pub mod file;
pub mod format;

pub use file::FileSuffixLoader;
pub use format::SuffixFormat;

use std::sync::Arc;

use crate::error::Result;
use crate::list::{SuffixList, SuffixListOptions};
use crate::parser::parse_list;
use crate::types::SuffixTables;

/// Trait for loading a public suffix list
pub trait SuffixLoader: Send + Sync {
    /// Load the suffix list
    fn load(&self) -> Result<Arc<SuffixList>>;
}

/// Loader that yields a list without any rules
pub struct NilSuffixLoader;

impl SuffixLoader for NilSuffixLoader {
    fn load(&self) -> Result<Arc<SuffixList>> {
        Ok(Arc::new(SuffixList::empty()))
    }
}

/// In-memory loader, typically fed from a bundled resource
pub struct MemorySuffixLoader {
    data: String,
    format: SuffixFormat,
    options: SuffixListOptions,
}

impl MemorySuffixLoader {
    /// Create a loader over `data` in the given format
    pub fn new(data: impl Into<String>, format: SuffixFormat) -> Self {
        Self {
            data: data.into(),
            format,
            options: SuffixListOptions::default(),
        }
    }

    /// Create a loader over the three encoded tries
    pub fn from_encoded(exact: &str, under: &str, excluded: &str) -> Self {
        Self::new(
            format!("{}\n{}\n{}\n", exact, under, excluded),
            SuffixFormat::Trie,
        )
    }

    /// Set suffix list options
    pub fn with_options(mut self, options: SuffixListOptions) -> Self {
        self.options = options;
        self
    }
}

impl SuffixLoader for MemorySuffixLoader {
    fn load(&self) -> Result<Arc<SuffixList>> {
        let tables = decode_tables(&self.data, self.format)?;
        Ok(Arc::new(SuffixList::with_options(
            tables,
            self.options.clone(),
        )))
    }
}

// Helper functions

/// Decode tables from text based on format
fn decode_tables(text: &str, format: SuffixFormat) -> Result<SuffixTables> {
    match format {
        SuffixFormat::Dat => parse_list(text),
        SuffixFormat::Trie => SuffixTables::from_trie_text(text),
    }
}
