//! Public suffix lookup service.
//!
//! Holds the decoded exact/under/excluded tables and answers public suffix
//! questions for host names, with an LRU cache of suffix positions.

use std::num::NonZeroUsize;

use lru::LruCache;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::domain::DomainName;
use crate::error::{LoadErrorKind, Result, SuffixError};
use crate::types::{CacheKey, PublicSuffixType, SuffixTables};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

static GLOBAL: OnceCell<SuffixList> = OnceCell::new();

/// Suffix list options.
#[derive(Debug, Clone)]
pub struct SuffixListOptions {
    /// LRU cache size for suffix lookups (0 disables the cache)
    pub cache_size: usize,
}

impl Default for SuffixListOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl SuffixListOptions {
    /// Create new suffix list options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Immutable public suffix lookup service
pub struct SuffixList {
    tables: SuffixTables,
    cache: Option<Mutex<LruCache<CacheKey, Option<usize>>>>,
}

impl std::fmt::Debug for SuffixList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixList")
            .field("exact", &self.tables.exact.len())
            .field("under", &self.tables.under.len())
            .field("excluded", &self.tables.excluded.len())
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl SuffixList {
    /// Create a suffix list with default options
    pub fn new(tables: SuffixTables) -> Self {
        Self::with_options(tables, SuffixListOptions::default())
    }

    /// Create a suffix list with explicit options
    pub fn with_options(tables: SuffixTables, options: SuffixListOptions) -> Self {
        let cache =
            NonZeroUsize::new(options.cache_size).map(|size| Mutex::new(LruCache::new(size)));
        Self { tables, cache }
    }

    /// A list without any rules
    pub fn empty() -> Self {
        Self::new(SuffixTables::default())
    }

    /// Decode a list from its encoded exact/under/excluded tries
    pub fn from_encoded(exact: &str, under: &str, excluded: &str) -> Result<Self> {
        Ok(Self::new(SuffixTables::from_encoded(exact, under, excluded)?))
    }

    /// The underlying tables
    pub fn tables(&self) -> &SuffixTables {
        &self.tables
    }

    /// Total number of rules
    pub fn rule_count(&self) -> usize {
        self.tables.len()
    }

    /// Classification of an exact rule, if the suffix is one
    pub fn suffix_type(&self, suffix: &str) -> Option<PublicSuffixType> {
        self.tables.exact.get(suffix).copied()
    }

    /// Install a process-wide list. Fails if one is already installed.
    pub fn install_global(list: SuffixList) -> Result<()> {
        GLOBAL.set(list).map_err(|_| {
            SuffixError::load(
                LoadErrorKind::AlreadyInstalled,
                "a global suffix list is already installed",
            )
        })?;
        log::info!("installed global public suffix list");
        Ok(())
    }

    /// The process-wide list, if installed
    pub fn global() -> Option<&'static SuffixList> {
        GLOBAL.get()
    }

    /// Index of the first label of the public suffix of `domain`.
    ///
    /// With a `filter`, only rules of that classification count. Rules are
    /// checked from the whole name towards the top-level label:
    /// a wildcard on the parent, then an exact rule, then an exception
    /// (which makes the parent the suffix).
    pub fn public_suffix_index(
        &self,
        domain: &DomainName,
        filter: Option<PublicSuffixType>,
    ) -> Option<usize> {
        let Some(cache) = &self.cache else {
            return self.find_suffix(domain, filter);
        };

        let key = CacheKey {
            name: domain.as_str().to_string(),
            filter,
        };
        let mut cache = cache.lock();
        if let Some(&cached) = cache.get(&key) {
            return cached;
        }

        // Lookup is CPU-only, so it runs under the lock.
        let result = self.find_suffix(domain, filter);
        cache.put(key, result);
        result
    }

    fn find_suffix(&self, domain: &DomainName, filter: Option<PublicSuffixType>) -> Option<usize> {
        let count = domain.label_count();
        for i in 0..count {
            let ancestor = domain.ancestor(i);

            if i > 0 && matches_type(filter, self.tables.under.get(ancestor).copied()) {
                return Some(i - 1);
            }

            if matches_type(filter, self.tables.exact.get(ancestor).copied()) {
                return Some(i);
            }

            // An exception makes its parent the effective suffix
            if self.tables.excluded.contains_key(ancestor) && i + 1 < count {
                return Some(i + 1);
            }
        }
        None
    }

    fn suffix_index_of(
        &self,
        domain: &str,
        filter: Option<PublicSuffixType>,
    ) -> Option<(DomainName, usize)> {
        let domain = DomainName::parse(domain).ok()?;
        let index = self.public_suffix_index(&domain, filter)?;
        Some((domain, index))
    }

    /// The public suffix of `domain` (any classification)
    pub fn public_suffix(&self, domain: &str) -> Option<String> {
        self.suffix_index_of(domain, None)
            .map(|(d, i)| d.ancestor(i).to_string())
    }

    /// The ICANN registry suffix of `domain`
    pub fn registry_suffix(&self, domain: &str) -> Option<String> {
        self.suffix_index_of(domain, Some(PublicSuffixType::Icann))
            .map(|(d, i)| d.ancestor(i).to_string())
    }

    /// Check if `domain` has any public suffix
    pub fn has_public_suffix(&self, domain: &str) -> bool {
        self.suffix_index_of(domain, None).is_some()
    }

    /// Check if `domain` is itself a public suffix (e.g. "com", "co.uk")
    pub fn is_public_suffix(&self, domain: &str) -> bool {
        matches!(self.suffix_index_of(domain, None), Some((_, 0)))
    }

    /// Check if `domain` is itself an ICANN registry suffix
    pub fn is_registry_suffix(&self, domain: &str) -> bool {
        matches!(
            self.suffix_index_of(domain, Some(PublicSuffixType::Icann)),
            Some((_, 0))
        )
    }

    /// Check if `domain` sits strictly below a public suffix
    pub fn is_under_public_suffix(&self, domain: &str) -> bool {
        matches!(self.suffix_index_of(domain, None), Some((_, i)) if i > 0)
    }

    /// Check if `domain` is exactly one label below its public suffix
    pub fn is_top_private_domain(&self, domain: &str) -> bool {
        matches!(self.suffix_index_of(domain, None), Some((_, 1)))
    }

    /// The registrable domain (public suffix plus one label).
    ///
    /// Returns `None` for public suffixes and names without a suffix.
    pub fn top_private_domain(&self, domain: &str) -> Option<String> {
        match self.suffix_index_of(domain, None) {
            Some((d, i)) if i > 0 => Some(d.ancestor(i - 1).to_string()),
            _ => None,
        }
    }

    /// The registry suffix plus one label
    pub fn top_domain_under_registry_suffix(&self, domain: &str) -> Option<String> {
        match self.suffix_index_of(domain, Some(PublicSuffixType::Icann)) {
            Some((d, i)) if i > 0 => Some(d.ancestor(i - 1).to_string()),
            _ => None,
        }
    }

    /// Clear the lookup cache
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }
}

fn matches_type(filter: Option<PublicSuffixType>, actual: Option<PublicSuffixType>) -> bool {
    match filter {
        Some(desired) => actual == Some(desired),
        None => actual.is_some(),
    }
}
