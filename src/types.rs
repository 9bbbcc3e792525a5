use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Suffix map produced by the trie decoder: suffix -> classification
pub type SuffixMap = HashMap<String, PublicSuffixType>;

/// Which section of the public suffix list an entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicSuffixType {
    /// ICANN-managed section
    Icann,
    /// Privately contributed section
    Private,
}

impl PublicSuffixType {
    /// Delimiter closing an interior node that is itself an entry
    pub const fn interior_code(self) -> char {
        match self {
            PublicSuffixType::Icann => '!',
            PublicSuffixType::Private => ':',
        }
    }

    /// Delimiter closing a leaf node
    pub const fn leaf_code(self) -> char {
        match self {
            PublicSuffixType::Icann => '?',
            PublicSuffixType::Private => ',',
        }
    }

    /// Classification carried by a terminal delimiter.
    ///
    /// Returns `None` for `&` and for non-delimiter characters.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '!' | '?' => Some(PublicSuffixType::Icann),
            ':' | ',' => Some(PublicSuffixType::Private),
            _ => None,
        }
    }

    /// Check if this entry belongs to the ICANN section
    pub fn is_icann(self) -> bool {
        self == PublicSuffixType::Icann
    }
}

/// Check if a byte is one of the reserved trie delimiters
#[inline]
pub(crate) fn is_delimiter(b: u8) -> bool {
    matches!(b, b'&' | b'?' | b'!' | b':' | b',')
}

/// Leaf delimiters double as the end-of-siblings marker
#[inline]
pub(crate) fn is_leaf_code(b: u8) -> bool {
    matches!(b, b'?' | b',')
}

/// The three rule tables of a public suffix list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTables {
    /// Plain rules, e.g. "com", "co.uk"
    pub exact: SuffixMap,
    /// Wildcard rules keyed without the "*." prefix ("*.ck" stored as "ck")
    pub under: SuffixMap,
    /// Exception rules keyed without the "!" prefix ("!www.ck" stored as "www.ck")
    pub excluded: SuffixMap,
}

impl SuffixTables {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rules across all tables
    pub fn len(&self) -> usize {
        self.exact.len() + self.under.len() + self.excluded.len()
    }

    /// Check if all tables are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of checking a cookie's Domain attribute against the request host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookieDomainDecision {
    /// Store the cookie with its domain
    Accept,
    /// Store the cookie, restricted to the request host
    AcceptHostOnly,
    /// Ignore the cookie
    Reject,
}

/// Cache key for suffix lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub name: String,
    pub filter: Option<PublicSuffixType>,
}
