//! Compact serialized public suffix trie.
//!
//! This module provides:
//! - a decoder turning the serialized trie into a flat suffix map
//! - an encoder producing the same serialization from a suffix map
//! - the three-line trie bundle holding the exact/under/excluded tables
//!
//! ## Example
//!
//! ```
//! use public_suffix_r::trie::parse_trie;
//! use public_suffix_r::PublicSuffixType;
//!
//! let entries = parse_trie("moc!.elpmaxe,?", 2).unwrap();
//! assert_eq!(entries.get("com"), Some(&PublicSuffixType::Icann));
//! assert_eq!(entries.get("example.com"), Some(&PublicSuffixType::Private));
//! ```

mod decoder;
mod encoder;

pub use decoder::{estimate_entry_count, parse_trie, parse_trie_chunks, MAX_TRIE_DEPTH};
pub use encoder::encode_trie;

use crate::error::{Result, SuffixError, TrieErrorKind};
use crate::types::SuffixTables;

impl SuffixTables {
    /// Decode the three tables from their encoded tries.
    pub fn from_encoded(exact: &str, under: &str, excluded: &str) -> Result<Self> {
        Ok(Self {
            exact: parse_trie(exact, estimate_entry_count(exact))?,
            under: parse_trie(under, estimate_entry_count(under))?,
            excluded: parse_trie(excluded, estimate_entry_count(excluded))?,
        })
    }

    /// Decode a trie bundle: up to three lines holding the exact, under and
    /// excluded tries in that order. Missing lines are empty tables.
    pub fn from_trie_text(text: &str) -> Result<Self> {
        let mut tables = [""; 3];
        let mut offset = 0;

        for (i, line) in text.split_inclusive('\n').enumerate() {
            let content = line.trim_end_matches(['\n', '\r']);
            if i < tables.len() {
                tables[i] = content;
            } else if !content.is_empty() {
                return Err(SuffixError::malformed(offset, TrieErrorKind::TrailingData));
            }
            offset += line.len();
        }

        Self::from_encoded(tables[0], tables[1], tables[2])
    }

    /// Encode the tables as a trie bundle.
    pub fn to_trie_text(&self) -> Result<String> {
        let exact = encode_trie(&self.exact)?;
        let under = encode_trie(&self.under)?;
        let excluded = encode_trie(&self.excluded)?;
        Ok(format!("{}\n{}\n{}\n", exact, under, excluded))
    }
}
