//! Recursive-descent decoder for the serialized public suffix trie.
//!
//! The text is a depth-first serialization: each node is a label fragment
//! (stored reversed) closed by one of `&`, `?`, `!`, `:`, `,`. Interior
//! nodes (`&`, `!`, `:`) are followed by their children, and a `?` or `,`
//! right after a child closes the child list.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{Result, SuffixError, TrieErrorKind};
use crate::types::{is_delimiter, is_leaf_code, PublicSuffixType, SuffixMap};

/// Maximum node nesting accepted by the decoder.
pub const MAX_TRIE_DEPTH: usize = 64;

/// Decode an encoded trie into a suffix -> classification map.
///
/// `expected_entry_count` only pre-sizes the map.
pub fn parse_trie(encoded: &str, expected_entry_count: usize) -> Result<SuffixMap> {
    let mut decoder = TrieDecoder::new(encoded, expected_entry_count);
    let consumed = decoder.decode()?;
    log::debug!(
        "decoded {} public suffix entries from {} bytes",
        decoder.entries.len(),
        consumed
    );
    Ok(decoder.entries)
}

/// Decode a trie stored as several chunks, concatenated in order.
pub fn parse_trie_chunks(chunks: &[&str], expected_entry_count: usize) -> Result<SuffixMap> {
    parse_trie(&chunks.concat(), expected_entry_count)
}

/// Upper bound on the number of entries in an encoded trie.
///
/// Counts terminal delimiters, which also include end-of-siblings markers.
pub fn estimate_entry_count(encoded: &str) -> usize {
    encoded
        .bytes()
        .filter(|&b| PublicSuffixType::from_code(b as char).is_some())
        .count()
}

struct TrieDecoder<'a> {
    encoded: &'a str,
    /// Path fragments from the root, already in forward order; the last
    /// element is the most recently entered node.
    stack: Vec<String>,
    entries: SuffixMap,
}

impl<'a> TrieDecoder<'a> {
    fn new(encoded: &'a str, expected_entry_count: usize) -> Self {
        Self {
            encoded,
            stack: Vec::new(),
            entries: HashMap::with_capacity(expected_entry_count),
        }
    }

    /// Decode every top-level node; returns the number of bytes consumed.
    fn decode(&mut self) -> Result<usize> {
        let len = self.encoded.len();
        let mut idx = 0;
        while idx < len {
            idx = self.decode_node(idx)?;
        }
        Ok(idx)
    }

    /// Decode the node starting at `start` together with its children.
    /// Returns the index just past the node.
    fn decode_node(&mut self, start: usize) -> Result<usize> {
        if self.stack.len() >= MAX_TRIE_DEPTH {
            return Err(SuffixError::malformed(start, TrieErrorKind::DepthExceeded));
        }

        let encoded = self.encoded;
        let bytes = encoded.as_bytes();
        let end = bytes[start..]
            .iter()
            .position(|&b| is_delimiter(b))
            .map(|pos| start + pos)
            .ok_or_else(|| SuffixError::malformed(bytes.len(), TrieErrorKind::UnexpectedEnd))?;
        let delimiter = bytes[end];

        // Delimiters are ASCII, so both ends sit on char boundaries.
        self.stack.push(encoded[start..end].chars().rev().collect());

        if let Some(kind) = PublicSuffixType::from_code(delimiter as char) {
            // Leaf fragment first, root fragment last.
            let domain: String = self.stack.iter().rev().map(String::as_str).collect();
            if !domain.is_empty() {
                match self.entries.entry(domain) {
                    Entry::Occupied(_) => {
                        return Err(SuffixError::malformed(start, TrieErrorKind::DuplicateEntry));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(kind);
                    }
                }
            }
        }

        let mut idx = end + 1;
        if !is_leaf_code(delimiter) {
            while idx < bytes.len() {
                idx = self.decode_node(idx)?;
                match bytes.get(idx) {
                    Some(&b) if is_leaf_code(b) => {
                        idx += 1;
                        break;
                    }
                    Some(_) => {}
                    None => {
                        return Err(SuffixError::malformed(
                            idx,
                            TrieErrorKind::UnterminatedChildren,
                        ));
                    }
                }
            }
        }

        self.stack.pop();
        Ok(idx)
    }
}
