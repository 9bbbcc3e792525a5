//! Encoder producing the serialized trie text from a suffix map.

use std::collections::BTreeMap;

use super::decoder::MAX_TRIE_DEPTH;
use crate::error::{Result, SuffixError};
use crate::types::{is_delimiter, PublicSuffixType, SuffixMap};

/// Trie node used while encoding; one node per domain label
#[derive(Debug, Default)]
struct EncodeNode {
    kind: Option<PublicSuffixType>,
    /// Children keyed by encoded fragment, sorted for stable output
    children: BTreeMap<String, EncodeNode>,
}

/// Encode a suffix map into trie text that `parse_trie` decodes back to the
/// same map.
///
/// The top-level fragment of each suffix is its reversed last label; deeper
/// fragments are a dot followed by the reversed label, so that reversing
/// every fragment and joining leaf-first rebuilds the suffix.
pub fn encode_trie(entries: &SuffixMap) -> Result<String> {
    let mut root = EncodeNode::default();
    let mut size = 0;

    for (suffix, &kind) in entries {
        validate_suffix(suffix)?;
        size += suffix.len() + 2;

        let mut node = &mut root;
        for (depth, label) in suffix.rsplit('.').enumerate() {
            let reversed: String = label.chars().rev().collect();
            let fragment = if depth == 0 {
                reversed
            } else {
                format!(".{}", reversed)
            };
            node = node.children.entry(fragment).or_default();
        }
        node.kind = Some(kind);
    }

    let mut out = String::with_capacity(size);
    for (fragment, child) in &root.children {
        write_node(&mut out, fragment, child);
    }

    log::debug!(
        "encoded {} public suffix entries into {} bytes",
        entries.len(),
        out.len()
    );
    Ok(out)
}

fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(SuffixError::InvalidRule("empty suffix".to_string()));
    }
    if suffix.bytes().any(is_delimiter) {
        return Err(SuffixError::InvalidRule(format!(
            "reserved character in '{}'",
            suffix
        )));
    }
    let mut labels = 0;
    for label in suffix.split('.') {
        if label.is_empty() {
            return Err(SuffixError::InvalidRule(format!(
                "empty label in '{}'",
                suffix
            )));
        }
        labels += 1;
    }
    if labels > MAX_TRIE_DEPTH {
        return Err(SuffixError::InvalidRule(format!(
            "too many labels in '{}'",
            suffix
        )));
    }
    Ok(())
}

fn write_node(out: &mut String, fragment: &str, node: &EncodeNode) {
    out.push_str(fragment);

    if node.children.is_empty() {
        // Only entries create nodes, so every leaf has a kind.
        out.push(node.kind.map_or('?', PublicSuffixType::leaf_code));
        return;
    }

    out.push(node.kind.map_or('&', PublicSuffixType::interior_code));
    for (child_fragment, child) in &node.children {
        write_node(out, child_fragment, child);
    }
    // End of siblings
    out.push('?');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::parse_trie;

    fn map(entries: &[(&str, PublicSuffixType)]) -> SuffixMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_encode_interior_and_leaf() {
        let entries = map(&[
            ("com", PublicSuffixType::Icann),
            ("example.com", PublicSuffixType::Private),
        ]);
        assert_eq!(encode_trie(&entries).unwrap(), "moc!.elpmaxe,?");
    }

    #[test]
    fn test_encode_sorted_siblings() {
        let entries = map(&[
            ("uk", PublicSuffixType::Icann),
            ("co.uk", PublicSuffixType::Icann),
            ("org", PublicSuffixType::Icann),
        ]);
        assert_eq!(encode_trie(&entries).unwrap(), "gro?ku!.oc??");
    }

    #[test]
    fn test_encode_plain_intermediate_node() {
        let entries = map(&[("blogspot.com", PublicSuffixType::Private)]);
        assert_eq!(encode_trie(&entries).unwrap(), "moc&.topsgolb,?");
    }

    #[test]
    fn test_encoded_text_decodes_to_same_entries() {
        let entries = map(&[
            ("com", PublicSuffixType::Icann),
            ("uk", PublicSuffixType::Icann),
            ("co.uk", PublicSuffixType::Icann),
            ("ac.uk", PublicSuffixType::Icann),
            ("blogspot.co.uk", PublicSuffixType::Private),
            ("github.io", PublicSuffixType::Private),
            ("s3.amazonaws.com", PublicSuffixType::Private),
            ("公司.cn", PublicSuffixType::Icann),
            ("cn", PublicSuffixType::Icann),
        ]);
        let encoded = encode_trie(&entries).unwrap();
        assert_eq!(parse_trie(&encoded, entries.len()).unwrap(), entries);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_trie(&SuffixMap::new()).unwrap(), "");
    }

    #[test]
    fn test_encode_rejects_bad_suffixes() {
        for bad in ["", "example..com", ".com", "com.", "a?b.com", "x&y"] {
            let entries = map(&[(bad, PublicSuffixType::Icann)]);
            assert!(
                matches!(encode_trie(&entries), Err(SuffixError::InvalidRule(_))),
                "expected rejection of {:?}",
                bad
            );
        }
    }
}
