//! Integration tests for the serialized public suffix trie

use std::collections::HashMap;

use public_suffix_r::trie::{estimate_entry_count, MAX_TRIE_DEPTH};
use public_suffix_r::{
    encode_trie, parse_list_from_file, parse_trie, parse_trie_chunks, PublicSuffixType,
    SuffixError, SuffixMap, SuffixTables, TrieErrorKind,
};

use PublicSuffixType::{Icann, Private};

fn map(entries: &[(&str, PublicSuffixType)]) -> SuffixMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

fn fixture_path() -> String {
    format!(
        "{}/tests/data/public_suffix_list.dat",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn test_icann_interior_with_private_leaf() {
    let parsed = parse_trie("moc!.elpmaxe,?", 2).unwrap();
    assert_eq!(parsed, map(&[("com", Icann), ("example.com", Private)]));
}

#[test]
fn test_hand_computed_fixture() {
    // "ab" leaf; "cd" interior with children "ef" (ICANN) and "g" (PRIVATE)
    let parsed = parse_trie("ab?cd!ef?g,?", 4).unwrap();
    assert_eq!(
        parsed,
        map(&[
            ("ba", Icann),
            ("dc", Icann),
            ("fedc", Icann),
            ("gdc", Private),
        ])
    );
}

#[test]
fn test_plain_nodes_never_become_keys() {
    let parsed = parse_trie("ku&.oc&.elpmaxe???", 0).unwrap();
    assert_eq!(parsed, map(&[("example.co.uk", Icann)]));
    assert!(!parsed.contains_key("uk"));
    assert!(!parsed.contains_key("co.uk"));
}

#[test]
fn test_end_of_siblings_does_not_consume_sibling() {
    // "org" follows the closed child list of "com" and stays top-level
    for encoded in ["moc!.elpmaxe??gro?", "moc!.elpmaxe?,gro?"] {
        let parsed = parse_trie(encoded, 0).unwrap();
        assert_eq!(
            parsed,
            map(&[("com", Icann), ("example.com", Icann), ("org", Icann)]),
            "input {:?}",
            encoded
        );
        assert!(!parsed.contains_key("org.com"));
    }
}

#[test]
fn test_siblings_at_nested_level() {
    let parsed = parse_trie("ku!.ca?.oc!.cbb,?.vog??", 0).unwrap();
    assert_eq!(
        parsed,
        map(&[
            ("uk", Icann),
            ("ac.uk", Icann),
            ("co.uk", Icann),
            ("bbc.co.uk", Private),
            ("gov.uk", Icann),
        ])
    );
}

#[test]
fn test_decoding_is_deterministic() {
    let encoded = "ku!.ca?.oc!.cbb,?.vog??moc&.topsgolb,?";
    let first = parse_trie(encoded, 0).unwrap();
    let second = parse_trie(encoded, 128).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_chunked_input() {
    let chunks = ["ku!.ca?", ".oc!.cbb", ",?.vog??"];
    let parsed = parse_trie_chunks(&chunks, 0).unwrap();
    assert_eq!(parsed, parse_trie(&chunks.concat(), 0).unwrap());
    assert_eq!(parsed.len(), 5);
}

#[test]
fn test_malformed_inputs_are_flagged() {
    let cases = [
        ("moc", TrieErrorKind::UnexpectedEnd),
        ("moc!.elpmaxe", TrieErrorKind::UnexpectedEnd),
        ("moc!.elpmaxe?", TrieErrorKind::UnterminatedChildren),
        ("ku!.oc!.cbb,?", TrieErrorKind::UnterminatedChildren),
        ("moc?gro?moc?", TrieErrorKind::DuplicateEntry),
    ];
    for (encoded, expected) in cases {
        match parse_trie(encoded, 0) {
            Err(SuffixError::MalformedTrieData { kind, offset }) => {
                assert_eq!(kind, expected, "input {:?}", encoded);
                assert!(offset <= encoded.len());
            }
            other => panic!("expected error for {:?}, got {:?}", encoded, other),
        }
    }
}

#[test]
fn test_deep_nesting_is_rejected() {
    let encoded = format!("{}?", "a&".repeat(MAX_TRIE_DEPTH * 2));
    assert!(matches!(
        parse_trie(&encoded, 0),
        Err(SuffixError::MalformedTrieData {
            kind: TrieErrorKind::DepthExceeded,
            ..
        })
    ));
}

#[test]
fn test_size_hint_bounds_entries() {
    let encoded = "ku!.ca?.oc!.cbb,?.vog??moc&.topsgolb,?";
    let parsed = parse_trie(encoded, 0).unwrap();
    assert!(estimate_entry_count(encoded) >= parsed.len());
}

#[test]
fn test_compiled_list_decodes_to_same_tables() {
    let tables = parse_list_from_file(fixture_path()).unwrap();
    assert_eq!(tables.exact.len(), 37);
    assert_eq!(tables.under.len(), 4);
    assert_eq!(tables.excluded.len(), 2);

    let exact = encode_trie(&tables.exact).unwrap();
    assert_eq!(
        parse_trie(&exact, estimate_entry_count(&exact)).unwrap(),
        tables.exact
    );

    let bundle = tables.to_trie_text().unwrap();
    assert_eq!(SuffixTables::from_trie_text(&bundle).unwrap(), tables);
}

#[test]
fn test_encoding_is_stable() {
    let tables = parse_list_from_file(fixture_path()).unwrap();
    let first = tables.to_trie_text().unwrap();

    let mut entries: Vec<_> = tables.exact.clone().into_iter().collect();
    entries.reverse();
    let reordered: HashMap<_, _> = entries.into_iter().collect();
    let second = encode_trie(&reordered).unwrap();
    assert_eq!(first.lines().next(), Some(second.as_str()));
}
