//! Public Suffix - compact public suffix trie decoding and lookup for Rust
//!
//! This library provides:
//! - Decoding of the compact serialized public suffix trie
//! - Encoding of suffix tables back into that serialization
//! - Compilation of `public_suffix_list.dat` rule files
//! - Public suffix and registrable domain lookup (exact, wildcard, exception rules)
//! - Cookie domain checks against public suffixes
//! - LRU caching of lookups
//!
//! # Example
//!
//! ```rust
//! use public_suffix_r::{SuffixList, SuffixTables};
//!
//! // Encoded exact, wildcard and exception tries
//! let tables = SuffixTables::from_encoded("ku!.oc??moc!.topsgolb,?", "kc?", "kc&.www??").unwrap();
//! let list = SuffixList::new(tables);
//!
//! assert_eq!(list.public_suffix("www.bbc.co.uk").as_deref(), Some("co.uk"));
//! assert_eq!(list.top_private_domain("www.bbc.co.uk").as_deref(), Some("bbc.co.uk"));
//! assert!(list.is_public_suffix("blogspot.com"));
//! assert_eq!(list.registry_suffix("me.blogspot.com").as_deref(), Some("com"));
//! assert_eq!(list.public_suffix("www.ck").as_deref(), Some("ck"));
//! ```
//!
//! # Trie Format
//!
//! Each node is a label fragment, stored reversed, closed by a delimiter:
//!
//! | Delimiter | Node | Entry |
//! |-----------|------|-------|
//! | `!` | interior | ICANN |
//! | `?` | leaf | ICANN |
//! | `:` | interior | PRIVATE |
//! | `,` | leaf | PRIVATE |
//! | `&` | interior | none |
//!
//! Interior nodes are followed by their children; a `?` or `,` right after a
//! child ends the child list. `moc!.elpmaxe,?` decodes to
//! `{"com": Icann, "example.com": Private}`.

pub mod cookie;
pub mod domain;
pub mod error;
pub mod list;
pub mod loader;
pub mod parser;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use cookie::domain_match;
pub use domain::{is_ip_address, DomainName};
pub use error::{LoadErrorKind, Result, SuffixError, TrieErrorKind};
pub use list::{SuffixList, SuffixListOptions, DEFAULT_CACHE_SIZE};
pub use loader::{
    FileSuffixLoader, MemorySuffixLoader, NilSuffixLoader, SuffixFormat, SuffixLoader,
};
pub use parser::{parse_list, parse_list_from_file};
pub use trie::{encode_trie, parse_trie, parse_trie_chunks};
pub use types::{CookieDomainDecision, PublicSuffixType, SuffixMap, SuffixTables};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let list_text = r#"
// ===BEGIN ICANN DOMAINS===
com
uk
co.uk
*.ck
!www.ck

// ===BEGIN PRIVATE DOMAINS===
blogspot.com
"#;

        // Compile the rule file and serialize it
        let tables = parse_list(list_text).unwrap();
        assert_eq!(tables.len(), 6);
        let bundle = tables.to_trie_text().unwrap();

        // Load it back the way a bundled resource would be
        let loader = MemorySuffixLoader::new(bundle, SuffixFormat::Trie);
        let list = loader.load().unwrap();
        assert_eq!(list.tables(), &tables);

        // Suffix lookups
        assert_eq!(list.public_suffix("www.bbc.co.uk").as_deref(), Some("co.uk"));
        assert_eq!(
            list.top_private_domain("a.b.example.com").as_deref(),
            Some("example.com")
        );
        assert_eq!(list.public_suffix("x.y.ck").as_deref(), Some("y.ck"));
        assert_eq!(list.public_suffix("www.ck").as_deref(), Some("ck"));

        // Cookie policy
        assert_eq!(
            list.check_cookie_domain("blogspot.com", "me.blogspot.com"),
            CookieDomainDecision::Reject
        );
        assert_eq!(
            list.check_cookie_domain("me.blogspot.com", "www.me.blogspot.com"),
            CookieDomainDecision::Accept
        );
    }
}
