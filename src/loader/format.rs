use std::path::Path;

/// Public suffix list resource format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixFormat {
    /// Human-readable `public_suffix_list.dat` rules
    Dat,
    /// Compact trie bundle (exact, under and excluded tries, one per line)
    Trie,
}

impl SuffixFormat {
    /// Detect format from file extension
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "dat" => Some(SuffixFormat::Dat),
            "trie" => Some(SuffixFormat::Trie),
            _ => None,
        }
    }

    /// Get default filename for this format
    pub fn default_filename(&self) -> &'static str {
        match self {
            SuffixFormat::Dat => "public_suffix_list.dat",
            SuffixFormat::Trie => "public_suffix_list.trie",
        }
    }
}
