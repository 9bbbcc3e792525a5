use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{Result, SuffixError};

/// Maximum length of a domain name, without the trailing dot
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of a single label
pub const MAX_LABEL_LENGTH: usize = 63;

/// A validated, lowercased domain name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    name: String,
    /// Byte offset of each label in `name`
    starts: Vec<usize>,
}

impl DomainName {
    /// Parse and normalize a domain name.
    ///
    /// A single trailing dot is dropped and the name is lowercased. Non-ASCII
    /// labels are accepted as-is; no IDNA conversion is done.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.strip_suffix('.').unwrap_or(input);
        let name = trimmed.to_lowercase();

        if name.is_empty() {
            return Err(SuffixError::InvalidDomain(format!("'{}': empty name", input)));
        }
        if name.len() > MAX_DOMAIN_LENGTH {
            return Err(SuffixError::InvalidDomain(format!(
                "'{}': longer than {} bytes",
                input, MAX_DOMAIN_LENGTH
            )));
        }

        let mut starts = Vec::new();
        let mut pos = 0;
        let mut last = "";
        for label in name.split('.') {
            validate_label(label)
                .map_err(|msg| SuffixError::InvalidDomain(format!("'{}': {}", input, msg)))?;
            starts.push(pos);
            pos += label.len() + 1;
            last = label;
        }

        if last.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(SuffixError::InvalidDomain(format!(
                "'{}': final label starts with a digit",
                input
            )));
        }

        Ok(Self { name, starts })
    }

    /// The normalized name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Number of labels
    pub fn label_count(&self) -> usize {
        self.starts.len()
    }

    /// Labels from left to right
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }

    /// The name with the first `levels` labels removed.
    ///
    /// `ancestor(0)` is the whole name. Panics if `levels >= label_count()`.
    pub fn ancestor(&self, levels: usize) -> &str {
        &self.name[self.starts[levels]..]
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for DomainName {
    type Err = SuffixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

fn validate_label(label: &str) -> std::result::Result<(), &'static str> {
    if label.is_empty() {
        return Err("empty label");
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err("label longer than 63 bytes");
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err("label starts or ends with '-'");
    }
    if label
        .chars()
        .any(|c| c.is_ascii() && !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    {
        return Err("invalid character in label");
    }
    Ok(())
}

/// Check if a host is an IPv4 or IPv6 literal (optionally bracketed)
pub fn is_ip_address(host: &str) -> bool {
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    host.parse::<IpAddr>().is_ok()
}
