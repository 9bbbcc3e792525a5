use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::domain::DomainName;
use crate::error::{LoadErrorKind, Result, SuffixError};
use crate::types::{PublicSuffixType, SuffixTables};

/// Regex pattern for a single list rule
/// Format: [*.|!]domain
static RULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*\.|!)?([^*!\s]+)$").expect("RULE_PATTERN: hardcoded regex is invalid")
});

const ICANN_BEGIN: &str = "===BEGIN ICANN DOMAINS===";
const PRIVATE_BEGIN: &str = "===BEGIN PRIVATE DOMAINS===";

/// Which table a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    Exact,
    Wildcard,
    Exception,
}

/// Parse a list in the `public_suffix_list.dat` format.
///
/// Rules before any section marker are treated as ICANN rules.
pub fn parse_list(text: &str) -> Result<SuffixTables> {
    let mut tables = SuffixTables::new();
    let mut section = PublicSuffixType::Icann;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(comment) = line.strip_prefix("//") {
            let comment = comment.trim();
            if comment.starts_with(ICANN_BEGIN) {
                section = PublicSuffixType::Icann;
            } else if comment.starts_with(PRIVATE_BEGIN) {
                section = PublicSuffixType::Private;
            }
            continue;
        }

        // Only the first token of a line is the rule
        let Some(rule) = line.split_whitespace().next() else {
            continue;
        };

        let (kind, suffix) = parse_rule(rule, line_num)?;
        let table = match kind {
            RuleKind::Exact => &mut tables.exact,
            RuleKind::Wildcard => &mut tables.under,
            RuleKind::Exception => &mut tables.excluded,
        };
        if table.insert(suffix, section).is_some() {
            log::warn!("duplicate rule '{}' at line {}", rule, line_num);
        }
    }

    log::debug!(
        "parsed public suffix list: {} exact, {} wildcard, {} exception rules",
        tables.exact.len(),
        tables.under.len(),
        tables.excluded.len()
    );
    Ok(tables)
}

/// Parse a list file in the `public_suffix_list.dat` format.
pub fn parse_list_from_file(path: impl AsRef<Path>) -> Result<SuffixTables> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        SuffixError::load(
            LoadErrorKind::FileError,
            format!("Failed to read list file '{}': {}", path.display(), e),
        )
    })?;
    parse_list(&text)
}

/// Parse a single rule into its table and normalized key
fn parse_rule(rule: &str, line_num: usize) -> Result<(RuleKind, String)> {
    let invalid = |message: String| SuffixError::InvalidRuleAtLine {
        line: line_num,
        message,
    };

    let captures = RULE_PATTERN
        .captures(rule)
        .ok_or_else(|| invalid(format!("Invalid rule format: {}", rule)))?;

    let kind = match captures.get(1).map(|m| m.as_str()) {
        Some("*.") => RuleKind::Wildcard,
        Some(_) => RuleKind::Exception,
        None => RuleKind::Exact,
    };

    let body = captures.get(2).map_or("", |m| m.as_str());
    if body.ends_with('.') {
        return Err(invalid(format!("Trailing dot in rule: {}", rule)));
    }
    let domain = DomainName::parse(body).map_err(|e| invalid(e.to_string()))?;

    if kind == RuleKind::Exception && domain.label_count() < 2 {
        return Err(invalid(format!("Exception rule needs two labels: {}", rule)));
    }

    Ok((kind, domain.as_str().to_string()))
}
