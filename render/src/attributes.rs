//! Parser for property attribute strings.
//!
//! Attribute strings are semicolon-delimited `key=value` lists, e.g.
//! `"hlist=(webern);maxlength=32"`. Values wrapped in parentheses are
//! unwrapped — the wire format writes list identifiers as `(id)`.

use std::collections::HashMap;

/// Parse an attribute string into a key → value map.
///
/// Keys without `=` map to the empty string. Empty segments (doubled or
/// trailing semicolons) are skipped.
pub fn parse_attributes(raw: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((key, value)) => {
                attributes.insert(key.trim().to_string(), unwrap_parens(value.trim()));
            }
            None => {
                attributes.insert(segment.to_string(), String::new());
            }
        }
    }
    attributes
}

fn unwrap_parens(value: &str) -> String {
    value
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .unwrap_or(value)
        .to_string()
}
