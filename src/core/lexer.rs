//! Line-oriented `key = value` lexer.
//!
//! Shared by the secrets and keyring file formats. Pairs come back in file
//! order so everything built on top stays deterministic.

use std::collections::HashSet;

use crate::error::ParseError;

/// Split multi-line `k=v` text into ordered pairs.
///
/// Trims each line, skips blanks and `#` comments, splits at the first `=`,
/// and trims both sides. Line numbers in errors are 1-based.
///
/// # Errors
///
/// `line N: missing =` when a non-blank, non-comment line has no `=`;
/// `line N: missing key` when the key side is empty;
/// `line N: duplicate value for K` when a key repeats.
pub fn parse_multiline_kv(data: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut result = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in data.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError::MissingEquals { line: idx + 1 });
        };

        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(ParseError::MissingKey { line: idx + 1 });
        }
        if !seen.insert(key.to_string()) {
            return Err(ParseError::DuplicateKey {
                line: idx + 1,
                key: key.to_string(),
            });
        }
        result.push((key.to_string(), value.to_string()));
    }

    Ok(result)
}
