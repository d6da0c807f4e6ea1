//! Name validation and wildcard matching.
//!
//! Three charsets cover every name in the two file formats: key names
//! (`A-Za-z0-9_.@-`), value names (`A-Za-z0-9_`), and env names
//! (`A-Za-z0-9_-`). Value and env names each have a wildcard form that
//! additionally permits `*`.

use glob::Pattern;

fn is_key_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '-')
}

fn is_value_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_env_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-')
}

/// Whether `s` is a valid keyring key name.
pub fn is_valid_key_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_key_name_char)
}

/// Whether `s` is a valid entry (value) name.
pub fn is_valid_value_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_value_name_char)
}

/// Whether `s` is a valid entry name pattern (value charset plus `*`).
pub fn is_valid_value_name_wildcard(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_value_name_char(c) || c == '*')
}

/// Whether `s` is a valid env name.
pub fn is_valid_env_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_env_name_char)
}

/// Whether `s` is a valid env token (env charset plus `*`).
pub fn is_valid_env_name_wildcard(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_env_name_char(c) || c == '*')
}

/// Whether `s` contains a wildcard.
pub fn is_wildcard(s: &str) -> bool {
    s.contains('*')
}

/// Whether `pattern` is syntactically valid as a glob.
pub fn is_valid_glob(pattern: &str) -> bool {
    Pattern::new(pattern).is_ok()
}

/// Glob-match `candidate` against `pattern`. Malformed patterns match nothing.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    Pattern::new(pattern).map_or(false, |p| p.matches(candidate))
}

/// First pattern in `patterns` that glob-matches `candidate`.
pub fn find_match<'a>(patterns: &'a [String], candidate: &str) -> Option<&'a str> {
    patterns
        .iter()
        .find(|pat| matches(pat, candidate))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert!(is_valid_key_name("myapp-prod"));
        assert!(is_valid_key_name("a.b@c_d-e"));
        assert!(!is_valid_key_name(""));
        assert!(!is_valid_key_name("has space"));
        assert!(!is_valid_key_name("colon:bad"));
    }

    #[test]
    fn value_names() {
        assert!(is_valid_value_name("DATABASE_URL"));
        assert!(is_valid_value_name("FOO2"));
        assert!(!is_valid_value_name("FOO-BAR"));
        assert!(!is_valid_value_name("FOO.BAR"));
        assert!(!is_valid_value_name(""));

        assert!(is_valid_value_name_wildcard("FOO*"));
        assert!(!is_valid_value_name_wildcard("FOO-*"));
    }

    #[test]
    fn env_names() {
        assert!(is_valid_env_name("local-john"));
        assert!(is_valid_env_name("stag_2"));
        assert!(!is_valid_env_name("dev.1"));
        assert!(!is_valid_env_name("dev*"));

        assert!(is_valid_env_name_wildcard("local-*"));
        assert!(is_valid_env_name_wildcard("*"));
        assert!(!is_valid_env_name_wildcard("a b"));
    }

    #[test]
    fn wildcard_predicate() {
        assert!(is_wildcard("local-*"));
        assert!(!is_wildcard("local"));
    }

    #[test]
    fn glob_matching() {
        assert!(matches("local-*", "local-john"));
        assert!(matches("local-*", "local-"));
        assert!(!matches("local-*", "local"));
        assert!(matches("prod", "prod"));
        assert!(matches("local-*", "local-*"));
    }

    #[test]
    fn malformed_pattern_matches_nothing() {
        assert!(!is_valid_glob("[oops"));
        assert!(!matches("[oops", "anything"));
    }

    #[test]
    fn find_match_returns_first_hit() {
        let patterns = vec!["prod".to_string(), "local-*".to_string()];
        assert_eq!(find_match(&patterns, "local-bob"), Some("local-*"));
        assert_eq!(find_match(&patterns, "prod"), Some("prod"));
        assert_eq!(find_match(&patterns, "dev"), None);
    }
}
