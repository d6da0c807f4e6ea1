//! Keyring: an ordered collection of named keys.
//!
//! Serialized form is line-oriented `name=base64(32 raw bytes)`, safe to
//! store outside source control. Duplicate names are rejected by the lexer.

use std::fmt;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use crate::core::constants::KEY_SIZE;
use crate::core::key::Key;
use crate::core::lexer::parse_multiline_kv;
use crate::core::validate::is_valid_key_name;
use crate::error::{KeyringError, Result};

/// Insertion-ordered collection of named keys.
#[derive(Default, Clone)]
pub struct Keyring {
    keys: Vec<Key>,
}

impl Keyring {
    /// An empty keyring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `name=base64` line format.
    pub fn parse(data: &str) -> Result<Self> {
        let pairs = parse_multiline_kv(data)?;
        let mut keyring = Keyring {
            keys: Vec::with_capacity(pairs.len()),
        };

        for (name, encoded) in pairs {
            if !is_valid_key_name(&name) {
                return Err(KeyringError::InvalidKeyName { name }.into());
            }
            let raw = BASE64
                .decode(&encoded)
                .map_err(|source| KeyringError::InvalidKeyData {
                    name: name.clone(),
                    source,
                })?;
            let data: [u8; KEY_SIZE] =
                raw.as_slice()
                    .try_into()
                    .map_err(|_| KeyringError::InvalidKeySize {
                        name: name.clone(),
                        got: raw.len(),
                        want: KEY_SIZE,
                    })?;
            keyring.keys.push(Key::from_parts(name, data));
        }

        Ok(keyring)
    }

    /// Load a keyring file; errors are prefixed with the path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let keyring = Self::parse(&raw).map_err(|e| e.in_file(path))?;
        debug!(path = %path.display(), keys = keyring.len(), "loaded keyring");
        Ok(keyring)
    }

    /// Write the keyring to a file with owner-only permissions.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.serialize())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }

        debug!(path = %path.display(), keys = self.len(), "wrote keyring");
        Ok(())
    }

    /// Append a key.
    pub fn add(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Look up a key by exact name.
    pub fn by_name(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name() == name)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the keyring holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(Key::name)
    }

    /// Serialize to the `name=base64` line format.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for key in &self.keys {
            out.push_str(key.name());
            out.push('=');
            out.push_str(&BASE64.encode(key.data()));
            out.push('\n');
        }
        out
    }
}

/// Lists sorted key names only; never the key bytes.
impl fmt::Display for Keyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        write!(f, "({})", names.join(", "))
    }
}

impl fmt::Debug for Keyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keyring").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serialize_roundtrip() {
        let mut keyring = Keyring::new();
        keyring.add(Key::generate("myapp-dev"));
        keyring.add(Key::generate("myapp-prod"));

        let reparsed = Keyring::parse(&keyring.serialize()).unwrap();
        assert_eq!(reparsed.len(), 2);
        assert_eq!(
            reparsed.by_name("myapp-dev").unwrap().data(),
            keyring.by_name("myapp-dev").unwrap().data()
        );
    }

    #[test]
    fn display_sorts_names() {
        let mut keyring = Keyring::new();
        keyring.add(Key::generate("myapp-prod"));
        keyring.add(Key::generate("myapp-dev"));
        assert_eq!(keyring.to_string(), "(myapp-dev, myapp-prod)");
    }

    #[test]
    fn by_name_is_exact() {
        let mut keyring = Keyring::new();
        keyring.add(Key::generate("myapp-prod"));
        assert!(keyring.by_name("myapp-prod").is_some());
        assert!(keyring.by_name("myapp").is_none());
    }

    #[test]
    fn rejects_invalid_name() {
        let err = Keyring::parse("bad name=aGVsbG8=").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key name \"bad name\", must be [a-zA-Z0-9_.@-]+"
        );
    }

    #[test]
    fn rejects_bad_base64() {
        let err = Keyring::parse("k=!!!").unwrap_err();
        assert!(err.to_string().starts_with("k: invalid base64-encoded key:"));
    }

    #[test]
    fn rejects_wrong_key_size() {
        let err = Keyring::parse("k=aGVsbG8=").unwrap_err();
        assert_eq!(err.to_string(), "k: invalid key size 5, wanted 32");
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut keyring = Keyring::new();
        keyring.add(Key::generate("k"));
        let doubled = format!("{}{}", keyring.serialize(), keyring.serialize());
        let err = Keyring::parse(&doubled).unwrap_err();
        assert_eq!(err.to_string(), "line 2: duplicate value for k");
    }

    #[test]
    fn ignores_comments_and_blanks() {
        let mut keyring = Keyring::new();
        keyring.add(Key::generate("k"));
        let data = format!("# keyring\n\n{}", keyring.serialize());
        assert_eq!(Keyring::parse(&data).unwrap().len(), 1);
    }
}
