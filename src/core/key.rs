//! Named symmetric keys.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::KEY_SIZE;

/// A named 32-byte symmetric key.
///
/// The key bytes are zeroized on drop and never appear in `Display` or
/// `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    #[zeroize(skip)]
    name: String,
    data: [u8; KEY_SIZE],
}

impl Key {
    /// Generate a fresh key from the OS RNG.
    ///
    /// RNG failure aborts the process; there is no meaningful recovery when
    /// the system cannot produce key material.
    pub fn generate(name: impl Into<String>) -> Self {
        let mut data = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut data);
        Self {
            name: name.into(),
            data,
        }
    }

    pub(crate) fn from_parts(name: String, data: [u8; KEY_SIZE]) -> Self {
        Self { name, data }
    }

    /// The key's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn data(&self) -> &[u8; KEY_SIZE] {
        &self.data
    }
}

/// Shows the name only, never the key bytes.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let a = Key::generate("a");
        let b = Key::generate("b");
        assert_ne!(a.data(), b.data());
    }

    #[test]
    fn display_and_debug_hide_key_bytes() {
        let key = Key::generate("myapp-prod");
        assert_eq!(key.to_string(), "myapp-prod");

        let debug = format!("{:?}", key);
        assert!(debug.contains("myapp-prod"));
        let hex_sample = format!("{:02x?}", &key.data()[..4]);
        assert!(!debug.contains(&hex_sample));
    }
}
