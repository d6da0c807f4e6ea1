//! Entry values: parsing the right-hand side of `name[.env] = <value>` and
//! decoding entries back into plaintext.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::{Nonce, XSalsa20Poly1305};

use crate::core::constants::NONCE_SIZE;
use crate::core::keyring::Keyring;
use crate::core::validate::is_valid_key_name;
use crate::error::{CryptoError, ParseError};

/// How an entry's value is encoded in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `NONE` / `none`: the entry deliberately has no value.
    NoValue,
    /// A literal string.
    Plain,
    /// `TODO` or `TODO:<note>`: a value someone still has to fill in.
    Placeholder,
    /// `secret:<keyname>:<nonce>:<ciphertext>`: sealed with a keyring key.
    Encrypted,
    /// `enc:<keyname>:<value>` or `enc::<value>`: plaintext awaiting
    /// encryption in place.
    ToBeEncrypted,
}

/// One value variant of a named entry.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub env: String,
    pub raw_lhs: String,
    pub raw_rhs: String,
    pub encoding: Encoding,
    pub key_name: String,
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
    pub plain_value: String,
}

impl Entry {
    /// Classify an RHS and build the entry for it.
    pub fn parse(env: String, raw_lhs: &str, raw_rhs: &str) -> Result<Self, ParseError> {
        let mut entry = Entry {
            env,
            raw_lhs: raw_lhs.to_string(),
            raw_rhs: raw_rhs.to_string(),
            encoding: Encoding::Plain,
            key_name: String::new(),
            nonce: [0u8; NONCE_SIZE],
            ciphertext: Vec::new(),
            plain_value: String::new(),
        };

        if let Some(rest) = raw_rhs.strip_prefix("enc:") {
            let Some((key_name, value)) = rest.split_once(':') else {
                return Err(ParseError::MissingColon);
            };
            if !key_name.is_empty() && !is_valid_key_name(key_name) {
                return Err(ParseError::InvalidEncKeyName {
                    name: key_name.to_string(),
                });
            }
            entry.encoding = Encoding::ToBeEncrypted;
            entry.key_name = key_name.to_string();
            entry.plain_value = value.to_string();
        } else if let Some(rest) = raw_rhs.strip_prefix("secret:") {
            let parts: Vec<&str> = rest.split(':').collect();
            let [key_name, nonce_b64, ciphertext_b64] = parts.as_slice() else {
                return Err(ParseError::MalformedSecret);
            };
            if !is_valid_key_name(key_name) {
                return Err(ParseError::InvalidSecretKeyName {
                    name: key_name.to_string(),
                });
            }
            let nonce = BASE64
                .decode(nonce_b64)
                .map_err(|source| ParseError::InvalidNonce { source })?;
            if nonce.len() != NONCE_SIZE {
                return Err(ParseError::InvalidNonceLength {
                    got: nonce.len(),
                    want: NONCE_SIZE,
                });
            }
            let ciphertext = BASE64
                .decode(ciphertext_b64)
                .map_err(|source| ParseError::InvalidCiphertext { source })?;

            entry.encoding = Encoding::Encrypted;
            entry.key_name = key_name.to_string();
            entry.nonce.copy_from_slice(&nonce);
            entry.ciphertext = ciphertext;
        } else if let Some(rest) = raw_rhs.strip_prefix("TODO:") {
            entry.encoding = Encoding::Placeholder;
            entry.plain_value = rest.to_string();
        } else if raw_rhs == "TODO" {
            entry.encoding = Encoding::Placeholder;
        } else if raw_rhs == "NONE" || raw_rhs == "none" {
            entry.encoding = Encoding::NoValue;
        } else {
            entry.encoding = Encoding::Plain;
            entry.plain_value = raw_rhs.to_string();
        }

        Ok(entry)
    }

    /// Decode the entry into its plaintext value.
    pub fn decode(&self, keyring: &Keyring) -> Result<String, CryptoError> {
        match self.encoding {
            Encoding::NoValue => Ok(String::new()),
            Encoding::Plain | Encoding::ToBeEncrypted => Ok(self.plain_value.clone()),
            Encoding::Placeholder => Err(CryptoError::Unspecified),
            Encoding::Encrypted => {
                let key = keyring
                    .by_name(&self.key_name)
                    .ok_or_else(|| CryptoError::MissingKey {
                        name: self.key_name.clone(),
                    })?;
                let cipher = XSalsa20Poly1305::new(crypto_secretbox::Key::from_slice(key.data()));
                let plaintext = cipher
                    .decrypt(Nonce::from_slice(&self.nonce), self.ciphertext.as_slice())
                    .map_err(|_| CryptoError::DecryptionFailed)?;
                Ok(String::from_utf8_lossy(&plaintext).into_owned())
            }
        }
    }

    /// Canonical re-emission of the value for [`crate::Values`]'s `Display`.
    pub fn display_rhs(&self) -> String {
        match self.encoding {
            Encoding::NoValue => "NONE".to_string(),
            Encoding::Plain => self.plain_value.clone(),
            Encoding::ToBeEncrypted => format!("enc:{}:{}", self.key_name, self.plain_value),
            Encoding::Placeholder => {
                if self.plain_value.is_empty() {
                    "TODO".to_string()
                } else {
                    format!("TODO:{}", self.plain_value)
                }
            }
            Encoding::Encrypted => format!(
                "secret:{}:{}:{}",
                self.key_name,
                BASE64.encode(self.nonce),
                BASE64.encode(&self.ciphertext)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::Key;

    fn parse(rhs: &str) -> Result<Entry, ParseError> {
        Entry::parse("all".to_string(), "X", rhs)
    }

    #[test]
    fn classifies_plain() {
        let e = parse("hello world").unwrap();
        assert_eq!(e.encoding, Encoding::Plain);
        assert_eq!(e.plain_value, "hello world");
    }

    #[test]
    fn classifies_none() {
        assert_eq!(parse("NONE").unwrap().encoding, Encoding::NoValue);
        assert_eq!(parse("none").unwrap().encoding, Encoding::NoValue);
        // Only the exact spellings are special.
        assert_eq!(parse("None").unwrap().encoding, Encoding::Plain);
    }

    #[test]
    fn classifies_placeholder() {
        let bare = parse("TODO").unwrap();
        assert_eq!(bare.encoding, Encoding::Placeholder);
        assert_eq!(bare.plain_value, "");

        let noted = parse("TODO:ask ops").unwrap();
        assert_eq!(noted.encoding, Encoding::Placeholder);
        assert_eq!(noted.plain_value, "ask ops");

        // "TODOx" is not a placeholder.
        assert_eq!(parse("TODOx").unwrap().encoding, Encoding::Plain);
    }

    #[test]
    fn classifies_to_be_encrypted() {
        let named = parse("enc:myapp-prod:hunter2").unwrap();
        assert_eq!(named.encoding, Encoding::ToBeEncrypted);
        assert_eq!(named.key_name, "myapp-prod");
        assert_eq!(named.plain_value, "hunter2");

        let derived = parse("enc::hunter2").unwrap();
        assert_eq!(derived.encoding, Encoding::ToBeEncrypted);
        assert_eq!(derived.key_name, "");
        assert_eq!(derived.plain_value, "hunter2");

        // The value may itself contain colons.
        let url = parse("enc::postgres://u:p@h/db").unwrap();
        assert_eq!(url.plain_value, "postgres://u:p@h/db");
    }

    #[test]
    fn enc_requires_second_colon() {
        let err = parse("enc:justonepart").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing another colon, expected \"enc::<value>\" or \"enc:<keyname>:<value>\""
        );
    }

    #[test]
    fn enc_rejects_bad_key_name() {
        let err = parse("enc:bad key:v").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key name \"bad key\" in \"enc:<keyname>:<value>\""
        );
    }

    #[test]
    fn secret_requires_three_fields() {
        let err = parse("secret:k:only-two").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid secret value, expected \"secret:<keyname>:<nonce>:<ciphertext>\""
        );
        assert!(parse("secret:k:a:b:c").is_err());
    }

    #[test]
    fn secret_rejects_bad_nonce() {
        let err = parse("secret:k:!!!:aGk=").unwrap_err();
        assert!(err.to_string().starts_with("invalid nonce in"));

        let short = BASE64.encode(b"short");
        let err = parse(&format!("secret:k:{short}:aGk=")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid nonce len in \"secret:<keyname>:<nonce>:<ciphertext>\", got 5, wanted 24"
        );
    }

    #[test]
    fn secret_rejects_bad_ciphertext() {
        let nonce = BASE64.encode([0u8; NONCE_SIZE]);
        let err = parse(&format!("secret:k:{nonce}:!!!")).unwrap_err();
        assert!(err.to_string().starts_with("invalid ciphertext in"));
    }

    #[test]
    fn decode_handles_each_encoding() {
        let keyring = Keyring::new();
        assert_eq!(parse("NONE").unwrap().decode(&keyring).unwrap(), "");
        assert_eq!(parse("42").unwrap().decode(&keyring).unwrap(), "42");
        assert_eq!(parse("enc::x").unwrap().decode(&keyring).unwrap(), "x");
        assert_eq!(
            parse("TODO").unwrap().decode(&keyring).unwrap_err().to_string(),
            "forgot to specify"
        );
    }

    #[test]
    fn decode_encrypted_roundtrip() {
        let key = Key::generate("k");
        let cipher = XSalsa20Poly1305::new(crypto_secretbox::Key::from_slice(key.data()));
        let nonce = [7u8; NONCE_SIZE];
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), b"hello".as_slice())
            .unwrap();

        let rhs = format!(
            "secret:k:{}:{}",
            BASE64.encode(nonce),
            BASE64.encode(&ciphertext)
        );
        let entry = parse(&rhs).unwrap();

        let mut keyring = Keyring::new();
        keyring.add(key);
        assert_eq!(entry.decode(&keyring).unwrap(), "hello");

        // Wrong key authenticates nothing.
        let mut other = Keyring::new();
        other.add(Key::generate("k"));
        assert_eq!(
            entry.decode(&other).unwrap_err().to_string(),
            "decryption failed"
        );

        // Absent key is reported by name.
        assert_eq!(
            entry.decode(&Keyring::new()).unwrap_err().to_string(),
            "missing key k"
        );
    }

    #[test]
    fn display_rhs_reparses_identically() {
        for rhs in ["NONE", "TODO", "TODO:ask ops", "plain text", "enc:k:v", "enc::v"] {
            let entry = parse(rhs).unwrap();
            let emitted = entry.display_rhs();
            let reparsed = parse(&emitted).unwrap();
            assert_eq!(reparsed.encoding, entry.encoding, "rhs {rhs:?}");
            assert_eq!(reparsed.plain_value, entry.plain_value);
            assert_eq!(reparsed.key_name, entry.key_name);
        }
    }
}
