//! Environment-aware encrypted values in plain-text files you can commit.
//!
//! Cubby manages a line-oriented `name[.env] = value` file in which
//! individual secrets are sealed in place with keys from a separate keyring
//! file. The values file stays diffable and safe to commit; the keyring
//! stays out of source control.
//!
//! # Quick start
//!
//! ```no_run
//! use cubby::{Keyring, Values};
//!
//! let keyring = Keyring::load("keyring.txt")?;
//! let mut values = Values::parse_file("secrets.txt")?;
//! let dsn = values.value("DATABASE_URL", "prod", &keyring)?;
//! # Ok::<(), cubby::Error>(())
//! ```
//!
//! # File format
//!
//! Two line kinds share one lexical layer (blank lines and `#` comments are
//! skipped, the first `=` splits, both sides are trimmed):
//!
//! - `@group = [!] tok1 tok2 ...` defines an env group. `@all` is required
//!   and establishes the universe of environments; tokens may be wildcards
//!   (`local-*`), and a leading `!` subtracts the listed envs from the
//!   universe.
//! - `name[.env] = <value>` defines an entry variant. A missing `.env`
//!   means the variant applies to every environment. The value is `NONE`,
//!   `TODO[:note]`, `enc:<keyname>:<plaintext>` (to be sealed in place),
//!   `secret:<keyname>:<nonce>:<ciphertext>` (sealed), or a literal.
//!
//! For each query `(name, env)` the most specific matching variant wins:
//! variants covering fewer environments beat broader ones, and genuine
//! ambiguity is reported as a conflict rather than silently resolved.
//!
//! # Architecture
//!
//! - **`core`**: library code with [`Values`] as the main entry point,
//!   plus [`Keyring`]/[`Key`] for key material.
//! - **`cli`**: the `cubby` command-line front-end.
//!
//! Encryption is XSalsa20-Poly1305 (NaCl secretbox): 32-byte keys, 24-byte
//! random nonces, authenticated ciphertexts.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::constants::{ALL_ENV, DEFAULT_KEY, KEY_SIZE, NONCE_SIZE};
pub use crate::core::entry::Encoding;
pub use crate::core::key::Key;
pub use crate::core::keyring::Keyring;
pub use crate::core::values::{
    load_file_values, load_pairs_values, load_string_values, Values, Variant,
};
pub use crate::error::{Error, Result};
