//! Constants used throughout cubby.

/// Symmetric key length in bytes (XSalsa20-Poly1305).
pub const KEY_SIZE: usize = 32;

/// Nonce length in bytes (XSalsa20-Poly1305).
pub const NONCE_SIZE: usize = 24;

/// Sentinel env assigned to entries without an explicit `.env` suffix,
/// and the name of the required universe group (`@all`).
pub const ALL_ENV: &str = "all";

/// Entry consulted to derive a key name when `enc::<value>` does not name one.
pub const DEFAULT_KEY: &str = "DEFAULT_KEY";
