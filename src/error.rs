//! Error types for cubby.
//!
//! One enum per domain, plus a transparent top-level [`Error`]. The display
//! strings here are part of the tool's observable surface and are covered by
//! tests; change them deliberately.

use thiserror::Error;

/// Errors produced while lexing and parsing the secrets or keyring text.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: missing =")]
    MissingEquals { line: usize },

    #[error("line {line}: missing key")]
    MissingKey { line: usize },

    #[error("line {line}: duplicate value for {key}")]
    DuplicateKey { line: usize, key: String },

    #[error("malformed env group name {name:?}")]
    MalformedGroupName { name: String },

    #[error("malformed env name {name:?}")]
    MalformedEnvName { name: String },

    #[error("malformed value name {name:?}")]
    MalformedValueName { name: String },

    #[error("redefinition of env group {group}")]
    RedefinedGroup { group: String },

    #[error("missing another colon, expected \"enc::<value>\" or \"enc:<keyname>:<value>\"")]
    MissingColon,

    #[error("invalid key name {name:?} in \"enc:<keyname>:<value>\"")]
    InvalidEncKeyName { name: String },

    #[error("invalid secret value, expected \"secret:<keyname>:<nonce>:<ciphertext>\"")]
    MalformedSecret,

    #[error("invalid key name {name:?} in \"secret:<keyname>:<nonce>:<ciphertext>\"")]
    InvalidSecretKeyName { name: String },

    #[error("invalid nonce in \"secret:<keyname>:<nonce>:<ciphertext>\": {source}")]
    InvalidNonce { source: base64::DecodeError },

    #[error("invalid nonce len in \"secret:<keyname>:<nonce>:<ciphertext>\", got {got}, wanted {want}")]
    InvalidNonceLength { got: usize, want: usize },

    #[error("invalid ciphertext in \"secret:<keyname>:<nonce>:<ciphertext>\": {source}")]
    InvalidCiphertext { source: base64::DecodeError },

    /// Attaches the offending `lhs=rhs` line to an inner parse error.
    #[error("{source} in {context:?}")]
    Context {
        context: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Wrap with the raw `lhs=rhs` text the error occurred in.
    pub(crate) fn in_line(self, lhs: &str, rhs: &str) -> ParseError {
        ParseError::Context {
            context: format!("{lhs}={rhs}"),
            source: Box::new(self),
        }
    }
}

/// Errors produced by env-group resolution and variant selection.
///
/// Stored inside the resolution memo, hence `Clone`.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("missing @all=...")]
    MissingAll,

    #[error("@{env}: infinite recursion")]
    InfiniteRecursion { env: String },

    #[error("env {env} is not among @all")]
    NotAmongAll { env: String },

    #[error("invalid env wildcard {env}")]
    InvalidWildcard { env: String },

    #[error("cannot refer to negated groups like {group} from @all")]
    NegatedFromAll { group: String },

    /// One wrapping frame per group on the resolution stack.
    #[error("@{group}: {source}")]
    Group {
        group: String,
        #[source]
        source: Box<ResolveError>,
    },

    /// Resolution failure attributed to the entry name that triggered it.
    #[error("{name}: {source}")]
    Entry {
        name: String,
        #[source]
        source: Box<ResolveError>,
    },

    #[error("no value for {name}.{env}")]
    NoValue { name: String, env: String },

    #[error("conflicting values with match length {score} for {name}.{first} and {name}.{second} when resolving for .{query}")]
    Conflict {
        score: usize,
        name: String,
        first: String,
        second: String,
        query: String,
    },
}

/// Errors produced while parsing keyring material.
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("invalid key name {name:?}, must be [a-zA-Z0-9_.@-]+")]
    InvalidKeyName { name: String },

    #[error("{name}: invalid base64-encoded key: {source}")]
    InvalidKeyData {
        name: String,
        source: base64::DecodeError,
    },

    #[error("{name}: invalid key size {got}, wanted {want}")]
    InvalidKeySize {
        name: String,
        got: usize,
        want: usize,
    },
}

/// Errors produced by encryption and decryption of entry values.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("forgot to specify")]
    Unspecified,

    #[error("missing key {name}")]
    MissingKey { name: String },

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("encryption failed")]
    EncryptionFailed,

    #[error("either env or key name must be specified")]
    KeyOrEnvRequired,

    #[error("DEFAULT_KEY is empty for env {env}")]
    EmptyDefaultKey { env: String },

    #[error("no key {name}")]
    NoKey { name: String },

    #[error("no key {name} (via DEFAULT_KEY)")]
    NoKeyViaDefault { name: String },

    #[error("failed to generate nonce: {0}")]
    Rng(String),
}

/// Top-level cubby error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Keyring(#[from] KeyringError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Decode failure attributed to the entry name being queried.
    #[error("{name}: {source}")]
    Value {
        name: String,
        #[source]
        source: CryptoError,
    },

    /// Any error prefixed with the file it came from.
    #[error("{path}: {source}")]
    File { path: String, source: Box<Error> },

    #[error("invalid pattern {pattern:?}")]
    InvalidPattern { pattern: String },

    #[error("missing environment variable {var}")]
    MissingEnvVar { var: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap any error with the path of the file it came from.
    pub(crate) fn in_file(self, path: &std::path::Path) -> Error {
        Error::File {
            path: path.display().to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for cubby operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_context_wraps_line() {
        let err = ParseError::MalformedEnvName {
            name: "b!z".to_string(),
        }
        .in_line("TEST.b!z", "1");
        assert_eq!(
            err.to_string(),
            "malformed env name \"b!z\" in \"TEST.b!z=1\""
        );
    }

    #[test]
    fn resolve_error_group_frames_nest() {
        let err = ResolveError::Group {
            group: "fubar".to_string(),
            source: Box::new(ResolveError::NotAmongAll {
                env: "ba".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "@fubar: env ba is not among @all");
    }

    #[test]
    fn conflict_error_format() {
        let err = ResolveError::Conflict {
            score: 3,
            name: "TEST".to_string(),
            first: "a".to_string(),
            second: "b".to_string(),
            query: "bar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "conflicting values with match length 3 for TEST.a and TEST.b when resolving for .bar"
        );
    }

    #[test]
    fn file_error_prefixes_path() {
        let err =
            Error::from(ResolveError::MissingAll).in_file(std::path::Path::new("secrets.txt"));
        assert_eq!(err.to_string(), "secrets.txt: missing @all=...");
    }
}
