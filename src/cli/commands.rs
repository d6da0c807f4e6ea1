//! Command execution.
//!
//! One flag-driven command: `--add-key` extends the keyring, positional
//! patterns print matching entries, and a bare invocation encrypts pending
//! `enc:` entries in the secrets file in place.

use std::path::PathBuf;

use tracing::info;

use crate::cli::{output, Cli};
use crate::core::key::Key;
use crate::core::keyring::Keyring;
use crate::core::validate::{is_valid_key_name, is_valid_value_name_wildcard, matches};
use crate::core::values::Values;
use crate::error::{Error, KeyringError, Result};

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let keyring_path = resolve_path(
        cli.keyring.clone(),
        cli.keyring_env.as_deref(),
        "either -K or --keyring-env must be specified",
    )?;

    let mut keyring = if keyring_path.exists() {
        Keyring::load(&keyring_path)
            .map_err(|e| Error::Other(format!("cannot read keyring: {e}")))?
    } else if cli.add_key.is_some() {
        Keyring::new()
    } else {
        return Err(Error::Other(format!(
            "cannot read keyring: {} does not exist",
            keyring_path.display()
        )));
    };

    if let Some(name) = &cli.add_key {
        if !is_valid_key_name(name) {
            return Err(KeyringError::InvalidKeyName { name: name.clone() }.into());
        }
        keyring.add(Key::generate(name.clone()));
        keyring.save(&keyring_path)?;
        output::success(&format!("added key {name} to {}", keyring_path.display()));
    }

    if cli.file.is_none() && cli.file_env.is_none() {
        if cli.add_key.is_some() {
            return Ok(());
        }
        return Err(Error::Other(
            "either -f or --file-env must be specified".to_string(),
        ));
    }
    let secrets_path = resolve_path(
        cli.file.clone(),
        cli.file_env.as_deref(),
        "either -f or --file-env must be specified",
    )?;

    // A missing secrets file reads as an empty store.
    let mut vals = if secrets_path.exists() {
        Values::parse_file(&secrets_path)?
    } else {
        Values::new()
    };

    if cli.patterns.is_empty() {
        encrypt_pending(&mut vals, &secrets_path, &keyring, cli.key.as_deref())
    } else {
        print_matching(&mut vals, &keyring, &cli.patterns, cli.env.as_deref())
    }
}

/// A path given directly, or read from the named environment variable.
fn resolve_path(
    direct: Option<PathBuf>,
    env_var: Option<&str>,
    missing_msg: &str,
) -> Result<PathBuf> {
    if let Some(path) = direct {
        return Ok(path);
    }
    let Some(var) = env_var else {
        return Err(Error::Other(missing_msg.to_string()));
    };
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(Error::MissingEnvVar {
            var: var.to_string(),
        }),
    }
}

/// Print entries whose names match any of the given glob patterns.
///
/// With an env, one `name=value` line per matching entry; without, every
/// variant as `name.env=value`. Failures become `#`-prefixed lines instead
/// of aborting the listing.
fn print_matching(
    vals: &mut Values,
    keyring: &Keyring,
    patterns: &[String],
    env: Option<&str>,
) -> Result<()> {
    for pattern in patterns {
        if !is_valid_value_name_wildcard(pattern) {
            return Err(Error::InvalidPattern {
                pattern: pattern.clone(),
            });
        }
    }

    for name in vals.names() {
        if !patterns.iter().any(|p| matches(p, &name)) {
            continue;
        }

        match env {
            Some(env) => match vals.value(&name, env, keyring) {
                Ok(value) => println!("{name}={value}"),
                Err(err) => println!("# {name} -> ** {err}"),
            },
            None => {
                for v in vals.value_variants(&name, keyring) {
                    match &v.err {
                        Some(err) => println!("# {}.{} -> ** {err}", v.name, v.env),
                        None => println!("{}.{}={}", v.name, v.env, v.value),
                    }
                }
            }
        }
    }
    Ok(())
}

/// Seal every pending `enc:` entry in the secrets file in place.
fn encrypt_pending(
    vals: &mut Values,
    secrets_path: &std::path::Path,
    keyring: &Keyring,
    default_key: Option<&str>,
) -> Result<()> {
    if !secrets_path.exists() {
        output::dimmed("no changes");
        return Ok(());
    }

    let (modified, failed) = vals.encrypt_all_in_file_with(secrets_path, keyring, default_key)?;

    for v in &failed {
        let reason = v
            .err
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        output::error(&format!("cannot encrypt {}: {reason}", v.raw()));
    }

    if modified > 0 {
        info!(modified, path = %secrets_path.display(), "encrypted pending entries");
        output::success(&format!("{modified} encrypted"));
    } else {
        output::dimmed("no changes");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_prefers_direct() {
        let path = resolve_path(Some(PathBuf::from("/tmp/x")), Some("UNSET_VAR"), "msg").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn resolve_path_reports_missing_env_var() {
        let err = resolve_path(None, Some("CUBBY_TEST_UNSET_VAR"), "msg").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing environment variable CUBBY_TEST_UNSET_VAR"
        );
    }

    #[test]
    fn resolve_path_requires_some_source() {
        let err = resolve_path(None, None, "either -K or --keyring-env must be specified")
            .unwrap_err();
        assert!(err.to_string().contains("either -K or --keyring-env"));
    }
}
