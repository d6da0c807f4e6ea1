//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default())
    .valid(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
    .error(AnsiColor::Red.on_default().effects(Effects::BOLD));

/// Cubby - environment-aware encrypted values in committable files.
///
/// With positional patterns, prints matching entries. Without patterns,
/// encrypts pending `enc:` entries in the secrets file in place.
#[derive(Parser)]
#[command(
    name = "cubby",
    about = "Environment-aware encrypted values in plain-text files",
    version,
    styles = STYLES
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to the keyring file
    #[arg(short = 'K', long = "keyring", value_name = "PATH")]
    pub keyring: Option<PathBuf>,

    /// Environment variable holding the keyring path (alternative to -K)
    #[arg(long = "keyring-env", value_name = "ENVVAR", conflicts_with = "keyring")]
    pub keyring_env: Option<String>,

    /// Path to the secrets file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Environment variable holding the secrets path (alternative to -f)
    #[arg(long = "file-env", value_name = "ENVVAR", conflicts_with = "file")]
    pub file_env: Option<String>,

    /// Generate a key and add it to the keyring under this name
    #[arg(long = "add-key", value_name = "NAME")]
    pub add_key: Option<String>,

    /// Key to use when encrypting entries that don't name one
    #[arg(short = 'k', long = "key", value_name = "NAME")]
    pub key: Option<String>,

    /// Environment to read values for
    #[arg(short = 'e', long = "env", value_name = "ENV")]
    pub env: Option<String>,

    /// Glob patterns over entry names
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}
