//! Env groups, raw and resolved.

use std::cmp::Ordering;
use std::fmt;

use crate::core::validate::{find_match, is_wildcard};
use crate::error::ResolveError;

/// A raw `@name = [!] tok1 tok2 ...` definition.
#[derive(Debug, Clone)]
pub(crate) struct EnvGroup {
    pub negated: bool,
    pub items: Vec<String>,
}

impl fmt::Display for EnvGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("! ")?;
        }
        f.write_str(&self.items.join(" "))
    }
}

/// Marker for the resolution memo; doubles as the cycle detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolveState {
    /// Known to exist, not resolved yet.
    Mentioned,
    /// On the current resolution stack.
    Resolving,
    /// Final.
    Resolved,
}

/// The concrete expansion of an env token.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedEnvGroup {
    pub state: ResolveState,
    pub wildcard: bool,
    pub err: Option<ResolveError>,
    pub included: Vec<String>,
    pub trivial: Option<String>,
}

impl ResolvedEnvGroup {
    pub fn new(wildcard: bool) -> Self {
        Self {
            state: ResolveState::Mentioned,
            wildcard,
            err: None,
            included: Vec::new(),
            trivial: None,
        }
    }

    /// Compute `trivial`: exactly one included element and it is concrete.
    pub fn finalize(&mut self) {
        self.trivial = match self.included.as_slice() {
            [only] if !is_wildcard(only) => Some(only.clone()),
            _ => None,
        };
    }

    /// First included token that glob-matches `env`.
    pub fn find_match(&self, env: &str) -> Option<&str> {
        find_match(&self.included, env)
    }

    /// Length of the included token matching `env`, 0 when none does.
    pub fn match_len(&self, env: &str) -> usize {
        self.find_match(env).map_or(0, str::len)
    }

    /// Whether every env in `peer_included` is matched by some token here.
    pub fn includes_all(&self, peer_included: &[String]) -> bool {
        peer_included.iter().all(|env| self.match_len(env) > 0)
    }

    /// Fewer included envs means more specific; `Greater` = more specific.
    pub fn cmp_specificity(&self, other: &ResolvedEnvGroup) -> Ordering {
        other.included.len().cmp(&self.included.len())
    }
}

impl fmt::Display for ResolvedEnvGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.included.join(" "))
    }
}
