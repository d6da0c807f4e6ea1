//! The `Values` store: parsing, env resolution, variant selection, and
//! in-place encryption of pending secrets.
//!
//! A `Values` instance is a mutable owner; callers serialize access. All
//! results are deterministic for a given input: the lexer preserves file
//! order and every map walk here is sorted.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::{Nonce, XSalsa20Poly1305};
use rand::rngs::OsRng;
use rand::RngCore;
use regex::Regex;
use tracing::{debug, info};

use crate::core::constants::{ALL_ENV, DEFAULT_KEY, NONCE_SIZE};
use crate::core::entry::{Encoding, Entry};
use crate::core::envgroup::{EnvGroup, ResolveState, ResolvedEnvGroup};
use crate::core::keyring::Keyring;
use crate::core::lexer::parse_multiline_kv;
use crate::core::validate::{
    find_match, is_valid_env_name, is_valid_env_name_wildcard, is_valid_glob,
    is_valid_value_name, is_wildcard, matches,
};
use crate::error::{CryptoError, Error, ParseError, ResolveError, Result};

/// One decoded (or failed) variant of a named entry, as surfaced to callers.
#[derive(Debug)]
pub struct Variant {
    pub name: String,
    pub env: String,
    pub raw_lhs: String,
    pub raw_rhs: String,
    pub key_name: String,
    pub value: String,
    pub err: Option<Error>,
}

impl Variant {
    /// The original `lhs=rhs` line text.
    pub fn raw(&self) -> String {
        format!("{}={}", self.raw_lhs, self.raw_rhs)
    }
}

/// Parsed secrets store: env groups, entries, and the resolution memo.
///
/// Clone before handing to another thread; instances are not shared.
#[derive(Default, Clone)]
pub struct Values {
    envs: HashMap<String, EnvGroup>,
    entries: HashMap<String, Vec<Entry>>,
    resolved_envs: HashMap<String, ResolvedEnvGroup>,
    valid_envs: Option<Vec<String>>,
    known_envs: Vec<String>,
}

impl Values {
    /// An empty store. Queries against it return empty values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete secrets file from text.
    pub fn parse_string(data: &str) -> Result<Self> {
        let mut vals = Self::new();
        vals.add_string(data)?;
        Ok(vals)
    }

    /// Parse a complete secrets file from disk; errors carry the path.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut vals = Self::new();
        vals.add_file(path)?;
        Ok(vals)
    }

    /// Ingest more `k=v` text into this store and rebuild.
    pub fn add_string(&mut self, data: &str) -> Result<()> {
        let pairs = parse_multiline_kv(data)?;
        self.add_pairs(pairs)
    }

    /// Ingest a file into this store and rebuild; errors carry the path.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        info!(path = %path.display(), "loading values");
        self.add_string(&raw).map_err(|e| e.in_file(path))
    }

    /// Ingest pre-lexed `(lhs, rhs)` pairs and rebuild.
    pub fn add_pairs(&mut self, pairs: Vec<(String, String)>) -> Result<()> {
        for (lhs, rhs) in pairs {
            if let Some(group_name) = lhs.strip_prefix('@') {
                let group = parse_env_group(group_name, &rhs)
                    .map_err(|e| e.in_line(&lhs, &rhs))?;
                if self.envs.contains_key(group_name) {
                    return Err(ParseError::RedefinedGroup {
                        group: group_name.to_string(),
                    }
                    .in_line(&lhs, &rhs)
                    .into());
                }
                self.envs.insert(group_name.to_string(), group);
            } else {
                let (name, env) = match lhs.split_once('.') {
                    Some((name, env)) => {
                        if !is_valid_env_name(env) {
                            return Err(ParseError::MalformedEnvName {
                                name: env.to_string(),
                            }
                            .in_line(&lhs, &rhs)
                            .into());
                        }
                        (name, env)
                    }
                    None => (lhs.as_str(), ALL_ENV),
                };
                if !is_valid_value_name(name) {
                    return Err(ParseError::MalformedValueName {
                        name: name.to_string(),
                    }
                    .in_line(&lhs, &rhs)
                    .into());
                }
                let entry = Entry::parse(env.to_string(), &lhs, &rhs)
                    .map_err(|e| e.in_line(&lhs, &rhs))?;
                self.entries.entry(name.to_string()).or_default().push(entry);
            }
        }

        self.rebuild()
    }

    /// Sorted entry names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Register `env` in the memo, creating a `Mentioned` slot if new.
    ///
    /// Creation validates undefined env tokens: while `@all` is still being
    /// established only the glob syntax is checked; afterwards the token must
    /// match some element of the universe.
    fn lookup_env(&mut self, env: &str) -> bool {
        if self.resolved_envs.contains_key(env) {
            return false;
        }

        let mut res = ResolvedEnvGroup::new(is_wildcard(env));
        if !self.envs.contains_key(env) {
            match &self.valid_envs {
                None => {
                    if !is_valid_glob(env) {
                        res.state = ResolveState::Resolved;
                        res.err = Some(ResolveError::InvalidWildcard {
                            env: env.to_string(),
                        });
                    }
                }
                Some(valid) => {
                    if find_match(valid, env).is_none() {
                        res.state = ResolveState::Resolved;
                        res.err = Some(ResolveError::NotAmongAll {
                            env: env.to_string(),
                        });
                    }
                }
            }
        }
        self.resolved_envs.insert(env.to_string(), res);
        true
    }

    /// Register `env`; report whether it was new and any creation error.
    fn mention_env(&mut self, env: &str) -> (bool, Option<ResolveError>) {
        let is_new = self.lookup_env(env);
        (is_new, self.resolved_envs[env].err.clone())
    }

    /// Resolve `env` into its concrete included list, memoized.
    ///
    /// Cycles are caught by the `Resolving` marker. Negated groups subtract
    /// their expansion from the universe, which therefore must already be
    /// established.
    fn resolve_env(&mut self, env: &str) -> std::result::Result<(), ResolveError> {
        self.lookup_env(env);

        match self.resolved_envs[env].state {
            ResolveState::Resolved => {
                return match self.resolved_envs[env].err.clone() {
                    Some(err) => Err(err),
                    None => Ok(()),
                };
            }
            ResolveState::Resolving => {
                return Err(ResolveError::InfiniteRecursion {
                    env: env.to_string(),
                });
            }
            ResolveState::Mentioned => {}
        }
        if let Some(res) = self.resolved_envs.get_mut(env) {
            res.state = ResolveState::Resolving;
        }

        let mut included: Vec<String> = Vec::new();
        match self.envs.get(env).cloned() {
            None => included.push(env.to_string()),
            Some(def) if def.negated => {
                let Some(valid) = self.valid_envs.clone() else {
                    return Err(ResolveError::NegatedFromAll {
                        group: env.to_string(),
                    });
                };

                let mut excluded: Vec<String> = Vec::new();
                for item in &def.items {
                    self.resolve_env(item).map_err(|e| ResolveError::Group {
                        group: env.to_string(),
                        source: Box::new(e),
                    })?;
                    for sub in &self.resolved_envs[item].included {
                        if !excluded.contains(sub) {
                            excluded.push(sub.clone());
                        }
                    }
                }
                for candidate in &valid {
                    if find_match(&excluded, candidate).is_none() {
                        included.push(candidate.clone());
                    }
                }
            }
            Some(def) => {
                for item in &def.items {
                    self.resolve_env(item).map_err(|e| ResolveError::Group {
                        group: env.to_string(),
                        source: Box::new(e),
                    })?;
                    for sub in &self.resolved_envs[item].included {
                        if !included.contains(sub) {
                            included.push(sub.clone());
                        }
                    }
                }
            }
        }

        if let Some(res) = self.resolved_envs.get_mut(env) {
            res.included = included;
            res.finalize();
            res.state = ResolveState::Resolved;
        }
        Ok(())
    }

    /// Recompute the universe and every memoized resolution.
    ///
    /// Runs after any structural change. Ends with a sanity pass proving
    /// that every entry name has a non-ambiguous variant for every env in
    /// the universe (wildcards probed with `*` replaced by `xxx`).
    fn rebuild(&mut self) -> Result<()> {
        self.valid_envs = None;
        self.known_envs.clear();
        for res in self.resolved_envs.values_mut() {
            if res.err.is_none() {
                res.state = ResolveState::Mentioned;
            }
        }

        if !self.envs.contains_key(ALL_ENV) {
            return Err(ResolveError::MissingAll.into());
        }
        self.resolve_env(ALL_ENV)?;
        self.valid_envs = Some(self.resolved_envs[ALL_ENV].included.clone());

        let mut group_names: Vec<String> = self.envs.keys().cloned().collect();
        group_names.sort_unstable();
        for name in &group_names {
            self.lookup_env(name);
            let items = self.envs[name].items.clone();
            for item in &items {
                self.lookup_env(item);
            }
        }
        let entry_envs: Vec<String> = self
            .entries
            .values()
            .flat_map(|es| es.iter().map(|e| e.env.clone()))
            .collect();
        for env in entry_envs {
            self.lookup_env(&env);
        }

        let valid = self.valid_envs.clone().unwrap_or_default();
        for env in &valid {
            if !is_wildcard(env) {
                self.known_envs.push(env.clone());
            } else {
                let mut concrete: Vec<String> = self
                    .resolved_envs
                    .iter()
                    .filter(|(candidate, res)| !res.wildcard && matches(env, candidate))
                    .map(|(candidate, _)| candidate.clone())
                    .collect();
                concrete.sort_unstable();
                self.known_envs.extend(concrete);
            }
        }

        for name in &group_names {
            self.resolve_env(name)?;
        }

        let mut entry_names: Vec<String> = self.entries.keys().cloned().collect();
        entry_names.sort_unstable();
        for name in &entry_names {
            let envs: Vec<String> = self.entries[name].iter().map(|e| e.env.clone()).collect();
            for env in envs {
                self.resolve_env(&env).map_err(|e| ResolveError::Entry {
                    name: name.clone(),
                    source: Box::new(e),
                })?;
            }
            for env in &valid {
                let sample = env.replace('*', "xxx");
                if self.pick_variant(name, &sample)?.is_none() {
                    return Err(ResolveError::NoValue {
                        name: name.clone(),
                        env: env.clone(),
                    }
                    .into());
                }
            }
        }

        debug!(
            envs = valid.len(),
            known = self.known_envs.len(),
            entries = self.entries.len(),
            "rebuilt"
        );
        Ok(())
    }

    /// Select the best variant of `name` for a query env.
    ///
    /// Trivial query envs score candidates by the length of the glob token
    /// that matches; compound ones score 1 for superset inclusion. Equal
    /// scores fall back to specificity (fewer included envs wins); a
    /// specificity tie is a conflict.
    fn pick_variant(
        &mut self,
        name: &str,
        env: &str,
    ) -> std::result::Result<Option<usize>, ResolveError> {
        self.resolve_env(env)?;
        let (trivial, query_included) = {
            let res = &self.resolved_envs[env];
            (res.trivial.clone(), res.included.clone())
        };

        let Some(entries) = self.entries.get(name) else {
            return Ok(None);
        };

        let mut best: Option<usize> = None;
        let mut best_score = 0usize;
        let mut conflict: Option<usize> = None;
        for (i, entry) in entries.iter().enumerate() {
            let Some(res) = self.resolved_envs.get(&entry.env) else {
                continue;
            };
            let score = match &trivial {
                Some(target) => res.match_len(target),
                None => usize::from(res.includes_all(&query_included)),
            };

            if score > best_score {
                best = Some(i);
                best_score = score;
                conflict = None;
            } else if let Some(b) = best {
                if score == best_score {
                    let best_res = &self.resolved_envs[&entries[b].env];
                    match res.cmp_specificity(best_res) {
                        std::cmp::Ordering::Greater => {
                            best = Some(i);
                            conflict = None;
                        }
                        std::cmp::Ordering::Equal => conflict = Some(i),
                        std::cmp::Ordering::Less => {}
                    }
                }
            }
        }

        match (best, conflict) {
            (Some(b), Some(c)) => {
                let mut first = entries[b].env.clone();
                let mut second = entries[c].env.clone();
                if first > second {
                    std::mem::swap(&mut first, &mut second);
                }
                Err(ResolveError::Conflict {
                    score: best_score,
                    name: name.to_string(),
                    first,
                    second,
                    query: env.to_string(),
                })
            }
            (best, _) => Ok(best),
        }
    }

    /// Resolve `name` for `env` and decode the selected variant.
    ///
    /// An unknown name yields an empty string, not an error. A first-seen
    /// env token triggers one speculative rebuild whose error is ignored;
    /// anything genuinely wrong resurfaces through the picker.
    pub fn value(&mut self, name: &str, env: &str, keyring: &Keyring) -> Result<String> {
        let (is_new, err) = self.mention_env(env);
        if let Some(err) = err {
            return Err(err.into());
        }
        if is_new {
            let _ = self.rebuild();
        }

        if !self.entries.contains_key(name) {
            return Ok(String::new());
        }

        let Some(idx) = self.pick_variant(name, env)? else {
            return Err(ResolveError::NoValue {
                name: name.to_string(),
                env: env.to_string(),
            }
            .into());
        };

        self.entries[name][idx]
            .decode(keyring)
            .map_err(|source| Error::Value {
                name: name.to_string(),
                source,
            })
    }

    /// Resolve every entry name for `env`, best-effort.
    ///
    /// Non-empty values are collected; the last error seen is returned
    /// alongside the map without stopping the walk.
    pub fn env_values(
        &mut self,
        env: &str,
        keyring: &Keyring,
    ) -> (BTreeMap<String, String>, Option<Error>) {
        let mut result = BTreeMap::new();
        let mut last_err = None;
        for name in self.names() {
            match self.value(&name, env, keyring) {
                Err(err) => last_err = Some(err),
                Ok(val) if !val.is_empty() => {
                    result.insert(name, val);
                }
                Ok(_) => {}
            }
        }
        (result, last_err)
    }

    /// Every variant of `name` decoded, with per-variant errors.
    pub fn value_variants(&self, name: &str, keyring: &Keyring) -> Vec<Variant> {
        let Some(entries) = self.entries.get(name) else {
            return Vec::new();
        };
        entries
            .iter()
            .map(|e| {
                let (value, err) = match e.decode(keyring) {
                    Ok(v) => (v, None),
                    Err(source) => (String::new(), Some(Error::Crypto(source))),
                };
                Variant {
                    name: name.to_string(),
                    env: e.env.clone(),
                    raw_lhs: e.raw_lhs.clone(),
                    raw_rhs: e.raw_rhs.clone(),
                    key_name: e.key_name.clone(),
                    value,
                    err,
                }
            })
            .collect()
    }

    /// Variants still waiting to be encrypted (`enc:` encodings).
    pub fn variants_to_encrypt(&self) -> Vec<Variant> {
        let mut result = Vec::new();
        for name in self.names() {
            for e in &self.entries[&name] {
                if e.encoding == Encoding::ToBeEncrypted {
                    result.push(Variant {
                        name: name.clone(),
                        env: e.env.clone(),
                        raw_lhs: e.raw_lhs.clone(),
                        raw_rhs: e.raw_rhs.clone(),
                        key_name: e.key_name.clone(),
                        value: e.plain_value.clone(),
                        err: None,
                    });
                }
            }
        }
        result
    }

    /// Seal `plaintext` with a keyring key, producing the wire form.
    ///
    /// With an empty `key_name` the key is derived by querying
    /// `DEFAULT_KEY.env` (which must then be a plain value).
    pub fn encrypt_value(
        &mut self,
        plaintext: &str,
        env: &str,
        key_name: &str,
        keyring: &Keyring,
    ) -> Result<String> {
        let mut key_name = key_name.to_string();
        let mut derived = false;
        if key_name.is_empty() {
            if env.is_empty() {
                return Err(CryptoError::KeyOrEnvRequired.into());
            }
            key_name = self.value(DEFAULT_KEY, env, &Keyring::new())?;
            if key_name.is_empty() {
                return Err(CryptoError::EmptyDefaultKey {
                    env: env.to_string(),
                }
                .into());
            }
            derived = true;
        }

        let Some(key) = keyring.by_name(&key_name) else {
            let err = if derived {
                CryptoError::NoKeyViaDefault { name: key_name }
            } else {
                CryptoError::NoKey { name: key_name }
            };
            return Err(err.into());
        };

        let mut nonce = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| CryptoError::Rng(e.to_string()))?;

        let cipher = XSalsa20Poly1305::new(crypto_secretbox::Key::from_slice(key.data()));
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| CryptoError::EncryptionFailed)?;

        debug!(key = %key_name, "sealed value");
        Ok(format!(
            "secret:{}:{}:{}",
            key_name,
            BASE64.encode(nonce),
            BASE64.encode(&ciphertext)
        ))
    }

    /// Encrypt every pending variant, returning `raw_lhs -> new_rhs`
    /// replacements plus the variants that failed.
    pub fn encrypt_all_in_pairs(
        &mut self,
        keyring: &Keyring,
    ) -> (BTreeMap<String, String>, Vec<Variant>) {
        let mut replacements = BTreeMap::new();
        let mut failed = Vec::new();
        for mut v in self.variants_to_encrypt() {
            match self.encrypt_value(&v.value, &v.env, &v.key_name, keyring) {
                Ok(rhs) => {
                    replacements.insert(v.raw_lhs.clone(), rhs);
                }
                Err(err) => {
                    v.err = Some(err);
                    failed.push(v);
                }
            }
        }
        (replacements, failed)
    }

    /// Rewrite `data`, replacing each pending variant's RHS with its sealed
    /// form while leaving every other byte alone.
    pub fn encrypt_all_in_string(
        &mut self,
        data: &str,
        keyring: &Keyring,
    ) -> (String, usize, Vec<Variant>) {
        self.encrypt_all_in_string_with(data, keyring, None)
    }

    /// Like [`Values::encrypt_all_in_string`], with a default key name used
    /// for variants that do not name one (bypassing `DEFAULT_KEY`).
    pub fn encrypt_all_in_string_with(
        &mut self,
        data: &str,
        keyring: &Keyring,
        default_key: Option<&str>,
    ) -> (String, usize, Vec<Variant>) {
        let vars = self.variants_to_encrypt();
        if vars.is_empty() {
            return (data.to_string(), 0, Vec::new());
        }

        let mut patterns: Vec<Regex> = Vec::new();
        let mut replacements: Vec<String> = Vec::new();
        let mut failed: Vec<Variant> = Vec::new();

        for mut v in vars {
            let key_name = if v.key_name.is_empty() {
                default_key.unwrap_or("").to_string()
            } else {
                v.key_name.clone()
            };
            match self.encrypt_value(&v.value, &v.env, &key_name, keyring) {
                Err(err) => {
                    v.err = Some(err);
                    failed.push(v);
                }
                Ok(rhs) => {
                    let pattern = format!(
                        r"^(\s*{}\s*=\s*){}\s*$",
                        regex::escape(&v.raw_lhs),
                        regex::escape(&v.raw_rhs)
                    );
                    let re = Regex::new(&pattern).expect("escaped literals form a valid regex");
                    patterns.push(re);
                    replacements.push(rhs);
                }
            }
        }

        let mut lines: Vec<String> = data.split('\n').map(str::to_string).collect();
        let mut modified = 0;
        for line in &mut lines {
            for (re, rhs) in patterns.iter().zip(&replacements) {
                if let Some(caps) = re.captures(line) {
                    *line = format!("{}{}", &caps[1], rhs);
                    modified += 1;
                    break;
                }
            }
        }
        (lines.join("\n"), modified, failed)
    }

    /// Encrypt pending variants inside the file at `path`, in place.
    ///
    /// The file is only touched when something changed; permissions are
    /// preserved.
    pub fn encrypt_all_in_file(
        &mut self,
        path: impl AsRef<Path>,
        keyring: &Keyring,
    ) -> Result<(usize, Vec<Variant>)> {
        self.encrypt_all_in_file_with(path, keyring, None)
    }

    /// Like [`Values::encrypt_all_in_file`], with a default key name for
    /// variants that do not name one.
    pub fn encrypt_all_in_file_with(
        &mut self,
        path: impl AsRef<Path>,
        keyring: &Keyring,
        default_key: Option<&str>,
    ) -> Result<(usize, Vec<Variant>)> {
        let path = path.as_ref();
        let permissions = fs::metadata(path)?.permissions();
        let raw = fs::read_to_string(path)?;

        let (new_data, modified, failed) =
            self.encrypt_all_in_string_with(&raw, keyring, default_key);
        if modified > 0 {
            fs::write(path, new_data)?;
            fs::set_permissions(path, permissions)?;
            info!(path = %path.display(), modified, "encrypted values in place");
        }
        Ok((modified, failed))
    }
}

/// Summarizes counts only; entry plaintext never reaches debug output.
impl fmt::Debug for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("envs", &self.envs.len())
            .field("entries", &self.entries.len())
            .field("known_envs", &self.known_envs)
            .finish_non_exhaustive()
    }
}

/// Re-emits groups and entries in parseable, normalized form.
impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut group_names: Vec<&String> = self.envs.keys().collect();
        group_names.sort_unstable();
        for name in &group_names {
            writeln!(f, "@{} = {}", name, self.envs[name.as_str()])?;
        }

        if !self.envs.is_empty() && !self.entries.is_empty() {
            writeln!(f)?;
        }

        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort_unstable();
        for name in &names {
            for entry in &self.entries[name.as_str()] {
                if entry.env == ALL_ENV {
                    writeln!(f, "{}={}", name, entry.display_rhs())?;
                } else {
                    writeln!(f, "{}.{}={}", name, entry.env, entry.display_rhs())?;
                }
            }
        }
        Ok(())
    }
}

/// Parse the RHS of a `@group = [!] tok1 tok2 ...` definition.
fn parse_env_group(group_name: &str, list: &str) -> std::result::Result<EnvGroup, ParseError> {
    if !is_valid_env_name(group_name) {
        return Err(ParseError::MalformedGroupName {
            name: group_name.to_string(),
        });
    }

    let (negated, rest) = match list.strip_prefix('!') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, list),
    };

    let items: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
    for item in &items {
        if !is_valid_env_name_wildcard(item) {
            return Err(ParseError::MalformedEnvName {
                name: item.clone(),
            });
        }
    }

    Ok(EnvGroup { negated, items })
}

/// Parse `data` and resolve every entry for `env` in one step.
pub fn load_string_values(
    data: &str,
    env: &str,
    keyring: &Keyring,
) -> Result<BTreeMap<String, String>> {
    let mut vals = Values::parse_string(data)?;
    let (map, err) = vals.env_values(env, keyring);
    match err {
        Some(err) => Err(err),
        None => Ok(map),
    }
}

/// Parse the file at `path` and resolve every entry for `env` in one step.
pub fn load_file_values(
    path: impl AsRef<Path>,
    env: &str,
    keyring: &Keyring,
) -> Result<BTreeMap<String, String>> {
    let mut vals = Values::parse_file(path)?;
    let (map, err) = vals.env_values(env, keyring);
    match err {
        Some(err) => Err(err),
        None => Ok(map),
    }
}

/// Ingest pre-lexed `(lhs, rhs)` pairs and resolve every entry for `env` in
/// one step.
pub fn load_pairs_values(
    pairs: Vec<(String, String)>,
    env: &str,
    keyring: &Keyring,
) -> Result<BTreeMap<String, String>> {
    let mut vals = Values::new();
    vals.add_pairs(pairs)?;
    let (map, err) = vals.env_values(env, keyring);
    match err {
        Some(err) => Err(err),
        None => Ok(map),
    }
}
