// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! The ordered, dual-layer environment container.
//!
//! # Architecture
//!
//! ```text
//! Environment
//! vars:   HashMap<String, String>   unique keys
//! order:  Vec<String>               first-insertion order, one entry per key
//! hidden: Option<Box<Environment>>  fallback tier, interpolation only
//!
//! re-add keeps position; get() never consults hidden;
//! passthru()/hidden_passthru() strip "X_"/"XXX_" into fresh containers
//! ```

use std::collections::HashMap;

use super::types::{HIDDEN_PASSTHRU_PREFIX, MIRRORED_ENV, PASSTHRU_PREFIX, quote, split_pair};
use crate::error::EnvError;

/// A shell-like environment: an insertion-ordered map from variable names to
/// string values with an exclusively owned hidden tier.
///
/// The hidden tier is a fallback for [`get_incl_hidden`](Self::get_incl_hidden)
/// (and therefore interpolation) only; plain [`get`](Self::get) never
/// consults it.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
    order: Vec<String>,
    hidden: Option<Box<Environment>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an environment from `KEY=VALUE` strings in input order,
    /// usually a process environment in `environ` form. Each entry is split
    /// on the first `=`; the value may itself contain `=` characters.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidFormat`] for an entry without a `=`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, EnvError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut env = Self::new();
        for pair in pairs {
            let (key, value) = split_pair(pair.as_ref())?;
            env.add(key, value);
        }
        Ok(env)
    }

    /// Adds an individual record.
    ///
    /// A new key is appended to the insertion order; re-adding an existing
    /// key overwrites its value in place without moving it.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.vars.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.vars.insert(key, value.into());
    }

    /// Adds each `(key, value)` pair in sequence order.
    ///
    /// Used to merge extracted subsets back into an environment.
    pub fn update<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.add(key, value);
        }
    }

    /// Gets an individual record from the visible tier.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Gets a record from the visible tier, falling back to the hidden tier.
    ///
    /// This is the resolver interpolation goes through; ordinary lookups use
    /// [`get`](Self::get).
    #[must_use]
    pub fn get_incl_hidden(&self, key: &str) -> Option<&str> {
        self.get(key)
            .or_else(|| self.hidden.as_deref().and_then(|hidden| hidden.get(key)))
    }

    /// The hidden tier, if one has been created.
    #[must_use]
    pub fn hidden(&self) -> Option<&Self> {
        self.hidden.as_deref()
    }

    /// The hidden tier, created empty on first access.
    pub fn hidden_mut(&mut self) -> &mut Self {
        self.hidden.get_or_insert_with(Box::default)
    }

    /// Number of entries in the visible tier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the visible tier holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates visible entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.vars[key].as_str()))
    }

    /// Snapshot of all visible entries in first-insertion order.
    ///
    /// Mostly useful for debugging and for merging subsets via
    /// [`update`](Self::update).
    #[must_use]
    pub fn ordered(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect()
    }

    /// Renders the environment as `export KEY="VALUE"` statements, one per
    /// entry in insertion order, for replay in a shell session.
    #[must_use]
    pub fn export(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| format!("export {key}={}", quote(value)))
            .collect()
    }

    /// Collects `X_`-prefixed variables into a fresh environment with the
    /// prefix stripped. The receiver is untouched.
    ///
    /// Entry order of the result follows map iteration order and is
    /// unspecified relative to the receiver's insertion order.
    #[must_use]
    pub fn passthru(&self) -> Self {
        self.collect_prefixed(PASSTHRU_PREFIX)
    }

    /// Collects `XXX_`-prefixed variables into a fresh environment with the
    /// prefix stripped. The result is meant to be merged into a hidden tier
    /// by the caller; this method does not do the merge.
    #[must_use]
    pub fn hidden_passthru(&self) -> Self {
        self.collect_prefixed(HIDDEN_PASSTHRU_PREFIX)
    }

    fn collect_prefixed(&self, prefix: &str) -> Self {
        let mut env = Self::new();
        for (key, value) in &self.vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                env.add(stripped, value.clone());
            }
        }
        env
    }

    /// Emits the mirrored cross-stage variables present in this environment,
    /// in allow-list order. Absent names are skipped.
    #[must_use]
    pub fn mirror(&self) -> Vec<(String, String)> {
        MIRRORED_ENV
            .iter()
            .filter_map(|&key| {
                self.vars
                    .get(key)
                    .map(|value| (key.to_owned(), value.clone()))
            })
            .collect()
    }
}
