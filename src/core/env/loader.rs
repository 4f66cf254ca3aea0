// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Bulk loading of `KEY=VALUE` definition files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::container::Environment;
use crate::error::EnvError;

impl Environment {
    /// Imports `KEY=VALUE` pairs from the file at `path`, one per line.
    ///
    /// Lines whose first character is `#` are comments. Lines without a `=`
    /// (blank lines included) are skipped. Existing variables are never
    /// overwritten, with one nuance kept from the original tooling: a key
    /// counts as "set" only while its current value is non-empty, so a key
    /// previously added with an empty value is still eligible.
    ///
    /// Line-parse issues never produce an error, only a skip.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileRead`] if the file cannot be opened or read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EnvError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EnvError::FileRead {
            path: path.display().to_string(),
            source,
        })?;

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| EnvError::FileRead {
                path: path.display().to_string(),
                source,
            })?;
            if line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if self.get(key).is_some_and(|current| !current.is_empty()) {
                tracing::trace!(key, "variable already set, keeping first value");
                continue;
            }
            self.add(key, value);
        }

        Ok(())
    }
}
