// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Constants and small helpers shared by the environment container.
//!
//! # Architecture
//!
//! ```text
//! PASSTHRU_PREFIX        "X_"   --> re-exposed, stripped, visible tier
//! HIDDEN_PASSTHRU_PREFIX "XXX_" --> re-exposed, stripped, hidden tier
//! MIRRORED_ENV           fixed allow-list, forwarded verbatim
//! split_pair             "KEY=VALUE" --> (key, value), first '=' wins
//! quote                  value --> shell-safe double-quoted literal
//! ```

use crate::error::EnvError;

/// Variables carrying this prefix are re-exposed with the prefix stripped
/// by [`Environment::passthru`](super::container::Environment::passthru).
pub const PASSTHRU_PREFIX: &str = "X_";

/// Variables carrying this prefix are re-exposed with the prefix stripped by
/// [`Environment::hidden_passthru`](super::container::Environment::hidden_passthru)
/// and are intended for the hidden tier. Prefix matching is literal, so the
/// two extractions never overlap.
pub const HIDDEN_PASSTHRU_PREFIX: &str = "XXX_";

/// Cross-stage signalling variables forwarded verbatim, regardless of the
/// passthru prefix convention.
pub(super) const MIRRORED_ENV: [&str; 2] =
    ["WERCKER_STARTED_BY", "WERCKER_MAIN_PIPELINE_STARTED"];

/// Splits a `KEY=VALUE` string on the first `=`; the value may contain
/// further `=` characters.
pub(super) fn split_pair(entry: &str) -> Result<(&str, &str), EnvError> {
    entry.split_once('=').ok_or_else(|| EnvError::InvalidFormat {
        entry: entry.to_owned(),
    })
}

/// Double-quotes a value so that `export KEY="VALUE"` parses as a single
/// shell word. Quotes, backslashes and control characters are escaped.
pub(super) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
