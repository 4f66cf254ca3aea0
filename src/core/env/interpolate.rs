// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Shell-style variable interpolation.
//!
//! # Architecture
//!
//! ```text
//! "$NAME"  NAME = maximal run of [A-Za-z0-9_]
//! "${NAME}" brace body read up to the first '}'
//!
//! unknown name  --> empty string
//! bare '$'      --> copied literally
//! "${}" / "${"  --> consumed, nothing emitted
//! substituted values are NOT rescanned
//! ```

use super::container::Environment;

impl Environment {
    /// Replaces `$NAME` and `${NAME}` tokens with the value of `NAME`,
    /// resolving through the visible tier and then the hidden tier.
    ///
    /// Unknown variables become the empty string. Substitution is a single
    /// pass: values are not themselves scanned for further `$` tokens.
    #[must_use]
    pub fn interpolate(&self, template: &str) -> String {
        expand(template, |name| {
            self.get_incl_hidden(name).unwrap_or("").to_owned()
        })
    }
}

const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Expands `$NAME` / `${NAME}` tokens in `template` via `lookup`.
pub(super) fn expand<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> String,
{
    if !template.contains('$') {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        if let Some(body) = after.strip_prefix('{') {
            match body.find('}') {
                Some(end) => {
                    let name = &body[..end];
                    if !name.is_empty() {
                        out.push_str(&lookup(name));
                    }
                    rest = &body[end + 1..];
                }
                // unclosed brace: the "${" is dropped, scanning resumes
                None => rest = body,
            }
        } else {
            let len = after.bytes().take_while(|&b| is_name_byte(b)).count();
            if len == 0 {
                // '$' not followed by a name or '{' stays literal
                out.push('$');
                rest = after;
            } else {
                out.push_str(&lookup(&after[..len]));
                rest = &after[len..];
            }
        }
    }
    out.push_str(rest);
    out
}
