// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Error handling module.
//!
//! ```text
//!          WrkError (~24 bytes)
//!                |
//!     +------+---+---+--------+
//!     v      v       v        v
//!    Env   Config    Io    Other
//!    Box    Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Env     InvalidFormat, FileRead
//!   Config  InvalidValue
//!
//! Everything else is a silent no-op by design: missing keys,
//! unknown interpolation variables, malformed definition lines
//! and unmatched passthru prefixes read as emptiness, not errors.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WrkError`].
pub type WrkResult<T> = std::result::Result<T, WrkError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum WrkError {
    /// Environment container error.
    #[error("env error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WrkError {
                fn from(err: $error) -> Self {
                    WrkError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Environment Errors ---

/// Environment container errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A `KEY=VALUE` entry without a separator.
    #[error("invalid environment entry '{entry}': missing '='")]
    InvalidFormat { entry: String },

    /// The definitions file could not be opened or read.
    #[error("failed to read env file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
