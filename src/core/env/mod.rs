// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Shell environment management.
//!
//! # Architecture
//!
//! ```text
//! Environment (insertion-ordered map + owned hidden tier)
//! Sources: current_env(), Environment::from_pairs(), load_file()
//! Ops: add/update/get, interpolate ($VAR / ${VAR}),
//!      passthru ("X_") / hidden_passthru ("XXX_") / mirror,
//!      ordered() snapshot, export KEY="VALUE" lines
//! ```
//!
//! - **Order-preserving**: re-adding a key keeps its first-insertion slot
//! - **Two tiers**: hidden variables resolve in interpolation only
//! - **Single-threaded**: callers serialize access, no internal locking

pub mod container;
pub mod types;

mod interpolate;
mod loader;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Environment {
    let mut env = container::Environment::new();
    env.update(std::env::vars());
    env
}
