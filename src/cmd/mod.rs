// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   vars, export, get, interpolate, passthru, mirror
//! ```

pub mod env;
