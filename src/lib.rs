// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handlers)
//!          |         vars / export / get / ...
//!          +----------+----------+
//!                     v
//!        ,-------------------------,
//!        |         config          |
//!        |  TOML, layered settings |
//!        '------------+------------'
//!                     v
//!   +-------------------------------------+
//!   |  core   env container, passthru,    |
//!   |         interpolation, file loading |
//!   +-------------------------------------+
//!   |  foundation   error, logging        |
//!   +-------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
