// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI module for wrkenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! wrkenv [global options] <command>
//! version
//! vars [--json]
//! export
//! get KEY [--incl-hidden]
//! interpolate TEMPLATE
//! passthru [--hidden]
//! mirror
//! ```

pub mod env;
pub mod global;


use crate::cli::env::{GetArgs, InterpolateArgs, PassthruArgs, VarsArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Wercker Pipeline Environment - Rust Port
///
/// Assembles, filters and exports process environments between pipeline
/// stages.
#[derive(Debug, Parser)]
#[command(
    name = "wrkenv",
    author,
    version,
    about = "Wercker Pipeline Environment Tool",
    long_about = "Assembles, filters and exports process environments between\n\
                  pipeline stages: variables prefixed X_ are re-exposed with the\n\
                  prefix stripped, XXX_ variables feed the hidden tier used by\n\
                  interpolation, and definition files fill the gaps without\n\
                  overwriting what is already set.",
    after_help = "CONFIG FILES:\n\n\
                  By default, wrkenv will look for `wrkenv.toml` in the current\n\
                  directory. Additional files can be specified with --config and\n\
                  are loaded on top of it. WRKENV_* environment variables\n\
                  override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints every variable as KEY=VALUE in insertion order.
    Vars(VarsArgs),

    /// Prints the environment as shell `export` statements.
    Export,

    /// Prints the value of a single variable.
    Get(GetArgs),

    /// Expands $NAME / ${NAME} tokens in a template.
    Interpolate(InterpolateArgs),

    /// Prints the prefix-stripped passthru variables.
    Passthru(PassthruArgs),

    /// Prints the mirrored cross-stage variables.
    Mirror,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
