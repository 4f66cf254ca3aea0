// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Arguments for the environment commands.

use clap::Args;

/// Arguments for the `vars` command.
#[derive(Debug, Clone, Default, Args)]
pub struct VarsArgs {
    /// Prints the entries as a JSON array of [key, value] pairs.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Name of the variable to look up.
    pub key: String,

    /// Falls back to the hidden tier, the way interpolation resolves names.
    #[arg(long = "incl-hidden")]
    pub incl_hidden: bool,
}

/// Arguments for the `interpolate` command.
#[derive(Debug, Clone, Args)]
pub struct InterpolateArgs {
    /// Template with `$NAME` / `${NAME}` tokens to expand.
    pub template: String,
}

/// Arguments for the `passthru` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PassthruArgs {
    /// Extracts the hidden passthru set (`XXX_` prefix) instead of the
    /// visible one (`X_` prefix).
    #[arg(long)]
    pub hidden: bool,
}
