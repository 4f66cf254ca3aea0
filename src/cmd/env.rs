// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Environment command implementations.

use std::path::PathBuf;

use crate::cli::env::{GetArgs, InterpolateArgs, PassthruArgs, VarsArgs};
use crate::config::Config;
use crate::core::env::container::Environment;
use crate::core::env::current_env;
use crate::error::{Result, WrkResult};

/// Assembles the working environment for a command: the process environment,
/// both passthru sets merged into their tiers, then definition files on top
/// (first write wins).
///
/// # Errors
///
/// Returns an error if a definition file cannot be read.
pub fn assemble_env(config: &Config, extra_files: &[PathBuf]) -> WrkResult<Environment> {
    let mut env = current_env();

    let passthru = env.passthru().ordered();
    env.update(passthru);
    let hidden = env.hidden_passthru().ordered();
    env.hidden_mut().update(hidden);

    for path in config.env.files.iter().chain(extra_files) {
        env.load_file(path)?;
        tracing::debug!(path = %path.display(), "loaded definition file");
    }

    Ok(env)
}

/// Main handler for the vars command.
///
/// # Errors
///
/// Returns an error if the environment cannot be assembled or serialized.
pub fn run_vars_command(args: &VarsArgs, config: &Config, extra_files: &[PathBuf]) -> Result<()> {
    let env = assemble_env(config, extra_files)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&env.ordered())?);
    } else {
        for (key, value) in env.iter() {
            println!("{key}={value}");
        }
    }
    Ok(())
}

/// Main handler for the export command.
///
/// # Errors
///
/// Returns an error if the environment cannot be assembled.
pub fn run_export_command(config: &Config, extra_files: &[PathBuf]) -> Result<()> {
    let env = assemble_env(config, extra_files)?;
    for line in env.export() {
        println!("{line}");
    }
    Ok(())
}

/// Main handler for the get command.
///
/// Missing variables print an empty line rather than failing, matching the
/// container's permissive-read policy.
///
/// # Errors
///
/// Returns an error if the environment cannot be assembled.
pub fn run_get_command(args: &GetArgs, config: &Config, extra_files: &[PathBuf]) -> Result<()> {
    let env = assemble_env(config, extra_files)?;
    let value = if args.incl_hidden {
        env.get_incl_hidden(&args.key)
    } else {
        env.get(&args.key)
    };
    println!("{}", value.unwrap_or(""));
    Ok(())
}

/// Main handler for the interpolate command.
///
/// # Errors
///
/// Returns an error if the environment cannot be assembled.
pub fn run_interpolate_command(
    args: &InterpolateArgs,
    config: &Config,
    extra_files: &[PathBuf],
) -> Result<()> {
    let env = assemble_env(config, extra_files)?;
    println!("{}", env.interpolate(&args.template));
    Ok(())
}

/// Main handler for the passthru command.
///
/// # Errors
///
/// Returns an error if the environment cannot be assembled.
pub fn run_passthru_command(
    args: &PassthruArgs,
    config: &Config,
    extra_files: &[PathBuf],
) -> Result<()> {
    let env = assemble_env(config, extra_files)?;
    let subset = if args.hidden {
        env.hidden_passthru()
    } else {
        env.passthru()
    };
    for (key, value) in subset.iter() {
        println!("{key}={value}");
    }
    Ok(())
}

/// Main handler for the mirror command.
///
/// # Errors
///
/// Returns an error if the environment cannot be assembled.
pub fn run_mirror_command(config: &Config, extra_files: &[PathBuf]) -> Result<()> {
    let env = assemble_env(config, extra_files)?;
    for (key, value) in env.mirror() {
        println!("{key}={value}");
    }
    Ok(())
}
