// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Vars | Export | Get | Interpolate | Passthru | Mirror
//! ```

use std::process::ExitCode;

use wrkenv::cli::global::GlobalOptions;
use wrkenv::cli::{self, Command};
use wrkenv::cmd::env::{
    run_export_command, run_get_command, run_interpolate_command, run_mirror_command,
    run_passthru_command, run_vars_command,
};
use wrkenv::config::Config;
use wrkenv::config::loader::ConfigLoader;
use wrkenv::logging::init_logging;
use wrkenv::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let files = &cli.global.env_files;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Vars(args)) => {
            load_config(&cli.global).and_then(|config| run_vars_command(args, &config, files))
        }
        Some(Command::Export) => {
            load_config(&cli.global).and_then(|config| run_export_command(&config, files))
        }
        Some(Command::Get(args)) => {
            load_config(&cli.global).and_then(|config| run_get_command(args, &config, files))
        }
        Some(Command::Interpolate(args)) => load_config(&cli.global)
            .and_then(|config| run_interpolate_command(args, &config, files)),
        Some(Command::Passthru(args)) => {
            load_config(&cli.global).and_then(|config| run_passthru_command(args, &config, files))
        }
        Some(Command::Mirror) => {
            load_config(&cli.global).and_then(|config| run_mirror_command(&config, files))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("wrkenv.toml");
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix("WRKENV")
}

fn load_config(global: &GlobalOptions) -> wrkenv::error::Result<Config> {
    let loader = build_config_loader(global);
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
