// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert!(LogLevel::try_from(9u8).is_err());
    assert_eq!(LogLevel::new(4).unwrap().as_u8(), 4);
}

#[test]
fn test_log_level_filter_strings() {
    let directives: Vec<&str> = (0..=6)
        .map(|level| LogLevel::new(level).unwrap().to_filter_string())
        .collect();
    assert_eq!(
        directives,
        vec!["off", "error", "warn", "info", "debug", "trace", "trace"]
    );
}

#[test]
fn test_log_level_tracing_conversion() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(
        LogLevel::INFO.to_tracing_level(),
        Some(tracing::Level::INFO)
    );
    assert_eq!(
        LogLevel::DUMP.to_tracing_level(),
        Some(tracing::Level::TRACE)
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(config.show_timestamps());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("out/wrkenv.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("out/wrkenv.log"));
}
