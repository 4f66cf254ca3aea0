// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the environment container.
//!
//! Exercises definition-file loading against real files and the full
//! passthru/interpolate/export assembly flow.

use std::io::Write;

use wrkenv::core::env::container::Environment;

fn write_env_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// =============================================================================
// Definition-file loading
// =============================================================================

#[test]
fn load_file_merges_without_overwriting() {
    let file = write_env_file(
        "# leading comment\n\
         \n\
         PUBLIC=ignored\n\
         A=1\n\
         B=2\n\
         not a valid line\n\
         C=3\n\
         D=4\n\
         \n\
         E=5\n\
         F=6\n\
         # another comment\n\
         G=7\n",
    );

    let mut env = Environment::from_pairs(["PUBLIC=foo"]).unwrap();
    env.load_file(file.path()).unwrap();

    // only the 8 valid assignments count, and PUBLIC keeps its first value
    assert_eq!(env.len(), 8);
    assert_eq!(env.get("PUBLIC"), Some("foo"));
    assert_eq!(
        env.ordered(),
        pairs(&[
            ("PUBLIC", "foo"),
            ("A", "1"),
            ("B", "2"),
            ("C", "3"),
            ("D", "4"),
            ("E", "5"),
            ("F", "6"),
            ("G", "7"),
        ])
    );
}

#[test]
fn load_file_missing_file_is_an_error() {
    let mut env = Environment::new();
    let err = env.load_file("/nonexistent/definitions.env").unwrap_err();
    assert!(err.to_string().starts_with("failed to read env file"));
}

#[test]
fn load_file_fills_empty_values() {
    // a key is only "set" while its value is non-empty
    let file = write_env_file("K=filled\n");

    let mut env = Environment::new();
    env.add("K", "");
    env.load_file(file.path()).unwrap();

    assert_eq!(env.get("K"), Some("filled"));
}

#[test]
fn load_file_comment_rule_is_first_character_only() {
    let file = write_env_file("A=1#not a comment\nB=2 # tail\n  # indented=x\n");

    let mut env = Environment::new();
    env.load_file(file.path()).unwrap();

    assert_eq!(env.get("A"), Some("1#not a comment"));
    assert_eq!(env.get("B"), Some("2 # tail"));
    // an indented hash is not a comment, and the line still splits on '='
    assert_eq!(env.get("  # indented"), Some("x"));
    assert_eq!(env.len(), 3);
}

#[test]
fn load_file_values_keep_later_equals_signs() {
    let file = write_env_file("URL=postgres://db?a=1&b=2\n");

    let mut env = Environment::new();
    env.load_file(file.path()).unwrap();

    assert_eq!(env.get("URL"), Some("postgres://db?a=1&b=2"));
}

// =============================================================================
// Full pipeline-stage assembly
// =============================================================================

#[test]
fn assembled_environment_round_trip() {
    let file = write_env_file("EXTRA=from-file\nPUBLIC=ignored\n");

    // a stage inherits its supplier's environment...
    let mut env =
        Environment::from_pairs(["PUBLIC=foo", "X_PRIVATE=zed", "XXX_OTHER=otter"]).unwrap();

    // ...merges the passthru sets into their tiers...
    let passthru = env.passthru().ordered();
    env.update(passthru);
    let hidden = env.hidden_passthru().ordered();
    env.hidden_mut().update(hidden);

    // ...and fills the gaps from its definition file
    env.load_file(file.path()).unwrap();

    assert_eq!(env.interpolate("${PUBLIC}"), "foo");
    assert_eq!(env.interpolate("$PRIVATE"), "zed");
    assert_eq!(env.interpolate("$OTHER"), "otter");
    assert_eq!(env.interpolate("$EXTRA"), "from-file");

    // the stripped hidden variable resolves in interpolation only
    assert_eq!(env.get("OTHER"), None);
    assert!(
        env.export()
            .contains(&r#"export EXTRA="from-file""#.to_owned())
    );
}
