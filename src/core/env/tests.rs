// wrkenv: Wercker Pipeline Environment - Rust Port
//
// SPDX-FileCopyrightText: 2026 The wrkenv Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the environment container.

use super::container::Environment;
use super::current_env;
use super::interpolate::expand;

fn env_from(pairs: &[&str]) -> Environment {
    Environment::from_pairs(pairs).unwrap()
}

#[test]
fn test_add_overwrites_value_in_place() {
    let mut env = env_from(&["PUBLIC=foo", "X_PRIVATE=zed"]);
    env.add("PUBLIC", "bar");

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("PUBLIC"), Some("bar"));
    // position in the order is fixed by the FIRST add
    assert_eq!(
        env.ordered(),
        vec![
            ("PUBLIC".to_owned(), "bar".to_owned()),
            ("X_PRIVATE".to_owned(), "zed".to_owned()),
        ]
    );
}

#[test]
fn test_from_pairs_splits_on_first_equals() {
    let env = env_from(&["PUBLIC=foo", "EQ=a=b", "EMPTY="]);

    assert_eq!(env.get("PUBLIC"), Some("foo"));
    assert_eq!(env.get("EQ"), Some("a=b"));
    assert_eq!(env.get("EMPTY"), Some(""));
}

#[test]
fn test_from_pairs_rejects_entry_without_separator() {
    let err = Environment::from_pairs(["NOEQUALS"]).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid environment entry 'NOEQUALS': missing '='"
    );
}

#[test]
fn test_get_missing_key() {
    let env = env_from(&["PUBLIC=foo"]);
    assert_eq!(env.get("NOTEXIST"), None);
}

#[test]
fn test_passthru() {
    let env = env_from(&["X_PUBLIC=foo", "XXX_PRIVATE=bar", "NOT=included"]);

    assert_eq!(
        env.passthru().ordered(),
        vec![("PUBLIC".to_owned(), "foo".to_owned())]
    );
    assert_eq!(
        env.hidden_passthru().ordered(),
        vec![("PRIVATE".to_owned(), "bar".to_owned())]
    );
    // the receiver is untouched
    assert_eq!(env.len(), 3);
}

#[test]
fn test_passthru_prefix_matching_is_literal() {
    // "XXX_FOO" starts with "XXX_", not with the literal prefix "X_"
    let env = env_from(&["XXX_FOO=bar"]);

    assert!(env.passthru().is_empty());
    assert_eq!(env.hidden_passthru().len(), 1);
    assert_eq!(env.hidden_passthru().get("FOO"), Some("bar"));
}

#[test]
fn test_interpolate() {
    let mut env = env_from(&["PUBLIC=foo", "X_PRIVATE=zed", "XXX_OTHER=otter"]);
    let passthru = env.passthru().ordered();
    env.update(passthru);
    let hidden = env.hidden_passthru().ordered();
    env.hidden_mut().update(hidden);

    assert_eq!(env.interpolate("${PUBLIC}"), "foo");
    assert_eq!(env.interpolate("$PRIVATE"), "zed");
    assert_eq!(env.interpolate("$OTHER"), "otter");
    assert_eq!(env.interpolate("one two $PUBLIC bar"), "one two foo bar");
}

#[test]
fn test_interpolate_unknown_variables_become_empty() {
    let env = Environment::new();

    assert_eq!(env.interpolate("${MISSING}"), "");
    assert_eq!(env.interpolate("a $MISSING b"), "a  b");
}

#[test]
fn test_interpolate_literal_dollars() {
    let env = env_from(&["PUBLIC=foo"]);

    assert_eq!(env.interpolate("no variables here"), "no variables here");
    assert_eq!(env.interpolate("$"), "$");
    assert_eq!(env.interpolate("100$ flat"), "100$ flat");
    assert_eq!(env.interpolate("a$-b"), "a$-b");
}

#[test]
fn test_interpolate_brace_edge_cases() {
    let env = env_from(&["PUBLIC=foo"]);

    // empty and unclosed braces are consumed without output
    assert_eq!(env.interpolate("x${}y"), "xy");
    assert_eq!(env.interpolate("a${unclosed"), "aunclosed");
}

#[test]
fn test_interpolate_is_not_recursive() {
    let env = env_from(&["A=$B", "B=x"]);
    assert_eq!(env.interpolate("$A"), "$B");
}

#[test]
fn test_get_incl_hidden_lookup_chain() {
    let mut env = env_from(&["PUBLIC=visible"]);
    env.hidden_mut().add("SECRET", "hush");
    env.hidden_mut().add("PUBLIC", "shadowed");

    // visible tier wins, hidden fills the gaps
    assert_eq!(env.get_incl_hidden("PUBLIC"), Some("visible"));
    assert_eq!(env.get_incl_hidden("SECRET"), Some("hush"));
    // plain get never consults the hidden tier
    assert_eq!(env.get("SECRET"), None);
    assert_eq!(env.hidden().unwrap().len(), 2);
}

#[test]
fn test_ordered() {
    let env = env_from(&["PUBLIC=foo", "X_PRIVATE=zed"]);
    assert_eq!(
        env.ordered(),
        vec![
            ("PUBLIC".to_owned(), "foo".to_owned()),
            ("X_PRIVATE".to_owned(), "zed".to_owned()),
        ]
    );
}

#[test]
fn test_ordered_is_idempotent() {
    let env = env_from(&["B=2", "A=1", "C=3"]);
    assert_eq!(env.ordered(), env.ordered());
}

#[test]
fn test_export() {
    let env = env_from(&["PUBLIC=foo", "X_PRIVATE=zed"]);
    assert_eq!(
        env.export(),
        vec![
            r#"export PUBLIC="foo""#.to_owned(),
            r#"export X_PRIVATE="zed""#.to_owned(),
        ]
    );
}

#[test]
fn test_export_escapes_values() {
    let mut env = Environment::new();
    env.add("MSG", "say \"hi\"\nback\\slash\ttab");

    assert_eq!(
        env.export(),
        vec![r#"export MSG="say \"hi\"\nback\\slash\ttab""#.to_owned()]
    );
}

#[test]
fn test_mirror_follows_allow_list_order() {
    let mut env = Environment::new();
    env.add("WERCKER_MAIN_PIPELINE_STARTED", "12345");
    env.add("OTHER", "ignored");
    env.add("WERCKER_STARTED_BY", "termie");

    assert_eq!(
        env.mirror(),
        vec![
            ("WERCKER_STARTED_BY".to_owned(), "termie".to_owned()),
            (
                "WERCKER_MAIN_PIPELINE_STARTED".to_owned(),
                "12345".to_owned()
            ),
        ]
    );
}

#[test]
fn test_mirror_skips_absent_names() {
    let env = env_from(&["PUBLIC=foo"]);
    assert!(env.mirror().is_empty());
}

#[test]
fn test_update_adds_in_sequence_order() {
    let mut env = env_from(&["PUBLIC=foo"]);
    env.update([("A", "1"), ("PUBLIC", "replaced"), ("B", "2")]);

    assert_eq!(
        env.ordered(),
        vec![
            ("PUBLIC".to_owned(), "replaced".to_owned()),
            ("A".to_owned(), "1".to_owned()),
            ("B".to_owned(), "2".to_owned()),
        ]
    );
}

#[test]
fn test_expand_hands_names_to_the_lookup() {
    let result = expand("$A ${B_2} c", |name| format!("<{name}>"));
    assert_eq!(result, "<A> <B_2> c");
}

#[test]
fn test_current_env() {
    // behavioral test, PATH should exist in any reasonable environment
    let env = current_env();
    assert!(
        env.get("PATH").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_len_and_is_empty() {
    let mut env = Environment::new();
    assert!(env.is_empty());

    env.add("A", "1");
    env.add("A", "2");
    assert_eq!(env.len(), 1);
    assert!(!env.is_empty());
}
