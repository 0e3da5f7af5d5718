//! Integration tests for flag merging and negation resolution.

use modeler_launch::args::append_args;

const NONE: &[&str] = &[];

fn has_conflict(flags: &[String]) -> bool {
    flags.iter().any(|f| {
        f.strip_prefix("--no-")
            .map(|name| flags.contains(&format!("--{}", name)))
            .unwrap_or(false)
    })
}

#[test]
fn empty_inputs_give_empty_list() {
    assert!(append_args(NONE, NONE).is_empty());
}

#[test]
fn negation_overrides_earlier_flag() {
    let merged = append_args(&["--foo"], &["--no-foo"]);
    assert_eq!(merged, vec!["--no-foo"]);
}

#[test]
fn flag_overrides_earlier_negation() {
    let merged = append_args(&["--no-foo"], &["--foo"]);
    assert_eq!(merged, vec!["--foo"]);
}

#[test]
fn value_bearing_flag_appears_once() {
    let merged = append_args(&["--foo=1"], &["--foo=2"]);

    assert_eq!(merged.iter().filter(|f| *f == "--foo=2").count(), 1);
}

#[test]
fn duplicates_keep_first_position() {
    let merged = append_args(&["--a", "--b"], &["--a", "--c"]);
    assert_eq!(merged, vec!["--a", "--b", "--c"]);
}

#[test]
fn value_bearing_flag_does_not_clear_negation() {
    let merged = append_args(&["--no-zoom"], &["--zoom=2"]);
    assert_eq!(merged, vec!["--no-zoom", "--zoom=2"]);
}

#[test]
fn negation_does_not_clear_value_bearing_flag() {
    // Only the exact positive token is removed.
    let merged = append_args(&["--zoom=2"], &["--no-zoom"]);
    assert_eq!(merged, vec!["--zoom=2", "--no-zoom"]);
}

#[test]
fn no_conflicts_for_presence_flags() {
    let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
        (vec!["--a", "--no-b"], vec!["--b", "--no-a"]),
        (vec!["--a", "--no-a", "--a"], vec![]),
        (vec![], vec!["--no-x", "--x", "--no-x"]),
        (vec!["--x", "--y"], vec!["--no-y", "--y", "--no-x"]),
    ];

    for (base, extra) in cases {
        let merged = append_args(base.as_slice(), extra.as_slice());
        assert!(!has_conflict(&merged), "conflict in {:?}", merged);
    }
}

#[test]
fn base_only_and_extra_only_pass_through() {
    assert_eq!(append_args(&["--a", "--b=1"], NONE), vec!["--a", "--b=1"]);
    assert_eq!(append_args(NONE, &["--a", "--b=1"]), vec!["--a", "--b=1"]);
}
