use super::*;
use std::path::Path;

#[test]
fn empty_set_allows_everything_visible() {
    let set = FilterSet::from_rules(Vec::new()).expect("empty set");
    assert!(set.is_empty());
    assert!(set.allows_entry("anything", true));
    assert!(!set.matches_include_path(Path::new("/src/anything.py")));
}

#[test]
fn hidden_entries_are_suppressed_only_when_requested() {
    let set = FilterSet::from_rules(Vec::new()).expect("empty set");
    assert!(!set.allows_entry(".git", true));
    assert!(!set.allows_entry(".hidden.py", true));
    assert!(set.allows_entry(".git", false));
}

#[test]
fn exclude_matches_anywhere_in_the_name() {
    let set = FilterSet::from_rules([FilterRule::exclude("test")]).expect("compiled");
    assert!(!set.allows_entry("test_utils.py", false));
    assert!(!set.allows_entry("latest", false));
    assert!(set.allows_entry("main.py", false));
}

#[test]
fn excludes_apply_even_with_hiding_disabled() {
    let set = FilterSet::from_rules([FilterRule::exclude("vendor")]).expect("compiled");
    assert!(!set.allows_entry("vendor", false));
    assert!(!set.allows_entry("vendored_copy", false));
}

#[test]
fn anchored_exclude_respects_anchors() {
    let set = FilterSet::from_rules([FilterRule::exclude("^build$")]).expect("compiled");
    assert!(!set.allows_entry("build", false));
    assert!(set.allows_entry("rebuild", false));
    assert!(set.allows_entry("build_tools", false));
}

#[test]
fn multiple_excludes_are_applied_in_order_independently() {
    let rules = [FilterRule::exclude(r"\.bak$"), FilterRule::exclude("tmp")];
    let set = FilterSet::from_rules(rules).expect("compiled");
    assert!(!set.allows_entry("old.bak", false));
    assert!(!set.allows_entry("tmp_data", false));
    assert!(set.allows_entry("keep.py", false));
}

#[test]
fn include_matches_against_the_full_path() {
    let set = FilterSet::from_rules([FilterRule::include(r"pkg/cli\.py$")]).expect("compiled");
    assert!(set.matches_include_path(Path::new("/work/src/pkg/cli.py")));
    assert!(!set.matches_include_path(Path::new("/work/src/other/cli.pyc")));
    assert!(!set.matches_include_path(Path::new("/work/src/cli.py")));
}

#[test]
fn include_rules_do_not_affect_entry_eligibility() {
    let set = FilterSet::from_rules([FilterRule::include("special")]).expect("compiled");
    assert!(set.allows_entry("mundane.py", false));
    assert!(set.allows_entry("special.py", false));
}

#[test]
fn invalid_pattern_is_reported_with_its_text() {
    let error = FilterSet::from_rules([FilterRule::exclude("(unclosed")]).unwrap_err();
    assert_eq!(error.pattern(), "(unclosed");
}

#[test]
fn rule_accessors_round_trip() {
    let include = FilterRule::include("a");
    assert_eq!(include.action(), FilterAction::Include);
    assert_eq!(include.pattern(), "a");

    let exclude = FilterRule::exclude("b");
    assert_eq!(exclude.action(), FilterAction::Exclude);
    assert_eq!(exclude.pattern(), "b");
}
