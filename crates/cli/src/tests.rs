use super::*;

fn run_captured(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(
        std::iter::once("pycmirror").chain(args.iter().copied()),
        &mut stdout,
        &mut stderr,
    );
    (
        status,
        String::from_utf8(stdout).expect("stdout utf8"),
        String::from_utf8(stderr).expect("stderr utf8"),
    )
}

#[test]
fn missing_source_operand_is_a_usage_error() {
    let (status, _stdout, stderr) = run_captured(&[]);
    assert_eq!(status, ExitCode::Syntax.as_i32());
    assert!(!stderr.is_empty());
}

#[test]
fn help_renders_to_stdout_and_exits_zero() {
    let (status, stdout, stderr) = run_captured(&["--help"]);
    assert_eq!(status, ExitCode::Ok.as_i32());
    assert!(stdout.contains("Usage"));
    assert!(stderr.is_empty());
}

#[test]
fn version_renders_to_stdout_and_exits_zero() {
    let (status, stdout, _stderr) = run_captured(&["--version"]);
    assert_eq!(status, ExitCode::Ok.as_i32());
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn nonexistent_source_is_rejected_before_any_mutation() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("missing");
    let dest = tmp.path().join("out");

    let (status, _stdout, stderr) = run_captured(&[
        missing.to_str().expect("utf8"),
        "-d",
        dest.to_str().expect("utf8"),
    ]);

    assert_eq!(status, ExitCode::Syntax.as_i32());
    assert!(stderr.contains("does not exist as a directory"));
    assert!(!dest.exists(), "validation must precede mutation");
}

#[test]
fn source_that_is_a_file_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = tmp.path().join("script.py");
    std::fs::write(&file, b"print()").expect("file");

    let (status, _stdout, stderr) = run_captured(&[file.to_str().expect("utf8")]);
    assert_eq!(status, ExitCode::Syntax.as_i32());
    assert!(stderr.contains("does not exist as a directory"));
}

#[test]
fn destination_inside_source_is_rejected_before_any_mutation() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("proj");
    std::fs::create_dir(&source).expect("source");
    let nested = source.join("out");

    let (status, _stdout, stderr) = run_captured(&[
        source.to_str().expect("utf8"),
        "-d",
        nested.to_str().expect("utf8"),
    ]);

    assert_eq!(status, ExitCode::Syntax.as_i32());
    assert!(stderr.contains("lies inside source"));
    assert!(!nested.exists());
}

#[test]
fn dotted_destination_path_still_counts_as_nested() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("proj");
    std::fs::create_dir(&source).expect("source");
    let sneaky = source.join("sub").join("..").join("out");

    let (status, _stdout, stderr) = run_captured(&[
        source.to_str().expect("utf8"),
        "-d",
        sneaky.to_str().expect("utf8"),
    ]);

    assert_eq!(status, ExitCode::Syntax.as_i32());
    assert!(stderr.contains("lies inside source"));
}

#[test]
fn invalid_exclude_pattern_is_a_usage_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("proj");
    std::fs::create_dir(&source).expect("source");
    let dest = tmp.path().join("out");

    let (status, _stdout, stderr) = run_captured(&[
        source.to_str().expect("utf8"),
        "-d",
        dest.to_str().expect("utf8"),
        "-e",
        "(unclosed",
    ]);

    assert_eq!(status, ExitCode::Syntax.as_i32());
    assert!(stderr.contains("failed to compile filter pattern"));
    assert!(!dest.exists());
}

#[test]
fn pattern_lists_split_on_semicolons_and_drop_blanks() {
    assert_eq!(
        split_patterns(" a ;; b;\t;c"),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
    assert!(split_patterns("").is_empty());
    assert!(split_patterns(" ; ;").is_empty());
}

#[test]
fn rules_keep_excludes_before_includes() {
    let rules = collect_rules(Some("keep"), Some("drop"));
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0], FilterRule::exclude("drop"));
    assert_eq!(rules[1], FilterRule::include("keep"));
}

#[test]
fn absolutize_strips_lexical_dot_components() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let convoluted = tmp.path().join("a").join("..").join("b").join(".");
    let resolved = absolutize(&convoluted).expect("absolutize");
    assert_eq!(resolved, tmp.path().join("b"));
}
