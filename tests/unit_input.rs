// tests/unit_input.rs
use glyphwatch_core::discovery;
use glyphwatch_core::config::Config;
use regex::Regex;
use glyphwatch_core::error::GlyphError;
use glyphwatch_core::input::{self, Source};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_reads_utf8_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("a.txt");
    fs::write(&path, "caf\u{e9}\n").unwrap();
    let loaded = input::load(&Source::File(path.clone())).unwrap();
    assert_eq!(loaded.text, "caf\u{e9}\n");
    assert_eq!(loaded.label, format!("File: {}", path.display()));
}

#[test]
fn test_empty_file_is_valid() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    assert_eq!(input::load(&Source::File(path)).unwrap().text, "");
}

#[test]
fn test_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let err = input::load(&Source::File(d.path().join("nope.txt"))).unwrap_err();
    assert!(matches!(err, GlyphError::NotFound { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_invalid_utf8_reports_offset() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("latin1.txt");
    fs::write(&path, b"ab\xe9cd").unwrap();
    match input::load(&Source::File(path)) {
        Err(GlyphError::Decode { valid_up_to, .. }) => assert_eq!(valid_up_to, 2),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_discover_walks_and_filters() {
    let d = tempfile::tempdir().unwrap();
    let root = d.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join("docs/a.md"), "a").unwrap();
    fs::write(root.join("docs/b.txt"), "b").unwrap();
    fs::write(root.join("docs/logo.png"), "x").unwrap();
    fs::write(root.join(".git/HEAD"), "ref").unwrap();

    let files = discovery::discover(&[root.to_path_buf()], &Config::new())
        .unwrap()
        .files;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.md", "b.txt"]);
}

#[test]
fn test_discover_explicit_file_bypasses_filters() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("image.png");
    fs::write(&path, "not really").unwrap();
    let found = discovery::discover(&[path.clone()], &Config::new()).unwrap();
    assert_eq!(found.files, vec![path]);
    assert!(found.errors.is_empty());
}

#[test]
fn test_discover_missing_path() {
    let result = discovery::discover(&[PathBuf::from("/no/such/dir")], &Config::new());
    assert!(matches!(result, Err(GlyphError::NotFound { .. })));
}

#[test]
fn test_discover_exclude_is_root_relative() {
    let d = tempfile::tempdir().unwrap();
    let root = d.path();
    fs::create_dir_all(root.join("vendor")).unwrap();
    fs::write(root.join("vendor/a.txt"), "a").unwrap();
    fs::write(root.join("b.txt"), "b").unwrap();

    let mut config = Config::new();
    config.exclude_patterns = vec![Regex::new("^vendor/").unwrap()];
    let found = discovery::discover(&[root.to_path_buf()], &config).unwrap();
    assert_eq!(found.files, vec![root.join("b.txt")]);
}

#[test]
fn test_discover_include_is_root_relative() {
    let d = tempfile::tempdir().unwrap();
    let root = d.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/a.txt"), "a").unwrap();
    fs::write(root.join("b.txt"), "b").unwrap();

    let mut config = Config::new();
    config.include_patterns = vec![Regex::new("^docs/").unwrap()];
    let found = discovery::discover(&[root.to_path_buf()], &config).unwrap();
    assert_eq!(found.files, vec![root.join("docs/a.txt")]);
}

#[cfg(unix)]
#[test]
fn test_discover_keeps_walking_past_unreadable_dir() {
    use std::os::unix::fs::PermissionsExt;

    let d = tempfile::tempdir().unwrap();
    let root = d.path();
    let locked = root.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("hidden.txt"), "h").unwrap();
    fs::write(root.join("open.txt"), "o").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the directory; nothing to check then.
    let readable = fs::read_dir(&locked).is_ok();
    let found = discovery::discover(&[root.to_path_buf()], &Config::new());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    let found = found.unwrap();
    assert_eq!(found.files, vec![root.join("open.txt")]);
    assert_eq!(found.errors.len(), 1);
    assert_eq!(found.errors[0].0, locked);
    assert!(matches!(found.errors[0].1, GlyphError::Io { .. }));
}

#[test]
fn test_discover_empty_directory() {
    let d = tempfile::tempdir().unwrap();
    let found = discovery::discover(&[d.path().to_path_buf()], &Config::new()).unwrap();
    assert!(found.is_empty());
}
