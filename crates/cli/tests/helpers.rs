use std::fs;
use std::path::Path;

use launchpad::{canonicalize_or_current, init_logging, load_config};
use launchpad_core::projects::ConfigOverrides;
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let cwd = std::env::current_dir().expect("cwd");
    let result = canonicalize_or_current(".").expect("canonicalize");
    assert_eq!(result, cwd);
}

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");

    let result = canonicalize_or_current(subdir.to_str().unwrap()).expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));
}

#[test]
fn canonicalize_or_current_keeps_missing_paths_absolute() {
    let result = canonicalize_or_current("does-not-exist-here").expect("resolve");
    assert!(result.is_absolute());
    assert!(result.ends_with("does-not-exist-here"));
}

#[test]
fn init_logging_can_be_called_twice() {
    init_logging(true, false);
    init_logging(false, true);
}

#[test]
fn load_config_applies_overrides_on_top_of_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("launchpad.yaml");
    fs::write(&path, "launcher_script: dev.sh\nshell: zsh\n").unwrap();

    let loaded = load_config(
        Some(path.as_path()),
        ConfigOverrides { shell: Some("fish".into()), ..ConfigOverrides::default() },
    )
    .unwrap();
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.config.launcher_script, "dev.sh");
    assert_eq!(loaded.config.shell, "fish");
}

#[test]
fn load_config_fails_for_missing_explicit_file() {
    let err = load_config(Some(Path::new("/definitely/missing.yaml")), ConfigOverrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}
