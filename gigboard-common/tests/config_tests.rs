//! Tests for root folder resolution priority

use gigboard_common::config::{prepare_root_folder, resolve_root_folder, DATABASE_FILE};
use serial_test::serial;
use std::path::PathBuf;

#[test]
#[serial]
fn test_cli_arg_wins_over_env() {
    std::env::set_var("GIGBOARD_ROOT_TEST_A", "/tmp/gigboard-from-env");

    let resolved = resolve_root_folder(Some("/tmp/gigboard-from-cli"), "GIGBOARD_ROOT_TEST_A").unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/gigboard-from-cli"));

    std::env::remove_var("GIGBOARD_ROOT_TEST_A");
}

#[test]
#[serial]
fn test_env_var_used_when_no_cli_arg() {
    std::env::set_var("GIGBOARD_ROOT_TEST_B", "/tmp/gigboard-from-env");

    let resolved = resolve_root_folder(None, "GIGBOARD_ROOT_TEST_B").unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/gigboard-from-env"));

    std::env::remove_var("GIGBOARD_ROOT_TEST_B");
}

#[test]
#[serial]
fn test_fallback_default_when_nothing_set() {
    std::env::remove_var("GIGBOARD_ROOT_TEST_C");

    let resolved = resolve_root_folder(None, "GIGBOARD_ROOT_TEST_C").unwrap();
    assert!(!resolved.as_os_str().is_empty());
}

#[test]
fn test_prepare_root_folder_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("root");

    let db_path = prepare_root_folder(&root).unwrap();

    assert!(root.is_dir(), "Root folder was not created");
    assert_eq!(db_path, root.join(DATABASE_FILE));
}
