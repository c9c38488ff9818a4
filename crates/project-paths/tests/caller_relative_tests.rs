//! Caller-relative resolution through the shared handles
//!
//! Every module below lives in its own directory next to its own
//! `pyproject.toml`, so each one must see its own configuration even though
//! they all go through the same `PATHS` handle.

#[path = "a/from_a.rs"]
mod from_a;
#[path = "b/from_b.rs"]
mod from_b;
#[path = "empty_section/probe.rs"]
mod empty_section;
#[path = "reserved_names/probe.rs"]
mod reserved_names;

use std::path::{Path, PathBuf};
use std::thread;

use pretty_assertions::assert_eq;
use project_paths::{Diagnostic, Error, PATHS, PROJECT_ROOT, here, paths, project_root};

fn canonical(path: impl AsRef<Path>) -> PathBuf {
    std::fs::canonicalize(path).unwrap()
}

fn source_of(location: project_paths::CallerLocation) -> PathBuf {
    canonical(location.source_file().unwrap())
}

#[test]
fn test_from_a_resolves_against_its_own_configuration() {
    let filename = from_a::filename().unwrap();
    assert_eq!(canonical(filename), source_of(from_a::location()));
}

#[test]
fn test_from_b_resolves_against_its_own_configuration() {
    let filename = from_b::filename().unwrap();
    assert_eq!(canonical(filename), source_of(from_b::location()));
}

#[test]
fn test_project_root_follows_the_caller() {
    let root_a = from_a::root().unwrap();
    let root_b = from_b::root().unwrap();

    assert_ne!(root_a, root_b);
    assert!(root_a.join("pyproject.toml").is_file());
    assert_eq!(canonical(&root_a), canonical(source_of(from_a::location()).parent().unwrap()));
}

#[test]
fn test_interleaved_callers_on_many_threads() {
    let expected_a = source_of(from_a::location());
    let expected_b = source_of(from_b::location());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let expected_a = expected_a.clone();
            let expected_b = expected_b.clone();
            thread::spawn(move || {
                for round in 0..10 {
                    if (i + round) % 2 == 0 {
                        assert_eq!(canonical(from_a::filename().unwrap()), expected_a);
                    } else {
                        assert_eq!(canonical(from_b::filename().unwrap()), expected_b);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_repeated_access_is_idempotent() {
    let first = from_a::resolved().unwrap();
    let second = from_a::resolved().unwrap();
    assert_eq!(first, second);
    assert_ne!(first, from_b::resolved().unwrap());
}

#[test]
fn test_auto_discovery_from_this_file() {
    let resolved = paths!().unwrap();

    assert!(resolved.len() >= 1);
    assert!(resolved.contains("tests"));
    assert!(resolved.members().contains(&"tests".to_string()));

    let tests = paths!("tests").unwrap();
    assert!(tests.is_absolute());
    assert_eq!(canonical(&tests), canonical(source_of(here!()).parent().unwrap()));
}

#[test]
fn test_configuration_is_next_to_this_file() {
    let config = PATHS.configuration(&here!()).unwrap();
    let expected = source_of(here!()).parent().unwrap().join("pyproject.toml");

    assert_eq!(canonical(&config), expected);
    let text = std::fs::read_to_string(&config).unwrap();
    assert!(text.contains("project-paths"));
}

#[test]
fn test_handle_len_and_names_agree() {
    let len = PATHS.len(&here!()).unwrap();
    let names = PATHS.names(&here!()).unwrap();

    assert_eq!(len, names.len());
    assert_eq!(names, vec!["absolute", "fixtures_a", "tests"]);
}

#[test]
fn test_absolute_entry_is_kept() {
    let absolute = paths!("absolute").unwrap();
    assert_eq!(absolute, PathBuf::from("/"));
    assert!(absolute.components().count() <= 2);
}

#[test]
fn test_path_does_not_exist() {
    let err = paths!("does_not_exist").unwrap_err();
    let config = PATHS.configuration(&here!()).unwrap();

    assert!(matches!(err, Error::UnknownPathName { .. }));
    let message = err.to_string();
    assert!(message.contains("does_not_exist"));
    assert!(message.contains(&config.display().to_string()));
}

#[test]
fn test_project_root_usage() {
    let root = project_root!().unwrap();
    assert!(root.is_dir());
    assert!(project_root!("pyproject.toml").unwrap().is_file());
    assert_eq!(PROJECT_ROOT.display(&here!()).unwrap(), root.display().to_string());
}

#[test]
fn test_missing_section_names_the_file() {
    let err = empty_section::len().unwrap_err();
    let expected = source_of(empty_section::location())
        .parent()
        .unwrap()
        .join("pyproject.toml");

    assert!(matches!(err, Error::ConfigurationSectionNotFound { .. }));
    let message = err.to_string();
    assert!(
        message.contains(&expected.display().to_string()),
        "error message did not specify which pyproject.toml it looked in: {message}"
    );
    assert!(message.contains("[tool.project-paths]"));
}

#[test]
fn test_reserved_names_are_skipped() {
    let resolved = reserved_names::resolved().unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved.names(), vec!["visible"]);
    assert!(!resolved.members().contains(&"_paths".to_string()));
    assert_eq!(
        resolved.diagnostics(),
        &[Diagnostic::ReservedName {
            name: "_paths".to_string()
        }]
    );
}
