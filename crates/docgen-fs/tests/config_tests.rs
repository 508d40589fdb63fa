use assert_fs::prelude::*;
use docgen_fs::{ConfigStore, Error};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct Sample {
    plugin: String,
    #[serde(default)]
    toc_max_level: Option<usize>,
}

#[test]
fn test_load_toml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("docgen.toml");
    file.write_str("plugin = \"quicker\"\ntoc_max_level = 3\n")
        .unwrap();

    let loaded: Sample = ConfigStore::new().load(file.path()).unwrap();
    assert_eq!(
        loaded,
        Sample {
            plugin: "quicker".into(),
            toc_max_level: Some(3),
        }
    );
}

#[test]
fn test_load_invalid_toml_reports_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("docgen.toml");
    file.write_str("plugin = ").unwrap();

    let err = ConfigStore::new().load::<Sample>(file.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(predicate::str::contains("docgen.toml").eval(&err.to_string()));
}

#[test]
fn test_load_unsupported_extension() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("docgen.ini");
    file.write_str("plugin=x").unwrap();

    let err = ConfigStore::new().load::<Sample>(file.path()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "ini"));
}

#[test]
fn test_load_optional_missing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let loaded: Option<Sample> = ConfigStore::new()
        .load_optional(&temp.path().join("docgen.toml"))
        .unwrap();
    assert!(loaded.is_none());
}
