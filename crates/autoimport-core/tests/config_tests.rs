//! Configuration loading in every supported format

use std::fs;

use autoimport_core::{
    CONFIG_FILE_NAMES, DEFAULT_OUTPUT, Dialect, Error, SyncConfig, SyncEngine, load_config,
};
use autoimport_fs::{ConfigStore, NormalizedPath};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_full_toml_configuration() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("autoimport.toml"),
        r#"
import = ["src/lib"]
modify = ["src/pages"]
output = "globals.js"
previous_outputs = ["imports.js"]
exclude = ["\\.test\\.js$"]
specifier_prefix = "/"

[parser]
dialect = "tsx"

[extensions]
script = [".ts", ".tsx"]

[[custom]]
suffix = ".svg"
exports = ["{name}Icon"]
"#,
    )
    .unwrap();

    let config = load_config(&NormalizedPath::new(temp.path())).unwrap();

    assert_eq!(config.import, vec!["src/lib"]);
    assert_eq!(config.output.as_deref(), Some("globals.js"));
    assert_eq!(config.parser.dialect, Dialect::Tsx);
    assert!(config.parser.declaration_names);
    assert_eq!(config.extensions.script, vec![".ts", ".tsx"]);
    assert_eq!(config.extensions.include, vec![".css"]);
    assert_eq!(config.custom[0].code, None);
    assert_eq!(config.custom[0].exports, vec!["{name}Icon"]);
}

#[test]
fn test_json_and_yaml_are_found_in_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("autoimport.yml"), "import: [lib]\noutput: false\n").unwrap();

    let config = load_config(&NormalizedPath::new(temp.path())).unwrap();
    assert_eq!(config.output, None);

    fs::write(temp.path().join("autoimport.json"), r#"{"import": ["other"]}"#).unwrap();
    let config = load_config(&NormalizedPath::new(temp.path())).unwrap();
    assert_eq!(config.import, vec!["other"]);
    assert_eq!(config.output.as_deref(), Some(DEFAULT_OUTPUT));
}

#[test]
fn test_missing_configuration() {
    let temp = TempDir::new().unwrap();
    let error = load_config(&NormalizedPath::new(temp.path())).unwrap_err();
    assert!(matches!(error, Error::ConfigNotFound { .. }));
}

#[test]
fn test_invalid_exclude_pattern_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("autoimport.toml"), "exclude = [\"[a-\"]\n").unwrap();

    let error = load_config(&NormalizedPath::new(temp.path())).unwrap_err();
    assert!(matches!(error, Error::InvalidPattern { .. }));

    let config = SyncConfig {
        exclude: vec!["(".into()],
        ..SyncConfig::default()
    };
    assert!(SyncEngine::new(NormalizedPath::new(temp.path()), config).is_err());
}

#[test]
fn test_starter_configuration_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(CONFIG_FILE_NAMES[0]));
    let store = ConfigStore::new();

    store.save(&path, &SyncConfig::starter()).unwrap();
    let loaded: SyncConfig = store.load(&path).unwrap();

    assert_eq!(loaded, SyncConfig::starter());
}
