//! Injected parser, custom handler and filter capabilities

use assert_fs::prelude::*;
use autoimport_core::extract::{Binding, ExportedDeclaration, NamedExport};
use autoimport_core::{
    CustomOutput, Declaration, ParseError, SyncConfig, SyncEngine,
};
use autoimport_fs::NormalizedPath;
use pretty_assertions::assert_eq;

fn config() -> SyncConfig {
    SyncConfig {
        import: vec!["lib".into()],
        modify: vec!["app".into()],
        ..SyncConfig::default()
    }
}

/// Every `//! export NAME` line is a named export.
fn comment_parser(source: &str) -> Result<Vec<Declaration>, ParseError> {
    Ok(source
        .lines()
        .filter_map(|line| line.strip_prefix("//! export "))
        .map(|name| {
            Declaration::NamedExport(NamedExport {
                specifiers: Vec::new(),
                declaration: Some(ExportedDeclaration::Variables(vec![Binding::Identifier(
                    name.trim().to_string(),
                )])),
            })
        })
        .collect())
}

#[test]
fn test_injected_parser_drives_extraction() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("lib/a.js").write_str("//! export One\n//! export Two\n").unwrap();
    temp.child("app/main.js").write_str("//! export Two\n").unwrap();

    let report = SyncEngine::new(NormalizedPath::new(temp.path()), config())
        .unwrap()
        .with_parser(comment_parser)
        .sync();

    assert_eq!(report.exports, vec!["One", "Two"]);
    assert_eq!(
        std::fs::read_to_string(temp.child("app/main.js").path()).unwrap(),
        "import {One} from './../imports.js';\n//! export Two\n"
    );
}

#[test]
fn test_injected_custom_handler_and_filter() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("lib/a.js").write_str("export const A = 1;\n").unwrap();
    temp.child("lib/icons/star.svg").write_str("<svg/>").unwrap();
    temp.child("lib/skip/b.js").write_str("export const B = 1;\n").unwrap();

    let engine = SyncEngine::new(NormalizedPath::new(temp.path()), config())
        .unwrap()
        .with_custom_handler(|path: &NormalizedPath| {
            let stem = path.file_stem()?.to_string();
            Some(CustomOutput {
                code: Some(format!("export {{default as {stem}Icon}} from './{path}';")),
                exports: Vec::new(),
            })
        })
        .with_filter(|path: &NormalizedPath| !path.as_str().starts_with("lib/skip/"));
    let report = engine.sync();

    assert!(report.exports.iter().all(|name| name != "B"));
    assert_eq!(
        std::fs::read_to_string(temp.child("imports.js").path()).unwrap(),
        "import {A} from 'lib/a.js';\nexport {default as starIcon} from './lib/icons/star.svg';\n\nexport {A};\n"
    );
}

#[test]
fn test_extension_filter_applies_to_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("lib/a.js").write_str("export const A = 1;\n").unwrap();
    temp.child("lib/a.test.js").write_str("export const T = 1;\n").unwrap();
    temp.child("lib/nested/b.js").write_str("export const B = 1;\n").unwrap();
    temp.child("app/main.js").write_str("A;\n").unwrap();

    let report = SyncEngine::new(NormalizedPath::new(temp.path()), config())
        .unwrap()
        .with_filter(|path: &NormalizedPath| {
            path.as_str().ends_with(".js") && !path.as_str().ends_with(".test.js")
        })
        .sync();

    assert_eq!(report.exports, vec!["A", "B"]);
    assert_eq!(
        std::fs::read_to_string(temp.child("app/main.js").path()).unwrap(),
        "import {A, B} from './../imports.js';\nA;\n"
    );
}
