//! Project lifecycle scenarios
//!
//! Each test drives the engine through several runs over one project tree,
//! editing files between runs the way a developer (or a merge) would.

use assert_fs::prelude::*;
use autoimport_core::{SyncConfig, SyncEngine};
use autoimport_fs::NormalizedPath;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn project() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("autoimport.toml")
        .write_str("import = [\"src/lib\"]\nmodify = [\"src/pages\", \"src/lib\"]\n")
        .unwrap();
    temp.child("src/lib/math.js")
        .write_str("export const add = (a, b) => a + b;\n")
        .unwrap();
    temp.child("src/lib/format.js")
        .write_str("export function pad(s) { return add(s, ' '); }\n")
        .unwrap();
    temp.child("src/pages/home.js")
        .write_str("console.log(pad(add(1, 2)));\n")
        .unwrap();
    temp
}

fn load(temp: &assert_fs::TempDir) -> SyncEngine {
    SyncEngine::load(NormalizedPath::new(temp.path())).unwrap()
}

fn read(temp: &assert_fs::TempDir, relative: &str) -> String {
    std::fs::read_to_string(temp.child(relative).path()).unwrap()
}

#[test]
fn test_exports_follow_file_additions_and_removals() {
    let temp = project();
    load(&temp).sync();

    temp.child("src/pages/home.js").assert(predicate::str::starts_with(
        "import {pad, add} from './../../imports.js';\n",
    ));
    temp.child("src/lib/format.js").assert(predicate::str::starts_with(
        "import {add} from './../../imports.js';\n",
    ));

    temp.child("src/lib/dates.js")
        .write_str("export const today = () => new Date();\n")
        .unwrap();
    let report = load(&temp).sync();
    assert_eq!(report.exports, vec!["today", "pad", "add"]);
    temp.child("src/pages/home.js").assert(predicate::str::starts_with(
        "import {today, pad, add} from './../../imports.js';\n",
    ));

    std::fs::remove_file(temp.child("src/lib/dates.js").path()).unwrap();
    load(&temp).sync();
    assert_eq!(
        read(&temp, "src/pages/home.js"),
        "import {pad, add} from './../../imports.js';\nconsole.log(pad(add(1, 2)));\n"
    );
    assert!(!read(&temp, "imports.js").contains("dates.js"));
}

#[test]
fn test_renaming_the_output_migrates_consumers() {
    let temp = project();
    load(&temp).sync();

    temp.child("autoimport.toml")
        .write_str(
            "import = [\"src/lib\"]\nmodify = [\"src/pages\", \"src/lib\"]\noutput = \"globals.js\"\nprevious_outputs = [\"imports.js\"]\n",
        )
        .unwrap();
    let report = load(&temp).sync();

    assert!(report.success(), "{:?}", report.errors);
    temp.child("globals.js").assert(predicate::path::exists());
    assert_eq!(
        read(&temp, "src/pages/home.js"),
        "import {pad, add} from './../../globals.js';\nconsole.log(pad(add(1, 2)));\n"
    );
    assert!(load(&temp).sync().is_clean());
}

#[test]
fn test_merge_conflict_on_generated_line_heals() {
    let temp = project();
    load(&temp).sync();

    temp.child("src/pages/home.js")
        .write_str(
            "<<<<<<< HEAD\n\
             import {pad, add} from './../../imports.js';\n\
             =======\n\
             import {pad, add, today} from './../../imports.js';\n\
             >>>>>>> feature/dates\n\
             console.log(pad(add(1, 2)));\n",
        )
        .unwrap();
    load(&temp).sync();

    assert_eq!(
        read(&temp, "src/pages/home.js"),
        "import {pad, add} from './../../imports.js';\nconsole.log(pad(add(1, 2)));\n"
    );
}

#[test]
fn test_byte_order_mark_before_generated_line() {
    let temp = project();
    load(&temp).sync();

    let current = "\u{feff}import {pad, add} from './../../imports.js';\nconsole.log(pad(add(1, 2)));\n";
    temp.child("src/pages/home.js").write_str(current).unwrap();
    assert!(load(&temp).sync().is_clean());
    assert_eq!(read(&temp, "src/pages/home.js"), current);

    temp.child("src/pages/home.js")
        .write_str("\u{feff}import {pad} from './../../imports.js';\nconsole.log(pad(add(1, 2)));\n")
        .unwrap();
    load(&temp).sync();

    assert_eq!(
        read(&temp, "src/pages/home.js"),
        "import {pad, add} from './../../imports.js';\nconsole.log(pad(add(1, 2)));\n"
    );
}

#[test]
fn test_foreign_leading_import_is_kept_below() {
    let temp = project();
    temp.child("src/pages/home.js")
        .write_str("import {html} from 'lit';\nconsole.log(html, add);\n")
        .unwrap();

    load(&temp).sync();

    assert_eq!(
        read(&temp, "src/pages/home.js"),
        "import {pad, add} from './../../imports.js';\nimport {html} from 'lit';\nconsole.log(html, add);\n"
    );
}

#[test]
fn test_repeated_watch_triggers_are_quiet() {
    let temp = project();
    let engine = load(&temp);

    let first = engine.sync();
    assert_eq!(first.changed.len(), 4);

    for _ in 0..3 {
        let again = engine.sync();
        assert!(again.is_clean(), "{:?}", again.changed);
        assert_eq!(again.unchanged, 4);
    }
}

#[test]
fn test_disabling_output_strips_generated_lines() {
    let temp = project();
    load(&temp).sync();

    let config = SyncConfig {
        import: vec!["src/lib".into()],
        modify: vec!["src/pages".into(), "src/lib".into()],
        output: None,
        previous_outputs: vec!["imports.js".into()],
        ..SyncConfig::default()
    };
    SyncEngine::new(NormalizedPath::new(temp.path()), config)
        .unwrap()
        .sync();

    assert_eq!(read(&temp, "src/pages/home.js"), "console.log(pad(add(1, 2)));\n");
    assert_eq!(
        read(&temp, "src/lib/format.js"),
        "export function pad(s) { return add(s, ' '); }\n"
    );
}
