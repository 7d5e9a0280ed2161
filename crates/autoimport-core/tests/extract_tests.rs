//! Export extraction through the tree-sitter parser

use autoimport_blocks::OwnedNames;
use autoimport_core::{Dialect, Extractor, SourceState, TreeSitterParser};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn exports(dialect: Dialect, source: &str) -> Vec<String> {
    let parser = TreeSitterParser::new(dialect);
    let owned = OwnedNames::new(Some("imports.js"), ["auto.js"]);
    Extractor::new(&parser, &owned)
        .try_exports(source, SourceState::Raw)
        .unwrap()
}

#[rstest]
#[case::identifiers("export const A = 1, B = 2;", &["A", "B"])]
#[case::array_pattern("export const [A, B] = pair;", &["A", "B"])]
#[case::object_pattern("export const {a: A, B} = obj;", &["A", "B"])]
#[case::specifiers("const A = 1, b = 2;\nexport {A, b as B};", &["A", "B"])]
#[case::reexport_specifiers("export {A, B} from './ab.js';", &["A", "B"])]
#[case::function_and_class("export function A() {}\nexport class B {}", &["A", "B"])]
#[case::async_and_generator("export async function A() {}\nexport function* B() {}", &["A", "B"])]
#[case::var_and_let("export var A;\nexport let B = 2;", &["A", "B"])]
fn test_named_export_shapes(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(exports(Dialect::JavaScript, source), expected);
}

#[rstest]
#[case::default_expression("export default 42;")]
#[case::default_class("export default class A {}")]
#[case::star("export * from './all.js';")]
#[case::namespace("export * as all from './all.js';")]
#[case::plain_code("const A = 1;\nfunction B() {}")]
#[case::imports_only("import {A} from './a.js';\nimport B from 'b';")]
fn test_non_named_exports_contribute_nothing(#[case] source: &str) {
    assert!(exports(Dialect::JavaScript, source).is_empty());
}

#[test]
fn test_generated_imports_are_purged_first() {
    let source = "import {X, Y} from './../imports.js';\nimport {Z} from './auto.js';\nexport const A = X;\n";
    assert_eq!(exports(Dialect::JavaScript, source), vec!["A"]);
}

#[test]
fn test_jsx_is_javascript() {
    let source = "export const Card = () => <div className=\"card\">{title}</div>;";
    assert_eq!(exports(Dialect::JavaScript, source), vec!["Card"]);
}

#[test]
fn test_tsx_dialect() {
    let source = "export const Card = (p: {title: string}) => <h1>{p.title}</h1>;\nexport type Props = {};";
    assert_eq!(exports(Dialect::Tsx, source), vec!["Card"]);
}

#[test]
fn test_typescript_enum_and_declare_are_not_values() {
    let source = "export enum Color { Red }\nexport declare const env: string;\nexport const ok = 1;";
    let names = exports(Dialect::TypeScript, source);
    assert!(names.contains(&"ok".to_string()));
    assert!(!names.contains(&"Color".to_string()));
}
