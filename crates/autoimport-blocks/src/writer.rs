//! Rendering of the statements the engine emits.

use autoimport_fs::NormalizedPath;
use regex::Regex;
use std::sync::LazyLock;

use crate::statement::trim_leading;

/// Three-part shape of an owned import: `import {` .. `} from '` .. `';<rest>`.
///
/// The identifier list and the module path between the parts are replaced;
/// the parts themselves, including whatever follows `;` on the same line, are
/// kept verbatim.
static OWNED_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(import\s*\{)[^}]*(\}\s*from\s*')[^']*('\s*;[^\n]*)")
        .expect("Invalid owned import shape regex")
});

fn join_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `import {A, B} from '<specifier>';`
pub fn render_named_import<I, S>(names: I, specifier: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("import {{{}}} from '{}';", join_names(names), specifier)
}

/// `import '<specifier>';`
pub fn render_side_effect_import(specifier: &str) -> String {
    format!("import '{}';", specifier)
}

/// `export {A, B};`
pub fn render_export_list<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("export {{{}}};", join_names(names))
}

/// Specifier leading from a root-relative file back to a root-level module:
/// `./` followed by one `../` per directory level.
///
/// # Example
/// ```
/// use autoimport_blocks::relative_specifier;
/// use autoimport_fs::NormalizedPath;
///
/// assert_eq!(relative_specifier(&NormalizedPath::new("p.js"), "imports.js"), "./imports.js");
/// assert_eq!(relative_specifier(&NormalizedPath::new("a/b/p.js"), "imports.js"), "./../../imports.js");
/// ```
pub fn relative_specifier(file: &NormalizedPath, output: &str) -> String {
    format!("./{}{}", "../".repeat(file.depth()), output)
}

/// Rewrite the leading owned import of `original` in place.
///
/// Returns `None` when the leading statement does not have the three-part
/// shape; the caller then renders a fresh statement instead.
///
/// # Example
/// ```
/// use autoimport_blocks::rewrite_owned_statement;
///
/// let original = "import { A } from './auto.js'; // keep me\nconst b = A;";
/// assert_eq!(
///     rewrite_owned_statement(original, ["A", "C"], "./imports.js").as_deref(),
///     Some("import {A, C} from './imports.js'; // keep me")
/// );
/// ```
pub fn rewrite_owned_statement<I, S>(original: &str, names: I, specifier: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let caps = OWNED_SHAPE_REGEX.captures(trim_leading(original))?;

    Some(format!(
        "{}{}{}{}{}",
        &caps[1],
        join_names(names),
        &caps[2],
        specifier,
        &caps[3]
    ))
}
