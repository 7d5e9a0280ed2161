//! Leading statement detection and ownership recognition.

use regex::Regex;
use std::sync::LazyLock;

/// An import statement that opens a named-identifier list: `import {`.
static NAMED_IMPORT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\Aimport\s*\{").expect("Invalid named import regex"));

/// `text` without leading whitespace or byte order mark.
pub fn trim_leading(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Text up to (excluding) the first `;`, trimmed.
///
/// This is a cheap "did the effective first statement change" key, not a
/// parse: a `;` inside a string or comment ends it early.
///
/// # Example
/// ```
/// use autoimport_blocks::first_code_line;
///
/// assert_eq!(first_code_line("\n import {A} from './x.js'; const b = 1;"), "import {A} from './x.js'");
/// ```
pub fn first_code_line(text: &str) -> &str {
    let end = text.find(';').unwrap_or(text.len());
    trim_leading(&text[..end]).trim_end()
}

/// The leading named import statement, up to and including its `;`.
///
/// Leading whitespace and a byte order mark are skipped. Returns `None` when the text does not start
/// with `import {` or the statement is never terminated.
///
/// # Example
/// ```
/// use autoimport_blocks::first_import_statement;
///
/// let text = "import {A} from './imports.js'; // generated\nconst x = A;";
/// assert_eq!(first_import_statement(text), Some("import {A} from './imports.js';"));
/// assert_eq!(first_import_statement("import A from 'a';"), None);
/// ```
pub fn first_import_statement(text: &str) -> Option<&str> {
    let trimmed = trim_leading(text);
    if !NAMED_IMPORT_OPEN.is_match(trimmed) {
        return None;
    }
    trimmed.find(';').map(|end| &trimmed[..=end])
}

/// Output module names whose import statements belong to the engine.
///
/// A statement is owned when it contains `./<name>';` for the current output
/// name or any previously used one, which also matches `./../<name>';`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedNames {
    markers: Vec<String>,
}

impl OwnedNames {
    /// Build from the current output name (if output is enabled) and the
    /// historically used names.
    pub fn new<I, S>(current: Option<&str>, previous: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = current
            .into_iter()
            .map(str::to_string)
            .chain(previous.into_iter().map(|name| name.as_ref().to_string()))
            .filter(|name| !name.is_empty())
            .map(|name| format!("./{}';", name))
            .collect();
        Self { markers }
    }

    /// Whether `statement` references any owned module name.
    pub fn is_ours(&self, statement: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| statement.contains(marker.as_str()))
    }

    /// Whether `text` leads with an owned named import.
    pub fn leads_with_ours(&self, text: &str) -> bool {
        first_import_statement(text).is_some_and(|statement| self.is_ours(statement))
    }
}
