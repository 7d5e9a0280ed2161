//! Fixed-point removal of engine-owned import statements.

use tracing::trace;

use crate::conflict::ConflictBlock;
use crate::statement::{OwnedNames, first_import_statement, trim_leading};

/// Strip every engine-owned statement from the start of `text`.
///
/// Repeats until neither rule applies:
/// 1. the first statement is an owned named import: drop it together with the
///    rest of its physical line;
/// 2. the text starts with a conflict block whose both sides lead with an
///    owned import: drop the whole block.
///
/// Only a prefix is ever removed, so the result is a suffix of `text`, and
/// purging an already purged text returns it unchanged.
///
/// # Example
/// ```
/// use autoimport_blocks::{OwnedNames, purge};
///
/// let owned = OwnedNames::new(Some("imports.js"), ["auto.js"]);
/// let text = "import {A} from './imports.js';\nimport {B} from './auto.js'; // old\nconst x = A;\n";
/// assert_eq!(purge(text, &owned), "const x = A;\n");
/// ```
pub fn purge<'a>(text: &'a str, owned: &OwnedNames) -> &'a str {
    let mut current = text;

    loop {
        if let Some(rest) = strip_owned_statement(current, owned) {
            trace!("Purged owned import statement");
            current = rest;
            continue;
        }
        if let Some(rest) = strip_owned_conflict(current, owned) {
            trace!("Collapsed conflict block between generated imports");
            current = rest;
            continue;
        }
        return current;
    }
}

fn strip_owned_statement<'a>(text: &'a str, owned: &OwnedNames) -> Option<&'a str> {
    let statement = first_import_statement(text)?;
    if !owned.is_ours(statement) {
        return None;
    }

    let after = &trim_leading(text)[statement.len()..];
    Some(match after.find('\n') {
        Some(newline) => &after[newline + 1..],
        None => "",
    })
}

fn strip_owned_conflict<'a>(text: &'a str, owned: &OwnedNames) -> Option<&'a str> {
    let block = ConflictBlock::parse(text)?;
    (owned.leads_with_ours(block.ours) && owned.leads_with_ours(block.theirs)).then_some(block.rest)
}
