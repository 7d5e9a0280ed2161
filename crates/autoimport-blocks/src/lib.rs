//! Statement-level text surgery for autoimport.
//!
//! The engine owns exactly one line in every consumer file: a leading named
//! import from the generated module.
//!
//! ```text
//! import {A, B, C} from './../imports.js';
//! ```
//!
//! This crate recognizes that line (including lines written under a
//! previously configured module name), strips it together with any stale
//! copies stacked by earlier runs or duplicated by a merge conflict, and
//! renders the replacement. None of it parses JavaScript: every check is a
//! textual test on the leading statement of the file.
//!
//! - [`statement`]: first statement detection and ownership recognition
//! - [`conflict`]: leading version-control conflict blocks
//! - [`purge`]: fixed-point removal of owned statements
//! - [`writer`]: rendering of import/export statements and the in-place
//!   rewrite that keeps trailing same-line content

pub mod conflict;
pub mod purge;
pub mod statement;
pub mod writer;

pub use conflict::ConflictBlock;
pub use purge::purge;
pub use statement::{OwnedNames, first_code_line, first_import_statement, trim_leading};
pub use writer::{
    relative_specifier, render_export_list, render_named_import, render_side_effect_import,
    rewrite_owned_statement,
};
