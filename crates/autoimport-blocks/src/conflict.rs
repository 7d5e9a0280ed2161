//! Leading version-control conflict blocks.
//!
//! Two branches that both regenerated a consumer's import line merge into:
//! ```text
//! <<<<<<< HEAD
//! import {A, B} from './imports.js';
//! =======
//! import {A, C} from './imports.js';
//! >>>>>>> feature
//! rest of the file
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::statement::trim_leading;

/// A conflict block at the very start of a text.
static CONFLICT_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?sm)\A<<<<<<< HEAD[^\n]*\n(.*?)^=======[ \t]*\r?\n(.*?)^>>>>>>>[^\n]*(?:\n|\z)")
        .expect("Invalid conflict block regex")
});

/// A conflict block borrowed from the text it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictBlock<'a> {
    /// Lines between `<<<<<<< HEAD` and `=======`.
    pub ours: &'a str,
    /// Lines between `=======` and `>>>>>>>`.
    pub theirs: &'a str,
    /// Everything after the closing marker line.
    pub rest: &'a str,
}

impl<'a> ConflictBlock<'a> {
    /// Parse a conflict block at the start of `text` (after leading whitespace).
    ///
    /// # Example
    /// ```
    /// use autoimport_blocks::ConflictBlock;
    ///
    /// let text = "<<<<<<< HEAD\na\n=======\nb\n>>>>>>> topic\nrest";
    /// let block = ConflictBlock::parse(text).unwrap();
    /// assert_eq!(block.ours, "a\n");
    /// assert_eq!(block.theirs, "b\n");
    /// assert_eq!(block.rest, "rest");
    /// ```
    pub fn parse(text: &'a str) -> Option<Self> {
        let trimmed = trim_leading(text);
        let caps = CONFLICT_BLOCK_REGEX.captures(trimmed)?;
        let whole = caps.get(0)?;

        Some(Self {
            ours: caps.get(1)?.as_str(),
            theirs: caps.get(2)?.as_str(),
            rest: &trimmed[whole.end()..],
        })
    }
}
