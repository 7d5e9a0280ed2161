//! Consumer file rewriting
//!
//! A consumer file starts with at most one engine-owned line: a named import
//! of every globally exported identifier the file does not export itself,
//! from the generated module, through a path relative to the file.

use autoimport_blocks::{
    OwnedNames, first_code_line, first_import_statement, purge, relative_specifier,
    render_named_import, rewrite_owned_statement,
};
use autoimport_fs::NormalizedPath;
use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::extract::{Extractor, ParseError, SourceState};

/// New text for one consumer file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerRewrite {
    pub text: String,
    /// The purged text did not parse, so the file was treated as exporting
    /// nothing
    pub parse_error: Option<ParseError>,
}

impl ConsumerRewrite {
    /// Whether writing `text` over `original` changes the effective first
    /// statement.
    pub fn differs_from(&self, original: &str) -> bool {
        first_code_line(&self.text) != first_code_line(original)
    }
}

/// Computes the rewritten text of consumer files.
pub struct Rewriter<'a> {
    owned: &'a OwnedNames,
    extractor: &'a Extractor<'a>,
    exports: &'a IndexSet<String>,
    output: Option<&'a str>,
}

impl<'a> Rewriter<'a> {
    /// `output` is the generated module name, `None` when generation is
    /// disabled.
    pub fn new(
        owned: &'a OwnedNames,
        extractor: &'a Extractor<'a>,
        exports: &'a IndexSet<String>,
        output: Option<&'a str>,
    ) -> Self {
        Self {
            owned,
            extractor,
            exports,
            output,
        }
    }

    /// Rewrite `original`, the content of the root-relative `path`.
    pub fn rewrite(&self, path: &NormalizedPath, original: &str) -> ConsumerRewrite {
        let purged = purge(original, self.owned);

        let Some(output) = self.output else {
            return ConsumerRewrite {
                text: purged.to_string(),
                parse_error: None,
            };
        };

        let (own, parse_error) = match self.extractor.try_exports(purged, SourceState::Purged) {
            Ok(names) => (names, None),
            Err(e) => {
                warn!(file = %path, error = %e, "Could not parse consumer, assuming it exports nothing");
                (Vec::new(), Some(e))
            }
        };

        let required: Vec<&String> = self
            .exports
            .iter()
            .filter(|name| !own.contains(*name))
            .collect();
        debug!(file = %path, own = own.len(), required = required.len(), "Computed consumer imports");

        let specifier = relative_specifier(path, output);
        let statement = first_import_statement(original)
            .filter(|statement| self.owned.is_ours(statement))
            .and_then(|_| rewrite_owned_statement(original, &required, &specifier))
            .unwrap_or_else(|| render_named_import(&required, &specifier));

        ConsumerRewrite {
            text: format!("{statement}\n{purged}"),
            parse_error,
        }
    }
}
