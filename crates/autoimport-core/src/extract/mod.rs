//! Declaration extraction
//!
//! Turns source text into the flat list of identifiers a file exports by
//! name. Parsing is delegated to a [`DeclarationParser`]; this module only
//! walks the declaration shapes the parser reports:
//!
//! - `export {a, b as c}` contributes `a` and `c`
//! - `export const a = 1, b = 2` contributes `a` and `b`
//! - `export const [a, , b] = list` contributes `a` and `b`
//! - `export const {x: a, b} = obj` contributes `a` and `b`
//! - `export function f() {}` and `export class C {}` contribute `f` and `C`
//!
//! Default exports and `export * from` are not named exports and contribute
//! nothing.

mod tree_sitter;

pub use self::tree_sitter::TreeSitterParser;

use autoimport_blocks::{OwnedNames, purge};
use autoimport_fs::NormalizedPath;
use tracing::{debug, warn};

/// Failure to turn source text into declarations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text is not valid for the configured dialect
    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    /// The parser could not run at all
    #[error("Parser unavailable: {0}")]
    Unavailable(String),
}

/// A binding introduced by an exported variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// `name`
    Identifier(String),
    /// `[a, , b]`; holes, rest elements, defaults and nested patterns are `None`
    Array(Vec<Option<String>>),
    /// `{key: a, b}`; entries whose value is not a plain identifier are `None`
    Object(Vec<Option<String>>),
}

impl Binding {
    fn names(&self) -> Vec<String> {
        match self {
            Binding::Identifier(name) => vec![name.clone()],
            Binding::Array(elements) | Binding::Object(elements) => {
                elements.iter().flatten().cloned().collect()
            }
        }
    }
}

/// The declaration attached to a named export, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedDeclaration {
    Variables(Vec<Binding>),
    Function(Option<String>),
    Class(Option<String>),
    /// Type aliases, interfaces, enums and anything else without a value name
    Other,
}

impl ExportedDeclaration {
    fn names(&self) -> Vec<String> {
        match self {
            ExportedDeclaration::Variables(bindings) => {
                bindings.iter().flat_map(Binding::names).collect()
            }
            ExportedDeclaration::Function(name) | ExportedDeclaration::Class(name) => {
                name.iter().cloned().collect()
            }
            ExportedDeclaration::Other => Vec::new(),
        }
    }
}

/// `export {..}` or `export <declaration>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedExport {
    /// Exported names of the specifiers (the alias when one is given)
    pub specifiers: Vec<String>,
    pub declaration: Option<ExportedDeclaration>,
}

impl NamedExport {
    pub fn names(&self) -> Vec<String> {
        self.specifiers
            .iter()
            .cloned()
            .chain(self.declaration.iter().flat_map(ExportedDeclaration::names))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// A top-level declaration as reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    NamedExport(NamedExport),
    Other,
}

/// Parses source text into top-level declarations.
pub trait DeclarationParser {
    fn parse(&self, source: &str) -> Result<Vec<Declaration>, ParseError>;
}

impl<F> DeclarationParser for F
where
    F: Fn(&str) -> Result<Vec<Declaration>, ParseError>,
{
    fn parse(&self, source: &str) -> Result<Vec<Declaration>, ParseError> {
        self(source)
    }
}

/// Whether the text handed to the extractor still carries generated imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Raw,
    Purged,
}

/// Extracts exported identifiers from file text.
pub struct Extractor<'a> {
    parser: &'a dyn DeclarationParser,
    owned: &'a OwnedNames,
}

impl<'a> Extractor<'a> {
    pub fn new(parser: &'a dyn DeclarationParser, owned: &'a OwnedNames) -> Self {
        Self { parser, owned }
    }

    /// Exported identifiers of `text`, in declaration order.
    pub fn try_exports(&self, text: &str, state: SourceState) -> Result<Vec<String>, ParseError> {
        let source = match state {
            SourceState::Raw => purge(text, self.owned),
            SourceState::Purged => text,
        };

        let names = self
            .parser
            .parse(source)?
            .iter()
            .filter_map(|declaration| match declaration {
                Declaration::NamedExport(export) => Some(export.names()),
                Declaration::Other => None,
            })
            .flatten()
            .collect();
        Ok(names)
    }

    /// Like [`Extractor::try_exports`], but a parse failure is logged and
    /// yields no identifiers.
    pub fn exports(&self, path: &NormalizedPath, text: &str, state: SourceState) -> Vec<String> {
        match self.try_exports(text, state) {
            Ok(names) => {
                debug!(file = %path, count = names.len(), "Extracted exports");
                names
            }
            Err(e) => {
                warn!(file = %path, error = %e, "Could not parse file, it exports nothing");
                Vec::new()
            }
        }
    }
}
