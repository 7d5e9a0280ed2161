//! tree-sitter backed [`DeclarationParser`]

use ::tree_sitter::{Language, Node, Parser};

use super::{Binding, Declaration, DeclarationParser, ExportedDeclaration, NamedExport, ParseError};
use crate::config::Dialect;

impl Dialect {
    fn language(self) -> Language {
        match self {
            Dialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Parses JavaScript or TypeScript with the tree-sitter grammars.
///
/// A tree containing error or missing nodes is rejected as a whole; a file
/// that does not parse cleanly exports nothing.
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterParser {
    dialect: Dialect,
    declaration_names: bool,
}

impl TreeSitterParser {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            declaration_names: true,
        }
    }

    /// When disabled, exported function and class declarations are reported
    /// as [`ExportedDeclaration::Other`] and contribute no name.
    pub fn with_declaration_names(mut self, enabled: bool) -> Self {
        self.declaration_names = enabled;
        self
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl DeclarationParser for TreeSitterParser {
    fn parse(&self, source: &str) -> Result<Vec<Declaration>, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.dialect.language())
            .map_err(|e| ParseError::Unavailable(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Unavailable(format!("{} parser returned no tree", self.dialect)))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(first_error(root));
        }

        let bytes = source.as_bytes();
        let mut cursor = root.walk();
        let declarations = root
            .named_children(&mut cursor)
            .map(|child| match child.kind() {
                "export_statement" => self.export_statement(&child, bytes),
                _ => Declaration::Other,
            })
            .collect();

        Ok(declarations)
    }
}

fn first_error(node: Node<'_>) -> ParseError {
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        if node.is_error() || node.is_missing() {
            let position = node.start_position();
            return ParseError::Syntax {
                line: position.row + 1,
                column: position.column + 1,
            };
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).filter(Node::has_error).collect();
        pending.extend(children.into_iter().rev());
    }

    let position = node.start_position();
    ParseError::Syntax {
        line: position.row + 1,
        column: position.column + 1,
    }
}

fn node_text(node: &Node<'_>, bytes: &[u8]) -> String {
    node.utf8_text(bytes).unwrap_or("").to_string()
}

fn identifier(node: Option<Node<'_>>, bytes: &[u8]) -> Option<String> {
    node.filter(|node| matches!(node.kind(), "identifier" | "type_identifier"))
        .map(|node| node_text(&node, bytes))
}

impl TreeSitterParser {
    fn export_statement(&self, node: &Node<'_>, bytes: &[u8]) -> Declaration {
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();

        if children.iter().any(|child| matches!(child.kind(), "default" | "*" | "namespace_export")) {
            return Declaration::Other;
        }

        let specifiers: Vec<String> = children
            .iter()
            .filter(|child| child.kind() == "export_clause")
            .flat_map(|clause| export_clause(clause, bytes))
            .collect();

        let declaration = node
            .child_by_field_name("declaration")
            .map(|declaration| match exported_declaration(&declaration, bytes) {
                ExportedDeclaration::Function(_) | ExportedDeclaration::Class(_) if !self.declaration_names => {
                    ExportedDeclaration::Other
                }
                exported => exported,
            });

        if declaration.is_none() && !children.iter().any(|child| child.kind() == "export_clause") {
            return Declaration::Other;
        }

        Declaration::NamedExport(NamedExport {
            specifiers,
            declaration,
        })
    }
}

fn export_clause(clause: &Node<'_>, bytes: &[u8]) -> Vec<String> {
    let mut cursor = clause.walk();
    clause
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "export_specifier")
        .filter_map(|specifier| {
            let exported = specifier
                .child_by_field_name("alias")
                .or_else(|| specifier.child_by_field_name("name"));
            identifier(exported, bytes)
        })
        .collect()
}

fn exported_declaration(node: &Node<'_>, bytes: &[u8]) -> ExportedDeclaration {
    match node.kind() {
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = node.walk();
            let bindings = node
                .named_children(&mut cursor)
                .filter(|child| child.kind() == "variable_declarator")
                .filter_map(|declarator| declarator.child_by_field_name("name"))
                .filter_map(|pattern| binding(&pattern, bytes))
                .collect();
            ExportedDeclaration::Variables(bindings)
        }
        "function_declaration" | "generator_function_declaration" | "function_signature" => {
            ExportedDeclaration::Function(identifier(node.child_by_field_name("name"), bytes))
        }
        "class_declaration" | "abstract_class_declaration" => {
            ExportedDeclaration::Class(identifier(node.child_by_field_name("name"), bytes))
        }
        _ => ExportedDeclaration::Other,
    }
}

fn binding(pattern: &Node<'_>, bytes: &[u8]) -> Option<Binding> {
    let mut cursor = pattern.walk();
    match pattern.kind() {
        "identifier" => Some(Binding::Identifier(node_text(pattern, bytes))),
        "array_pattern" => {
            let elements = pattern
                .named_children(&mut cursor)
                .filter(|child| !child.is_extra())
                .map(|element| identifier(Some(element), bytes))
                .collect();
            Some(Binding::Array(elements))
        }
        "object_pattern" => {
            let properties = pattern
                .named_children(&mut cursor)
                .filter(|child| !child.is_extra())
                .map(|property| match property.kind() {
                    "shorthand_property_identifier_pattern" => Some(node_text(&property, bytes)),
                    "pair_pattern" => identifier(property.child_by_field_name("value"), bytes),
                    _ => None,
                })
                .collect();
            Some(Binding::Object(properties))
        }
        _ => None,
    }
}
