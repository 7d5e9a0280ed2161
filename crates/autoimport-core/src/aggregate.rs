//! The generated module, built as a fold over the collected import files

use autoimport_blocks::{render_export_list, render_named_import, render_side_effect_import};
use indexmap::IndexSet;

use crate::custom::CustomOutput;

/// Statements of the generated module and the global export set.
///
/// The export set keeps first-seen order and collapses duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    statements: Vec<String>,
    exports: IndexSet<String>,
}

impl Aggregate {
    /// Add a script file: one named import, its names join the export set.
    pub fn push_script(mut self, specifier: &str, names: Vec<String>) -> Self {
        self.statements.push(render_named_import(&names, specifier));
        self.exports.extend(names);
        self
    }

    /// Add a side-effect import.
    pub fn push_include(mut self, specifier: &str) -> Self {
        self.statements.push(render_side_effect_import(specifier));
        self
    }

    /// Add whatever a custom handler produced.
    pub fn push_custom(mut self, output: CustomOutput) -> Self {
        if let Some(code) = output.code {
            self.statements.push(code);
        }
        self.exports.extend(output.exports);
        self
    }

    pub fn exports(&self) -> &IndexSet<String> {
        &self.exports
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Full text: every statement on its own line, a blank line, then the
    /// export list.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for statement in &self.statements {
            text.push_str(statement);
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&render_export_list(&self.exports));
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_names_keep_first_position() {
        let aggregate = Aggregate::default()
            .push_script("a.js", vec!["A".into(), "B".into()])
            .push_script("b.js", vec!["B".into(), "C".into()]);

        assert_eq!(
            aggregate.exports().iter().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_eq!(aggregate.statements()[1], "import {B, C} from 'b.js';");
    }

    #[test]
    fn test_empty_aggregate_renders_empty_export() {
        assert_eq!(Aggregate::default().render(), "\nexport {};\n");
    }

    #[test]
    fn test_custom_without_code_only_adds_exports() {
        let aggregate = Aggregate::default().push_custom(CustomOutput {
            code: None,
            exports: vec!["T".into()],
        });

        assert!(aggregate.statements().is_empty());
        assert_eq!(aggregate.render(), "\nexport {T};\n");
    }
}
