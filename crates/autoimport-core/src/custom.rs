//! Custom handlers for files that are neither scripts nor includes

use autoimport_fs::NormalizedPath;

use crate::config::CustomRule;

/// What a custom handler contributes to the generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomOutput {
    /// Code appended to the generated module, followed by a newline
    pub code: Option<String>,
    /// Identifiers added to the global export set
    pub exports: Vec<String>,
}

/// Handles files classified as [`FileKind::Custom`](crate::FileKind::Custom).
pub trait CustomHandler {
    /// Contribution for the root-relative `path`, or `None` to skip the file.
    fn handle(&self, path: &NormalizedPath) -> Option<CustomOutput>;
}

impl<F> CustomHandler for F
where
    F: Fn(&NormalizedPath) -> Option<CustomOutput>,
{
    fn handle(&self, path: &NormalizedPath) -> Option<CustomOutput> {
        self(path)
    }
}

/// Handler that contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCustomHandler;

impl CustomHandler for NoCustomHandler {
    fn handle(&self, _path: &NormalizedPath) -> Option<CustomOutput> {
        None
    }
}

/// Handler driven by the `[[custom]]` configuration rules.
///
/// The first rule whose suffix matches wins. `{path}` expands to the
/// specifier the generated module would use for the file and `{name}` to the
/// file stem.
#[derive(Debug, Clone, Default)]
pub struct TemplateHandler {
    rules: Vec<CustomRule>,
    specifier_prefix: String,
}

impl TemplateHandler {
    pub fn new(rules: Vec<CustomRule>, specifier_prefix: impl Into<String>) -> Self {
        Self {
            rules,
            specifier_prefix: specifier_prefix.into(),
        }
    }

    fn expand(template: &str, specifier: &str, name: &str) -> String {
        template.replace("{path}", specifier).replace("{name}", name)
    }
}

impl CustomHandler for TemplateHandler {
    fn handle(&self, path: &NormalizedPath) -> Option<CustomOutput> {
        let rule = self
            .rules
            .iter()
            .find(|rule| path.has_suffix_ignore_case(&rule.suffix))?;

        let specifier = format!("{}{}", self.specifier_prefix, path);
        let name = path.file_stem().unwrap_or_default();

        Some(CustomOutput {
            code: rule
                .code
                .as_deref()
                .map(|code| Self::expand(code, &specifier, name)),
            exports: rule
                .exports
                .iter()
                .map(|export| Self::expand(export, &specifier, name))
                .filter(|export| !export.is_empty())
                .collect(),
        })
    }
}
