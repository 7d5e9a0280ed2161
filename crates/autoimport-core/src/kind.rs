//! File kind classification

use autoimport_fs::NormalizedPath;
use serde::Serialize;

use crate::config::ExtensionConfig;

/// How a collected file takes part in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Parsed for named exports
    Script,
    /// Imported for its side effects
    Include,
    /// Handed to the custom handler
    Custom,
}

impl FileKind {
    /// Classify `path` by case-insensitive suffix.
    ///
    /// Script extensions are checked before include extensions; anything
    /// matching neither is custom.
    pub fn classify(path: &NormalizedPath, extensions: &ExtensionConfig) -> Self {
        let matches_any =
            |list: &[String]| list.iter().any(|suffix| path.has_suffix_ignore_case(suffix));

        if matches_any(&extensions.script) {
            FileKind::Script
        } else if matches_any(&extensions.include) {
            FileKind::Include
        } else {
            FileKind::Custom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lib/a.js", FileKind::Script)]
    #[case("lib/A.JSX", FileKind::Script)]
    #[case("lib/style.css", FileKind::Include)]
    #[case("lib/page.html", FileKind::Custom)]
    #[case("lib/README", FileKind::Custom)]
    fn test_classify_defaults(#[case] path: &str, #[case] expected: FileKind) {
        let kind = FileKind::classify(&NormalizedPath::new(path), &ExtensionConfig::default());
        assert_eq!(kind, expected);
    }

    #[test]
    fn test_script_wins_over_include() {
        let extensions = ExtensionConfig {
            script: vec![".js".into()],
            include: vec![".js".into()],
        };
        assert_eq!(
            FileKind::classify(&NormalizedPath::new("x.js"), &extensions),
            FileKind::Script
        );
    }
}
