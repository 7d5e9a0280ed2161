//! Regex exclusion filter for collected paths

use autoimport_fs::{NormalizedPath, PathFilter};
use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};

/// Rejects every root-relative path matched by any of its patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Regex>,
}

impl ExcludeFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|e| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    fn matches(&self, path: &NormalizedPath) -> bool {
        match self.patterns.iter().find(|re| re.is_match(path.as_str())) {
            Some(re) => {
                trace!(path = %path, pattern = %re, "Excluded");
                true
            }
            None => false,
        }
    }
}

/// Excluded directories are pruned along with everything below them.
impl PathFilter for ExcludeFilter {
    fn accept(&self, path: &NormalizedPath) -> bool {
        !self.matches(path)
    }

    fn descend(&self, dir: &NormalizedPath) -> bool {
        !self.matches(dir)
    }
}
