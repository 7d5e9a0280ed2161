//! Recursive file collection under configured roots
//!
//! Roots are given relative to a base directory (the project root) and every
//! collected file is reported relative to that same base, sorted with the
//! segment-wise ordering of [`NormalizedPath`]. Missing roots and traversal
//! failures are logged and recorded but never abort collection.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{Error, NormalizedPath};

/// Predicate deciding whether a root-relative file takes part in a run.
pub trait PathFilter {
    fn accept(&self, path: &NormalizedPath) -> bool;

    /// Whether to walk into the root-relative directory `dir`. Configured
    /// roots are always walked.
    fn descend(&self, dir: &NormalizedPath) -> bool {
        let _ = dir;
        true
    }
}

impl<F> PathFilter for F
where
    F: Fn(&NormalizedPath) -> bool,
{
    fn accept(&self, path: &NormalizedPath) -> bool {
        self(path)
    }
}

/// Filter that accepts every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PathFilter for AcceptAll {
    fn accept(&self, _path: &NormalizedPath) -> bool {
        true
    }
}

/// Files found under one or more roots, plus the recoverable errors met on
/// the way.
#[derive(Debug, Default)]
pub struct Collection {
    /// Root-relative files, sorted and deduplicated.
    pub files: Vec<NormalizedPath>,
    /// Missing roots and traversal failures.
    pub errors: Vec<Error>,
}

impl Collection {
    fn merge(&mut self, other: Collection) {
        self.files.extend(other.files);
        self.errors.extend(other.errors);
    }

    fn finish(mut self) -> Self {
        self.files.sort();
        self.files.dedup();
        self
    }
}

/// Walks configured roots below a base directory.
pub struct Collector<'a> {
    base: NormalizedPath,
    filter: &'a dyn PathFilter,
    excluded: Vec<NormalizedPath>,
}

impl<'a> Collector<'a> {
    pub fn new(base: NormalizedPath, filter: &'a dyn PathFilter) -> Self {
        Self {
            base,
            filter,
            excluded: Vec::new(),
        }
    }

    /// Never collect the given root-relative path (e.g. the generated module).
    pub fn exclude(mut self, path: NormalizedPath) -> Self {
        self.excluded.push(path);
        self
    }

    /// Collect every file under a single root.
    pub fn collect(&self, root: &str) -> Collection {
        let mut collection = Collection::default();
        let absolute = self.base.join(root);

        if !absolute.exists() {
            warn!(root = %absolute, "Configured root does not exist, skipping");
            collection.errors.push(Error::NotFound {
                path: absolute.to_native(),
            });
            return collection;
        }

        let walker = WalkDir::new(absolute.to_native())
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| self.admits(entry));

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    collection.files.push(self.relative(entry.path()));
                }
                Ok(_) => {}
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| absolute.to_native());
                    warn!(path = %path.display(), error = %e, "Traversal failed, keeping partial results");
                    collection.errors.push(Error::Traversal {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        debug!(root = %absolute, files = collection.files.len(), "Collected root");
        collection.finish()
    }

    /// Collect every root, merging the results into one sorted list.
    pub fn collect_all<S: AsRef<str>>(&self, roots: &[S]) -> Collection {
        let mut collection = Collection::default();
        for root in roots {
            collection.merge(self.collect(root.as_ref()));
        }
        collection.finish()
    }

    fn relative(&self, native: &Path) -> NormalizedPath {
        let path = NormalizedPath::new(native);
        path.relative_to(&self.base).unwrap_or(path)
    }

    fn admits(&self, entry: &DirEntry) -> bool {
        let relative = self.relative(entry.path());
        if self.excluded.contains(&relative) {
            return false;
        }
        if entry.file_type().is_dir() {
            entry.depth() == 0 || self.filter.descend(&relative)
        } else {
            self.filter.accept(&relative)
        }
    }
}
