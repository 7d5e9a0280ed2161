//! Normalized path handling for cross-platform compatibility

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Normalize a raw path string.
///
/// Backslashes become forward slashes and trailing slashes are stripped.
/// A path made only of slashes collapses to `/`.
pub fn normalize(path: &str) -> String {
    let replaced = path.replace('\\', "/");
    let trimmed = replaced.trim_end_matches('/');
    if trimmed.is_empty() && !replaced.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Segment-wise, case-insensitive ordering of two normalized paths.
///
/// Paths are split on `/` and compared pair by pair with case folding; the
/// first differing segment decides and a strict prefix sorts first. Paths that
/// only differ in case fall back to a byte comparison so the order is total.
pub fn compare_segments(a: &str, b: &str) -> Ordering {
    let mut left = a.split('/');
    let mut right = b.split('/');

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(&r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return a.cmp(b),
        }
    }
}

/// A path normalized to use forward slashes internally.
///
/// Provides consistent path handling across platforms by normalizing
/// all paths to forward slashes internally and converting to
/// platform-native format only at I/O boundaries. Ordering follows
/// [`compare_segments`], so sorting a list of paths groups them by directory
/// independently of filesystem enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: normalize(&path_str),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Resolve symlinks and relative components, keeping the path as-is when
    /// it cannot be resolved (for example because it does not exist yet).
    pub fn canonicalize(&self) -> Self {
        dunce::canonicalize(self.to_native())
            .map(Self::new)
            .unwrap_or_else(|_| self.clone())
    }

    /// Join this path with a relative segment.
    ///
    /// Leading `./` components of the segment are dropped; joining `.` or an
    /// empty segment returns the path unchanged.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = normalize(segment);
        let segment_normalized = segment_normalized.trim_start_matches("./");
        if segment_normalized.is_empty() || segment_normalized == "." {
            return self.clone();
        }
        if self.inner.is_empty() {
            return Self::new(segment_normalized);
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Express this path relative to `base`.
    ///
    /// Returns `None` when `base` is not an ancestor of (or equal to) this path.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<Self> {
        if base.inner.is_empty() {
            return Some(self.clone());
        }
        if self.inner == base.inner {
            return Some(Self {
                inner: String::new(),
            });
        }
        let prefix = if base.inner.ends_with('/') {
            base.inner.clone()
        } else {
            format!("{}/", base.inner)
        };
        self.inner.strip_prefix(prefix.as_str()).map(Self::new)
    }

    /// Number of directory levels above the file: path segments minus one.
    ///
    /// A file directly under the project root has depth 0. Empty and `.`
    /// segments do not count.
    pub fn depth(&self) -> usize {
        self.inner
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .count()
            .saturating_sub(1)
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the file name without its final extension.
    pub fn file_stem(&self) -> Option<&str> {
        self.file_name().map(|name| match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        })
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Case-insensitive suffix test, used to classify files by extension.
    pub fn has_suffix_ignore_case(&self, suffix: &str) -> bool {
        self.inner
            .to_lowercase()
            .ends_with(&suffix.to_lowercase())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl Ord for NormalizedPath {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_segments(&self.inner, &other.inner)
    }
}

impl PartialOrd for NormalizedPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
