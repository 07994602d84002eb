//! Path Component
//!
//! See [[RFC3986, Section 3.3](https://tools.ietf.org/html/rfc3986#section-3.3)].

use std::fmt::{self, Display, Formatter, Write};

use crate::utility::{percent_encode, trim, trim_end};

/// The path component of a [`Uri`](crate::Uri).
///
/// The path is always held percent-decoded with its dot-segments removed. The segments are
/// derived from the path when it is constructed and are never set on their own.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Path {
    /// The normalized, decoded path.
    path: String,

    /// The non-empty pieces of the path between slashes.
    segments: Vec<String>,
}

impl Path {
    /// Constructs a normalized path from a percent-decoded string.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricow::Path;
    ///
    /// let path = Path::new("/my/./old/../path/");
    /// assert_eq!(path.as_str(), "/my/path/");
    /// assert_eq!(path.segments(), ["my", "path"]);
    /// ```
    pub fn new(path: &str) -> Path {
        let path = normalize_path(path);
        let segments = split_segments(&path);

        Path { path, segments }
    }

    /// Returns the decoded path.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_absolute(&self) -> bool {
        self.path.starts_with('/')
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Resolves `relative` against this path as if this path were a directory.
    ///
    /// A `relative` that starts with a `'/'` replaces the path entirely.
    pub(crate) fn join(&self, relative: &str) -> Path {
        if relative.starts_with('/') {
            Path::new(relative)
        } else {
            let mut joined = trim_end(&self.path, "/").to_owned();
            joined.push('/');
            joined.push_str(relative);
            Path::new(&joined)
        }
    }

    /// Returns the segment at the 1-based `index`, or an empty string if there is none.
    pub fn segment(&self, index: usize) -> &str {
        index
            .checked_sub(1)
            .and_then(|index| self.segments.get(index))
            .map_or("", String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Writes the path with each segment percent-encoded; the slashes between them are kept.
impl Display for Path {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (index, segment) in self.path.split('/').enumerate() {
            if index > 0 {
                formatter.write_char('/')?;
            }

            formatter.write_str(&percent_encode(segment))?;
        }

        Ok(())
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.path == other
    }
}

impl<'a> PartialEq<&'a str> for Path {
    fn eq(&self, other: &&'a str) -> bool {
        self.path == *other
    }
}

/// Removes dot-segments and empty segments from a path.
///
/// Surrounding whitespace is trimmed first. A leading and a trailing slash are kept if the
/// input had them. The empty path and `"/"` are returned as they are. A `".."` with nothing left
/// to remove is dropped.
///
/// # Examples
///
/// ```
/// use uricow::normalize_path;
///
/// assert_eq!(normalize_path("test/../deep"), "deep");
/// assert_eq!(normalize_path("/a/./b/../c/"), "/a/c/");
/// assert_eq!(normalize_path("/../a//b"), "/a/b");
/// assert_eq!(normalize_path(" /a/b "), "/a/b");
/// ```
pub fn normalize_path(path: &str) -> String {
    let path = trim(path, "");

    if path.is_empty() || path == "/" {
        return path.to_owned();
    }

    let mut segments = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => (),
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let mut normalized = String::with_capacity(path.len());

    if path.starts_with('/') {
        normalized.push('/');
    }

    normalized.push_str(&segments.join("/"));

    if path.ends_with('/') && !normalized.ends_with('/') {
        normalized.push('/');
    }

    normalized
}

fn split_segments(path: &str) -> Vec<String> {
    let path = trim(path, "/");

    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').map(str::to_owned).collect()
    }
}
