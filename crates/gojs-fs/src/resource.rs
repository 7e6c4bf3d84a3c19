//! `/`-separated resource paths for generated TypoScript

/// A path inside an extension, as written after `EXT:`.
///
/// Segments are joined with `/` on every platform. The segments themselves
/// are kept byte for byte, so a `\` inside a file name stays a `\`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    inner: String,
}

impl ResourcePath {
    /// Start a path at `root` without touching its contents.
    pub fn new(root: impl Into<String>) -> Self {
        Self { inner: root.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    /// Append one segment, inserting a single `/`.
    pub fn join(&self, segment: &str) -> Self {
        let inner = if self.inner.is_empty() {
            segment.to_string()
        } else {
            format!("{}/{}", self.inner.trim_end_matches('/'), segment)
        };
        Self { inner }
    }

    /// The last `/`-separated segment.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// The extension of the last segment.
    ///
    /// A leading dot does not start an extension, so `.js` has none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        })
    }
}
