//! The extension being generated.

use serde::Serialize;

use gojs_fs::EXTENSION_PREFIX;

use crate::{Error, Result};

/// Metadata identifying one generated extension.
///
/// Immutable once built. `name` is always [`EXTENSION_PREFIX`] followed by
/// `short_key` and doubles as the extension root directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionSpec {
    short_key: String,
    name: String,
    version: String,
    author: String,
    title: String,
}

impl ExtensionSpec {
    /// Build a spec from user-supplied values.
    ///
    /// The short key becomes part of a directory name, so it must be
    /// non-empty and must not contain path separators or be `.`/`..`.
    pub fn new(
        short_key: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self> {
        let short_key = short_key.into();
        validate_short_key(&short_key)?;

        Ok(Self {
            name: format!("{EXTENSION_PREFIX}{short_key}"),
            short_key,
            version: version.into(),
            author: author.into(),
            title: title.into(),
        })
    }

    /// The key supplied by the user, before prefixing.
    pub fn short_key(&self) -> &str {
        &self.short_key
    }

    /// The full extension key, e.g. `gojs_widgets`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

fn validate_short_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("must not be empty")
    } else if key.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if key == "." || key == ".." {
        Some("must not be a relative directory reference")
    } else if key.contains('\0') {
        Some("must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidInput {
            field: "extension name",
            reason: format!("'{key}' {reason}"),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn name_is_prefixed_short_key() {
        let spec = ExtensionSpec::new("widgets", "1.0.0", "Jane", "Widgets").unwrap();
        assert_eq!(spec.name(), "gojs_widgets");
        assert_eq!(spec.short_key(), "widgets");
        assert_eq!(spec.version(), "1.0.0");
        assert_eq!(spec.author(), "Jane");
        assert_eq!(spec.title(), "Widgets");
    }

    #[rstest]
    #[case("")]
    #[case("a/b")]
    #[case("a\\b")]
    #[case(".")]
    #[case("..")]
    fn rejects_unusable_short_keys(#[case] key: &str) {
        let result = ExtensionSpec::new(key, "1", "a", "t");
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn free_form_fields_are_kept_verbatim() {
        let spec = ExtensionSpec::new("x", " 2.0-beta ", "Jöhn O'Neil", "").unwrap();
        assert_eq!(spec.version(), " 2.0-beta ");
        assert_eq!(spec.author(), "Jöhn O'Neil");
        assert_eq!(spec.title(), "");
    }
}
