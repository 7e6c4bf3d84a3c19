//! Fixed names inside a generated extension.

use std::path::Path;

/// Prefix prepended to the user-supplied short key to form the extension key.
pub const EXTENSION_PREFIX: &str = "gojs_";

/// Entries of the fixed extension layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtPath {
    /// The `assets` directory (everything that is not JavaScript)
    AssetsDir,
    /// The `src` directory (JavaScript sources)
    SrcDir,
    /// The TypoScript inclusion manifest
    TypoScriptSetup,
    /// The extension manager descriptor
    EmConf,
    /// The extension icon
    Icon,
}

impl ExtPath {
    /// Directories created below the extension root, in creation order.
    pub const SUBDIRECTORIES: [ExtPath; 2] = [ExtPath::AssetsDir, ExtPath::SrcDir];

    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssetsDir => "assets",
            Self::SrcDir => "src",
            Self::TypoScriptSetup => "ext_typoscript_setup.txt",
            Self::EmConf => "ext_emconf.php",
            Self::Icon => "ext_icon.gif",
        }
    }
}

impl AsRef<Path> for ExtPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}
