//! Error types for gojs-core

use std::path::PathBuf;

/// Result type for gojs-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating an extension
///
/// Everything except [`Error::Fs`] and [`Error::Incomplete`] is detected before
/// the filesystem is touched. Only [`Error::Incomplete`] means a directory was
/// created by this run and left behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A metadata value failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// No files were given to include
    #[error("You must specify at least one file to be included.")]
    NoInputFiles,

    /// An input path does not exist
    #[error("Given file '{}' does not exist.", path.display())]
    MissingInput { path: PathBuf },

    /// An input path is a directory
    #[error("'{}' is a directory, not a file.", path.display())]
    NotAFile { path: PathBuf },

    /// The extension root is already taken
    #[error("Directory '{}' already exists.", path.display())]
    AlreadyExists { path: PathBuf },

    /// Generation failed after `root` was created; the tree is left as is
    #[error("{source}\n  '{}' may be incomplete; remove it before retrying.", root.display())]
    Incomplete {
        root: PathBuf,
        #[source]
        source: gojs_fs::Error,
    },

    /// The embedded icon could not be decoded
    #[error("Failed to decode embedded icon: {0}")]
    IconDecode(#[from] base64::DecodeError),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from gojs-fs
    #[error(transparent)]
    Fs(#[from] gojs_fs::Error),
}

/// Alias matching the name used in the generator documentation.
pub type GenerationError = Error;

impl Error {
    /// Whether a partially written directory was left behind.
    pub fn may_leave_partial_output(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
