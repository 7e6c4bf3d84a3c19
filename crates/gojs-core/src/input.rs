//! Input files and their placement inside the extension.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;

use gojs_fs::{ExtPath, ResourcePath};

use crate::{Error, Result};

/// How an input file is used by the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// JavaScript, placed under `src/`
    Script,
    /// Anything else, placed under `assets/`
    Asset,
}

impl Role {
    /// Classify a path by its extension. Only an exact `.js` is a script.
    pub fn of(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "js" => Self::Script,
            _ => Self::Asset,
        }
    }

    /// The subdirectory files of this role are copied into.
    pub fn directory(self) -> ExtPath {
        match self {
            Self::Script => ExtPath::SrcDir,
            Self::Asset => ExtPath::AssetsDir,
        }
    }
}

/// A validated file supplied for inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    source_path: PathBuf,
    role: Role,
}

impl InputFile {
    /// Validate that `path` exists and is not a directory, then classify it.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let source_path = path.into();
        let metadata = std::fs::metadata(&source_path).map_err(|_| Error::MissingInput {
            path: source_path.clone(),
        })?;
        if metadata.is_dir() {
            return Err(Error::NotAFile { path: source_path });
        }
        if source_path.file_name().is_none() {
            return Err(Error::MissingInput { path: source_path });
        }

        let role = Role::of(&source_path);
        Ok(Self { source_path, role })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The original file name, which is kept byte for byte when the file is copied.
    pub fn file_name(&self) -> &OsStr {
        // `new` rejects paths without a final component
        self.source_path.file_name().unwrap_or_default()
    }
}

/// Validate every path, in order, before anything is generated.
///
/// Fails on the first path that is missing or a directory.
pub fn validate_inputs<I, P>(paths: I) -> Result<Vec<InputFile>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let inputs = paths
        .into_iter()
        .map(InputFile::new)
        .collect::<Result<Vec<_>>>()?;

    if inputs.is_empty() {
        return Err(Error::NoInputFiles);
    }
    Ok(inputs)
}

/// An input file after it has been copied into the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedFile {
    pub role: Role,
    pub source_path: PathBuf,
    /// Path below the extension root, e.g. `src/app.js`
    pub relative_path: String,
    /// `EXT:` reference path, e.g. `gojs_foo/src/app.js`
    pub ext_path: String,
}

impl PlacedFile {
    /// Describe where `input` lands inside the extension called `extension_name`.
    ///
    /// A file name that is not valid UTF-8 is shown lossily in these strings;
    /// the copy on disk keeps the original name.
    pub fn for_input(extension_name: &str, input: &InputFile) -> Self {
        let name = input.file_name().to_string_lossy();
        let relative = ResourcePath::new(input.role().directory().as_str()).join(&name);
        let ext_path = ResourcePath::new(extension_name).join(relative.as_str());

        Self {
            role: input.role(),
            source_path: input.source_path().to_path_buf(),
            relative_path: relative.into_string(),
            ext_path: ext_path.into_string(),
        }
    }
}
