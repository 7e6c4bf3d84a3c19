//! Layout materialization
//!
//! Turns a validated [`ExtensionSpec`] and its [`InputFile`]s into an
//! extension directory on disk. This is the only module that writes to the
//! filesystem.
//!
//! The existence check and the creation of the root are two separate steps.
//! Two runs targeting the same name at the same time race between them; the
//! root is created with a non-recursive `create_dir`, so the loser fails with
//! an I/O error instead of writing into the winner's tree.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;

use gojs_fs::{ExtPath, io};

use crate::descriptor::Descriptor;
use crate::extension::ExtensionSpec;
use crate::icon::icon_bytes;
use crate::input::{InputFile, PlacedFile, Role};
use crate::manifest::synthesize_manifest;
use crate::{Error, Result};

/// Switches controlling how the extension is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Build the tree in a hidden staging directory and rename it into place
    /// at the end. A failed run then leaves nothing behind.
    pub staged: bool,
    /// Escape `\` and `'` in the descriptor's string values
    pub escape_php: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub extension: ExtensionSpec,
    pub root: PathBuf,
    /// Placed files, scripts first, each group in input order
    pub files: Vec<PlacedFile>,
    pub artifacts: Vec<PathBuf>,
}

/// Generated artifacts, in the order they are written.
const ARTIFACTS: [ExtPath; 3] = [ExtPath::TypoScriptSetup, ExtPath::EmConf, ExtPath::Icon];

/// Generate the extension for `spec` below `output_dir`.
///
/// Fails with [`Error::AlreadyExists`] before touching anything if the root
/// is taken. Without staging, an I/O failure after the root was created
/// leaves whatever was written so far in place and is reported as
/// [`Error::Incomplete`].
pub fn materialize(
    output_dir: &Path,
    spec: &ExtensionSpec,
    inputs: &[InputFile],
    options: &MaterializeOptions,
) -> Result<GenerationReport> {
    let root = output_dir.join(spec.name());
    if io::entry_exists(&root) {
        return Err(Error::AlreadyExists { path: root });
    }

    let icon = icon_bytes()?;
    let generated_at: DateTime<FixedOffset> = Local::now().into();

    tracing::info!(root = %root.display(), files = inputs.len(), staged = options.staged, "generating extension");

    let files = if options.staged {
        materialize_staged(output_dir, &root, spec, inputs, &icon, &generated_at, options)?
    } else {
        build_tree(&root, spec, inputs, &icon, &generated_at, options)?
    };

    Ok(GenerationReport {
        extension: spec.clone(),
        artifacts: ARTIFACTS.iter().map(|a| root.join(a)).collect(),
        root,
        files,
    })
}

fn materialize_staged(
    output_dir: &Path,
    root: &Path,
    spec: &ExtensionSpec,
    inputs: &[InputFile],
    icon: &[u8],
    generated_at: &DateTime<FixedOffset>,
    options: &MaterializeOptions,
) -> Result<Vec<PlacedFile>> {
    let staging = output_dir.join(format!(".{}.{}.staging", spec.name(), std::process::id()));

    let files = match build_tree(&staging, spec, inputs, icon, generated_at, options) {
        Ok(files) => files,
        Err(Error::Incomplete { root, source }) => {
            return Err(if discard_staging(&root) {
                Error::Fs(source)
            } else {
                Error::Incomplete { root, source }
            });
        }
        // A staging directory that could not be created is not ours to remove
        Err(e) => return Err(e),
    };

    // The root may have appeared while staging
    let finished = if io::entry_exists(root) {
        Err(Error::AlreadyExists {
            path: root.to_path_buf(),
        })
    } else {
        io::rename(&staging, root).map_err(Error::from)
    };

    if let Err(e) = finished {
        discard_staging(&staging);
        return Err(e);
    }
    Ok(files)
}

/// Remove a staging directory created by this run. Returns whether it is gone.
fn discard_staging(staging: &Path) -> bool {
    match io::remove_dir_all(staging) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %staging.display(), error = %e, "failed to remove staging directory");
            false
        }
    }
}

/// Create `dir` with the fixed layout, copy the inputs and write the artifacts.
///
/// Manifest paths always name the final extension, even when `dir` is a
/// staging directory. Once `dir` exists every failure is wrapped in
/// [`Error::Incomplete`].
fn build_tree(
    dir: &Path,
    spec: &ExtensionSpec,
    inputs: &[InputFile],
    icon: &[u8],
    generated_at: &DateTime<FixedOffset>,
    options: &MaterializeOptions,
) -> Result<Vec<PlacedFile>> {
    io::create_dir(dir)?;
    populate(dir, spec, inputs, icon, generated_at, options).map_err(|source| Error::Incomplete {
        root: dir.to_path_buf(),
        source,
    })
}

fn populate(
    dir: &Path,
    spec: &ExtensionSpec,
    inputs: &[InputFile],
    icon: &[u8],
    generated_at: &DateTime<FixedOffset>,
    options: &MaterializeOptions,
) -> gojs_fs::Result<Vec<PlacedFile>> {
    for sub in ExtPath::SUBDIRECTORIES {
        io::create_dir(&dir.join(sub))?;
    }

    let (scripts, assets): (Vec<&InputFile>, Vec<&InputFile>) =
        inputs.iter().partition(|f| f.role() == Role::Script);

    let scripts = place_all(dir, spec, &scripts)?;
    let assets = place_all(dir, spec, &assets)?;

    let script_paths: Vec<&str> = scripts.iter().map(|p| p.ext_path.as_str()).collect();
    let asset_paths: Vec<&str> = assets.iter().map(|p| p.ext_path.as_str()).collect();

    let manifest = synthesize_manifest(spec.name(), &script_paths, &asset_paths);
    io::write_new(&dir.join(ExtPath::TypoScriptSetup), manifest.as_bytes())?;

    let descriptor = Descriptor::new(spec, generated_at)
        .with_escaping(options.escape_php)
        .render();
    io::write_new(&dir.join(ExtPath::EmConf), descriptor.as_bytes())?;

    io::write_new(&dir.join(ExtPath::Icon), icon)?;

    Ok(scripts.into_iter().chain(assets).collect())
}

fn place_all(
    dir: &Path,
    spec: &ExtensionSpec,
    inputs: &[&InputFile],
) -> gojs_fs::Result<Vec<PlacedFile>> {
    inputs
        .iter()
        .map(|input| {
            let placed = PlacedFile::for_input(spec.name(), input);
            let target = dir.join(input.role().directory()).join(input.file_name());
            io::copy_file(input.source_path(), &target)?;
            Ok(placed)
        })
        .collect()
}
