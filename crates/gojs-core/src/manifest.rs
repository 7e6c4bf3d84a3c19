//! TypoScript inclusion manifest (`ext_typoscript_setup.txt`).

use std::collections::HashMap;

use gojs_fs::ResourcePath;

use crate::identifier::derive_id;

/// First line of every generated manifest.
pub const MANIFEST_HEADER: &str = "# This file was automatically generated by gojs-gen";

/// Render the manifest for the given script and asset paths.
///
/// Scripts become `page.includeJS` lines and CSS assets become
/// `page.includeCSS` lines, both in input order. Assets whose extension is not
/// exactly `.css` are skipped. Nothing is sorted or deduplicated.
pub fn synthesize_manifest<S: AsRef<str>>(
    extension_name: &str,
    script_files: &[S],
    asset_files: &[S],
) -> String {
    let mut manifest = String::new();
    manifest.push_str(MANIFEST_HEADER);
    manifest.push_str("\n\n");

    for path in script_files {
        push_include(&mut manifest, "includeJS", extension_name, path.as_ref());
    }

    manifest.push('\n');

    for path in asset_files.iter().filter(|p| is_css(p.as_ref())) {
        push_include(&mut manifest, "includeCSS", extension_name, path.as_ref());
    }

    log_collisions(extension_name, script_files, asset_files);
    manifest
}

fn push_include(manifest: &mut String, directive: &str, extension_name: &str, path: &str) {
    manifest.push_str(&format!(
        "page.{}.{} = EXT:{}\n",
        directive,
        derive_id(extension_name, path),
        path
    ));
}

fn is_css(path: &str) -> bool {
    ResourcePath::new(path).extension() == Some("css")
}

/// Report distinct paths that share an identifier. Generation is not affected.
fn log_collisions<S: AsRef<str>>(extension_name: &str, scripts: &[S], assets: &[S]) {
    let included = scripts
        .iter()
        .map(|p| p.as_ref())
        .chain(assets.iter().map(|p| p.as_ref()).filter(|p| is_css(p)));

    let mut first_by_id: HashMap<String, &str> = HashMap::new();
    for path in included {
        let id = derive_id(extension_name, path);
        if let Some(first) = first_by_id.get(&id).copied() {
            if first != path {
                tracing::debug!(id = %id, first, second = path, "identifier collision");
            }
        } else {
            first_by_id.insert(id, path);
        }
    }
}
