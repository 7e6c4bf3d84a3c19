//! TypoScript file identifiers.
//!
//! Every file included through TypoScript needs a unique key. It is composed
//! of the extension name and a shortened hash of the file path, e.g.
//! `tx_gojsfoo_ff7b`.

use gojs_fs::checksum::short_sha1_hex;

/// Number of hex characters of the path hash kept in an identifier.
///
/// Existing TYPO3 setups reference identifiers of this width, so changing it
/// changes every generated key.
pub const ID_HASH_WIDTH: usize = 4;

/// Derive the identifier for `path` inside the extension `extension_name`.
///
/// Underscores are stripped from the extension name. The hash is taken over
/// the literal path string, so the identifier is stable for as long as the
/// file keeps its location. Two paths sharing a hash prefix collide, which is
/// not detected here.
pub fn derive_id(extension_name: &str, path: &str) -> String {
    let compact_key = extension_name.replace('_', "");
    format!(
        "tx_{}_{}",
        compact_key,
        short_sha1_hex(path, ID_HASH_WIDTH)
    )
}
