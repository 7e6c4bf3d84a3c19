//! The fixed extension icon.
//!
//! An 18x16 GIF shipped with every generated extension. It is kept as base64
//! text in the binary and decoded when written.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::Result;

/// Base64 encoding of `ext_icon.gif`.
pub const ICON_GIF_BASE64: &str = concat!(
    "R0lGODlhEgAQAOZrAO+KK/3u4P3t3+6FI/a+iv77+PKfUu+KLPnSrvvgx//9+/Svb/jMovOr",
    "Zv769vKhVvrbvvCPNPrYuP717O+LLfa+ifvgyP738PKcTfOnYe14DPzn1PfGmPfHm/KfUfW4",
    "f/SydPfBj/zq2fGXQ/Syc/fFlvvkz+x1BvfElPravP727u17EfOlXfW1eu6EIvjMo/vl0P71",
    "7e15Dfrew+5/GfnXtvGaSfCUPvnQqvnRq/SvbvSsafStavCSOu19Ff306vGaSPfElfKdTv3w",
    "5PjNpP727//8+vrYue+IJ/nUse6GJPW0ePOmX/zr3Pa/i/bAje15Dux1BfKdT/CQNvSrZ+1+",
    "FvKhVfW3ffCOM+6BHPjOp/zr2++IKPrXt/a/jPCQN/a6g/zo1vW3fPa7hPCUPfzs3fKeUPa7",
    "hex2CPCROex0BP///wAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAAAAAACH5BAEAAGsALAAAAAASABAAAAfWgGuCg4QTVl8zhIoJBhkX",
    "a2Nqag2KgwI+khVrQpJEa11DihCSalMFEWouBSRqTIoOI5IyMABqKE6SS4MFDmsxtWovAwAd",
    "kjsKghIHXFQJATdqZz0fNAAMAmGCSqRqHjULCAIlDQRmGkiCB9xqWWWCAWSkLYJNHARPIQQV",
    "E4IIYB04Uija4gVIFRtHNljAoiENA0IBMESR9EAMBR0DtJxQA8DIoCuSVnAIoobFAzVJckgx",
    "QWgDhgwiIKBRIwEViEqEikBRY0ABhQEWcA66wGPBjzUBVOAMBAA7",);

/// Decode the embedded icon to raw GIF bytes.
pub fn icon_bytes() -> Result<Vec<u8>> {
    Ok(STANDARD.decode(ICON_GIF_BASE64)?)
}
