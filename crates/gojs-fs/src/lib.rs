//! Filesystem layer for the gojs extension generator
//!
//! Provides the fixed extension layout names, `EXT:` resource paths
//! and the create-only I/O primitives the generator is built on.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;
pub mod resource;

pub use constants::{EXTENSION_PREFIX, ExtPath};
pub use error::{Error, Result};
pub use resource::ResourcePath;
