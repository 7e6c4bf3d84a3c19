//! Extension generation core for gojs-gen
//!
//! Builds a TYPO3 extension that ships a set of JavaScript and asset files:
//!
//! - [`identifier`] derives the TypoScript key of each included file
//! - [`manifest`] renders `ext_typoscript_setup.txt`
//! - [`descriptor`] renders `ext_emconf.php`
//! - [`materialize`] creates the directory tree and writes everything
//!
//! Only [`materialize`] has side effects. Everything it needs is passed in
//! explicitly; there is no global state.

pub mod descriptor;
pub mod error;
pub mod extension;
pub mod icon;
pub mod identifier;
pub mod input;
pub mod logging;
pub mod manifest;
pub mod materialize;

pub use descriptor::{Descriptor, synthesize_descriptor};
pub use error::{Error, GenerationError, Result};
pub use extension::ExtensionSpec;
pub use identifier::derive_id;
pub use input::{InputFile, PlacedFile, Role, validate_inputs};
pub use manifest::synthesize_manifest;
pub use materialize::{GenerationReport, MaterializeOptions, materialize};
