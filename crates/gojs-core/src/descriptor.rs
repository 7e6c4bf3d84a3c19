//! Extension manager descriptor (`ext_emconf.php`).
//!
//! The descriptor is a [`Descriptor`] record rendered into TYPO3's
//! `$EM_CONF` array. Only title, author and version come from the user; every
//! other field is a fixed default of the schema.
//!
//! Values are written verbatim between single quotes, so a `'` in a title ends
//! up unescaped in the PHP source. Setting [`Descriptor::escape_values`]
//! escapes `\` and `'` instead.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::extension::ExtensionSpec;

pub const DEFAULT_DESCRIPTION: &str = "";
pub const DEFAULT_CATEGORY: &str = "plugin";
pub const DEFAULT_AUTHOR_EMAIL: &str = "web@gosign.de";
pub const DEFAULT_AUTHOR_COMPANY: &str = "Gosign media. GmbH";
pub const DEFAULT_STATE: &str = "beta";

/// A value in the PHP array literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhpValue {
    Str(String),
    Int(i64),
    /// An associative array. Keys keep their order.
    Array(Vec<(String, PhpValue)>),
}

impl PhpValue {
    fn str(value: &str) -> Self {
        Self::Str(value.to_string())
    }

    fn empty_array() -> Self {
        Self::Array(Vec::new())
    }

    fn render(&self, out: &mut String, indent: usize, escape: bool) {
        match self {
            Self::Str(s) if escape => {
                out.push('\'');
                out.push_str(&escape_php(s));
                out.push('\'');
            }
            Self::Str(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Array(entries) if entries.is_empty() => out.push_str("array()"),
            Self::Array(entries) => {
                out.push_str("array(\n");
                render_entries(entries, out, indent + 1, escape);
                out.push_str(&"  ".repeat(indent));
                out.push(')');
            }
        }
    }
}

/// Escape a value for a single-quoted PHP string literal.
fn escape_php(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn render_entries(
    entries: &[(String, PhpValue)],
    out: &mut String,
    indent: usize,
    escape: bool,
) {
    for (key, value) in entries {
        out.push_str(&"  ".repeat(indent));
        out.push('\'');
        out.push_str(key);
        out.push_str("' => ");
        value.render(out, indent, escape);
        out.push_str(",\n");
    }
}

/// Version constraints on other extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub depends: Vec<(String, String)>,
    pub conflicts: Vec<(String, String)>,
    pub suggests: Vec<(String, String)>,
}

impl Constraints {
    fn to_php(&self) -> PhpValue {
        let list = |pairs: &[(String, String)]| {
            PhpValue::Array(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), PhpValue::str(v)))
                    .collect(),
            )
        };
        PhpValue::Array(vec![
            ("depends".into(), list(&self.depends)),
            ("conflicts".into(), list(&self.conflicts)),
            ("suggests".into(), list(&self.suggests)),
        ])
    }
}

/// The full `$EM_CONF` record for one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub extension_name: String,
    pub generated_at: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub author_email: String,
    pub shy: String,
    pub dependencies: String,
    pub conflicts: String,
    pub priority: String,
    pub module: String,
    pub state: String,
    pub internal: String,
    pub upload_folder: i64,
    pub create_dirs: String,
    pub modify_tables: String,
    pub clear_cache_on_load: i64,
    pub lock_type: String,
    pub author_company: String,
    pub version: String,
    pub constraints: Constraints,
    pub md5_values_when_last_written: String,
    pub suggests: Vec<(String, String)>,
    /// Escape string values for PHP instead of emitting them verbatim
    pub escape_values: bool,
}

impl Descriptor {
    /// Fill the schema defaults around the user-supplied values of `spec`.
    pub fn new(spec: &ExtensionSpec, generated_at: &DateTime<FixedOffset>) -> Self {
        Self {
            extension_name: spec.name().to_string(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            title: spec.title().to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            author: spec.author().to_string(),
            author_email: DEFAULT_AUTHOR_EMAIL.to_string(),
            shy: String::new(),
            dependencies: String::new(),
            conflicts: String::new(),
            priority: String::new(),
            module: String::new(),
            state: DEFAULT_STATE.to_string(),
            internal: String::new(),
            upload_folder: 0,
            create_dirs: String::new(),
            modify_tables: String::new(),
            clear_cache_on_load: 0,
            lock_type: String::new(),
            author_company: DEFAULT_AUTHOR_COMPANY.to_string(),
            version: spec.version().to_string(),
            constraints: Constraints::default(),
            md5_values_when_last_written: String::new(),
            suggests: Vec::new(),
            escape_values: false,
        }
    }

    /// Toggle PHP escaping of string values.
    pub fn with_escaping(mut self, escape_values: bool) -> Self {
        self.escape_values = escape_values;
        self
    }

    /// The `$EM_CONF` entries in schema order.
    pub fn entries(&self) -> Vec<(String, PhpValue)> {
        let s = PhpValue::str;
        vec![
            ("title".into(), s(&self.title)),
            ("description".into(), s(&self.description)),
            ("category".into(), s(&self.category)),
            ("author".into(), s(&self.author)),
            ("author_email".into(), s(&self.author_email)),
            ("shy".into(), s(&self.shy)),
            ("dependencies".into(), s(&self.dependencies)),
            ("conflicts".into(), s(&self.conflicts)),
            ("priority".into(), s(&self.priority)),
            ("module".into(), s(&self.module)),
            ("state".into(), s(&self.state)),
            ("internal".into(), s(&self.internal)),
            ("uploadfolder".into(), PhpValue::Int(self.upload_folder)),
            ("createDirs".into(), s(&self.create_dirs)),
            ("modify_tables".into(), s(&self.modify_tables)),
            ("clearCacheOnLoad".into(), PhpValue::Int(self.clear_cache_on_load)),
            ("lockType".into(), s(&self.lock_type)),
            ("author_company".into(), s(&self.author_company)),
            ("version".into(), s(&self.version)),
            ("constraints".into(), self.constraints.to_php()),
            (
                "_md5_values_when_last_written".into(),
                s(&self.md5_values_when_last_written),
            ),
            (
                "suggests".into(),
                if self.suggests.is_empty() {
                    PhpValue::empty_array()
                } else {
                    PhpValue::Array(
                        self.suggests
                            .iter()
                            .map(|(k, v)| (k.clone(), s(v)))
                            .collect(),
                    )
                },
            ),
        ]
    }

    /// Render the PHP source of `ext_emconf.php`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?php\n\n");
        out.push_str(&format!(
            "# Extension Manager/Repository config file for ext '{}'.\n",
            self.extension_name
        ));
        out.push_str(&format!("# Auto generated at {}\n\n", self.generated_at));
        out.push_str("$EM_CONF[$_EXTKEY] = array(\n");
        render_entries(&self.entries(), &mut out, 1, self.escape_values);
        out.push_str(");\n");
        out
    }
}

/// Render the descriptor for `spec`, stamped with `generated_at`.
///
/// The timestamp only appears in a comment. User values are emitted verbatim.
pub fn synthesize_descriptor(spec: &ExtensionSpec, generated_at: &DateTime<FixedOffset>) -> String {
    Descriptor::new(spec, generated_at).render()
}
