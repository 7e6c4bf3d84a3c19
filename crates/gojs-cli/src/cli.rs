//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Generate a TYPO3 extension that includes the given JavaScript and asset files
///
/// `.js` files are copied to src/ and included with page.includeJS. All other
/// files are copied to assets/; the .css ones are included with page.includeCSS.
///
/// Examples:
///   gojs-gen -j 1.2.3 -e slider -a "Jane Doe" -t "Slider" slider.js slider.css
///   gojs-gen -j 2.0 -e charts -a Jane -t Charts --staged dist/*.js
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gojs-generator", bin_name = "gojs-gen", version = "v0.1")]
#[command(verbatim_doc_comment)]
pub struct Cli {
    /// Version of the JavaScript library (e.g. 1.2.3)
    #[arg(short = 'j', long, env = "GOJS_JS_VERSION")]
    pub js_version: String,

    /// Name of the extension to be generated, e.g. 'foo' will yield 'gojs_foo'
    #[arg(short = 'e', long, env = "GOJS_EXT_NAME")]
    pub ext_name: String,

    /// Your name, not who created the JavaScript
    #[arg(short = 'a', long, env = "GOJS_AUTHOR")]
    pub author: String,

    /// Title of the generated extension in the extension manager
    #[arg(short = 't', long, env = "GOJS_TITLE")]
    pub title: String,

    /// Directory the extension is created in
    #[arg(short = 'o', long, env = "GOJS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Build in a staging directory and move it into place only on success
    #[arg(long)]
    pub staged: bool,

    /// Escape backslashes and single quotes in ext_emconf.php values
    #[arg(long)]
    pub escape_php: bool,

    /// Print a JSON report instead of the summary
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to include in the extension
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const REQUIRED: [&str; 9] = [
        "gojs-gen", "-j", "1.0.0", "-e", "widgets", "-a", "Jane", "-t", "Widgets",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(REQUIRED.iter().chain(extra))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_options_and_files() {
        let cli = parse(&["a.js", "b.css"]).unwrap();
        assert_eq!(cli.js_version, "1.0.0");
        assert_eq!(cli.ext_name, "widgets");
        assert_eq!(cli.author, "Jane");
        assert_eq!(cli.title, "Widgets");
        assert_eq!(cli.files, vec![PathBuf::from("a.js"), PathBuf::from("b.css")]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.staged);
        assert!(!cli.escape_php);
    }

    #[test]
    fn parses_long_options() {
        let cli = Cli::try_parse_from([
            "gojs-gen",
            "--js-version",
            "2.0",
            "--ext-name",
            "charts",
            "--author",
            "Ana",
            "--title",
            "Charts",
            "--output-dir",
            "out",
            "--staged",
            "--escape-php",
            "--json",
            "c.js",
        ])
        .unwrap();
        assert_eq!(cli.ext_name, "charts");
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(cli.staged);
        assert!(cli.escape_php);
        assert!(cli.json);
    }

    #[test]
    fn requires_at_least_one_file() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn requires_metadata_options() {
        let err = Cli::try_parse_from(["gojs-gen", "-e", "x", "-a", "y", "-t", "z", "f.js"]);
        assert!(err.is_err());
    }
}
