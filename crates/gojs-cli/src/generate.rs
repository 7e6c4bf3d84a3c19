//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use gojs_core::{
    ExtensionSpec, GenerationReport, MaterializeOptions, Role, materialize, validate_inputs,
};

use crate::cli::Cli;
use crate::error::Result;

/// Run a full generation from parsed arguments and print the outcome.
pub fn run_generate(cli: &Cli) -> Result<()> {
    let report = generate(cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// Validate every input, then materialize the extension.
///
/// Nothing is written unless all paths and the extension name are valid and
/// the extension root is still free.
pub fn generate(cli: &Cli) -> Result<GenerationReport> {
    let spec = ExtensionSpec::new(&cli.ext_name, &cli.js_version, &cli.author, &cli.title)?;
    let inputs = validate_inputs(&cli.files)?;
    tracing::debug!(extension = spec.name(), inputs = inputs.len(), "inputs validated");

    let options = MaterializeOptions {
        staged: cli.staged,
        escape_php: cli.escape_php,
    };
    Ok(materialize(&cli.output_dir, &spec, &inputs, &options)?)
}

fn print_summary(report: &GenerationReport) {
    println!(
        "{} Generated extension {}",
        "=>".blue().bold(),
        report.extension.name().cyan()
    );
    for file in &report.files {
        let label = match file.role {
            Role::Script => "js ".yellow(),
            Role::Asset => "   ".normal(),
        };
        println!("   {} {}", label, file.relative_path);
    }
    for artifact in &report.artifacts {
        println!("   {} {}", "+".green(), display_name(artifact));
    }
    println!(
        "{} Extension created at {}",
        "OK".green().bold(),
        report.root.display()
    );
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
