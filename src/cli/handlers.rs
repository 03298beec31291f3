// src/cli/handlers.rs
//! Command handlers. Each one loads text, hands it to the analyzer, and
//! renders what comes back.

use super::args::{OutputArgs, OutputFormat};
use crate::analysis::{self, ScanEngine, ScanOutcome, ScanReport};
use crate::config::{self, Config, CONFIG_FILE};
use crate::discovery;
use crate::error::GlyphError;
use crate::exit::GlyphExit;
use crate::input::{self, Source};
use crate::reporting::{self, ReportOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Loads config from `path` (which must exist) or from `./glyphwatch.toml`.
///
/// # Errors
/// Returns error if an explicit config file is missing or any config is invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) if !p.exists() => Err(GlyphError::NotFound { path: p.to_path_buf() }.into()),
        Some(p) => Ok(Config::load_from(p)?),
        None => Ok(Config::load()?),
    }
}

/// Handles `scan`: files, walked directories and optionally stdin.
///
/// # Errors
/// Returns error if nothing was given to scan, a path does not exist, or
/// output serialization fails.
pub fn handle_scan(
    paths: &[PathBuf],
    stdin: bool,
    output: &OutputArgs,
    config: &Config,
) -> Result<GlyphExit> {
    if paths.is_empty() && !stdin {
        return Err(GlyphError::EmptyInput)
            .context("no paths given (use --stdin to read standard input)");
    }

    let found = discovery::discover(paths, config)?;
    if found.is_empty() && !stdin {
        let given: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        return Err(GlyphError::EmptyInput)
            .with_context(|| format!("no files to scan under {}", given.join(", ")));
    }

    let mut sources: Vec<Source> = found.files.into_iter().map(Source::File).collect();
    if stdin {
        sources.push(Source::Stdin);
    }
    tracing::debug!(sources = sources.len(), walk_errors = found.errors.len(), "starting scan");

    let mut report = ScanEngine::scan(&sources);
    report.outcomes.extend(
        found
            .errors
            .into_iter()
            .map(|(path, e)| ScanOutcome::failed(Source::File(path).label(), e)),
    );
    emit(&report, output, config)
}

/// Handles `text`: analyzes one literal string.
///
/// # Errors
/// Returns error if the text is empty or output serialization fails.
pub fn handle_text(text: &str, output: &OutputArgs, config: &Config) -> Result<GlyphExit> {
    let loaded = input::load(&Source::Text(text.to_string()))?;
    let report = ScanReport {
        outcomes: vec![ScanOutcome {
            label: loaded.label,
            text_len: loaded.text.chars().count(),
            result: Ok(analysis::analyze(&loaded.text)),
        }],
        duration_ms: 0,
    };
    emit(&report, output, config)
}

/// Handles `view`: interactive browser for a single file.
///
/// # Errors
/// Returns error if the file cannot be loaded or the terminal fails.
#[cfg(feature = "tui")]
pub fn handle_view(file: &Path) -> Result<GlyphExit> {
    let loaded = input::load(&Source::File(file.to_path_buf()))?;
    let result = analysis::analyze(&loaded.text);
    crate::tui::run(&loaded.label, result)?;
    Ok(GlyphExit::Success)
}

/// Handles `init`: writes the default config if none exists.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_init() -> Result<GlyphExit> {
    if config::write_default(Path::new(CONFIG_FILE))? {
        eprintln!("{}", format!("Created {CONFIG_FILE}").green());
    } else {
        eprintln!("{}", format!("{CONFIG_FILE} already exists").dimmed());
    }
    Ok(GlyphExit::Success)
}

fn emit(report: &ScanReport, output: &OutputArgs, config: &Config) -> Result<GlyphExit> {
    let opts = resolve_options(output, config);
    match output.format {
        OutputFormat::Json => {
            println!("{}", reporting::format_json(report)?);
        }
        OutputFormat::Text => print_text(report, &opts),
    }
    Ok(exit_code(report, output.strict))
}

fn print_text(report: &ScanReport, opts: &ReportOptions) {
    for (i, outcome) in report.outcomes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match &outcome.result {
            Ok(result) => reporting::print_report(&outcome.label, outcome.text_len, result, opts),
            Err(e) => eprintln!("{} {}: {e}", "error:".red().bold(), outcome.label),
        }
    }
    if report.outcomes.len() > 1 {
        println!("\n{}", reporting::format_summary(report, opts));
    }
}

/// Flags win over config; colour also requires a terminal on stdout.
fn resolve_options(output: &OutputArgs, config: &Config) -> ReportOptions {
    let mut opts = ReportOptions::from_config(config);
    opts.color = opts.color && !output.no_color && std::io::stdout().is_terminal();
    opts.suspicious_only = opts.suspicious_only || output.suspicious_only;
    if !opts.color {
        colored::control::set_override(false);
    }
    opts
}

fn exit_code(report: &ScanReport, strict: bool) -> GlyphExit {
    if report.has_failures() {
        GlyphExit::Error
    } else if strict && report.total_suspicious() > 0 {
        GlyphExit::SuspiciousFound
    } else {
        GlyphExit::Success
    }
}
