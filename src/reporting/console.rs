//! Console output: header, frequency table, annotated text.

use super::{pluralize, ReportOptions};
use crate::analysis::ScanReport;
use crate::types::{AnalysisResult, FrequencyEntry, SpanKind};
use colored::Colorize;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 50;

/// Formats one analysis as the console report.
#[must_use]
pub fn format_report(
    label: &str,
    text_len: usize,
    result: &AnalysisResult,
    opts: &ReportOptions,
) -> String {
    let mut out = String::new();
    write_header(&mut out, label, text_len, opts);
    write_table(&mut out, result, opts);
    write_findings(&mut out, result, opts);
    out
}

/// Prints one analysis to stdout.
pub fn print_report(label: &str, text_len: usize, result: &AnalysisResult, opts: &ReportOptions) {
    print!("{}", format_report(label, text_len, result, opts));
}

/// One-line summary after a multi-source scan.
#[must_use]
pub fn format_summary(report: &ScanReport, opts: &ReportOptions) -> String {
    let scanned = report.outcomes.len() - report.failed_count();
    let flagged = report.flagged_count();
    let mut line = format!(
        "Scanned {scanned} {} in {}ms: {flagged} with suspicious characters ({} total)",
        pluralize("source", scanned),
        report.duration_ms,
        report.total_suspicious(),
    );
    if report.has_failures() {
        let _ = write!(line, ", {} failed", report.failed_count());
    }
    if !opts.color {
        return line;
    }
    if report.has_failures() || flagged > 0 {
        line.yellow().bold().to_string()
    } else {
        line.green().bold().to_string()
    }
}

fn write_header(out: &mut String, label: &str, text_len: usize, opts: &ReportOptions) {
    let header = format!("Analysis Results for {label}\nText length: {text_len} characters");
    if opts.color {
        let _ = writeln!(out, "{}", header.bold());
    } else {
        let _ = writeln!(out, "{header}");
    }
    let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));
}

fn write_table(out: &mut String, result: &AnalysisResult, opts: &ReportOptions) {
    let rows: Vec<&FrequencyEntry> = if opts.suspicious_only {
        result.suspicious_entries().collect()
    } else {
        result.frequencies.iter().collect()
    };
    if rows.is_empty() {
        return;
    }

    let title = if opts.suspicious_only {
        "Suspicious Characters Found:"
    } else {
        "Character Frequency Table:"
    };
    if opts.color {
        let _ = writeln!(out, "{}", title.bold());
    } else {
        let _ = writeln!(out, "{title}");
    }
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    let _ = writeln!(out, "Character | Code Point | Occurrences");
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    for entry in rows {
        let _ = writeln!(out, "{}", format_row(entry, opts));
    }
}

fn format_row(entry: &FrequencyEntry, opts: &ReportOptions) -> String {
    let label = format!("{:^9}", entry.label);
    let codepoint = format!("{:^11}", entry.codepoint);
    let count = format!("{:^11}", entry.count);
    match (entry.is_suspicious(), opts.color) {
        (false, _) => format!("{label} | {codepoint} | {count}"),
        (true, false) => format!("{label} | {codepoint} | {count} (SUS!)"),
        (true, true) => format!(
            "{} | {codepoint} | {count} {}",
            label.black().on_bright_yellow(),
            "(SUS!)".red()
        ),
    }
}

fn write_findings(out: &mut String, result: &AnalysisResult, opts: &ReportOptions) {
    if !result.has_suspicious() {
        let _ = writeln!(out, "\nNo suspicious characters found.");
        return;
    }

    let n = result.suspicious_count();
    let attention = format!(
        "ATTENTION: {n} suspicious {} found!",
        pluralize("character", n)
    );
    if opts.color {
        let _ = writeln!(out, "\n{}", attention.red().bold());
        let _ = writeln!(out, "\n{}", "Full text with suspicious characters highlighted:".bold());
    } else {
        let _ = writeln!(out, "\n{attention}");
        let _ = writeln!(out, "\nFull text with suspicious characters highlighted:");
    }
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
    out.push_str(&render_annotated(result, opts));
    let _ = writeln!(out, "\n{}", "-".repeat(TABLE_WIDTH));
}

fn render_annotated(result: &AnalysisResult, opts: &ReportOptions) -> String {
    if !opts.color {
        return result.annotated.render(&opts.markers);
    }
    let mut out = String::new();
    for span in &result.annotated.spans {
        match span.kind {
            SpanKind::Normal => out.push_str(&span.text),
            SpanKind::Suspicious => {
                let _ = write!(out, "{}", span.text.as_str().black().on_bright_yellow());
            }
        }
    }
    out
}
