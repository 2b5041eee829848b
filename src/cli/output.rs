use colored::*;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;

use crate::common::config::ScanConfig;
use crate::common::format::{format_mb, header};
use crate::scanner::{CategoryTotals, Diagnostic, LargeFile, ScanResult};

// ─── Human report ─────────────────────────────────────────────────────────────

/// Render the report as plain text
pub fn render_report(result: &ScanResult, config: &ScanConfig) -> String {
    render(result, config, false)
}

/// Print the report to stdout, styling headers when `color` is set
pub fn print_report(result: &ScanResult, config: &ScanConfig, color: bool) {
    print!("{}", render(result, config, color));
}

fn render(result: &ScanResult, config: &ScanConfig, color: bool) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header("Size analysis:", color));
    for total in result.category_totals.iter() {
        let _ = writeln!(out, "{}: {}", total.category, format_mb(total.size_bytes));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", header("Large files:", color));
    if result.large_files.is_empty() {
        let _ = writeln!(
            out,
            "There are no files larger than {}",
            format_mb(config.size_threshold)
        );
    } else {
        for file in &result.large_files {
            let _ = writeln!(out, "{}: {}", file.path.display(), format_mb(file.size_bytes));
        }
    }

    if config.collect_world_writable {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", header("World-Writable Files:", color));
        if result.world_writable_files.is_empty() {
            let _ = writeln!(out, "There are no world-writable files.");
        } else {
            for path in &result.world_writable_files {
                let _ = writeln!(out, "{}", path.display());
            }
        }
    }

    out
}

/// Print one traversal diagnostic to stderr
pub fn print_diagnostic(diag: &Diagnostic, color: bool) {
    let line = diag.to_string();
    if color {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{}", line);
    }
}

// ─── JSON report ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a ScanConfig,
    category_totals: &'a CategoryTotals,
    total_bytes: u64,
    files_scanned: usize,
    large_files: &'a [LargeFile],
    world_writable_files: Option<Vec<Cow<'a, str>>>,
    diagnostics: &'a [Diagnostic],
}

/// Render the report as pretty-printed JSON
pub fn render_json(
    result: &ScanResult,
    config: &ScanConfig,
    diagnostics: &[Diagnostic],
) -> serde_json::Result<String> {
    let report = JsonReport {
        config,
        category_totals: &result.category_totals,
        total_bytes: result.total_bytes(),
        files_scanned: result.files_scanned,
        large_files: &result.large_files,
        world_writable_files: config.collect_world_writable.then(|| {
            result
                .world_writable_files
                .iter()
                .map(|p| p.to_string_lossy())
                .collect()
        }),
        diagnostics,
    };
    serde_json::to_string_pretty(&report)
}

/// Print scan results as JSON
pub fn print_report_json(
    result: &ScanResult,
    config: &ScanConfig,
    diagnostics: &[Diagnostic],
) -> serde_json::Result<()> {
    let json = render_json(result, config, diagnostics)?;
    println!("{}", json);
    Ok(())
}
