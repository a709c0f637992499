//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared snapshot
//! loading and output rendering live here.

pub mod check;
pub mod discount;
pub mod fixings;
pub mod forward;
pub mod inspect;
pub mod spot;

use clap::ValueEnum;
use platform_market::config::SnapshotConfig;
use platform_market::snapshot::{MarketDataSnapshot, ProcessedMarketData};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::{CliError, Result};

/// Output format of query commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table on stdout
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Read and validate a snapshot description.
pub(crate) fn load_config(path: &str) -> Result<SnapshotConfig> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    Ok(SnapshotConfig::from_file(path)?)
}

/// Load a snapshot description and build the `f64` snapshot.
pub(crate) fn load_snapshot(path: &str) -> Result<MarketDataSnapshot<f64>> {
    let snapshot = load_config(path)?.build::<f64>()?;
    info!("Loaded snapshot {} from {}", snapshot_label(&snapshot), path);
    Ok(snapshot)
}

fn snapshot_label(snapshot: &MarketDataSnapshot<f64>) -> String {
    format!("{} {}", snapshot.date(), snapshot.time())
}

/// Print rows either as a table or as a JSON array.
pub(crate) fn emit<R: Serialize>(
    format: OutputFormat,
    headers: &[&str],
    rows: &[R],
    cells: impl Fn(&R) -> Vec<String>,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Table => {
            let body: Vec<Vec<String>> = rows.iter().map(cells).collect();
            print!("{}", render_table(headers, &body));
        }
    }
    Ok(())
}

/// Render a box-drawn table with left-aligned columns.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        let placeholder: Vec<String> = (0..headers.len())
            .map(|i| if i == 0 { "(no data)".to_string() } else { String::new() })
            .collect();
        return render_table(headers, &[placeholder]);
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {}{} ", c, " ".repeat(w - c.chars().count())))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
