//! Forward command implementation
//!
//! Reports simple forward rates from one accrual start date to each end date.

use platform_core::types::Date;
use platform_market::curves::{CurveContext, CurveType};
use platform_market::snapshot::ProcessedMarketData;
use serde::Serialize;

use super::{emit, load_snapshot, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct ForwardRow {
    start: Date,
    end: Date,
    year_fraction: f64,
    forward_rate: f64,
}

/// Run the forward command
pub fn run(
    snapshot: &str,
    curve_type: &CurveType,
    start: Date,
    ends: &[Date],
    format: OutputFormat,
) -> Result<()> {
    let market = load_snapshot(snapshot)?;
    let curve = market.yield_curve(curve_type)?;
    let ctx = CurveContext::for_curve(curve_type.clone());

    // A single start date broadcasts against every end date
    let forwards = curve.forward_rate(&[start], ends, &ctx)?;

    let rows: Vec<ForwardRow> = ends
        .iter()
        .zip(forwards)
        .map(|(&end, forward_rate)| ForwardRow {
            start,
            end,
            year_fraction: curve.year_fraction(start, end),
            forward_rate,
        })
        .collect();

    emit(
        format,
        &["Start", "End", "Year fraction", "Forward rate"],
        &rows,
        |r| {
            vec![
                r.start.to_string(),
                r.end.to_string(),
                format!("{:.6}", r.year_fraction),
                format!("{:.6}%", r.forward_rate * 100.0),
            ]
        },
    )
}
