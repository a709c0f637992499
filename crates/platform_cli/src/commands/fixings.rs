//! Fixings command implementation

use platform_core::types::{Date, Period};
use platform_market::snapshot::ProcessedMarketData;
use serde::Serialize;

use super::{emit, load_snapshot, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct FixingRow {
    date: Date,
    fixing: f64,
}

/// Run the fixings command
pub fn run(
    snapshot: &str,
    fixing_type: &str,
    tenor: Period,
    dates: &[Date],
    format: OutputFormat,
) -> Result<()> {
    let market = load_snapshot(snapshot)?;
    let fixings = market.fixings(dates, fixing_type, tenor)?;

    let rows: Vec<FixingRow> = dates
        .iter()
        .zip(fixings)
        .map(|(&date, fixing)| FixingRow { date, fixing })
        .collect();

    let label = format!("{} {}", fixing_type, tenor);
    emit(format, &["Date", label.as_str()], &rows, |r| {
        vec![r.date.to_string(), format!("{:.6}%", r.fixing * 100.0)]
    })
}
