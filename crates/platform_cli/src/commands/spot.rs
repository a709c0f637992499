//! Spot command implementation

use platform_core::types::Date;
use platform_market::snapshot::ProcessedMarketData;
use serde::Serialize;

use super::{emit, load_snapshot, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct SpotRow {
    date: Date,
    spot: f64,
}

/// Run the spot command
pub fn run(snapshot: &str, asset: &str, dates: &[Date], format: OutputFormat) -> Result<()> {
    let market = load_snapshot(snapshot)?;
    let spots = market.spot(asset, dates)?;

    let rows: Vec<SpotRow> = dates
        .iter()
        .zip(spots)
        .map(|(&date, spot)| SpotRow { date, spot })
        .collect();

    emit(format, &["Date", asset], &rows, |r| {
        vec![r.date.to_string(), format!("{}", r.spot)]
    })
}
