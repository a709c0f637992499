//! Inspect command implementation
//!
//! Summarises what a snapshot can serve: currencies, assets, curves and
//! observation series.

use platform_core::types::{Currency, Date, Dtype};
use platform_market::observations::ObservationSeries;
use platform_market::snapshot::{MarketDataSnapshot, ProcessedMarketData};
use serde::Serialize;

use super::{load_snapshot, render_table, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct CurveSummary {
    curve: String,
    interpolation: &'static str,
    daycount: &'static str,
    nodes: usize,
    last_date: Date,
}

#[derive(Debug, Serialize)]
struct SeriesSummary {
    series: String,
    observations: usize,
    first_date: Date,
    last_date: Date,
}

#[derive(Debug, Serialize)]
struct SnapshotSummary {
    date: Date,
    time: String,
    dtype: Dtype,
    currencies: Vec<Currency>,
    assets: Vec<String>,
    curves: Vec<CurveSummary>,
    spots: Vec<SeriesSummary>,
    fixings: Vec<SeriesSummary>,
    volatility_surfaces: Vec<String>,
}

fn series_summary(series: &ObservationSeries<f64>) -> SeriesSummary {
    SeriesSummary {
        series: series.name().to_string(),
        observations: series.len(),
        first_date: series.first_date(),
        last_date: series.last_date(),
    }
}

fn summarise(market: &MarketDataSnapshot<f64>) -> Result<SnapshotSummary> {
    let mut curves: Vec<CurveSummary> = market
        .curves()
        .iter()
        .map(|(curve_type, handle)| CurveSummary {
            curve: curve_type.to_string(),
            interpolation: handle.interpolation_method().name(),
            daycount: handle.daycount_convention().name(),
            nodes: handle.node_dates().len(),
            last_date: handle.max_date(),
        })
        .collect();
    for asset in market.forward_curve_assets() {
        let handle = market.forward_curve(asset)?;
        curves.push(CurveSummary {
            curve: handle.curve_type().to_string(),
            interpolation: handle.interpolation_method().name(),
            daycount: handle.daycount_convention().name(),
            nodes: handle.node_dates().len(),
            last_date: handle.max_date(),
        });
    }

    let spots = market
        .supported_assets()
        .iter()
        .filter_map(|asset| market.spot_series(asset))
        .map(series_summary)
        .collect();
    let fixings = market
        .fixing_keys()
        .filter_map(|key| market.fixing_series(key))
        .map(series_summary)
        .collect();

    Ok(SnapshotSummary {
        date: market.date(),
        time: market.time().to_string(),
        dtype: market.dtype(),
        currencies: market.supported_currencies().to_vec(),
        assets: market.supported_assets().to_vec(),
        curves,
        spots,
        fixings,
        volatility_surfaces: market
            .volatility_surface_assets()
            .map(str::to_string)
            .collect(),
    })
}

fn series_rows(series: &[SeriesSummary]) -> Vec<Vec<String>> {
    series
        .iter()
        .map(|s| {
            vec![
                s.series.clone(),
                s.observations.to_string(),
                s.first_date.to_string(),
                s.last_date.to_string(),
            ]
        })
        .collect()
}

/// Run the inspect command
pub fn run(snapshot: &str, format: OutputFormat) -> Result<()> {
    let market = load_snapshot(snapshot)?;
    let summary = summarise(&market)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let join = |items: Vec<String>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    println!("Snapshot {} {} ({})", summary.date, summary.time, summary.dtype);
    println!(
        "Currencies: {}",
        join(summary.currencies.iter().map(Currency::to_string).collect())
    );
    println!("Assets: {}", join(summary.assets.clone()));
    println!(
        "Volatility surfaces: {}",
        join(summary.volatility_surfaces.clone())
    );

    println!("\nCurves");
    let curve_rows: Vec<Vec<String>> = summary
        .curves
        .iter()
        .map(|c| {
            vec![
                c.curve.clone(),
                c.interpolation.to_string(),
                c.daycount.to_string(),
                c.nodes.to_string(),
                c.last_date.to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        render_table(
            &["Curve", "Interpolation", "Day count", "Nodes", "Last date"],
            &curve_rows
        )
    );

    let series_headers = ["Series", "Observations", "First", "Last"];
    println!("\nSpots");
    print!("{}", render_table(&series_headers, &series_rows(&summary.spots)));
    println!("\nFixings");
    print!("{}", render_table(&series_headers, &series_rows(&summary.fixings)));
    Ok(())
}
