//! Check command implementation
//!
//! Validates a snapshot description by building it in both precisions.

use platform_market::snapshot::ProcessedMarketData;
use tracing::info;

use super::load_config;
use crate::Result;

/// Run the check command
pub fn run(snapshot: &str) -> Result<()> {
    info!("Checking snapshot description {}", snapshot);

    let config = load_config(snapshot)?;
    let market = config.build::<f64>()?;
    // Values must also be representable in single precision
    config.build::<f32>()?;

    println!(
        "{}: OK ({} curves, {} currencies, {} assets)",
        snapshot,
        market.curves().len(),
        market.supported_currencies().len(),
        market.supported_assets().len()
    );
    Ok(())
}
