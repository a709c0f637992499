//! Processed market data.
//!
//! This module provides:
//! - [`ProcessedMarketData`]: Read-only market data view used by pricing code
//! - [`MarketDataSnapshot`]: In-memory provider built from curves, histories and surfaces
//! - [`MarketDataSnapshotBuilder`]: Validating builder for snapshots

mod market_data;
mod traits;

pub use market_data::{MarketDataSnapshot, MarketDataSnapshotBuilder};
pub use traits::ProcessedMarketData;
