//! Market snapshot loader.

use std::path::Path;

use anyhow::bail;
use skilling_core::{MarketSnapshot, Quote};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for market snapshots (`{ "market": { name: { bid, ask } }, "timestamp"? }`).
pub struct MarketLoader;

impl MarketLoader {
    pub fn load(path: &Path) -> LoadResult<MarketSnapshot> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid market snapshot in {}: {:#}", path.display(), e))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> LoadResult<MarketSnapshot> {
        let market: MarketSnapshot = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse market JSON: {}", e))?;

        // -1 marks a missing side; any other negative price is a feed error.
        for (name, quote) in &market.market {
            for side in [quote.bid, quote.ask] {
                if side < 0.0 && side != Quote::NONE {
                    bail!("quote for {name} has invalid price {side}");
                }
            }
        }

        debug!(quotes = market.market.len(), timestamp = ?market.timestamp, "loaded market snapshot");
        Ok(market)
    }
}
