//! Content loaders for reading calculator inputs from files.
//!
//! Game data and market snapshots are JSON (the formats the game client and
//! the market feed publish); player settings are TOML. Every loader validates
//! what it parsed, so downstream code never sees a malformed document.

pub mod factory;
pub mod game_data;
pub mod market;
pub mod settings;

pub use factory::ContentFactory;
pub use game_data::GameDataLoader;
pub use market::MarketLoader;
pub use settings::SettingsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
