//! Sample data compiled into the binary.
//!
//! A small but complete data set (a few gathering and production chains,
//! teas, equipment, house rooms, community buffs) so the calculator runs
//! without any files on disk.

pub const GAME_DATA_JSON: &str = include_str!("../data/game_data.json");
pub const SETTINGS_TOML: &str = include_str!("../data/settings.toml");
pub const MARKET_JSON: &str = include_str!("../data/market.json");

#[cfg(feature = "loaders")]
mod parsed {
    use skilling_core::{GameData, MarketSnapshot, PlayerConfig};

    use super::{GAME_DATA_JSON, MARKET_JSON, SETTINGS_TOML};
    use crate::loaders::{GameDataLoader, LoadResult, MarketLoader, SettingsLoader};

    pub fn game_data() -> LoadResult<GameData> {
        GameDataLoader::from_str(GAME_DATA_JSON)
    }

    pub fn settings() -> LoadResult<PlayerConfig> {
        SettingsLoader::from_str(SETTINGS_TOML)
    }

    pub fn market() -> LoadResult<MarketSnapshot> {
        MarketLoader::from_str(MARKET_JSON)
    }
}

#[cfg(feature = "loaders")]
pub use parsed::{game_data, market, settings};
