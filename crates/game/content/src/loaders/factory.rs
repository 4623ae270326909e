//! Content factory for loading every calculator input from one directory.

use std::path::{Path, PathBuf};

use skilling_core::{GameData, MarketSnapshot, PlayerConfig};

use crate::loaders::{GameDataLoader, LoadResult, MarketLoader, SettingsLoader};

/// Content factory that loads all inputs from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── game_data.json
/// ├── settings.toml
/// └── market.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const GAME_DATA_FILE: &'static str = "game_data.json";
    pub const SETTINGS_FILE: &'static str = "settings.toml";
    pub const MARKET_FILE: &'static str = "market.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load static game data from `game_data.json`.
    pub fn load_game_data(&self) -> LoadResult<GameData> {
        GameDataLoader::load(&self.game_data_path())
    }

    /// Load player settings from `settings.toml`.
    pub fn load_settings(&self) -> LoadResult<PlayerConfig> {
        SettingsLoader::load(&self.settings_path())
    }

    /// Load the market snapshot from `market.json`.
    pub fn load_market(&self) -> LoadResult<MarketSnapshot> {
        MarketLoader::load(&self.market_path())
    }

    pub fn game_data_path(&self) -> PathBuf {
        self.data_dir.join(Self::GAME_DATA_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(Self::SETTINGS_FILE)
    }

    pub fn market_path(&self) -> PathBuf {
        self.data_dir.join(Self::MARKET_FILE)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
