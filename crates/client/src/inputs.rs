//! Resolves where each calculator input comes from.
//!
//! Precedence per input: explicit file flag, then the file of the same name
//! in `--data-dir`, then the bundled sample.

use std::path::{Path, PathBuf};

use anyhow::Result;
use skilling_content::{ContentFactory, GameDataLoader, MarketLoader, SettingsLoader, bundled};
use skilling_core::{GameData, MarketSnapshot, PlayerConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Bundled,
}

impl Source {
    fn resolve(explicit: Option<&Path>, data_dir: Option<&Path>, file_name: &str) -> Self {
        match (explicit, data_dir) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, Some(dir)) => Self::File(dir.join(file_name)),
            (None, None) => Self::Bundled,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Bundled => "bundled sample".to_string(),
        }
    }
}

/// Sources for the three inputs.
#[derive(Clone, Debug)]
pub struct InputSources {
    pub game_data: Source,
    pub settings: Source,
    pub market: Source,
}

impl InputSources {
    pub fn new(
        data_dir: Option<&Path>,
        game_data: Option<&Path>,
        settings: Option<&Path>,
        market: Option<&Path>,
    ) -> Self {
        Self {
            game_data: Source::resolve(game_data, data_dir, ContentFactory::GAME_DATA_FILE),
            settings: Source::resolve(settings, data_dir, ContentFactory::SETTINGS_FILE),
            market: Source::resolve(market, data_dir, ContentFactory::MARKET_FILE),
        }
    }

    pub fn load(&self) -> Result<(GameData, PlayerConfig, MarketSnapshot)> {
        let data = match &self.game_data {
            Source::File(path) => GameDataLoader::load(path)?,
            Source::Bundled => bundled::game_data()?,
        };
        let settings = match &self.settings {
            Source::File(path) => SettingsLoader::load(path)?,
            Source::Bundled => bundled::settings()?,
        };
        let market = match &self.market {
            Source::File(path) => MarketLoader::load(path)?,
            Source::Bundled => bundled::market()?,
        };

        tracing::info!(
            game_data = %self.game_data.describe(),
            settings = %self.settings.describe(),
            market = %self.market.describe(),
            "loaded inputs"
        );
        Ok((data, settings, market))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_beats_data_dir() {
        let sources = InputSources::new(
            Some(Path::new("/data")),
            Some(Path::new("/elsewhere/items.json")),
            None,
            None,
        );
        assert_eq!(sources.game_data, Source::File(PathBuf::from("/elsewhere/items.json")));
        assert_eq!(sources.settings, Source::File(PathBuf::from("/data/settings.toml")));
        assert_eq!(sources.market, Source::File(PathBuf::from("/data/market.json")));
    }

    #[test]
    fn nothing_given_uses_bundled_samples() {
        let sources = InputSources::new(None, None, None, None);
        assert_eq!(sources.game_data, Source::Bundled);

        let (data, settings, market) = sources.load().unwrap();
        assert!(!data.item_detail_map.is_empty());
        assert!(settings.teas.auto_select);
        assert!(market.timestamp.is_some());
    }

    #[test]
    fn files_override_bundled_samples() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("mine.toml");
        std::fs::write(&settings, "[teas]\nauto_select = false\n").unwrap();

        let sources = InputSources::new(None, None, Some(&settings), None);
        let (_, config, _) = sources.load().unwrap();
        assert!(!config.teas.auto_select);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let sources = InputSources::new(Some(dir.path()), None, None, None);
        assert!(sources.load().is_err());
    }
}
