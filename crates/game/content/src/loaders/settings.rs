//! Player settings loader.

use std::path::Path;

use anyhow::bail;
use skilling_core::{PlayerConfig, TeaSettings};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for player settings from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a PlayerConfig
    pub fn load(path: &Path) -> LoadResult<PlayerConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid settings in {}: {:#}", path.display(), e))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> LoadResult<PlayerConfig> {
        let config: PlayerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        Self::validate(&config)?;

        debug!(
            skills = config.levels.len(),
            equipped = config.equipped().count(),
            auto_tea = config.teas.auto_select,
            "loaded settings"
        );
        Ok(config)
    }

    pub fn validate(config: &PlayerConfig) -> LoadResult<()> {
        let proportions = [
            ("input_bid_ask_proportion", config.market.input_bid_ask_proportion),
            ("output_bid_ask_proportion", config.market.output_bid_ask_proportion),
        ];
        for (name, value) in proportions {
            if !(0.0..=1.0).contains(&value) {
                bail!("market.{name} must be within [0, 1], got {value}");
            }
        }

        if config.teas.max_slots > TeaSettings::MAX_SLOTS_LIMIT {
            bail!(
                "teas.max_slots must be at most {}, got {}",
                TeaSettings::MAX_SLOTS_LIMIT,
                config.teas.max_slots
            );
        }
        for (action_type, teas) in &config.teas.loadouts {
            if teas.len() > config.teas.max_slots {
                bail!(
                    "tea loadout for {action_type} has {} teas but only {} slots",
                    teas.len(),
                    config.teas.max_slots
                );
            }
        }

        Ok(())
    }
}
