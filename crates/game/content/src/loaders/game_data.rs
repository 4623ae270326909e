//! Static game data loader.

use std::path::Path;

use anyhow::bail;
use skilling_core::data::{DropTableEntry, ItemCount};
use skilling_core::{ActionDetail, GameData};
use tracing::{debug, warn};

use crate::loaders::{LoadResult, read_file};

/// Loader for the game's static data document (JSON).
pub struct GameDataLoader;

impl GameDataLoader {
    /// Load and validate game data from a JSON file.
    pub fn load(path: &Path) -> LoadResult<GameData> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid game data in {}: {:#}", path.display(), e))
    }

    /// Parse and validate game data from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> LoadResult<GameData> {
        let data: GameData = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse game data JSON: {}", e))?;

        Self::validate(&data)?;

        debug!(
            items = data.item_detail_map.len(),
            actions = data.action_detail_map.len(),
            action_types = data.action_type_detail_map.len(),
            "loaded game data"
        );
        Ok(data)
    }

    /// Cross-reference checks.
    ///
    /// Broken action definitions and dangling item references are fatal.
    /// House rooms and community buffs that mention unknown action types are
    /// only reported, since they simply never apply.
    pub fn validate(data: &GameData) -> LoadResult<()> {
        if data.enhancement_level_total_bonus_multiplier_table.is_empty() {
            bail!("enhancement bonus multiplier table is empty");
        }

        for action in data.action_detail_map.values() {
            validate_action(data, action)?;
        }

        for item in data.item_detail_map.values() {
            let Some(alchemy) = &item.alchemy_detail else {
                continue;
            };
            let decompose = alchemy.decompose_items.iter().flatten().map(|c| c.item_hrid.as_str());
            let transmute = alchemy.transmute_drop_table.iter().flatten().map(|d| d.item_hrid.as_str());
            for referenced in decompose.chain(transmute) {
                if data.item(referenced).is_none() {
                    bail!("item {} alchemy references unknown item {}", item.hrid, referenced);
                }
            }
        }

        for room in data.house_room_detail_map.values() {
            warn_unknown_action_types(data, &room.hrid, room.usable_in_action_type_map.keys());
        }
        for community in data.community_buff_type_detail_map.values() {
            warn_unknown_action_types(data, &community.hrid, community.usable_in_action_type_map.keys());
        }

        Ok(())
    }
}

fn validate_action(data: &GameData, action: &ActionDetail) -> LoadResult<()> {
    if data.action_type(&action.action_type).is_none() {
        bail!("action {} has unknown action type {}", action.hrid, action.action_type);
    }
    if action.base_time_cost == 0 {
        bail!("action {} has a zero base time cost", action.hrid);
    }

    let counts = |list: &Option<Vec<ItemCount>>| -> Vec<String> {
        list.iter().flatten().map(|c| c.item_hrid.clone()).collect()
    };
    let drops = |list: &Option<Vec<DropTableEntry>>| -> Vec<String> {
        list.iter().flatten().map(|d| d.item_hrid.clone()).collect()
    };

    let mut referenced = counts(&action.input_items);
    referenced.extend(counts(&action.output_items));
    referenced.extend(drops(&action.drop_table));
    referenced.extend(drops(&action.essence_drop_table));
    referenced.extend(drops(&action.rare_drop_table));
    if !action.upgrade_item_hrid.is_empty() {
        referenced.push(action.upgrade_item_hrid.clone());
    }

    for item in referenced {
        if data.item(&item).is_none() {
            bail!("action {} references unknown item {}", action.hrid, item);
        }
    }
    Ok(())
}

fn warn_unknown_action_types<'a>(data: &GameData, owner: &str, action_types: impl Iterator<Item = &'a String>) {
    for action_type in action_types {
        if data.action_type(action_type).is_none() {
            warn!(owner, action_type = %action_type, "usable-in map references unknown action type");
        }
    }
}
