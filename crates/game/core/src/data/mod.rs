//! Static game data as shipped by the game client.
//!
//! Shapes mirror the client's `init_client_info` document (camelCase keys when
//! the `serde` feature is enabled). Optional fields are `Option` or defaulted;
//! loaders in `skilling-content` validate cross references eagerly, so the
//! rest of the crate treats lookups that fail as data bugs and degrades to
//! neutral values.
//!
//! All maps are ordered so that every derived table is deterministic.

mod actions;
mod buffs;
mod items;

use std::collections::BTreeMap;

pub use actions::{
    ActionDetail, ActionTypeDetail, DropTableEntry, ItemCount, LevelRequirement, SkillDetail,
};
pub use buffs::{Buff, BuffTypeDetail, CommunityBuffDetail, HouseRoomDetail};
pub use items::{AlchemyDetail, ConsumableDetail, EquipmentDetail, EquipmentTypeDetail, ItemDetail};

/// Well-known hrids the calculator relies on.
pub mod hrid {
    pub const COIN: &str = "/items/coin";
    pub const ALCHEMY_ESSENCE: &str = "/items/alchemy_essence";
    pub const SMALL_ARTISANS_CRATE: &str = "/items/small_artisans_crate";
    pub const MEDIUM_ARTISANS_CRATE: &str = "/items/medium_artisans_crate";
    pub const LARGE_ARTISANS_CRATE: &str = "/items/large_artisans_crate";

    pub const DRINK_CATEGORY: &str = "/item_categories/drink";

    pub const ALCHEMY_SKILL: &str = "/skills/alchemy";

    pub const ACTION_TYPE_PREFIX: &str = "/action_types/";
    pub const COMBAT: &str = "/action_types/combat";
    pub const ENHANCING: &str = "/action_types/enhancing";
    pub const ALCHEMY: &str = "/action_types/alchemy";
    pub const MILKING: &str = "/action_types/milking";
    pub const FORAGING: &str = "/action_types/foraging";
    pub const WOODCUTTING: &str = "/action_types/woodcutting";
    pub const CHEESESMITHING: &str = "/action_types/cheesesmithing";
    pub const CRAFTING: &str = "/action_types/crafting";
    pub const TAILORING: &str = "/action_types/tailoring";
    pub const COOKING: &str = "/action_types/cooking";
    pub const BREWING: &str = "/action_types/brewing";

    /// Equipment slots whose enhancement bonus is multiplied by five.
    pub const JEWELRY_SLOTS: [&str; 3] = [
        "/equipment_types/earrings",
        "/equipment_types/rings",
        "/equipment_types/necklaces",
    ];

    /// Returns the bare name of an action type (`/action_types/cooking` -> `cooking`).
    pub fn action_type_name(action_type: &str) -> &str {
        action_type
            .strip_prefix(ACTION_TYPE_PREFIX)
            .unwrap_or(action_type)
    }

    /// Returns the last path segment of any hrid (`/items/milk` -> `milk`).
    pub fn slug(hrid: &str) -> &str {
        hrid.rsplit('/').next().unwrap_or(hrid)
    }
}

/// Complete static data document.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment_type_detail_map: BTreeMap<String, EquipmentTypeDetail>,
    pub skill_detail_map: BTreeMap<String, SkillDetail>,
    pub item_detail_map: BTreeMap<String, ItemDetail>,
    /// Enhancement bonus multiplier, indexed by enhancement level.
    pub enhancement_level_total_bonus_multiplier_table: Vec<f64>,
    pub action_detail_map: BTreeMap<String, ActionDetail>,
    pub action_type_detail_map: BTreeMap<String, ActionTypeDetail>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buff_type_detail_map: BTreeMap<String, BuffTypeDetail>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub house_room_detail_map: BTreeMap<String, HouseRoomDetail>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub community_buff_type_detail_map: BTreeMap<String, CommunityBuffDetail>,
}

impl GameData {
    pub fn item(&self, hrid: &str) -> Option<&ItemDetail> {
        self.item_detail_map.get(hrid)
    }

    /// Display name for an item, falling back to the hrid itself.
    pub fn item_name<'a>(&'a self, hrid: &'a str) -> &'a str {
        self.item(hrid).map_or(hrid, |item| item.name.as_str())
    }

    /// Guaranteed vendor price of an item (0 when unknown).
    pub fn sell_price(&self, hrid: &str) -> f64 {
        self.item(hrid).map_or(0.0, |item| item.sell_price)
    }

    pub fn action_type(&self, hrid: &str) -> Option<&ActionTypeDetail> {
        self.action_type_detail_map.get(hrid)
    }

    /// Items ordered by their sort index (hrid breaks ties).
    pub fn items_sorted(&self) -> Vec<&ItemDetail> {
        let mut items: Vec<_> = self.item_detail_map.values().collect();
        items.sort_by(|a, b| a.sort_index.cmp(&b.sort_index).then(a.hrid.cmp(&b.hrid)));
        items
    }

    /// Action type hrids ordered by their sort index.
    pub fn action_types_sorted(&self) -> Vec<&str> {
        let mut types: Vec<_> = self.action_type_detail_map.values().collect();
        types.sort_by(|a, b| a.sort_index.cmp(&b.sort_index).then(a.hrid.cmp(&b.hrid)));
        types.into_iter().map(|t| t.hrid.as_str()).collect()
    }

    /// Enhancement multiplier for an enhancement level.
    ///
    /// Levels past the end of the table use the last entry.
    pub fn enhancement_multiplier(&self, level: u32) -> f64 {
        let table = &self.enhancement_level_total_bonus_multiplier_table;
        table
            .get(level as usize)
            .or_else(|| table.last())
            .copied()
            .unwrap_or(0.0)
    }
}
