//! Player configuration: the character build and pricing preferences.
//!
//! Owned by the caller and read-only to the engine. Every section defaults to
//! neutral values so a partial settings file is always usable.

use std::collections::BTreeMap;

use crate::data::hrid;

/// Character build plus market and display preferences.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    /// Skill level per skill hrid.
    pub levels: BTreeMap<String, u32>,
    /// Equipped item per equipment slot hrid (`None` = empty slot).
    pub equipment: BTreeMap<String, Option<String>>,
    /// Enhancement level per equipment slot hrid.
    pub equipment_levels: BTreeMap<String, u32>,
    /// Level per house room hrid.
    pub house_rooms: BTreeMap<String, u32>,
    /// Level per community buff hrid.
    pub community_buffs: BTreeMap<String, u32>,
    pub market: MarketSettings,
    pub filters: Filters,
    pub teas: TeaSettings,
}

impl PlayerConfig {
    /// Level assumed for skills missing from the configuration.
    pub const DEFAULT_SKILL_LEVEL: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Raw skill level for a skill hrid.
    pub fn level(&self, skill_hrid: &str) -> u32 {
        self.levels
            .get(skill_hrid)
            .copied()
            .unwrap_or(Self::DEFAULT_SKILL_LEVEL)
    }

    pub fn house_room_level(&self, room_hrid: &str) -> u32 {
        self.house_rooms.get(room_hrid).copied().unwrap_or(0)
    }

    pub fn community_buff_level(&self, buff_hrid: &str) -> u32 {
        self.community_buffs.get(buff_hrid).copied().unwrap_or(0)
    }

    pub fn equipment_level(&self, slot_hrid: &str) -> u32 {
        self.equipment_levels.get(slot_hrid).copied().unwrap_or(0)
    }

    /// Iterates occupied equipment slots as `(slot, item)`.
    pub fn equipped(&self) -> impl Iterator<Item = (&str, &str)> {
        self.equipment
            .iter()
            .filter_map(|(slot, item)| Some((slot.as_str(), item.as_deref()?)))
    }

    pub fn with_level(mut self, skill_hrid: impl Into<String>, level: u32) -> Self {
        self.levels.insert(skill_hrid.into(), level);
        self
    }

    pub fn with_equipment(
        mut self,
        slot_hrid: impl Into<String>,
        item_hrid: impl Into<String>,
        enhancement_level: u32,
    ) -> Self {
        let slot = slot_hrid.into();
        self.equipment_levels.insert(slot.clone(), enhancement_level);
        self.equipment.insert(slot, Some(item_hrid.into()));
        self
    }

    pub fn with_house_room(mut self, room_hrid: impl Into<String>, level: u32) -> Self {
        self.house_rooms.insert(room_hrid.into(), level);
        self
    }

    pub fn with_community_buff(mut self, buff_hrid: impl Into<String>, level: u32) -> Self {
        self.community_buffs.insert(buff_hrid.into(), level);
        self
    }

    /// Installs [`DEFAULT_TEA_LOADOUTS`] as the manual loadouts.
    pub fn with_default_tea_loadouts(mut self) -> Self {
        for (action_type, teas) in DEFAULT_TEA_LOADOUTS {
            self.teas.loadouts.insert(
                action_type.to_string(),
                teas.iter().map(|tea| tea.to_string()).collect(),
            );
        }
        self
    }
}

/// Bid/ask weighting used when pricing items.
///
/// A proportion of 0 takes the first quote named, 1 the second:
/// inputs interpolate ask → bid, outputs interpolate bid → ask.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketSettings {
    pub input_bid_ask_proportion: f64,
    pub output_bid_ask_proportion: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Filters {
    /// Skip actions whose level requirement the player does not meet.
    pub hide_unmet_level_requirements: bool,
    /// Count essence and rare drop tables as outputs.
    pub include_secondary_drops: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TeaSettings {
    /// Search every tea combination and keep the most profitable one.
    pub auto_select: bool,
    /// Maximum number of teas active at once.
    pub max_slots: usize,
    /// Manual loadouts per action type hrid, used when `auto_select` is off.
    pub loadouts: BTreeMap<String, Vec<String>>,
}

impl TeaSettings {
    pub const DEFAULT_MAX_SLOTS: usize = 2;
    /// Upper bound accepted by the settings loader.
    pub const MAX_SLOTS_LIMIT: usize = 4;
}

impl Default for TeaSettings {
    fn default() -> Self {
        Self {
            auto_select: false,
            max_slots: Self::DEFAULT_MAX_SLOTS,
            loadouts: BTreeMap::new(),
        }
    }
}

/// Two-tea loadout commonly used for each production action type.
pub const DEFAULT_TEA_LOADOUTS: [(&str, [&str; 2]); 9] = [
    (hrid::MILKING, ["/items/efficiency_tea", "/items/gathering_tea"]),
    (hrid::FORAGING, ["/items/efficiency_tea", "/items/gathering_tea"]),
    (hrid::WOODCUTTING, ["/items/efficiency_tea", "/items/gathering_tea"]),
    (hrid::CHEESESMITHING, ["/items/efficiency_tea", "/items/artisan_tea"]),
    (hrid::CRAFTING, ["/items/efficiency_tea", "/items/artisan_tea"]),
    (hrid::TAILORING, ["/items/efficiency_tea", "/items/artisan_tea"]),
    (hrid::COOKING, ["/items/efficiency_tea", "/items/gourmet_tea"]),
    (hrid::BREWING, ["/items/gourmet_tea", "/items/artisan_tea"]),
    (hrid::ALCHEMY, ["/items/efficiency_tea", "/items/catalytic_tea"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_fall_back_to_neutral_values() {
        let config = PlayerConfig::new();
        assert_eq!(config.level("/skills/milking"), 1);
        assert_eq!(config.house_room_level("/house_rooms/dairy_barn"), 0);
        assert_eq!(config.community_buff_level("/community_buff_types/gourmet"), 0);
        assert_eq!(config.equipment_level("/equipment_types/body"), 0);
        assert_eq!(config.teas.max_slots, 2);
        assert!(!config.teas.auto_select);
    }

    #[test]
    fn equipped_skips_empty_slots() {
        let mut config = PlayerConfig::new().with_equipment(
            "/equipment_types/milking_tool",
            "/items/cheese_brush",
            3,
        );
        config
            .equipment
            .insert("/equipment_types/body".to_string(), None);

        let equipped: Vec<_> = config.equipped().collect();
        assert_eq!(
            equipped,
            vec![("/equipment_types/milking_tool", "/items/cheese_brush")]
        );
        assert_eq!(config.equipment_level("/equipment_types/milking_tool"), 3);
    }

    #[test]
    fn default_tea_loadouts_cover_production_types() {
        let config = PlayerConfig::new().with_default_tea_loadouts();
        assert_eq!(config.teas.loadouts.len(), DEFAULT_TEA_LOADOUTS.len());
        assert_eq!(
            config.teas.loadouts[hrid::BREWING],
            vec!["/items/gourmet_tea", "/items/artisan_tea"]
        );
    }
}
