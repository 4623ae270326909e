use std::collections::BTreeMap;

/// A single buff granted by a house room, community buff or consumable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Buff {
    pub unique_hrid: String,
    pub type_hrid: String,
    pub ratio_boost: f64,
    pub ratio_boost_level_bonus: f64,
    pub flat_boost: f64,
    pub flat_boost_level_bonus: f64,
}

impl Buff {
    pub fn flat(type_hrid: impl Into<String>, flat_boost: f64, flat_boost_level_bonus: f64) -> Self {
        Self {
            type_hrid: type_hrid.into(),
            flat_boost,
            flat_boost_level_bonus,
            ..Self::default()
        }
    }

    /// Magnitude at a given upgrade level (level 1 is the base boost).
    pub fn flat_at_level(&self, level: u32) -> f64 {
        self.flat_boost + self.flat_boost_level_bonus * (level.saturating_sub(1)) as f64
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuffTypeDetail {
    pub hrid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_combat: bool,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort_index: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HouseRoomDetail {
    pub hrid: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_hrid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usable_in_action_type_map: BTreeMap<String, bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_buffs: Vec<Buff>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_buffs: Vec<Buff>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort_index: i32,
}

impl HouseRoomDetail {
    pub fn is_usable_in(&self, action_type: &str) -> bool {
        self.usable_in_action_type_map
            .get(action_type)
            .copied()
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CommunityBuffDetail {
    pub hrid: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usable_in_action_type_map: BTreeMap<String, bool>,
    pub buff: Buff,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort_index: i32,
}

impl CommunityBuffDetail {
    pub fn is_usable_in(&self, action_type: &str) -> bool {
        self.usable_in_action_type_map
            .get(action_type)
            .copied()
            .unwrap_or(false)
    }
}
