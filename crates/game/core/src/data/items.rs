use std::collections::BTreeMap;

use super::actions::{DropTableEntry, ItemCount};
use super::buffs::Buff;

/// Equipment slot definition.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EquipmentTypeDetail {
    pub hrid: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_location_hrid: String,
    pub sort_index: i32,
}

/// Item definition with optional type-specific detail blocks.
///
/// # Design: Base + Detail Pattern
///
/// - Base fields are common to every item (name, category, vendor price)
/// - `equipment_detail` is present for wearable items
/// - `consumable_detail` is present for foods and drinks (teas)
/// - `alchemy_detail` is present for items that can be coinified,
///   decomposed or transmuted
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemDetail {
    pub hrid: String,
    pub name: String,
    pub category_hrid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sell_price: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort_index: i32,
    pub equipment_detail: Option<EquipmentDetail>,
    pub consumable_detail: Option<ConsumableDetail>,
    pub alchemy_detail: Option<AlchemyDetail>,
}

impl ItemDetail {
    pub fn new(hrid: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            hrid: hrid.into(),
            name: name.into(),
            category_hrid: category.into(),
            ..Self::default()
        }
    }

    pub fn with_sell_price(mut self, sell_price: f64) -> Self {
        self.sell_price = sell_price;
        self
    }

    pub fn with_item_level(mut self, item_level: u32) -> Self {
        self.item_level = item_level;
        self
    }

    pub fn with_sort_index(mut self, sort_index: i32) -> Self {
        self.sort_index = sort_index;
        self
    }

    pub fn with_equipment(mut self, detail: EquipmentDetail) -> Self {
        self.equipment_detail = Some(detail);
        self
    }

    pub fn with_consumable(mut self, detail: ConsumableDetail) -> Self {
        self.consumable_detail = Some(detail);
        self
    }

    pub fn with_alchemy(mut self, detail: AlchemyDetail) -> Self {
        self.alchemy_detail = Some(detail);
        self
    }
}

/// Wearable item data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EquipmentDetail {
    /// Equipment slot hrid (`/equipment_types/...`).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub equipment_type: String,
    /// Skilling stats keyed by camelCase stat name (`milkingSpeed`, ...).
    pub noncombat_stats: Option<BTreeMap<String, f64>>,
}

impl EquipmentDetail {
    pub fn stat(&self, name: &str) -> f64 {
        self.noncombat_stats
            .as_ref()
            .and_then(|stats| stats.get(name))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Food and drink data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConsumableDetail {
    pub usable_in_action_type_map: Option<BTreeMap<String, bool>>,
    pub buffs: Option<Vec<Buff>>,
}

impl ConsumableDetail {
    pub fn is_usable_in(&self, action_type: &str) -> bool {
        self.usable_in_action_type_map
            .as_ref()
            .and_then(|map| map.get(action_type))
            .copied()
            .unwrap_or(false)
    }
}

/// Alchemy metadata; drives procedural alchemy action generation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlchemyDetail {
    /// Items consumed per alchemy action.
    #[cfg_attr(feature = "serde", serde(default = "default_bulk_multiplier"))]
    pub bulk_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_coinifiable: bool,
    pub decompose_items: Option<Vec<ItemCount>>,
    pub transmute_drop_table: Option<Vec<DropTableEntry>>,
    pub transmute_success_rate: Option<f64>,
}

#[cfg(feature = "serde")]
fn default_bulk_multiplier() -> f64 {
    1.0
}

impl Default for AlchemyDetail {
    fn default() -> Self {
        Self {
            bulk_multiplier: 1.0,
            is_coinifiable: false,
            decompose_items: None,
            transmute_drop_table: None,
            transmute_success_rate: None,
        }
    }
}
