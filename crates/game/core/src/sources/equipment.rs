//! Equipment contribution.
//!
//! Equipment stats are named in camelCase (`skillingEfficiency`,
//! `milkingSpeed`, ...). General stats apply to every action type; stats
//! prefixed with a skill name apply only to that skill's action type. The
//! whole vector is then scaled by the slot's enhancement multiplier.

use crate::bonus::{Bonuses, BuffType};
use crate::config::PlayerConfig;
use crate::data::{GameData, hrid};
use crate::error::{CalcError, ErrorSeverity, report};

/// Stats that apply regardless of action type.
const GENERAL_STATS: [(&str, BuffType); 5] = [
    ("skillingEfficiency", BuffType::Efficiency),
    ("gatheringQuantity", BuffType::Gathering),
    ("skillingRareFind", BuffType::RareFind),
    ("skillingExperience", BuffType::Wisdom),
    ("enhancingSuccess", BuffType::EnhancingSuccess),
];

/// Enhancement bonus multiplier for jewelry slots.
const JEWELRY_ENHANCEMENT_FACTOR: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipmentError {
    #[error("item {item} equipped in {slot} does not exist")]
    UnknownItem { slot: String, item: String },

    #[error("item {item} equipped in {slot} is not equipment")]
    NotEquipment { slot: String, item: String },
}

impl CalcError for EquipmentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem { .. } => "EQUIPMENT_UNKNOWN_ITEM",
            Self::NotEquipment { .. } => "EQUIPMENT_NOT_EQUIPMENT",
        }
    }
}

/// Returns true for slots whose enhancement bonus is multiplied by five.
pub fn is_jewelry_slot(slot_hrid: &str) -> bool {
    hrid::JEWELRY_SLOTS.contains(&slot_hrid)
}

/// Bonus vector granted by one equipped item for an action type.
///
/// An empty slot contributes nothing. Items without non-combat stats are
/// valid and contribute nothing either.
pub fn equipment_bonuses(
    data: &GameData,
    action_type: &str,
    slot_hrid: &str,
    item_hrid: Option<&str>,
    enhancement_level: u32,
) -> Result<Bonuses, EquipmentError> {
    let Some(item_hrid) = item_hrid else {
        return Ok(Bonuses::zero());
    };

    let item = data.item(item_hrid).ok_or_else(|| EquipmentError::UnknownItem {
        slot: slot_hrid.to_string(),
        item: item_hrid.to_string(),
    })?;
    let equipment = item
        .equipment_detail
        .as_ref()
        .ok_or_else(|| EquipmentError::NotEquipment {
            slot: slot_hrid.to_string(),
            item: item_hrid.to_string(),
        })?;

    let mut bonuses = Bonuses::zero();
    for (stat, buff) in GENERAL_STATS {
        bonuses.add(buff, equipment.stat(stat));
    }

    let skill = hrid::action_type_name(action_type);
    bonuses.add(BuffType::ActionSpeed, equipment.stat(&format!("{skill}Speed")));
    bonuses.add(BuffType::Efficiency, equipment.stat(&format!("{skill}Efficiency")));

    let jewelry = if is_jewelry_slot(slot_hrid) {
        JEWELRY_ENHANCEMENT_FACTOR
    } else {
        1.0
    };
    let multiplier = 1.0 + 0.01 * jewelry * data.enhancement_multiplier(enhancement_level);

    Ok(bonuses.scaled(multiplier))
}

/// Sum of every equipped slot's contribution for an action type.
///
/// Invalid slots are reported and skipped.
pub fn equipment_bonuses_for(data: &GameData, config: &PlayerConfig, action_type: &str) -> Bonuses {
    config
        .equipped()
        .map(|(slot, item)| {
            equipment_bonuses(data, action_type, slot, Some(item), config.equipment_level(slot))
                .unwrap_or_else(|err| {
                    report(&err);
                    Bonuses::zero()
                })
        })
        .sum()
}
