//! Tea (drink consumable) contribution and tea loadouts.
//!
//! A tea grants `flatBoost + ratioBoost` for each of its buffs, but only in
//! the action types it is usable in. [`TeaCatalog`] precomputes, per action
//! type, the teas that can be used there and every loadout that fits in the
//! available consumable slots.

use std::collections::BTreeMap;

use crate::bonus::Bonuses;
use crate::config::TeaSettings;
use crate::data::{GameData, ItemDetail, hrid};
use crate::error::{CalcError, ErrorSeverity, report};

/// Teas consumed per hour while an action runs.
pub const TEA_PER_HOUR: f64 = 12.0;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeaError {
    #[error("tea {tea} does not exist")]
    UnknownItem { tea: String },

    #[error("item {tea} is not a consumable")]
    NotConsumable { tea: String },

    #[error("tea {tea} has no buffs")]
    NoBuffs { tea: String },

    #[error("tea {tea} is not usable in action type {action_type}")]
    NotUsable { tea: String, action_type: String },
}

impl CalcError for TeaError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoBuffs { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem { .. } => "TEA_UNKNOWN_ITEM",
            Self::NotConsumable { .. } => "TEA_NOT_CONSUMABLE",
            Self::NoBuffs { .. } => "TEA_NO_BUFFS",
            Self::NotUsable { .. } => "TEA_NOT_USABLE",
        }
    }
}

/// Bonus vector granted by one tea in an action type.
pub fn tea_bonuses(data: &GameData, action_type: &str, tea_hrid: &str) -> Result<Bonuses, TeaError> {
    let tea = data.item(tea_hrid).ok_or_else(|| TeaError::UnknownItem {
        tea: tea_hrid.to_string(),
    })?;
    let consumable = tea
        .consumable_detail
        .as_ref()
        .ok_or_else(|| TeaError::NotConsumable {
            tea: tea_hrid.to_string(),
        })?;
    let buffs = consumable.buffs.as_ref().ok_or_else(|| TeaError::NoBuffs {
        tea: tea_hrid.to_string(),
    })?;
    if !consumable.is_usable_in(action_type) {
        return Err(TeaError::NotUsable {
            tea: tea_hrid.to_string(),
            action_type: action_type.to_string(),
        });
    }

    let mut bonuses = Bonuses::zero();
    for buff in buffs {
        bonuses.add_hrid(&buff.type_hrid, buff.flat_boost + buff.ratio_boost);
    }
    Ok(bonuses)
}

/// Chosen teas and the combined bonus they grant in one action type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeaLoadout {
    pub teas: Vec<String>,
    pub bonuses: Bonuses,
}

impl TeaLoadout {
    /// Loadout with no teas.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a loadout from tea hrids.
    ///
    /// Invalid teas are reported and contribute nothing, but stay in the
    /// loadout: the player still pays for them.
    pub fn from_teas(data: &GameData, action_type: &str, teas: &[String]) -> Self {
        let bonuses = teas
            .iter()
            .map(|tea| {
                tea_bonuses(data, action_type, tea).unwrap_or_else(|err| {
                    report(&err);
                    Bonuses::zero()
                })
            })
            .sum();

        Self {
            teas: teas.to_vec(),
            bonuses,
        }
    }

    pub fn len(&self) -> usize {
        self.teas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teas.is_empty()
    }
}

/// Per-action-type tea tables, built once from game data.
#[derive(Clone, Debug, Default)]
pub struct TeaCatalog {
    usable: BTreeMap<String, Vec<String>>,
    loadouts: BTreeMap<String, Vec<TeaLoadout>>,
    empty: TeaLoadout,
}

impl TeaCatalog {
    /// Builds usable-tea lists and candidate loadouts (up to
    /// [`TeaSettings::MAX_SLOTS_LIMIT`] teas) for every action type.
    pub fn build(data: &GameData) -> Self {
        let drinks: Vec<&ItemDetail> = data
            .items_sorted()
            .into_iter()
            .filter(|item| item.category_hrid == hrid::DRINK_CATEGORY)
            .collect();

        let mut usable = BTreeMap::new();
        let mut loadouts = BTreeMap::new();

        for action_type in data.action_types_sorted() {
            let teas: Vec<String> = drinks
                .iter()
                .filter(|item| tea_bonuses(data, action_type, &item.hrid).is_ok())
                .map(|item| item.hrid.clone())
                .collect();

            let candidates: Vec<TeaLoadout> = combinations_up_to(&teas, TeaSettings::MAX_SLOTS_LIMIT)
                .into_iter()
                .map(|combo| TeaLoadout::from_teas(data, action_type, &combo))
                .collect();

            tracing::debug!(
                action_type,
                teas = teas.len(),
                loadouts = candidates.len(),
                "built tea loadouts"
            );

            usable.insert(action_type.to_string(), teas);
            loadouts.insert(action_type.to_string(), candidates);
        }

        Self {
            usable,
            loadouts,
            empty: TeaLoadout::empty(),
        }
    }

    /// Teas usable in an action type, in item sort order.
    pub fn usable_teas(&self, action_type: &str) -> &[String] {
        self.usable.get(action_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every loadout with at most `max_slots` teas for an action type.
    ///
    /// The empty loadout always comes first; larger loadouts follow in order
    /// of size, then tea order.
    pub fn candidate_loadouts(&self, action_type: &str, max_slots: usize) -> Vec<&TeaLoadout> {
        match self.loadouts.get(action_type) {
            Some(loadouts) => loadouts.iter().filter(|l| l.len() <= max_slots).collect(),
            None => vec![&self.empty],
        }
    }

    /// Loadout for an explicit tea list, reusing a precomputed candidate when
    /// one matches exactly.
    pub fn loadout(&self, data: &GameData, action_type: &str, teas: &[String]) -> TeaLoadout {
        self.loadouts
            .get(action_type)
            .and_then(|candidates| candidates.iter().find(|l| l.teas == teas))
            .cloned()
            .unwrap_or_else(|| TeaLoadout::from_teas(data, action_type, teas))
    }
}

/// All subsets of `items` with at most `max` elements, ordered by size and
/// then lexicographically by position.
fn combinations_up_to(items: &[String], max: usize) -> Vec<Vec<String>> {
    fn extend(items: &[String], start: usize, size: usize, current: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i].clone());
            extend(items, i + 1, size, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    for size in 0..=max.min(items.len()) {
        extend(items, 0, size, &mut Vec::with_capacity(size), &mut out);
    }
    out
}
