//! Procedural alchemy actions.
//!
//! The game does not author alchemy actions; every item with alchemy
//! metadata can be coinified, decomposed and/or transmuted. This module
//! derives one [`Action`] per (item, operation) pair from item metadata
//! alone, so the result can be regenerated at any time.
//!
//! Every alchemy action consumes `bulkMultiplier` copies of the item and
//! carries two auxiliary drop tables:
//!
//! ```text
//! essence rate = (timeCost / 3.6e11) * (itemLevel + 100) / 100
//! crate rate   = timeCost / (8 * 3.6e12) * tierScale(itemLevel)
//! ```

use super::Action;
use crate::data::{AlchemyDetail, DropTableEntry, GameData, ItemCount, ItemDetail, hrid};

/// Duration of every alchemy action: 20 seconds.
pub const ALCHEMY_TIME_COST: u64 = 20_000_000_000;

pub const COINIFY_SUCCESS_RATE: f64 = 0.7;
pub const DECOMPOSE_SUCCESS_RATE: f64 = 0.6;

/// Minimum coin cost of one transmute.
const TRANSMUTE_MIN_COIN_COST: f64 = 50.0;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum AlchemyOperation {
    /// Sell the item for coins.
    Coinify,
    /// Break the item down into components.
    Decompose,
    /// Turn the item into a random related item.
    Transmute,
}

impl AlchemyOperation {
    pub fn category(self) -> String {
        format!("/action_categories/alchemy/{self}")
    }

    fn action_hrid(self, item: &ItemDetail) -> String {
        format!("/actions/alchemy/{self}/{}", hrid::slug(&item.hrid))
    }
}

/// Generates every alchemy action, in item sort order.
///
/// Items without alchemy metadata are skipped.
pub fn generate_alchemy_actions(data: &GameData) -> Vec<Action> {
    let mut actions = Vec::new();

    for item in data.items_sorted() {
        let Some(alchemy) = &item.alchemy_detail else {
            continue;
        };

        if alchemy.is_coinifiable {
            actions.push(coinify(item, alchemy));
        }
        if let Some(decompose_items) = &alchemy.decompose_items {
            actions.push(decompose(item, alchemy, decompose_items));
        }
        if let (Some(drops), Some(rate)) = (&alchemy.transmute_drop_table, alchemy.transmute_success_rate) {
            actions.push(transmute(item, alchemy, drops, rate));
        }
    }

    actions
}

/// Alchemy essence yield for an item level and action duration.
pub fn essence_drop_table(item_level: u32, time_cost: u64) -> Vec<DropTableEntry> {
    let level = f64::from(item_level);
    let rate = (time_cost as f64 / 3.6e11) * ((level + 100.0) / 100.0);
    vec![DropTableEntry::new(hrid::ALCHEMY_ESSENCE, rate, 1.0, 1.0)]
}

/// Artisan's crate yield; the crate tier depends on the item level band.
pub fn rare_drop_table(item_level: u32, time_cost: u64) -> Vec<DropTableEntry> {
    let level = f64::from(item_level);
    let base_rate = time_cost as f64 / (8.0 * 3.6e12);

    let (crate_hrid, scale) = if item_level < 35 {
        (hrid::SMALL_ARTISANS_CRATE, (level + 100.0) / 100.0)
    } else if item_level < 70 {
        (hrid::MEDIUM_ARTISANS_CRATE, (level - 35.0 + 100.0) / 150.0)
    } else {
        (hrid::LARGE_ARTISANS_CRATE, (level - 70.0 + 100.0) / 200.0)
    };

    vec![DropTableEntry::new(crate_hrid, base_rate * scale, 1.0, 1.0)]
}

fn base_action(
    item: &ItemDetail,
    alchemy: &AlchemyDetail,
    operation: AlchemyOperation,
    success_rate: f64,
) -> Action {
    let mut action = Action::new(
        operation.action_hrid(item),
        hrid::ALCHEMY,
        hrid::ALCHEMY_SKILL,
        item.item_level,
        ALCHEMY_TIME_COST,
    )
    .with_name(format!("{} ({operation})", item.name))
    .with_category(operation.category())
    .with_input(item.hrid.clone(), alchemy.bulk_multiplier)
    .with_success_rate(success_rate);
    action.essence_drop_table = essence_drop_table(item.item_level, ALCHEMY_TIME_COST);
    action.rare_drop_table = rare_drop_table(item.item_level, ALCHEMY_TIME_COST);
    action
}

fn coinify(item: &ItemDetail, alchemy: &AlchemyDetail) -> Action {
    let mut action = base_action(item, alchemy, AlchemyOperation::Coinify, COINIFY_SUCCESS_RATE);
    action.outputs.push(ItemCount::new(
        hrid::COIN,
        5.0 * item.sell_price * alchemy.bulk_multiplier,
    ));
    action
}

fn decompose(item: &ItemDetail, alchemy: &AlchemyDetail, components: &[ItemCount]) -> Action {
    let mut action = base_action(item, alchemy, AlchemyOperation::Decompose, DECOMPOSE_SUCCESS_RATE);
    // Level + 10, not level alone: a level-0 item still costs coins.
    action.inputs.push(ItemCount::new(
        hrid::COIN,
        5.0 * (f64::from(item.item_level) + 10.0) * alchemy.bulk_multiplier,
    ));
    action.outputs = components
        .iter()
        .map(|c| ItemCount::new(c.item_hrid.clone(), c.count * alchemy.bulk_multiplier))
        .collect();
    action
}

fn transmute(item: &ItemDetail, alchemy: &AlchemyDetail, drops: &[DropTableEntry], success_rate: f64) -> Action {
    let mut action = base_action(item, alchemy, AlchemyOperation::Transmute, success_rate);
    action.inputs.push(ItemCount::new(
        hrid::COIN,
        TRANSMUTE_MIN_COIN_COST.max(0.2 * item.sell_price) * alchemy.bulk_multiplier,
    ));
    action.outputs = drops
        .iter()
        .map(|d| ItemCount::new(d.item_hrid.clone(), d.expected_count() * alchemy.bulk_multiplier))
        .collect();
    action
}
