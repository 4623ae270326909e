//! Per-action yield formulas.
//!
//! Pure functions of an action's static data and the aggregate bonus vector.
//! [`ProfitEngine`](super::ProfitEngine) strings them together; they are
//! exposed separately so each rule can be checked on its own.

use crate::bonus::{BuffType, Bonuses};
use crate::data::{DropTableEntry, ItemCount};

/// Nanoseconds in one hour.
pub const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Net quantities whose magnitude is at or below this are treated as zero.
pub const CANCELLATION_EPSILON: f64 = 1e-9;

/// Skill level used for every formula: the higher of the player's level and
/// the requirement, plus flat level buffs for the skill.
pub fn effective_level(raw_level: u32, required_level: u32, bonuses: &Bonuses, skill_hrid: &str) -> f64 {
    f64::from(raw_level.max(required_level)) + bonuses.level_bonus(skill_hrid)
}

/// Requirement after `action_level` buffs (which raise it).
pub fn adjusted_requirement(required_level: u32, bonuses: &Bonuses) -> f64 {
    f64::from(required_level) + bonuses[BuffType::ActionLevel]
}

/// One percent extra efficiency per level above the adjusted requirement.
pub fn level_efficiency(effective: f64, adjusted: f64) -> f64 {
    0.01 * (effective - adjusted).max(0.0)
}

/// Chance that one action produces its outputs.
///
/// Actions that cannot fail always succeed. Risky actions get
/// `alchemy_success` as a multiplicative bonus, minus a penalty of up to 90%
/// when the player is under-leveled.
pub fn success_rate(base: f64, effective: f64, adjusted: f64, bonuses: &Bonuses) -> f64 {
    if base >= 1.0 {
        return 1.0;
    }

    let mut bonus = bonuses[BuffType::AlchemySuccess];
    if adjusted > 0.0 && effective < adjusted {
        bonus -= 0.9 * (1.0 - effective / adjusted);
    }

    ((1.0 + bonus) * base).clamp(0.0, 1.0)
}

pub fn actions_per_hour(base_time_cost: u64, bonuses: &Bonuses, level_efficiency: f64) -> f64 {
    (NANOS_PER_HOUR / base_time_cost as f64)
        * (1.0 + bonuses[BuffType::ActionSpeed])
        * (1.0 + bonuses[BuffType::Efficiency] + level_efficiency)
}

/// Inputs after artisan savings. The upgrade item, if any, is always consumed
/// in full.
pub fn scaled_inputs(inputs: &[ItemCount], upgrade_item: Option<&str>, bonuses: &Bonuses) -> Vec<ItemCount> {
    let factor = (1.0 - bonuses[BuffType::Artisan]).clamp(0.0, 1.0);

    let mut scaled: Vec<ItemCount> = inputs
        .iter()
        .map(|input| ItemCount::new(input.item_hrid.clone(), input.count * factor))
        .collect();
    if let Some(item) = upgrade_item {
        scaled.push(ItemCount::new(item, 1.0));
    }
    scaled
}

/// Fixed outputs scaled by gourmet and success rate, followed by the
/// expected yield of each drop table entry.
pub fn scaled_outputs(
    outputs: &[ItemCount],
    drop_table: &[DropTableEntry],
    success_rate: f64,
    bonuses: &Bonuses,
) -> Vec<ItemCount> {
    let output_factor = (1.0 + bonuses[BuffType::Gourmet]) * success_rate;
    let drop_factor = 1.0 + bonuses[BuffType::Gathering];

    outputs
        .iter()
        .map(|output| ItemCount::new(output.item_hrid.clone(), output.count * output_factor))
        .chain(
            drop_table
                .iter()
                .map(|drop| ItemCount::new(drop.item_hrid.clone(), drop.expected_count() * drop_factor)),
        )
        .collect()
}

/// Expected yield of essence and rare drops. Rare drops scale with
/// `rare_find`.
pub fn secondary_drops(
    essence_drop_table: &[DropTableEntry],
    rare_drop_table: &[DropTableEntry],
    bonuses: &Bonuses,
) -> Vec<ItemCount> {
    let rare_factor = 1.0 + bonuses[BuffType::RareFind];

    essence_drop_table
        .iter()
        .map(|drop| ItemCount::new(drop.item_hrid.clone(), drop.expected_count()))
        .chain(
            rare_drop_table
                .iter()
                .map(|drop| ItemCount::new(drop.item_hrid.clone(), drop.expected_count() * rare_factor)),
        )
        .collect()
}

/// Cancels items that appear on both sides.
///
/// Computes the net quantity (outputs minus inputs) of every item in
/// first-seen order across inputs then outputs. Positive nets become outputs,
/// negative nets become inputs, zero nets disappear. Items appearing only on
/// one side keep their (summed) quantity.
pub fn cancel_common_items(inputs: &[ItemCount], outputs: &[ItemCount]) -> (Vec<ItemCount>, Vec<ItemCount>) {
    let mut net: Vec<ItemCount> = Vec::with_capacity(inputs.len() + outputs.len());

    let mut accumulate = |item_hrid: &str, delta: f64| {
        match net.iter_mut().find(|entry| entry.item_hrid == item_hrid) {
            Some(entry) => entry.count += delta,
            None => net.push(ItemCount::new(item_hrid, delta)),
        }
    };
    for input in inputs {
        accumulate(&input.item_hrid, -input.count);
    }
    for output in outputs {
        accumulate(&output.item_hrid, output.count);
    }

    let mut remaining_inputs = Vec::new();
    let mut remaining_outputs = Vec::new();
    for entry in net {
        if entry.count > CANCELLATION_EPSILON {
            remaining_outputs.push(entry);
        } else if entry.count < -CANCELLATION_EPSILON {
            remaining_inputs.push(ItemCount::new(entry.item_hrid, -entry.count));
        }
    }

    (remaining_inputs, remaining_outputs)
}
