//! Profitability engine.
//!
//! [`ProfitEngine`] evaluates one action under one tea loadout and returns a
//! [`ComputedAction`]. The pipeline is:
//!
//! ```text
//! bonuses ─► levels ─► success rate ─► actions/hour
//!                                          │
//! inputs × artisan ──┐                     ▼
//!                    ├─► cancellation ─► pricing ─► profit/hour
//! outputs × gourmet ─┘
//! ```
//!
//! Evaluation never fails: missing prices and bad configuration have already
//! been turned into sentinels or zero contributions upstream.

#[cfg(feature = "serde")]
pub mod serde_coins;
pub mod yields;

pub use yields::{NANOS_PER_HOUR, cancel_common_items};

use tracing::debug;

use crate::bonus::Bonuses;
use crate::catalog::Action;
use crate::config::PlayerConfig;
use crate::data::{GameData, ItemCount};
use crate::market::{MarketSnapshot, Pricer};
use crate::sources::{TEA_PER_HOUR, TeaLoadout, community_bonuses, house_bonuses};

/// Evaluation result for one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ComputedAction {
    /// Action hrid.
    pub id: String,
    pub name: String,
    pub action_type: String,
    pub skill_hrid: String,
    pub level_required: u32,
    pub teas: Vec<String>,
    /// Consumed items per action, after artisan and cancellation.
    pub inputs: Vec<ItemCount>,
    /// Cost of one action's inputs; infinite when an input cannot be bought.
    #[cfg_attr(feature = "serde", serde(with = "serde_coins"))]
    pub inputs_price: f64,
    /// Produced items per action, after bonuses and cancellation.
    pub outputs: Vec<ItemCount>,
    /// Revenue of one action's outputs.
    #[cfg_attr(feature = "serde", serde(with = "serde_coins"))]
    pub outputs_price: f64,
    /// Worst relative bid-ask spread among the outputs.
    pub output_max_bid_ask_spread: f64,
    pub success_rate: f64,
    pub actions_per_hour: f64,
    /// Coins per hour, net of tea costs.
    #[cfg_attr(feature = "serde", serde(with = "serde_coins"))]
    pub profit: f64,
}

/// Evaluates actions for one player against one market snapshot.
#[derive(Clone, Copy, Debug)]
pub struct ProfitEngine<'a> {
    data: &'a GameData,
    config: &'a PlayerConfig,
    pricer: Pricer<'a>,
}

impl<'a> ProfitEngine<'a> {
    pub fn new(data: &'a GameData, config: &'a PlayerConfig, market: &'a MarketSnapshot) -> Self {
        Self {
            data,
            config,
            pricer: Pricer::new(data, market, &config.market),
        }
    }

    /// Combined bonus vector for an action type: equipment, house rooms,
    /// community buffs, and the tea loadout.
    pub fn aggregate_bonuses(&self, action_type: &str, loadout: &TeaLoadout, equipment: &Bonuses) -> Bonuses {
        let house = house_bonuses(self.data, self.config, action_type);
        let community = community_bonuses(self.data, self.config, action_type);
        Bonuses::combine(&[equipment, &house, &community, &loadout.bonuses])
    }

    /// Evaluates one action with a tea loadout and the player's equipment
    /// bonuses for the action's type.
    pub fn evaluate(&self, action: &Action, loadout: &TeaLoadout, equipment: &Bonuses) -> ComputedAction {
        let bonuses = self.aggregate_bonuses(&action.action_type, loadout, equipment);

        let skill = action.skill_hrid();
        let required = action.required_level();
        let effective = yields::effective_level(self.config.level(skill), required, &bonuses, skill);
        let adjusted = yields::adjusted_requirement(required, &bonuses);
        let level_efficiency = yields::level_efficiency(effective, adjusted);

        let success_rate = yields::success_rate(action.base_success_rate, effective, adjusted, &bonuses);
        let actions_per_hour = yields::actions_per_hour(action.base_time_cost, &bonuses, level_efficiency);

        let inputs = yields::scaled_inputs(&action.inputs, action.upgrade_item.as_deref(), &bonuses);
        let mut outputs = yields::scaled_outputs(&action.outputs, &action.drop_table, success_rate, &bonuses);
        if self.config.filters.include_secondary_drops {
            outputs.extend(yields::secondary_drops(
                &action.essence_drop_table,
                &action.rare_drop_table,
                &bonuses,
            ));
        }
        let (inputs, outputs) = cancel_common_items(&inputs, &outputs);

        let inputs_price = self.inputs_price(&inputs);
        let outputs_price = self.outputs_price(&outputs);
        let tea_cost = self.tea_cost(loadout);
        let profit = (outputs_price - inputs_price) * actions_per_hour - tea_cost;

        let output_max_bid_ask_spread = outputs
            .iter()
            .map(|output| self.pricer.spread(&output.item_hrid))
            .fold(0.0, f64::max);

        debug!(
            action = %action.hrid,
            teas = loadout.len(),
            success_rate,
            actions_per_hour,
            profit,
            "evaluated action"
        );

        ComputedAction {
            id: action.hrid.clone(),
            name: action.name.clone(),
            action_type: action.action_type.clone(),
            skill_hrid: skill.to_string(),
            level_required: required,
            teas: loadout.teas.clone(),
            inputs,
            inputs_price,
            outputs,
            outputs_price,
            output_max_bid_ask_spread,
            success_rate,
            actions_per_hour,
            profit,
        }
    }

    fn inputs_price(&self, inputs: &[ItemCount]) -> f64 {
        inputs
            .iter()
            .map(|input| input.count * self.pricer.input_price(&input.item_hrid))
            .sum()
    }

    fn outputs_price(&self, outputs: &[ItemCount]) -> f64 {
        outputs
            .iter()
            .map(|output| output.count * self.pricer.output_price(&output.item_hrid))
            .sum()
    }

    /// Hourly cost of keeping every tea in the loadout active.
    fn tea_cost(&self, loadout: &TeaLoadout) -> f64 {
        loadout
            .teas
            .iter()
            .map(|tea| self.pricer.input_price(tea) * TEA_PER_HOUR)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::BuffType;
    use crate::data::{HouseRoomDetail, ItemDetail, hrid};

    fn data() -> GameData {
        let mut data = GameData::default();
        for item in [
            ItemDetail::new("/items/milk", "Milk", "/item_categories/resource"),
            ItemDetail::new("/items/cheese", "Cheese", "/item_categories/resource"),
            ItemDetail::new("/items/tea", "Tea", hrid::DRINK_CATEGORY),
        ] {
            data.item_detail_map.insert(item.hrid.clone(), item);
        }
        data.house_room_detail_map.insert(
            "/house_rooms/dairy_barn".to_string(),
            HouseRoomDetail {
                hrid: "/house_rooms/dairy_barn".to_string(),
                usable_in_action_type_map: [(hrid::CHEESESMITHING.to_string(), true)].into(),
                action_buffs: vec![crate::data::Buff::flat("/buff_types/efficiency", 0.015, 0.015)],
                ..HouseRoomDetail::default()
            },
        );
        data
    }

    fn market() -> MarketSnapshot {
        MarketSnapshot::new()
            .with_quote("Milk", 1.0, 2.0)
            .with_quote("Cheese", 10.0, 12.0)
            .with_quote("Tea", 5.0, 6.0)
    }

    fn cheese() -> Action {
        Action::new("/actions/cheesesmithing/cheese", hrid::CHEESESMITHING, "/skills/cheesesmithing", 1, 3_600_000_000_000)
            .with_input("/items/milk", 2.0)
            .with_output("/items/cheese", 1.0)
    }

    #[test]
    fn house_rooms_join_the_aggregate() {
        let data = data();
        let market = market();
        let config = PlayerConfig::new().with_house_room("/house_rooms/dairy_barn", 3);
        let engine = ProfitEngine::new(&data, &config, &market);

        let bonuses = engine.aggregate_bonuses(hrid::CHEESESMITHING, &TeaLoadout::empty(), &Bonuses::zero());
        assert!((bonuses[BuffType::Efficiency] - 0.045).abs() < 1e-12);
        assert!(engine.aggregate_bonuses(hrid::MILKING, &TeaLoadout::empty(), &Bonuses::zero()).is_zero());
    }

    #[test]
    fn tea_cost_is_charged_per_hour() {
        let data = data();
        let market = market();
        let mut config = PlayerConfig::new();
        config.market.input_bid_ask_proportion = 0.0;
        config.market.output_bid_ask_proportion = 0.0;
        let engine = ProfitEngine::new(&data, &config, &market);

        let plain = engine.evaluate(&cheese(), &TeaLoadout::empty(), &Bonuses::zero());
        let tea = TeaLoadout {
            teas: vec!["/items/tea".to_string()],
            bonuses: Bonuses::zero(),
        };
        let with_tea = engine.evaluate(&cheese(), &tea, &Bonuses::zero());

        assert!((plain.profit - with_tea.profit - 6.0 * TEA_PER_HOUR).abs() < 1e-9);
        assert_eq!(with_tea.teas, vec!["/items/tea".to_string()]);
    }

    #[test]
    fn spread_is_the_worst_output_spread() {
        let data = data();
        let market = market();
        let config = PlayerConfig::new();
        let engine = ProfitEngine::new(&data, &config, &market);

        let result = engine.evaluate(&cheese(), &TeaLoadout::empty(), &Bonuses::zero());
        assert!((result.output_max_bid_ask_spread - 2.0 / 12.0).abs() < 1e-12);

        let no_outputs = Action::new("/actions/milking/none", hrid::MILKING, "/skills/milking", 1, 1_000);
        let result = engine.evaluate(&no_outputs, &TeaLoadout::empty(), &Bonuses::zero());
        assert_eq!(result.output_max_bid_ask_spread, 0.0);
    }

    #[test]
    fn secondary_drops_are_opt_in() {
        let data = data();
        let market = market();
        let mut action = cheese();
        action.essence_drop_table = vec![crate::data::DropTableEntry::new("/items/milk", 1.0, 1.0, 1.0)];

        let config = PlayerConfig::new();
        let engine = ProfitEngine::new(&data, &config, &market);
        let result = engine.evaluate(&action, &TeaLoadout::empty(), &Bonuses::zero());
        assert_eq!(result.inputs, vec![ItemCount::new("/items/milk", 2.0)]);

        let mut config = PlayerConfig::new();
        config.filters.include_secondary_drops = true;
        let engine = ProfitEngine::new(&data, &config, &market);
        let result = engine.evaluate(&action, &TeaLoadout::empty(), &Bonuses::zero());
        assert_eq!(result.inputs, vec![ItemCount::new("/items/milk", 1.0)]);
    }
}
