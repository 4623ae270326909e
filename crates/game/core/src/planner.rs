//! Batch evaluation over the whole action catalog.
//!
//! [`Planner`] owns the static game data and the tables derived from it
//! (action catalog, tea catalog). Those are built once in [`Planner::new`];
//! each [`Planner::compute_all`] call then evaluates every action for one
//! player configuration and market snapshot.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::bonus::Bonuses;
use crate::catalog::{Action, ActionCatalog};
use crate::config::PlayerConfig;
use crate::data::{GameData, hrid};
use crate::engine::{ComputedAction, ProfitEngine};
use crate::market::MarketSnapshot;
use crate::sources::{TeaCatalog, TeaLoadout, equipment_bonuses_for};

/// Action types the calculator never evaluates.
const EXCLUDED_ACTION_TYPES: [&str; 2] = [hrid::COMBAT, hrid::ENHANCING];

#[derive(Clone, Debug)]
pub struct Planner {
    data: GameData,
    actions: ActionCatalog,
    teas: TeaCatalog,
}

impl Planner {
    pub fn new(data: GameData) -> Self {
        let actions = ActionCatalog::build(&data);
        let teas = TeaCatalog::build(&data);
        info!(actions = actions.len(), "planner ready");

        Self { data, actions, teas }
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn actions(&self) -> &ActionCatalog {
        &self.actions
    }

    pub fn teas(&self) -> &TeaCatalog {
        &self.teas
    }

    /// Evaluates every eligible action, one result per action in catalog
    /// order.
    pub fn compute_all(&self, config: &PlayerConfig, market: &MarketSnapshot) -> Vec<ComputedAction> {
        let engine = ProfitEngine::new(&self.data, config, market);
        let mut equipment_by_type: BTreeMap<&str, Bonuses> = BTreeMap::new();
        let mut results = Vec::with_capacity(self.actions.len());

        for action in self.actions.iter() {
            if !self.is_eligible(action, config) {
                continue;
            }

            let equipment = equipment_by_type
                .entry(action.action_type.as_str())
                .or_insert_with(|| equipment_bonuses_for(&self.data, config, &action.action_type));

            let result = if config.teas.auto_select {
                self.best_loadout(&engine, action, config.teas.max_slots, equipment)
            } else {
                engine.evaluate(action, &self.manual_loadout(action, config), equipment)
            };
            results.push(result);
        }

        info!(
            evaluated = results.len(),
            auto_tea = config.teas.auto_select,
            "computed action profits"
        );
        results
    }

    fn is_eligible(&self, action: &Action, config: &PlayerConfig) -> bool {
        if EXCLUDED_ACTION_TYPES.contains(&action.action_type.as_str()) {
            return false;
        }
        if config.filters.hide_unmet_level_requirements
            && config.level(action.skill_hrid()) < action.required_level()
        {
            debug!(action = %action.hrid, "level requirement not met");
            return false;
        }
        true
    }

    /// Most profitable candidate loadout. The first candidate wins ties, so
    /// no tea is preferred unless a tea strictly improves profit.
    fn best_loadout(
        &self,
        engine: &ProfitEngine<'_>,
        action: &Action,
        max_slots: usize,
        equipment: &Bonuses,
    ) -> ComputedAction {
        let mut best: Option<ComputedAction> = None;

        for loadout in self.teas.candidate_loadouts(&action.action_type, max_slots) {
            let candidate = engine.evaluate(action, loadout, equipment);
            if best.as_ref().is_none_or(|b| candidate.profit > b.profit) {
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| engine.evaluate(action, &TeaLoadout::empty(), equipment))
    }

    fn manual_loadout(&self, action: &Action, config: &PlayerConfig) -> TeaLoadout {
        match config.teas.loadouts.get(&action.action_type) {
            Some(teas) => self.teas.loadout(&self.data, &action.action_type, teas),
            None => TeaLoadout::empty(),
        }
    }
}

/// Sorts results by profit per hour, most profitable first. Equal profits keep
/// their relative order.
pub fn rank_by_profit(results: &mut [ComputedAction]) {
    results.sort_by(|a, b| b.profit.total_cmp(&a.profit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ActionDetail, ActionTypeDetail, ItemCount, ItemDetail, LevelRequirement};

    fn detail(action_hrid: &str, action_type: &str, level: u32, output: &str) -> ActionDetail {
        ActionDetail {
            hrid: action_hrid.to_string(),
            action_type: action_type.to_string(),
            name: action_hrid.to_string(),
            level_requirement: LevelRequirement {
                skill_hrid: format!("/skills/{}", hrid::action_type_name(action_type)),
                level,
            },
            base_time_cost: 3_600_000_000_000,
            output_items: Some(vec![ItemCount::new(output, 1.0)]),
            ..ActionDetail::default()
        }
    }

    fn data() -> GameData {
        let mut data = GameData::default();
        for (i, action_type) in [hrid::MILKING, hrid::COMBAT, hrid::ENHANCING].into_iter().enumerate() {
            data.action_type_detail_map.insert(
                action_type.to_string(),
                ActionTypeDetail {
                    hrid: action_type.to_string(),
                    name: hrid::action_type_name(action_type).to_string(),
                    sort_index: i as i32,
                },
            );
        }
        data.item_detail_map.insert(
            "/items/milk".to_string(),
            ItemDetail::new("/items/milk", "Milk", "/item_categories/resource"),
        );
        for detail in [
            detail("/actions/milking/cow", hrid::MILKING, 1, "/items/milk"),
            detail("/actions/milking/goat", hrid::MILKING, 50, "/items/milk"),
            detail("/actions/combat/slime", hrid::COMBAT, 1, "/items/milk"),
            detail("/actions/enhancing/enhance", hrid::ENHANCING, 1, "/items/milk"),
        ] {
            data.action_detail_map.insert(detail.hrid.clone(), detail);
        }
        data
    }

    #[test]
    fn combat_and_enhancing_are_skipped() {
        let planner = Planner::new(data());
        let results = planner.compute_all(&PlayerConfig::new(), &MarketSnapshot::new());
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["/actions/milking/cow", "/actions/milking/goat"]);
    }

    #[test]
    fn level_filter_hides_unmet_requirements() {
        let planner = Planner::new(data());
        let mut config = PlayerConfig::new().with_level("/skills/milking", 10);
        config.filters.hide_unmet_level_requirements = true;

        let results = planner.compute_all(&config, &MarketSnapshot::new());
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["/actions/milking/cow"]);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let planner = Planner::new(data());
        let market = MarketSnapshot::new().with_quote("Milk", 10.0, 10.0);
        let mut results = planner.compute_all(&PlayerConfig::new(), &market);
        results[1].profit = 100.0;

        rank_by_profit(&mut results);
        assert_eq!(results[0].id, "/actions/milking/goat");

        let mut ties = planner.compute_all(&PlayerConfig::new(), &market);
        rank_by_profit(&mut ties);
        assert_eq!(ties[0].id, "/actions/milking/cow");
        assert_eq!(ties[1].id, "/actions/milking/goat");
    }
}
