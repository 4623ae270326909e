//! Action catalog: the actions the calculator evaluates.
//!
//! Authored actions come straight from game data; alchemy actions are
//! generated from item alchemy metadata (see [`alchemy`]). Both are turned
//! into the same immutable [`Action`] shape.

pub mod actions;
pub mod alchemy;

pub use actions::ActionCatalog;
pub use alchemy::{AlchemyOperation, generate_alchemy_actions};

use crate::data::{ActionDetail, DropTableEntry, ItemCount, LevelRequirement};

/// Immutable action definition as seen by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub hrid: String,
    pub name: String,
    pub action_type: String,
    pub category: String,
    pub level_requirement: LevelRequirement,
    /// Duration of one action in nanoseconds.
    pub base_time_cost: u64,
    pub inputs: Vec<ItemCount>,
    pub outputs: Vec<ItemCount>,
    pub drop_table: Vec<DropTableEntry>,
    pub essence_drop_table: Vec<DropTableEntry>,
    pub rare_drop_table: Vec<DropTableEntry>,
    pub upgrade_item: Option<String>,
    /// Chance that outputs are produced; 1 for actions that cannot fail.
    pub base_success_rate: f64,
}

impl Action {
    /// Starts an action with no inputs, outputs or drops.
    pub fn new(
        hrid: impl Into<String>,
        action_type: impl Into<String>,
        skill_hrid: impl Into<String>,
        level: u32,
        base_time_cost: u64,
    ) -> Self {
        let hrid = hrid.into();
        Self {
            name: crate::data::hrid::slug(&hrid).to_string(),
            hrid,
            action_type: action_type.into(),
            category: String::new(),
            level_requirement: LevelRequirement {
                skill_hrid: skill_hrid.into(),
                level,
            },
            base_time_cost,
            inputs: Vec::new(),
            outputs: Vec::new(),
            drop_table: Vec::new(),
            essence_drop_table: Vec::new(),
            rare_drop_table: Vec::new(),
            upgrade_item: None,
            base_success_rate: 1.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_input(mut self, item_hrid: impl Into<String>, count: f64) -> Self {
        self.inputs.push(ItemCount::new(item_hrid, count));
        self
    }

    pub fn with_output(mut self, item_hrid: impl Into<String>, count: f64) -> Self {
        self.outputs.push(ItemCount::new(item_hrid, count));
        self
    }

    pub fn with_drop(mut self, entry: DropTableEntry) -> Self {
        self.drop_table.push(entry);
        self
    }

    pub fn with_upgrade_item(mut self, item_hrid: impl Into<String>) -> Self {
        self.upgrade_item = Some(item_hrid.into());
        self
    }

    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.base_success_rate = rate;
        self
    }

    pub fn skill_hrid(&self) -> &str {
        &self.level_requirement.skill_hrid
    }

    pub fn required_level(&self) -> u32 {
        self.level_requirement.level
    }
}

impl From<&ActionDetail> for Action {
    fn from(detail: &ActionDetail) -> Self {
        Self {
            hrid: detail.hrid.clone(),
            name: detail.name.clone(),
            action_type: detail.action_type.clone(),
            category: detail.category.clone(),
            level_requirement: detail.level_requirement.clone(),
            base_time_cost: detail.base_time_cost,
            inputs: detail.input_items.clone().unwrap_or_default(),
            outputs: detail.output_items.clone().unwrap_or_default(),
            drop_table: detail.drop_table.clone().unwrap_or_default(),
            essence_drop_table: detail.essence_drop_table.clone().unwrap_or_default(),
            rare_drop_table: detail.rare_drop_table.clone().unwrap_or_default(),
            upgrade_item: Some(detail.upgrade_item_hrid.clone()).filter(|hrid| !hrid.is_empty()),
            base_success_rate: 1.0,
        }
    }
}
