#![allow(dead_code)]

use skilling_core::data::{ActionTypeDetail, ConsumableDetail, hrid};
use skilling_core::{Action, ActionDetail, Buff, GameData, ItemCount, ItemDetail, LevelRequirement};

/// One action per hour.
pub const ONE_HOUR: u64 = 3_600_000_000_000;

pub const MILK: &str = "/items/milk";
pub const CHEESE: &str = "/items/cheese";
pub const GOURMET_TEA: &str = "/items/gourmet_tea";
pub const ARTISAN_TEA: &str = "/items/artisan_tea";

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Game data builder for scenario tests.
#[derive(Default)]
pub struct Fixture {
    pub data: GameData,
}

impl Fixture {
    pub fn new() -> Self {
        let mut fixture = Self::default();
        for (i, action_type) in [hrid::MILKING, hrid::CHEESESMITHING, hrid::COOKING, hrid::ALCHEMY]
            .into_iter()
            .enumerate()
        {
            fixture.data.action_type_detail_map.insert(
                action_type.to_string(),
                ActionTypeDetail {
                    hrid: action_type.to_string(),
                    name: hrid::action_type_name(action_type).to_string(),
                    sort_index: i as i32,
                },
            );
        }
        fixture.data.enhancement_level_total_bonus_multiplier_table = vec![0.0, 2.0, 4.2];
        fixture
            .item(ItemDetail::new(hrid::COIN, "Coin", "/item_categories/currency"))
            .item(ItemDetail::new(MILK, "Milk", "/item_categories/resource"))
            .item(ItemDetail::new(CHEESE, "Cheese", "/item_categories/resource"))
    }

    pub fn item(mut self, item: ItemDetail) -> Self {
        self.data.item_detail_map.insert(item.hrid.clone(), item);
        self
    }

    pub fn tea(self, tea_hrid: &str, name: &str, sort_index: i32, buff: Buff, usable_in: &[&str]) -> Self {
        self.item(
            ItemDetail::new(tea_hrid, name, hrid::DRINK_CATEGORY)
                .with_sort_index(sort_index)
                .with_consumable(ConsumableDetail {
                    usable_in_action_type_map: Some(
                        usable_in.iter().map(|t| (t.to_string(), true)).collect(),
                    ),
                    buffs: Some(vec![buff]),
                }),
        )
    }

    /// Registers an authored action: inputs and outputs as `(item, count)`.
    pub fn action(
        mut self,
        action_hrid: &str,
        action_type: &str,
        level: u32,
        inputs: &[(&str, f64)],
        outputs: &[(&str, f64)],
    ) -> Self {
        let items = |pairs: &[(&str, f64)]| -> Option<Vec<ItemCount>> {
            (!pairs.is_empty()).then(|| pairs.iter().map(|(i, c)| ItemCount::new(*i, *c)).collect())
        };
        let detail = ActionDetail {
            hrid: action_hrid.to_string(),
            action_type: action_type.to_string(),
            name: hrid::slug(action_hrid).to_string(),
            level_requirement: LevelRequirement {
                skill_hrid: format!("/skills/{}", hrid::action_type_name(action_type)),
                level,
            },
            base_time_cost: ONE_HOUR,
            input_items: items(inputs),
            output_items: items(outputs),
            ..ActionDetail::default()
        };
        self.data.action_detail_map.insert(detail.hrid.clone(), detail);
        self
    }

    pub fn build(self) -> GameData {
        self.data
    }
}

/// Hour-long cheesesmithing action turning `milk` milk into `cheese` cheese.
pub fn cheese_action(milk: f64, cheese: f64) -> Action {
    Action::new(
        "/actions/cheesesmithing/cheese",
        hrid::CHEESESMITHING,
        "/skills/cheesesmithing",
        1,
        ONE_HOUR,
    )
    .with_input(MILK, milk)
    .with_output(CHEESE, cheese)
}
