use tracing::debug;

use super::Action;
use super::alchemy::generate_alchemy_actions;
use crate::data::{GameData, hrid};

/// Sorted view over every evaluable action.
///
/// Authored actions come first in canonical game order
/// (`actionType.sortIndex * 1000 + action.sortIndex`), followed by the
/// generated alchemy actions. Authored alchemy actions are replaced by the
/// generated ones.
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    pub fn build(data: &GameData) -> Self {
        let mut actions = authored_actions(data);
        let authored = actions.len();
        actions.extend(generate_alchemy_actions(data));

        debug!(
            authored,
            generated = actions.len() - authored,
            "built action catalog"
        );

        Self { actions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn get(&self, hrid: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.hrid == hrid)
    }

    pub fn by_type<'a>(&'a self, action_type: &'a str) -> impl Iterator<Item = &'a Action> {
        self.actions
            .iter()
            .filter(move |action| action.action_type == action_type)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Action> {
        self.actions
            .iter()
            .filter(move |action| action.category == category)
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for action in &self.actions {
            if !categories.contains(&action.category.as_str()) {
                categories.push(&action.category);
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Authored non-alchemy actions, one per hrid, in canonical order.
fn authored_actions(data: &GameData) -> Vec<Action> {
    let sort_key = |action_type: &str, sort_index: i32| -> i64 {
        let type_index = data.action_type(action_type).map_or(0, |t| t.sort_index);
        i64::from(type_index) * 1000 + i64::from(sort_index)
    };

    let mut details: Vec<_> = data
        .action_detail_map
        .values()
        .filter(|detail| detail.action_type != hrid::ALCHEMY)
        .collect();
    details.sort_by(|a, b| {
        sort_key(&a.action_type, a.sort_index)
            .cmp(&sort_key(&b.action_type, b.sort_index))
            .then_with(|| a.hrid.cmp(&b.hrid))
    });

    details.into_iter().map(Action::from).collect()
}
