/// Item hrid with a (possibly fractional, expected-value) quantity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemCount {
    pub item_hrid: String,
    pub count: f64,
}

impl ItemCount {
    pub fn new(item_hrid: impl Into<String>, count: f64) -> Self {
        Self {
            item_hrid: item_hrid.into(),
            count,
        }
    }
}

/// Probabilistic yield entry. Counts are uniformly distributed in `min..=max`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DropTableEntry {
    pub item_hrid: String,
    pub drop_rate: f64,
    pub min_count: f64,
    pub max_count: f64,
}

impl DropTableEntry {
    pub fn new(item_hrid: impl Into<String>, drop_rate: f64, min_count: f64, max_count: f64) -> Self {
        Self {
            item_hrid: item_hrid.into(),
            drop_rate,
            min_count,
            max_count,
        }
    }

    /// Expected number of items per action.
    pub fn expected_count(&self) -> f64 {
        self.drop_rate * 0.5 * (self.min_count + self.max_count)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LevelRequirement {
    pub skill_hrid: String,
    pub level: u32,
}

/// Authored action definition.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionDetail {
    pub hrid: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub function: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub action_type: String,
    pub category: String,
    pub name: String,
    pub level_requirement: LevelRequirement,
    /// Duration of one action in nanoseconds.
    pub base_time_cost: u64,
    pub drop_table: Option<Vec<DropTableEntry>>,
    pub essence_drop_table: Option<Vec<DropTableEntry>>,
    pub rare_drop_table: Option<Vec<DropTableEntry>>,
    /// Empty when the action has no upgrade input.
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgrade_item_hrid: String,
    pub input_items: Option<Vec<ItemCount>>,
    pub output_items: Option<Vec<ItemCount>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort_index: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionTypeDetail {
    pub hrid: String,
    pub name: String,
    pub sort_index: i32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkillDetail {
    pub hrid: String,
    pub name: String,
    pub sort_index: i32,
}
