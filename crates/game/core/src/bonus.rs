//! Bonus vectors and the buff types they are keyed by.
//!
//! Every source of modifiers (equipment, house rooms, community buffs, teas)
//! produces a [`Bonuses`] vector. Vectors are combined by key-wise addition,
//! so the order in which sources are summed never affects the result:
//!
//! ```text
//! total = equipment + house + community + teas
//! ```
//!
//! The engine only ever reads the aggregate.

use core::ops::{Add, AddAssign, Index, IndexMut};

use strum::{EnumCount, IntoEnumIterator};

/// Prefix shared by all buff type hrids in game data.
pub const BUFF_TYPE_PREFIX: &str = "/buff_types/";

/// Non-combat buff types tracked by the calculator.
///
/// The string form (`snake_case`) matches the suffix of the game's
/// `/buff_types/...` hrids.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum BuffType {
    /// Chance to perform an extra action for free.
    Efficiency,
    /// Extra yield from drop tables.
    Gathering,
    /// Shorter action duration.
    ActionSpeed,
    /// Extra yield from crafted outputs.
    Gourmet,
    /// Reduced input consumption.
    Artisan,
    /// Shift of the action's effective level requirement.
    ActionLevel,
    AlchemySuccess,
    EnhancingSuccess,
    RareFind,
    Wisdom,
    TaskSpeed,
    Processing,

    // Per-skill level boosts
    MilkingLevel,
    ForagingLevel,
    WoodcuttingLevel,
    CheesesmithingLevel,
    CraftingLevel,
    TailoringLevel,
    CookingLevel,
    BrewingLevel,
    AlchemyLevel,
    EnhancingLevel,
}

impl BuffType {
    /// Number of tracked buff types.
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    /// Parses a `/buff_types/<name>` hrid.
    ///
    /// Returns `None` for combat buffs and anything else the calculator does
    /// not model.
    pub fn from_hrid(hrid: &str) -> Option<Self> {
        hrid.strip_prefix(BUFF_TYPE_PREFIX)?.parse().ok()
    }

    /// Returns the `/buff_types/<name>` hrid for this buff type.
    pub fn hrid(self) -> String {
        format!("{BUFF_TYPE_PREFIX}{self}")
    }

    /// Returns the level-boost buff for a skill hrid (`/skills/milking`).
    pub fn level_for_skill(skill_hrid: &str) -> Option<Self> {
        let skill = skill_hrid.rsplit('/').next()?;
        format!("{skill}_level").parse().ok()
    }

    /// Iterates all buff types in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[inline]
    const fn as_index(self) -> usize {
        self as usize
    }
}

/// Additive vector of buff magnitudes, one entry per [`BuffType`].
///
/// Every key is always present; a freshly built vector is the zero vector,
/// which is the identity for [`Bonuses::combine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bonuses {
    values: [f64; BuffType::COUNT],
}

impl Default for Bonuses {
    fn default() -> Self {
        Self::zero()
    }
}

impl Bonuses {
    /// Vector with every buff type mapped to 0.
    pub const fn zero() -> Self {
        Self {
            values: [0.0; BuffType::COUNT],
        }
    }

    /// Builds a vector from sparse `(buff, value)` pairs. Repeated keys add up.
    pub fn from_pairs(pairs: &[(BuffType, f64)]) -> Self {
        let mut bonuses = Self::zero();
        for &(buff, value) in pairs {
            bonuses[buff] += value;
        }
        bonuses
    }

    /// Key-wise sum of all inputs. Inputs are left untouched.
    pub fn combine(parts: &[&Bonuses]) -> Self {
        parts.iter().fold(Self::zero(), |acc, part| acc + **part)
    }

    /// Value for a single buff type.
    #[inline]
    pub fn get(&self, buff: BuffType) -> f64 {
        self.values[buff.as_index()]
    }

    /// Adds `value` to a single buff type.
    #[inline]
    pub fn add(&mut self, buff: BuffType, value: f64) {
        self.values[buff.as_index()] += value;
    }

    /// Adds `value` to the buff identified by a game-data hrid.
    ///
    /// Unknown hrids are skipped; returns whether the value was applied.
    pub fn add_hrid(&mut self, hrid: &str, value: f64) -> bool {
        match BuffType::from_hrid(hrid) {
            Some(buff) => {
                self.add(buff, value);
                true
            }
            None => {
                tracing::trace!(buff_type = hrid, "ignoring untracked buff type");
                false
            }
        }
    }

    /// Multiplies every entry by `factor`.
    pub fn scaled(mut self, factor: f64) -> Self {
        for value in &mut self.values {
            *value *= factor;
        }
        self
    }

    /// Extra effective levels granted to the given skill.
    ///
    /// Reads the `<skill>_level` entry; skills without a level-boost buff get 0.
    pub fn level_bonus(&self, skill_hrid: &str) -> f64 {
        BuffType::level_for_skill(skill_hrid).map_or(0.0, |buff| self.get(buff))
    }

    /// Returns true if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

impl Index<BuffType> for Bonuses {
    type Output = f64;

    fn index(&self, buff: BuffType) -> &f64 {
        &self.values[buff.as_index()]
    }
}

impl IndexMut<BuffType> for Bonuses {
    fn index_mut(&mut self, buff: BuffType) -> &mut f64 {
        &mut self.values[buff.as_index()]
    }
}

impl Add for Bonuses {
    type Output = Bonuses;

    fn add(mut self, rhs: Bonuses) -> Bonuses {
        self += rhs;
        self
    }
}

impl AddAssign for Bonuses {
    fn add_assign(&mut self, rhs: Bonuses) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs += rhs;
        }
    }
}

impl core::iter::Sum for Bonuses {
    fn sum<I: Iterator<Item = Bonuses>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> core::iter::Sum<&'a Bonuses> for Bonuses {
    fn sum<I: Iterator<Item = &'a Bonuses>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, b| acc + *b)
    }
}
