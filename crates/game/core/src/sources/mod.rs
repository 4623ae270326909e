//! Bonus sources.
//!
//! Each source turns a slice of the player configuration into a [`Bonuses`]
//! contribution for one action type:
//!
//! ```text
//! [ Equipment ]  [ House rooms ]  [ Community buffs ]  [ Teas ]
//!        \              |                 |              /
//!         +-------------+-------- + ------+-------------+
//!                                 |
//!                          aggregate bonuses
//! ```
//!
//! Contributions are plain vectors, so the engine sums them without caring
//! where they came from.
//!
//! [`Bonuses`]: crate::bonus::Bonuses

pub mod equipment;
pub mod house;
pub mod tea;

pub use equipment::{EquipmentError, equipment_bonuses, equipment_bonuses_for, is_jewelry_slot};
pub use house::{community_bonuses, house_bonuses};
pub use tea::{TEA_PER_HOUR, TeaCatalog, TeaError, TeaLoadout, tea_bonuses};
