//! Deterministic profit rules for idle-game skilling actions.
//!
//! `skilling-core` turns static game data, a player configuration and a
//! market snapshot into per-action profit-per-hour figures. Everything here is
//! pure: loading files and printing reports live in the content and client
//! crates. The usual entry point is [`planner::Planner`], which builds the
//! derived catalogs once and evaluates every action through
//! [`engine::ProfitEngine`].
pub mod bonus;
pub mod catalog;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod market;
pub mod planner;
pub mod sources;

pub use bonus::{BuffType, Bonuses};
pub use catalog::{Action, ActionCatalog, AlchemyOperation, generate_alchemy_actions};
pub use config::{DEFAULT_TEA_LOADOUTS, Filters, MarketSettings, PlayerConfig, TeaSettings};
pub use data::{
    ActionDetail, AlchemyDetail, Buff, DropTableEntry, GameData, ItemCount, ItemDetail,
    LevelRequirement,
};
pub use engine::{ComputedAction, ProfitEngine};
pub use error::{CalcError, ErrorSeverity};
pub use market::{MarketSnapshot, Pricer, Quote};
pub use planner::{Planner, rank_by_profit};
pub use sources::{EquipmentError, TeaCatalog, TeaError, TeaLoadout};
