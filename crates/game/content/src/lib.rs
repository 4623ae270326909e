//! Data-driven content and loaders.
//!
//! This crate ships a small bundled data set and provides loaders for the
//! three inputs of the calculator:
//! - Static game data (items, actions, buffs) as JSON
//! - Player settings as TOML
//! - Market snapshots as JSON
//!
//! All loaders deserialize straight into skilling-core types and validate
//! cross references before returning.

pub mod bundled;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, GameDataLoader, LoadResult, MarketLoader, SettingsLoader};
