//! Kidney Garden: a daily kidney-health journal whose wellness score grows
//! (or wilts) a virtual plant.
//!
//! The pure pieces are [`scoring::classify`] and the [`insights`]
//! selectors. [`JournalStore`] owns the mutable record and writes it back
//! through a [`storage::KeyValueStore`] after every change.

mod utils;

pub mod config;
mod garden;
pub mod insights;
pub mod journal;
pub mod models;
pub mod scoring;
pub mod storage;

pub use config::{GardenConfig, StorageBackend};
pub use garden::{open_garden, open_storage};
pub use insights::{garden_view, GardenView};
pub use journal::{GardenSnapshot, JournalStore, VoiceCommand, DEFAULT_STORAGE_KEY};
pub use models::HealthData;
pub use scoring::{classify, Classification, PlantState};
pub use utils::logging::init_logging;
