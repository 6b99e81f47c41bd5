/// Database configuration and connection management
pub mod database;

/// Catalog seed entries from config.toml
pub mod catalog;

/// Application settings loading from config.toml
pub mod settings;

pub use settings::{
    Config, ItinerarySettings, PersistenceSettings, load_config, load_default_config,
};
