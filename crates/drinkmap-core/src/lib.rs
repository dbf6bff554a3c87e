//! Shared domain types for the drinkmap response interpretation engine.
//!
//! Holds the segment and place model rendered by the chat UI, the reference
//! candidates used to resolve map links, plain-text transcript rendering,
//! and environment-driven application configuration.

pub mod app_config;
pub mod config;
pub mod reference;
pub mod segment;
pub mod transcript;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use reference::{Reference, ReferenceSet};
pub use segment::{Place, Segment, BUY_TITLE, DRINK_TITLE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
