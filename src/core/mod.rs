//! Shared types, constants and settings.

pub mod constants;
pub mod settings;
pub mod types;

pub use settings::GameSettings;
pub use types::*;
