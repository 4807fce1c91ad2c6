//! Configuration loading.
//!
//! The config file supplies the store's initial state along with view and
//! logging settings. A missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig};
