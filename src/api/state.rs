//! Application state for the ESIC calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded scheme configuration. It is read-only, so handlers share
/// it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scheme configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

impl Default for AppState {
    /// State backed by the built-in statutory rates.
    fn default() -> Self {
        Self::new(ConfigLoader::statutory())
    }
}
