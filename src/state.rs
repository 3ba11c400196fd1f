//! Shared application state for request handlers.

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds nothing mutable: the configuration is read once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Path of the file served by `/home`.
    pub fn page_path(&self) -> &Path {
        &self.config.page_path
    }
}
