pub mod dashboard;
pub mod system;

use crate::{domain::DashboardContent, infrastructure::config::Config};
use dashboard::DashboardState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub dashboard: DashboardState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Data displayed by the panels
    pub fn content(&self) -> &DashboardContent {
        &self.config.config.content
    }
}
