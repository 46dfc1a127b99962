//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{ContainerConfig, LifecycleConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Binding container behaviour
    pub container: ContainerConfig,

    /// Lifecycle manager behaviour
    pub lifecycle: LifecycleConfig,
}
