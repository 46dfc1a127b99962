//! Lifecycle configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifecycle manager configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Upper bound for asynchronous startup, in milliseconds
    pub startup_timeout_ms: Option<u64>,
}

impl LifecycleConfig {
    pub fn startup_timeout(&self) -> Option<Duration> {
        self.startup_timeout_ms.map(Duration::from_millis)
    }
}
