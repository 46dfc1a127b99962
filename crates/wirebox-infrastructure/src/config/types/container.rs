//! Container configuration types

use crate::constants::DEFAULT_JUST_IN_TIME_BINDINGS;
use serde::{Deserialize, Serialize};

/// Binding container configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Construct unbound, unqualified catalog types on demand
    pub just_in_time_bindings: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            just_in_time_bindings: DEFAULT_JUST_IN_TIME_BINDINGS,
        }
    }
}
