//! Lifecycle and scope states

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of the whole lifecycle-managed system
///
/// `Uninitialized -> Started -> Stopped`. `Stopped` is terminal: a new
/// manager is needed to start again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Nothing has been started yet
    #[default]
    Uninitialized,
    /// Startup completed, hooks are armed
    Started,
    /// Shutdown ran (or startup failed)
    Stopped,
}

impl LifecycleState {
    pub fn is_terminal(self) -> bool {
        self == Self::Stopped
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Started => "started",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Caching policy of a binding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Scope {
    /// Constructed at most once per container, then shared
    #[default]
    Singleton,
    /// Constructed on every resolution
    Transient,
}
