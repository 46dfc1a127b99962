//! Configuration
//!
//! Layered configuration: defaults, then a TOML file, then
//! `WIREBOX_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerConfig, LifecycleConfig, LoggingConfig};
