//! # Infrastructure Layer
//!
//! Drives the domain types: builds object graphs and manages their lifecycle.
//!
//! ### Construction
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Type catalog, class factory, binding container |
//!
//! ### Lifecycle
//! | Module | Description |
//! |--------|-------------|
//! | [`lifecycle`] | Deactivation registry, lifecycle manager, shutdown coordination |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod lifecycle;
pub mod logging;

pub use error_ext::ErrorContext;
