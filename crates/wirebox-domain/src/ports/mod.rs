//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the infrastructure that drives it.
//!
//! - **container** - the resolution contract the class factory consumes
//! - **lifecycle** - capabilities a type implements to be lifecycle-managed

/// Container adapter contract
pub mod container;
/// Lifecycle capability traits
pub mod lifecycle;

pub use container::{ContainerAdapter, ContainerAdapterExt};
pub use lifecycle::{Activatable, Deactivatable, Injectable, Managed, ShutdownCoordinator};
