//! Dependency Injection
//!
//! The construction half of wirebox.
//!
//! ```text
//! ContainerBuilder ──build──> Container ──implements──> ContainerAdapter
//!        │                        │                           ▲
//!     Module::configure       TypeCatalog                     │
//!                                 │                           │
//!                           ClassFactory ───resolve params────┘
//!                                 │
//!                    activate + register with LifecycleRegistry
//! ```
//!
//! - [`catalog`] - type name / type id to descriptor lookup
//! - [`factory`] - constructor selection, override precedence, activation
//! - [`container`] - bindings, scopes, just-in-time construction
//! - [`builder`] - binding declaration and modules

mod binding;
pub mod builder;
pub mod catalog;
pub mod container;
pub mod factory;
mod resolution;

pub use builder::{ContainerBuilder, Module};
pub use catalog::TypeCatalog;
pub use container::Container;
pub use factory::ClassFactory;
