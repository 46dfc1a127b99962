//! # Domain Layer
//!
//! Core types shared by every layer of wirebox. Nothing in here resolves or
//! constructs anything on its own; the infrastructure crate drives these types.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and the crate `Result` alias |
//! | [`value_objects`] | Binding keys, qualifiers, scopes, lifecycle state |
//! | [`descriptor`] | Static constructor descriptors, arguments, overrides, deferred handles |
//! | [`ports`] | Container adapter contract and lifecycle capability traits |
//! | [`registry`] | Link-time registration of injectable types |

pub mod descriptor;
pub mod error;
pub mod ports;
pub mod registry;
pub mod value_objects;

pub use error::{Error, HookFailure, Result, ShutdownFailures};
pub use value_objects::{BindingKey, Instance, LifecycleState, Qualifier, Scope, TypeKey};
