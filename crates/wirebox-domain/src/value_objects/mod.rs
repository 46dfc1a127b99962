//! Value objects
//!
//! Small immutable types used as identities and states throughout wirebox.

pub mod instance;
pub mod key;
pub mod lifecycle;

pub use instance::{Instance, downcast_instance};
pub use key::{BindingKey, Qualifier, TypeKey};
pub use lifecycle::{LifecycleState, Scope};
