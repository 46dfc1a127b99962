//! # wirebox
//!
//! Object-graph construction with per-call dependency overrides, and ordered
//! lifecycle management for the instances it builds.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox::prelude::*;
//!
//! struct Greeter {
//!     name: String,
//! }
//!
//! impl Managed for Greeter {}
//!
//! impl Injectable for Greeter {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![Constructor::injectable().param::<String>().build(|args| {
//!             Ok(Greeter {
//!                 name: args.cloned::<String>(0)?,
//!             })
//!         })]
//!     }
//! }
//!
//! let mut builder = ContainerBuilder::new();
//! builder.bind_instance(String::from("foo"));
//! let manager = LifecycleManager::new(builder);
//! manager.start().unwrap();
//!
//! let factory = manager.factory();
//! assert_eq!(factory.new_instance::<Greeter>().unwrap().name, "foo");
//!
//! let overrides = Overrides::new().with(String::from("bar"));
//! let greeter: Arc<Greeter> = factory.new_instance_with(&overrides).unwrap();
//! assert_eq!(greeter.name, "bar");
//!
//! manager.shutdown().unwrap();
//! assert_eq!(manager.state(), LifecycleState::Stopped);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - keys, constructor descriptors, lifecycle ports, errors
//! - `infrastructure` - class factory, binding container, lifecycle manager, config, logging

/// Domain layer - keys, descriptors, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Infrastructure layer - factory, container, lifecycle, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

/// Everything needed to declare injectables and run a lifecycle
pub mod prelude {
    pub use wirebox_domain::descriptor::{Arguments, Constructor, Deferred, Overrides};
    pub use wirebox_domain::ports::{
        Activatable, ContainerAdapter, ContainerAdapterExt, Deactivatable, Injectable, Managed,
        ShutdownCoordinator,
    };
    pub use wirebox_domain::registry::{INJECTABLES, InjectableEntry};
    pub use wirebox_domain::{BindingKey, Error, LifecycleState, Qualifier, Result, Scope};
    pub use wirebox_infrastructure::di::{ClassFactory, Container, ContainerBuilder, Module};
    pub use wirebox_infrastructure::lifecycle::{DefaultShutdownCoordinator, LifecycleManager};
}

pub use domain::*;
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::di::{ClassFactory, Container, ContainerBuilder, Module, TypeCatalog};
pub use infrastructure::lifecycle::{DefaultShutdownCoordinator, LifecycleManager};
pub use infrastructure::logging::init_logging;
