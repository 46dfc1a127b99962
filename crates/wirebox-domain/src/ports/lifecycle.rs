//! Lifecycle capability ports
//!
//! A type opts into lifecycle management by implementing [`Activatable`]
//! and/or [`Deactivatable`], and exposes those capabilities through
//! [`Managed`]. The class factory only ever looks at a constructed instance
//! through `Managed`, so types without hooks keep the default `None`s.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use wirebox_domain::ports::{Activatable, Deactivatable, Managed};
//! use wirebox_domain::Result;
//!
//! #[derive(Default)]
//! struct Reporter {
//!     running: AtomicBool,
//! }
//!
//! impl Activatable for Reporter {
//!     fn activate(&self) -> Result<()> {
//!         self.running.store(true, Ordering::SeqCst);
//!         Ok(())
//!     }
//! }
//!
//! impl Deactivatable for Reporter {
//!     fn deactivate(&self) -> Result<()> {
//!         self.running.store(false, Ordering::SeqCst);
//!         Ok(())
//!     }
//! }
//!
//! impl Managed for Reporter {
//!     fn activation(&self) -> Option<&dyn Activatable> {
//!         Some(self)
//!     }
//!
//!     fn deactivation(self: Arc<Self>) -> Option<Arc<dyn Deactivatable>> {
//!         Some(self)
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::descriptor::Constructor;
use crate::error::Result;

/// Invoked once, synchronously, right after construction
pub trait Activatable: Send + Sync {
    fn activate(&self) -> Result<()>;
}

/// Invoked once during shutdown, in reverse construction order
pub trait Deactivatable: Send + Sync {
    fn deactivate(&self) -> Result<()>;
}

/// Capability inspection for constructed instances
pub trait Managed: Send + Sync + 'static {
    /// Activation capability of this instance, if any
    fn activation(&self) -> Option<&dyn Activatable> {
        None
    }

    /// Deactivation capability of this instance, if any
    fn deactivation(self: Arc<Self>) -> Option<Arc<dyn Deactivatable>> {
        None
    }
}

/// A type the class factory can construct
///
/// Replaces runtime constructor introspection with a static list of
/// constructor descriptors.
pub trait Injectable: Managed + Sized {
    fn constructors() -> Vec<Constructor<Self>>;
}

/// Shutdown coordinator for signalling a graceful stop
///
/// ```
/// use std::sync::Arc;
/// use wirebox_domain::ports::ShutdownCoordinator;
///
/// fn handle_stop(coordinator: Arc<dyn ShutdownCoordinator>) {
///     if !coordinator.is_shutting_down() {
///         coordinator.signal_shutdown();
///     }
/// }
/// ```
pub trait ShutdownCoordinator: Send + Sync {
    /// Signal all waiters to begin shutdown
    fn signal_shutdown(&self);

    /// Check if shutdown has been signalled
    fn is_shutting_down(&self) -> bool;
}
