//! Lifecycle Management
//!
//! ```text
//!                  ┌───────────────────┐
//!                  │  LifecycleManager │  Uninitialized → Started → Stopped
//!                  └─────────┬─────────┘
//!             start()        │        shutdown()
//!        ┌───────────────────┼───────────────────┐
//!        ▼                   │                   ▼
//! ┌──────────────┐           │          ┌───────────────────┐
//! │  Container   │──factory──┴─append──>│ LifecycleRegistry │──drain (reverse)──> deactivate
//! │ eager roots  │                      │  seq 1, 2, 3 ...  │
//! └──────────────┘                      └───────────────────┘
//! ```

pub mod manager;
pub mod registry;
pub mod shutdown;

pub use manager::LifecycleManager;
pub use registry::{LifecycleRegistry, RegistryEntry};
pub use shutdown::DefaultShutdownCoordinator;
