//! Injectable Type Registry
//!
//! Auto-registration of injectable types. Types register themselves via
//! `#[linkme::distributed_slice(INJECTABLES)]` and are discovered when a
//! type catalog is built, so they can later be constructed by name.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  1. Type defines:    #[linkme::distributed_slice(INJECTABLES)]
//! │  2. Registry holds:  INJECTABLES: [InjectableEntry]       │
//! │  3. Catalog reads:   injectable_entries()                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ```ignore
//! #[linkme::distributed_slice(INJECTABLES)]
//! static REPORTER: InjectableEntry = InjectableEntry {
//!     name: "reporter",
//!     describe: TypeDescriptor::of::<Reporter>,
//! };
//! ```

use crate::descriptor::TypeDescriptor;

/// Registry entry for an injectable type
pub struct InjectableEntry {
    /// Short alias the type can be constructed by, in addition to its full type name
    pub name: &'static str,
    /// Builds the type's descriptor
    pub describe: fn() -> TypeDescriptor,
}

#[linkme::distributed_slice]
pub static INJECTABLES: [InjectableEntry] = [..];

/// All link-time registered injectables
pub fn injectable_entries() -> impl Iterator<Item = &'static InjectableEntry> {
    INJECTABLES.iter()
}

/// Names (aliases) of all link-time registered injectables
pub fn list_injectables() -> Vec<&'static str> {
    INJECTABLES.iter().map(|entry| entry.name).collect()
}
