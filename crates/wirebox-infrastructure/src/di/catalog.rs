//! Type Catalog
//!
//! Maps type ids and names to descriptors. Seeded from the link-time
//! `INJECTABLES` registry and extended by explicit registrations.
//!
//! ```text
//! INJECTABLES (linkme)      TypeCatalog (runtime)
//! ────────────────────      ─────────────────────
//! InjectableEntry      →    by_type:  TypeId -> descriptor
//!                           by_name:  alias / full type name -> TypeId
//! ```

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use wirebox_domain::descriptor::TypeDescriptor;
use wirebox_domain::ports::Injectable;
use wirebox_domain::registry::injectable_entries;
use wirebox_domain::value_objects::TypeKey;

/// Descriptor lookup by type or by name
#[derive(Default)]
pub struct TypeCatalog {
    by_type: DashMap<TypeId, Arc<TypeDescriptor>>,
    by_name: DashMap<String, TypeId>,
}

impl TypeCatalog {
    /// Empty catalog, ignoring link-time registrations
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with every link-time registered injectable
    pub fn discover() -> Self {
        let catalog = Self::new();
        for entry in injectable_entries() {
            catalog.insert(Some(entry.name), (entry.describe)());
        }
        debug!(types = catalog.len(), "Discovered injectable types");
        catalog
    }

    /// Register `T` under its full type name
    pub fn register<T: Injectable>(&self) -> Arc<TypeDescriptor> {
        self.insert(None, TypeDescriptor::of::<T>())
    }

    /// Register `T` under its full type name and `alias`
    pub fn register_as<T: Injectable>(&self, alias: &str) -> Arc<TypeDescriptor> {
        self.insert(Some(alias), TypeDescriptor::of::<T>())
    }

    /// Insert a prepared descriptor
    pub fn insert(&self, alias: Option<&str>, descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
        let id = descriptor.type_key().id();
        let name = descriptor.name();
        let descriptor = Arc::new(descriptor);

        self.by_type.insert(id, Arc::clone(&descriptor));
        self.by_name.insert(name.to_string(), id);
        if let Some(alias) = alias {
            self.by_name.insert(alias.to_string(), id);
        }
        debug!(type_name = name, alias = ?alias, "Registered injectable type");
        descriptor
    }

    /// Descriptor of `T`, registering it on first use
    pub fn describe<T: Injectable>(&self) -> Arc<TypeDescriptor> {
        if let Some(descriptor) = self.get(&TypeKey::of::<T>()) {
            return descriptor;
        }
        self.register::<T>()
    }

    pub fn get(&self, ty: &TypeKey) -> Option<Arc<TypeDescriptor>> {
        self.by_type
            .get(&ty.id())
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Descriptor registered under `name` (alias or full type name)
    pub fn find(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        let id = *self.by_name.get(name)?.value();
        self.by_type.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, ty: &TypeKey) -> bool {
        self.by_type.contains_key(&ty.id())
    }

    /// All names the catalog answers to, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_name.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl std::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("types", &self.by_type.len())
            .field("names", &self.names())
            .finish()
    }
}
