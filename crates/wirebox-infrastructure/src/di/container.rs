//! Binding Container
//!
//! The concrete [`ContainerAdapter`]: explicit bindings declared through a
//! [`ContainerBuilder`](super::ContainerBuilder), a built-in binding for the
//! [`ClassFactory`], and optional just-in-time bindings for catalog types.
//!
//! Resolution order for a key:
//!
//! 1. `ClassFactory` (unqualified) → the container's own factory
//! 2. explicit bindings → exactly one, or `AmbiguousBinding`
//! 3. just-in-time → unqualified catalog types, singleton scope
//! 4. otherwise `UnboundType`

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tracing::debug;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::ContainerAdapter;
use wirebox_domain::value_objects::{BindingKey, Instance, Scope};

use super::binding::{Binding, BindingSource};
use super::{ClassFactory, TypeCatalog};
use crate::lifecycle::LifecycleRegistry;

pub struct Container {
    bindings: HashMap<BindingKey, Vec<Arc<Binding>>>,
    eager: Vec<BindingKey>,
    jit: DashMap<BindingKey, Arc<Binding>>,
    just_in_time: bool,
    factory: ClassFactory,
}

impl Container {
    pub(crate) fn new(
        bindings: HashMap<BindingKey, Vec<Arc<Binding>>>,
        eager: Vec<BindingKey>,
        just_in_time: bool,
        catalog: Arc<TypeCatalog>,
        registry: Arc<LifecycleRegistry>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Self>| {
            let adapter: Weak<dyn ContainerAdapter> = weak.clone();
            Self {
                bindings,
                eager,
                jit: DashMap::new(),
                just_in_time,
                factory: ClassFactory::attached(adapter, catalog, registry),
            }
        })
    }

    /// Factory that builds through this container
    pub fn factory(&self) -> &ClassFactory {
        &self.factory
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        self.factory.catalog()
    }

    pub fn registry(&self) -> &Arc<LifecycleRegistry> {
        self.factory.registry()
    }

    /// Keys constructed at startup, in declaration order
    pub fn eager_keys(&self) -> &[BindingKey] {
        &self.eager
    }

    /// Number of explicit bindings, counting duplicates under one key
    pub fn binding_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    pub fn just_in_time_enabled(&self) -> bool {
        self.just_in_time
    }

    fn factory_key() -> BindingKey {
        BindingKey::of::<ClassFactory>()
    }

    fn just_in_time_binding(&self, key: &BindingKey) -> Result<Arc<Binding>> {
        let unbound = || Error::UnboundType { key: key.clone() };
        if !self.just_in_time || key.is_qualified() {
            return Err(unbound());
        }
        if let Some(binding) = self.jit.get(key) {
            return Ok(Arc::clone(binding.value()));
        }

        let descriptor = self.catalog().get(&key.type_key()).ok_or_else(unbound)?;
        debug!(key = %key, "Creating just-in-time binding");
        let binding = Arc::clone(
            self.jit
                .entry(key.clone())
                .or_insert_with(|| {
                    Arc::new(Binding::new(
                        BindingSource::Type(descriptor),
                        Scope::Singleton,
                    ))
                })
                .value(),
        );
        Ok(binding)
    }
}

impl ContainerAdapter for Container {
    fn resolve(&self, key: &BindingKey) -> Result<Instance> {
        if *key == Self::factory_key() {
            return Ok(Arc::new(self.factory.clone()));
        }

        let binding = match self.bindings.get(key).map(Vec::as_slice) {
            Some([binding]) => Arc::clone(binding),
            Some(candidates) if candidates.len() > 1 => {
                return Err(Error::AmbiguousBinding {
                    key: key.clone(),
                    candidates: candidates.len(),
                });
            }
            _ => self.just_in_time_binding(key)?,
        };
        binding.instance(key, self)
    }

    fn contains(&self, key: &BindingKey) -> bool {
        *key == Self::factory_key()
            || self.bindings.contains_key(key)
            || (self.just_in_time && !key.is_qualified() && self.catalog().contains(&key.type_key()))
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<String> = self.bindings.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("Container")
            .field("bindings", &keys)
            .field("eager", &self.eager)
            .field("just_in_time", &self.just_in_time)
            .finish_non_exhaustive()
    }
}
