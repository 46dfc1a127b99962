//! Class Factory
//!
//! Builds instances of catalog types, taking each constructor parameter from
//! the per-call overrides first and the container second.
//!
//! ```text
//! new_instance(T, overrides)
//!   1. select constructor      marked > lone unmarked > ambiguous
//!   2. resolve parameters      override hit ─or─ container.resolve(key)
//!   3. construct
//!   4. activate                failure → ActivationFailed, nothing registered
//!   5. register deactivation   LifecycleRegistry::register
//! ```
//!
//! Once the registry is closed (the manager has stopped) construction fails
//! with `InvalidState`.

use std::sync::{Arc, Weak};

use tracing::{debug, warn};
use wirebox_domain::descriptor::{
    Argument, Arguments, DeferredSource, LifecycleHooks, Overrides, Parameter, ParameterShape,
    TypeDescriptor,
};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::{ContainerAdapter, Injectable};
use wirebox_domain::value_objects::{
    BindingKey, Instance, LifecycleState, TypeKey, downcast_instance,
};

use super::TypeCatalog;
use crate::lifecycle::LifecycleRegistry;

/// How the factory reaches its container
///
/// A container owns its own factory, so that factory only holds a weak
/// reference back.
#[derive(Clone)]
enum ContainerRef {
    Owned(Arc<dyn ContainerAdapter>),
    Attached(Weak<dyn ContainerAdapter>),
}

impl ContainerRef {
    fn get(&self) -> Result<Arc<dyn ContainerAdapter>> {
        match self {
            Self::Owned(container) => Ok(Arc::clone(container)),
            Self::Attached(weak) => weak
                .upgrade()
                .ok_or_else(|| Error::infrastructure("container was dropped while its factory was in use")),
        }
    }
}

/// Constructs instances with per-call dependency overrides
#[derive(Clone)]
pub struct ClassFactory {
    container: ContainerRef,
    catalog: Arc<TypeCatalog>,
    registry: Arc<LifecycleRegistry>,
}

impl ClassFactory {
    pub fn new(
        container: Arc<dyn ContainerAdapter>,
        catalog: Arc<TypeCatalog>,
        registry: Arc<LifecycleRegistry>,
    ) -> Self {
        Self {
            container: ContainerRef::Owned(container),
            catalog,
            registry,
        }
    }

    pub(crate) fn attached(
        container: Weak<dyn ContainerAdapter>,
        catalog: Arc<TypeCatalog>,
        registry: Arc<LifecycleRegistry>,
    ) -> Self {
        Self {
            container: ContainerRef::Attached(container),
            catalog,
            registry,
        }
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    pub fn registry(&self) -> &Arc<LifecycleRegistry> {
        &self.registry
    }

    /// Construct `T` with every parameter taken from the container
    pub fn new_instance<T: Injectable>(&self) -> Result<Arc<T>> {
        self.new_instance_with::<T>(&Overrides::new())
    }

    /// Construct `T`, preferring `overrides` over the container
    ///
    /// `T` is not added to the catalog, so constructing it here does not make
    /// it a just-in-time binding candidate.
    pub fn new_instance_with<T: Injectable>(&self, overrides: &Overrides) -> Result<Arc<T>> {
        let descriptor = self
            .catalog
            .get(&TypeKey::of::<T>())
            .unwrap_or_else(|| Arc::new(TypeDescriptor::of::<T>()));
        let instance = self.construct(&descriptor, overrides)?;
        downcast_instance(instance, &BindingKey::of::<T>())
    }

    /// Construct the catalog type registered under `name` (alias or full type name)
    pub fn new_instance_by_name(&self, name: &str, overrides: &Overrides) -> Result<Instance> {
        let descriptor = self.catalog.find(name).ok_or_else(|| Error::UnknownType {
            name: name.to_string(),
        })?;
        self.construct(&descriptor, overrides)
    }

    /// Construct, activate and register one instance of `descriptor`
    pub fn construct(&self, descriptor: &TypeDescriptor, overrides: &Overrides) -> Result<Instance> {
        let target = descriptor.name();
        self.ensure_open()?;
        let constructor = descriptor.select_constructor()?;
        debug!(
            type_name = target,
            params = constructor.params().len(),
            overrides = overrides.len(),
            "Constructing instance"
        );

        let arguments = self.resolve_arguments(target, constructor.params(), overrides)?;
        let instance = constructor.construct(&arguments)?;
        self.provision(target, instance, descriptor.hooks())
    }

    fn resolve_arguments(
        &self,
        target: &'static str,
        params: &[Parameter],
        overrides: &Overrides,
    ) -> Result<Arguments> {
        let mut entries = Vec::with_capacity(params.len());
        for (position, parameter) in params.iter().enumerate() {
            let key = parameter.key();
            let argument = match (overrides.get(key), parameter.shape()) {
                (Some(value), ParameterShape::Direct) => Argument::Value(Arc::clone(value)),
                (Some(value), ParameterShape::Deferred) => {
                    Argument::Deferred(DeferredSource::Value(Arc::clone(value)))
                }
                (None, ParameterShape::Deferred) => {
                    let container = self
                        .container
                        .get()
                        .map_err(|source| Error::unresolved(target, position, key.clone(), source))?;
                    Argument::Deferred(DeferredSource::container(&container))
                }
                (None, ParameterShape::Direct) => {
                    let resolved = self
                        .container
                        .get()
                        .and_then(|container| container.resolve(key))
                        .map_err(|source| Error::unresolved(target, position, key.clone(), source))?;
                    Argument::Value(resolved)
                }
            };
            entries.push((parameter.clone(), argument));
        }
        Ok(Arguments::new(target, entries))
    }

    fn ensure_open(&self) -> Result<()> {
        if self.registry.is_closed() {
            return Err(Error::InvalidState {
                state: LifecycleState::Stopped,
                operation: "construct",
            });
        }
        Ok(())
    }

    /// Run the activation hook and record the deactivation hook of a fresh instance
    pub(crate) fn provision(
        &self,
        type_name: &str,
        instance: Instance,
        hooks: LifecycleHooks,
    ) -> Result<Instance> {
        self.ensure_open()?;
        match hooks.activate(&instance) {
            Ok(true) => debug!(type_name, "Activated instance"),
            Ok(false) => {}
            Err(source) => {
                warn!(type_name, error = %source, "Activation failed, discarding instance");
                return Err(Error::ActivationFailed {
                    type_name: type_name.to_string(),
                    source: Box::new(source),
                });
            }
        }

        if let Some(hook) = hooks.deactivation(Arc::clone(&instance)) {
            // Closed between the check above and now: the instance was
            // activated, so deactivate it here rather than drop the hook.
            if let Err(err) = self.registry.register(type_name, Arc::clone(&hook)) {
                if let Err(source) = hook.deactivate() {
                    warn!(type_name, error = %source, "Deactivation after late registration failed");
                }
                return Err(err);
            }
        }
        Ok(instance)
    }
}

impl std::fmt::Debug for ClassFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassFactory")
            .field("catalog", &self.catalog.len())
            .field("registry", &self.registry.len())
            .finish_non_exhaustive()
    }
}
