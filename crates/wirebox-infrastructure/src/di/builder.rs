//! Container Builder
//!
//! Collects bindings, then hands them to an immutable [`Container`].
//!
//! ```ignore
//! let mut builder = ContainerBuilder::new();
//! builder
//!     .bind_instance(String::from("foo"))
//!     .bind_named_instance("s2", String::from("baz"))
//!     .bind_type::<Reporter>(Scope::Singleton)
//!     .eager(BindingKey::of::<Reporter>())
//!     .install(&MetricsModule);
//! let manager = LifecycleManager::new(builder);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use wirebox_domain::descriptor::LifecycleHooks;
use wirebox_domain::error::Result;
use wirebox_domain::ports::{Injectable, Managed};
use wirebox_domain::value_objects::{BindingKey, Instance, Qualifier, Scope};

use super::binding::{Binding, BindingSource, Provider};
use super::{Container, TypeCatalog};
use crate::config::ContainerConfig;
use crate::lifecycle::LifecycleRegistry;

/// A reusable group of bindings
pub trait Module {
    fn configure(&self, builder: &mut ContainerBuilder);
}

impl<F> Module for F
where
    F: Fn(&mut ContainerBuilder),
{
    fn configure(&self, builder: &mut ContainerBuilder) {
        self(builder);
    }
}

/// Declares bindings for a [`Container`]
pub struct ContainerBuilder {
    bindings: Vec<(BindingKey, Binding)>,
    eager: Vec<BindingKey>,
    catalog: Arc<TypeCatalog>,
    just_in_time: bool,
}

impl ContainerBuilder {
    /// Builder over a catalog discovered from link-time registrations
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(TypeCatalog::discover()))
    }

    pub fn with_catalog(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            bindings: Vec::new(),
            eager: Vec::new(),
            catalog,
            just_in_time: ContainerConfig::default().just_in_time_bindings,
        }
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    pub fn apply_config(&mut self, config: &ContainerConfig) -> &mut Self {
        self.just_in_time = config.just_in_time_bindings;
        self
    }

    /// Allow or forbid just-in-time bindings for unbound catalog types
    pub fn just_in_time(&mut self, enabled: bool) -> &mut Self {
        self.just_in_time = enabled;
        self
    }

    /// Bind the unqualified key of `T` to `value`
    pub fn bind_instance<T: Send + Sync + 'static>(&mut self, value: T) -> &mut Self {
        self.bind_erased(BindingKey::of::<T>(), Arc::new(value))
    }

    /// Bind `T` tagged with `qualifier` to `value`
    pub fn bind_named_instance<T: Send + Sync + 'static>(
        &mut self,
        qualifier: impl Into<Qualifier>,
        value: T,
    ) -> &mut Self {
        self.bind_erased(BindingKey::named::<T>(qualifier), Arc::new(value))
    }

    /// Bind `key` to an already erased instance
    pub fn bind_erased(&mut self, key: BindingKey, instance: Instance) -> &mut Self {
        self.push(key, BindingSource::Instance(instance), Scope::Singleton)
    }

    /// Bind `T` to construction through the class factory
    pub fn bind_type<T: Injectable>(&mut self, scope: Scope) -> &mut Self {
        let descriptor = self.catalog.describe::<T>();
        self.push(BindingKey::of::<T>(), BindingSource::Type(descriptor), scope)
    }

    /// Bind `T` tagged with `qualifier` to construction through the class factory
    pub fn bind_named_type<T: Injectable>(
        &mut self,
        qualifier: impl Into<Qualifier>,
        scope: Scope,
    ) -> &mut Self {
        let descriptor = self.catalog.describe::<T>();
        self.push(
            BindingKey::named::<T>(qualifier),
            BindingSource::Type(descriptor),
            scope,
        )
    }

    /// Bind `T` to a provider closure
    ///
    /// The produced value is activated and its deactivation hook registered
    /// exactly as for factory-built instances.
    pub fn bind_provider<T, F>(&mut self, scope: Scope, provide: F) -> &mut Self
    where
        T: Managed,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        self.push_provider::<T, F>(BindingKey::of::<T>(), scope, provide)
    }

    /// Bind `T` tagged with `qualifier` to a provider closure
    pub fn bind_named_provider<T, F>(
        &mut self,
        qualifier: impl Into<Qualifier>,
        scope: Scope,
        provide: F,
    ) -> &mut Self
    where
        T: Managed,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        self.push_provider::<T, F>(BindingKey::named::<T>(qualifier), scope, provide)
    }

    /// Make `T` constructible by type name and just-in-time, without binding it
    pub fn register<T: Injectable>(&mut self) -> &mut Self {
        self.catalog.register::<T>();
        self
    }

    /// Like [`register`](Self::register), also answering to `alias`
    pub fn register_as<T: Injectable>(&mut self, alias: &str) -> &mut Self {
        self.catalog.register_as::<T>(alias);
        self
    }

    /// Construct `key` when the lifecycle manager starts
    pub fn eager(&mut self, key: BindingKey) -> &mut Self {
        if !self.eager.contains(&key) {
            self.eager.push(key);
        }
        self
    }

    pub fn install(&mut self, module: &dyn Module) -> &mut Self {
        module.configure(self);
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Freeze the declared bindings into a container
    pub fn build(self, registry: Arc<LifecycleRegistry>) -> Arc<Container> {
        debug!(
            bindings = self.bindings.len(),
            eager = self.eager.len(),
            just_in_time = self.just_in_time,
            "Building container"
        );
        let mut bindings: HashMap<BindingKey, Vec<Arc<Binding>>> = HashMap::new();
        for (key, binding) in self.bindings {
            bindings.entry(key).or_default().push(Arc::new(binding));
        }
        Container::new(
            bindings,
            self.eager,
            self.just_in_time,
            self.catalog,
            registry,
        )
    }

    fn push_provider<T, F>(&mut self, key: BindingKey, scope: Scope, provide: F) -> &mut Self
    where
        T: Managed,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        let provider = Provider {
            type_name: std::any::type_name::<T>(),
            hooks: LifecycleHooks::of::<T>(),
            provide: Arc::new(move |container| provide(container).map(|value| Arc::new(value) as Instance)),
        };
        self.push(key, BindingSource::Provider(provider), scope)
    }

    fn push(&mut self, key: BindingKey, source: BindingSource, scope: Scope) -> &mut Self {
        debug!(key = %key, scope = ?scope, "Declared binding");
        self.bindings.push((key, Binding::new(source, scope)));
        self
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field(
                "bindings",
                &self.bindings.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>(),
            )
            .field("eager", &self.eager)
            .field("just_in_time", &self.just_in_time)
            .finish_non_exhaustive()
    }
}
