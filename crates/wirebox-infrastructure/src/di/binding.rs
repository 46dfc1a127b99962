//! Bindings and scopes

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;
use wirebox_domain::descriptor::{LifecycleHooks, Overrides, TypeDescriptor};
use wirebox_domain::error::Result;
use wirebox_domain::value_objects::{BindingKey, Instance, Scope};

use super::Container;
use super::resolution::ResolutionGuard;

pub(crate) type ProvideFn = Arc<dyn Fn(&Container) -> Result<Instance> + Send + Sync>;

/// Provider closure plus the capabilities of the type it produces
pub(crate) struct Provider {
    pub(crate) type_name: &'static str,
    pub(crate) hooks: LifecycleHooks,
    pub(crate) provide: ProvideFn,
}

pub(crate) enum BindingSource {
    /// Prebuilt value, handed out as-is
    Instance(Instance),
    /// Built by the class factory
    Type(Arc<TypeDescriptor>),
    /// Built by a closure, then activated and registered like a factory build
    Provider(Provider),
}

pub(crate) struct Binding {
    source: BindingSource,
    scope: Scope,
    cell: OnceCell<Instance>,
}

impl Binding {
    pub(crate) fn new(source: BindingSource, scope: Scope) -> Self {
        Self {
            source,
            scope,
            cell: OnceCell::new(),
        }
    }

    /// The instance this binding supplies for `key`
    pub(crate) fn instance(&self, key: &BindingKey, container: &Container) -> Result<Instance> {
        if let BindingSource::Instance(instance) = &self.source {
            return Ok(Arc::clone(instance));
        }
        if let Some(instance) = self.cell.get() {
            return Ok(Arc::clone(instance));
        }

        // Entered before the cell so a cycle fails instead of blocking on its own initializer.
        let _guard = ResolutionGuard::enter(key)?;
        match self.scope {
            Scope::Singleton => self
                .cell
                .get_or_try_init(|| self.create(key, container))
                .map(Arc::clone),
            Scope::Transient => self.create(key, container),
        }
    }

    fn create(&self, key: &BindingKey, container: &Container) -> Result<Instance> {
        debug!(key = %key, scope = ?self.scope, "Creating bound instance");
        match &self.source {
            BindingSource::Instance(instance) => Ok(Arc::clone(instance)),
            BindingSource::Type(descriptor) => {
                container.factory().construct(descriptor, &Overrides::new())
            }
            BindingSource::Provider(provider) => {
                let instance = (provider.provide)(container)?;
                container
                    .factory()
                    .provision(provider.type_name, instance, provider.hooks)
            }
        }
    }
}
