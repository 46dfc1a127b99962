//! Deferred dependency handles

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use crate::error::{Error, Result};
use crate::ports::ContainerAdapter;
use crate::value_objects::{BindingKey, Instance, downcast_instance};

/// Where a deferred handle gets its value from
#[derive(Clone)]
pub enum DeferredSource {
    /// Value supplied by an override at construction time
    Value(Instance),
    /// Looked up in the container each time the handle is read
    ///
    /// Weak, so a cached singleton holding the handle does not keep its
    /// own container alive.
    Container(Weak<dyn ContainerAdapter>),
}

impl DeferredSource {
    pub fn container(container: &Arc<dyn ContainerAdapter>) -> Self {
        Self::Container(Arc::downgrade(container))
    }
}

/// Lazy handle to a dependency
///
/// Nothing is resolved when the handle is created. Each [`get`](Self::get)
/// asks the source again, so container scoping decides whether repeated
/// reads see the same instance.
pub struct Deferred<T> {
    key: BindingKey,
    source: DeferredSource,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> Deferred<T> {
    pub fn new(key: BindingKey, source: DeferredSource) -> Self {
        Self {
            key,
            source,
            _marker: PhantomData,
        }
    }

    pub fn get(&self) -> Result<Arc<T>> {
        let instance = match &self.source {
            DeferredSource::Value(value) => Arc::clone(value),
            DeferredSource::Container(container) => container
                .upgrade()
                .ok_or_else(|| {
                    Error::infrastructure(format!(
                        "container behind deferred {} was dropped",
                        self.key
                    ))
                })?
                .resolve(&self.key)?,
        };
        downcast_instance(instance, &self.key)
    }

    pub fn key(&self) -> &BindingKey {
        &self.key
    }

    /// Whether the handle wraps an override instead of the container
    pub fn is_overridden(&self) -> bool {
        matches!(self.source, DeferredSource::Value(_))
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            source: self.source.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("key", &self.key)
            .field("overridden", &matches!(self.source, DeferredSource::Value(_)))
            .finish()
    }
}
