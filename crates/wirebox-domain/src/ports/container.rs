//! Container adapter port

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{BindingKey, Instance, Qualifier, downcast_instance};

/// Resolution contract over a dependency container
///
/// Implementations fail with [`Error::UnboundType`](crate::Error::UnboundType)
/// when nothing is bound for the key and with
/// [`Error::AmbiguousBinding`](crate::Error::AmbiguousBinding) when they
/// cannot pick a single binding. The qualifier is part of the key.
pub trait ContainerAdapter: Send + Sync {
    /// Resolve the instance bound under `key`
    fn resolve(&self, key: &BindingKey) -> Result<Instance>;

    /// Whether a binding (explicit or implicit) exists for `key`
    fn contains(&self, key: &BindingKey) -> bool;
}

/// Typed helpers over [`ContainerAdapter`]
pub trait ContainerAdapterExt {
    /// Resolve the unqualified binding of `T`
    fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>>;

    /// Resolve the binding of `T` tagged with `qualifier`
    fn get_named<T: Send + Sync + 'static>(&self, qualifier: impl Into<Qualifier>)
    -> Result<Arc<T>>;
}

impl<C: ContainerAdapter + ?Sized> ContainerAdapterExt for C {
    fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let key = BindingKey::of::<T>();
        downcast_instance(self.resolve(&key)?, &key)
    }

    fn get_named<T: Send + Sync + 'static>(
        &self,
        qualifier: impl Into<Qualifier>,
    ) -> Result<Arc<T>> {
        let key = BindingKey::named::<T>(qualifier);
        downcast_instance(self.resolve(&key)?, &key)
    }
}
