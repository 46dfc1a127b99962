//! Type-erased instances

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::BindingKey;

/// A constructed or bound value, shared and type-erased
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Recover the concrete type of an instance resolved under `key`
pub fn downcast_instance<T: Send + Sync + 'static>(
    instance: Instance,
    key: &BindingKey,
) -> Result<Arc<T>> {
    instance.downcast::<T>().map_err(|_| Error::TypeMismatch {
        key: key.to_string(),
        expected: std::any::type_name::<T>(),
    })
}
