//! Per-call override maps

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value_objects::{BindingKey, Instance, Qualifier};

/// Values that take precedence over the container for one construction call
///
/// Keys match exactly on type plus qualifier. The map is built by value and
/// never mutated once handed to the factory.
///
/// ```
/// use wirebox_domain::descriptor::Overrides;
/// use wirebox_domain::BindingKey;
///
/// let overrides = Overrides::new()
///     .with(String::from("bar"))
///     .with_named("s2", String::from("baz"));
///
/// assert!(overrides.contains(&BindingKey::of::<String>()));
/// assert!(overrides.contains(&BindingKey::named::<String>("s2")));
/// assert!(!overrides.contains(&BindingKey::named::<String>("s3")));
/// ```
#[derive(Clone, Default)]
pub struct Overrides {
    values: HashMap<BindingKey, Instance>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the unqualified binding of `T`
    #[must_use]
    pub fn with<T: Send + Sync + 'static>(self, value: T) -> Self {
        self.with_instance(BindingKey::of::<T>(), Arc::new(value))
    }

    /// Override the binding of `T` tagged with `qualifier`
    #[must_use]
    pub fn with_named<T: Send + Sync + 'static>(
        self,
        qualifier: impl Into<Qualifier>,
        value: T,
    ) -> Self {
        self.with_instance(BindingKey::named::<T>(qualifier), Arc::new(value))
    }

    /// Override `key` with an already erased instance
    #[must_use]
    pub fn with_instance(mut self, key: BindingKey, instance: Instance) -> Self {
        self.values.insert(key, instance);
        self
    }

    pub fn get(&self, key: &BindingKey) -> Option<&Instance> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &BindingKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}
