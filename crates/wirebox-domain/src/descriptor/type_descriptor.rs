//! Type-erased descriptors

use std::fmt;
use std::sync::Arc;

use crate::descriptor::{Arguments, Constructor, Parameter};
use crate::error::{Error, Result};
use crate::ports::{Deactivatable, Injectable, Managed};
use crate::value_objects::{Instance, TypeKey};

type ErasedConstructFn = Arc<dyn Fn(&Arguments) -> Result<Instance> + Send + Sync>;

/// A constructor whose output has been erased to [`Instance`]
#[derive(Clone)]
pub struct ErasedConstructor {
    params: Vec<Parameter>,
    injectable: bool,
    construct: ErasedConstructFn,
}

impl ErasedConstructor {
    pub fn erase<T: Send + Sync + 'static>(constructor: Constructor<T>) -> Self {
        let (params, injectable, construct) = constructor.into_parts();
        Self {
            params,
            injectable,
            construct: Arc::new(move |args| construct(args).map(|value| Arc::new(value) as Instance)),
        }
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn is_injectable(&self) -> bool {
        self.injectable
    }

    pub fn construct(&self, arguments: &Arguments) -> Result<Instance> {
        (self.construct)(arguments)
    }
}

impl fmt::Debug for ErasedConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedConstructor")
            .field("params", &self.params)
            .field("injectable", &self.injectable)
            .finish_non_exhaustive()
    }
}

/// Capability probes for one concrete type, usable on erased instances
#[derive(Clone, Copy)]
pub struct LifecycleHooks {
    activate: fn(&Instance) -> Result<bool>,
    deactivation: fn(Instance) -> Option<Arc<dyn Deactivatable>>,
}

impl LifecycleHooks {
    pub fn of<T: Managed>() -> Self {
        Self {
            activate: activate_instance::<T>,
            deactivation: deactivation_of::<T>,
        }
    }

    /// Run the activation capability; `Ok(false)` when the type has none
    pub fn activate(&self, instance: &Instance) -> Result<bool> {
        (self.activate)(instance)
    }

    /// The deactivation capability of `instance`, if it has one
    pub fn deactivation(&self, instance: Instance) -> Option<Arc<dyn Deactivatable>> {
        (self.deactivation)(instance)
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LifecycleHooks")
    }
}

fn activate_instance<T: Managed>(instance: &Instance) -> Result<bool> {
    match instance.downcast_ref::<T>().and_then(Managed::activation) {
        Some(hook) => hook.activate().map(|()| true),
        None => Ok(false),
    }
}

fn deactivation_of<T: Managed>(instance: Instance) -> Option<Arc<dyn Deactivatable>> {
    instance
        .downcast::<T>()
        .ok()
        .and_then(|typed| typed.deactivation())
}

/// Everything the class factory needs to build one type
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    ty: TypeKey,
    constructors: Vec<ErasedConstructor>,
    hooks: LifecycleHooks,
}

impl TypeDescriptor {
    pub fn of<T: Injectable>() -> Self {
        Self {
            ty: TypeKey::of::<T>(),
            constructors: T::constructors()
                .into_iter()
                .map(ErasedConstructor::erase)
                .collect(),
            hooks: LifecycleHooks::of::<T>(),
        }
    }

    pub fn type_key(&self) -> TypeKey {
        self.ty
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &'static str {
        self.ty.name()
    }

    pub fn constructors(&self) -> &[ErasedConstructor] {
        &self.constructors
    }

    pub fn hooks(&self) -> LifecycleHooks {
        self.hooks
    }

    /// Pick the constructor to inject through
    ///
    /// A single constructor marked for injection wins. Without a marked one,
    /// a lone constructor is used. Anything else is ambiguous.
    pub fn select_constructor(&self) -> Result<&ErasedConstructor> {
        let marked: Vec<&ErasedConstructor> = self
            .constructors
            .iter()
            .filter(|c| c.is_injectable())
            .collect();

        match (marked.as_slice(), self.constructors.as_slice()) {
            ([only], _) => Ok(*only),
            ([], []) => Err(Error::MissingConstructor {
                type_name: self.name().to_string(),
            }),
            ([], [only]) => Ok(only),
            ([], all) => Err(Error::AmbiguousConstructor {
                type_name: self.name().to_string(),
                candidates: all.len(),
            }),
            (many, _) => Err(Error::AmbiguousConstructor {
                type_name: self.name().to_string(),
                candidates: many.len(),
            }),
        }
    }
}
