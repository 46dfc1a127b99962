//! Typed constructor descriptors

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::descriptor::Arguments;
use crate::error::Result;
use crate::value_objects::{BindingKey, Qualifier};

/// Whether a parameter receives the dependency itself or a deferred handle to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterShape {
    Direct,
    Deferred,
}

/// One declared constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    key: BindingKey,
    shape: ParameterShape,
}

impl Parameter {
    pub fn new(key: BindingKey, shape: ParameterShape) -> Self {
        Self { key, shape }
    }

    pub fn key(&self) -> &BindingKey {
        &self.key
    }

    pub fn shape(&self) -> ParameterShape {
        self.shape
    }
}

type ConstructFn<T> = Arc<dyn Fn(&Arguments) -> Result<T> + Send + Sync>;

/// A constructor of `T`: its parameters and the function that builds `T`
///
/// ```
/// use wirebox_domain::descriptor::Constructor;
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// let ctor: Constructor<Endpoint> = Constructor::injectable()
///     .param::<String>()
///     .named_param::<u16>("port")
///     .build(|args| {
///         Ok(Endpoint {
///             host: args.cloned::<String>(0)?,
///             port: args.cloned::<u16>(1)?,
///         })
///     });
///
/// assert_eq!(ctor.params().len(), 2);
/// assert!(ctor.is_injectable());
/// ```
pub struct Constructor<T> {
    params: Vec<Parameter>,
    injectable: bool,
    construct: ConstructFn<T>,
}

impl<T> Constructor<T> {
    /// Start a constructor explicitly marked for injection
    pub fn injectable() -> ConstructorBuilder<T> {
        ConstructorBuilder::new(true)
    }

    /// Start an unmarked constructor
    pub fn plain() -> ConstructorBuilder<T> {
        ConstructorBuilder::new(false)
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn is_injectable(&self) -> bool {
        self.injectable
    }

    pub fn construct(&self, arguments: &Arguments) -> Result<T> {
        (self.construct)(arguments)
    }

    pub(crate) fn into_parts(self) -> (Vec<Parameter>, bool, ConstructFn<T>) {
        (self.params, self.injectable, self.construct)
    }
}

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            injectable: self.injectable,
            construct: Arc::clone(&self.construct),
        }
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("params", &self.params)
            .field("injectable", &self.injectable)
            .finish_non_exhaustive()
    }
}

/// Builder collecting parameters in declaration order
pub struct ConstructorBuilder<T> {
    params: Vec<Parameter>,
    injectable: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ConstructorBuilder<T> {
    fn new(injectable: bool) -> Self {
        Self {
            params: Vec::new(),
            injectable,
            _marker: PhantomData,
        }
    }

    fn push(mut self, key: BindingKey, shape: ParameterShape) -> Self {
        self.params.push(Parameter::new(key, shape));
        self
    }

    /// Parameter resolved as the unqualified binding of `P`
    pub fn param<P: Send + Sync + 'static>(self) -> Self {
        self.push(BindingKey::of::<P>(), ParameterShape::Direct)
    }

    /// Parameter resolved as the binding of `P` tagged with `qualifier`
    pub fn named_param<P: Send + Sync + 'static>(self, qualifier: impl Into<Qualifier>) -> Self {
        self.push(BindingKey::named::<P>(qualifier), ParameterShape::Direct)
    }

    /// Parameter receiving a [`Deferred`](crate::descriptor::Deferred) handle to `P`
    pub fn deferred<P: Send + Sync + 'static>(self) -> Self {
        self.push(BindingKey::of::<P>(), ParameterShape::Deferred)
    }

    /// Deferred handle to the binding of `P` tagged with `qualifier`
    pub fn named_deferred<P: Send + Sync + 'static>(self, qualifier: impl Into<Qualifier>) -> Self {
        self.push(BindingKey::named::<P>(qualifier), ParameterShape::Deferred)
    }

    pub fn build<F>(self, construct: F) -> Constructor<T>
    where
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Constructor {
            params: self.params,
            injectable: self.injectable,
            construct: Arc::new(construct),
        }
    }
}
