//! Resolved constructor arguments

use std::sync::Arc;

use crate::descriptor::{Deferred, DeferredSource, Parameter, ParameterShape};
use crate::error::{Error, Result};
use crate::value_objects::{Instance, TypeKey, downcast_instance};

/// One resolved parameter value
#[derive(Clone)]
pub enum Argument {
    /// The dependency itself
    Value(Instance),
    /// A deferred handle source, not yet read
    Deferred(DeferredSource),
}

/// Arguments handed to a constructor function, in parameter declaration order
pub struct Arguments {
    target: &'static str,
    entries: Vec<(Parameter, Argument)>,
}

impl Arguments {
    pub fn new(target: &'static str, entries: Vec<(Parameter, Argument)>) -> Self {
        Self { target, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The dependency at `index`
    pub fn get<T: Send + Sync + 'static>(&self, index: usize) -> Result<Arc<T>> {
        let (parameter, argument) = self.entry::<T>(index)?;
        match argument {
            Argument::Value(instance) => downcast_instance(Arc::clone(instance), parameter.key()),
            Argument::Deferred(_) => Err(Error::invalid_argument(format!(
                "parameter {index} of {} is deferred; read it with `deferred`",
                self.target
            ))),
        }
    }

    /// The dependency at `index`, cloned out of its `Arc`
    pub fn cloned<T: Clone + Send + Sync + 'static>(&self, index: usize) -> Result<T> {
        self.get::<T>(index).map(|value| (*value).clone())
    }

    /// The deferred handle at `index`
    pub fn deferred<T: Send + Sync + 'static>(&self, index: usize) -> Result<Deferred<T>> {
        let (parameter, argument) = self.entry::<T>(index)?;
        match argument {
            Argument::Deferred(source) => Ok(Deferred::new(parameter.key().clone(), source.clone())),
            Argument::Value(_) => Err(Error::invalid_argument(format!(
                "parameter {index} of {} is not deferred",
                self.target
            ))),
        }
    }

    fn entry<T: 'static>(&self, index: usize) -> Result<&(Parameter, Argument)> {
        let entry = self.entries.get(index).ok_or_else(|| {
            Error::invalid_argument(format!(
                "{} has no parameter {index} ({} declared)",
                self.target,
                self.entries.len()
            ))
        })?;
        if entry.0.key().type_key() != TypeKey::of::<T>() {
            return Err(Error::TypeMismatch {
                key: entry.0.key().to_string(),
                expected: std::any::type_name::<T>(),
            });
        }
        Ok(entry)
    }
}

impl Argument {
    /// Shape this argument satisfies
    pub fn shape(&self) -> ParameterShape {
        match self {
            Self::Value(_) => ParameterShape::Direct,
            Self::Deferred(_) => ParameterShape::Deferred,
        }
    }
}
