//! Binding identities
//!
//! A binding is identified by the requested type plus an optional qualifier.
//! The qualifier is part of the identity: a plain `String` key and a
//! `String` key named `"s2"` are different keys and never match each other.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime handle for a Rust type
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Tag distinguishing several bindings of the same type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier(Cow<'static, str>);

impl Qualifier {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Qualifier {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Qualifier {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "named(\"{}\")", self.0)
    }
}

/// Identity of a binding: type plus optional qualifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingKey {
    ty: TypeKey,
    qualifier: Option<Qualifier>,
}

impl BindingKey {
    pub fn new(ty: TypeKey, qualifier: Option<Qualifier>) -> Self {
        Self { ty, qualifier }
    }

    /// Unqualified key for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), None)
    }

    /// Key for `T` tagged with `qualifier`
    pub fn named<T: ?Sized + 'static>(qualifier: impl Into<Qualifier>) -> Self {
        Self::new(TypeKey::of::<T>(), Some(qualifier.into()))
    }

    pub fn type_key(&self) -> TypeKey {
        self.ty
    }

    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{} {}", self.ty, qualifier),
            None => write!(f, "{}", self.ty),
        }
    }
}
