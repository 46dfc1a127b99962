//! Static constructor descriptors
//!
//! Each injectable type describes its constructors up front: the ordered
//! parameter keys plus a function turning resolved [`Arguments`] into a value.
//!
//! ```text
//! Injectable::constructors()  ->  TypeDescriptor (type-erased)
//!                                      |
//!                     ClassFactory selects a constructor,
//!                     fills Arguments from Overrides / ContainerAdapter,
//!                     calls the constructor function
//! ```

pub mod arguments;
pub mod constructor;
pub mod deferred;
pub mod overrides;
pub mod type_descriptor;

pub use arguments::{Argument, Arguments};
pub use constructor::{Constructor, ConstructorBuilder, Parameter, ParameterShape};
pub use deferred::{Deferred, DeferredSource};
pub use overrides::Overrides;
pub use type_descriptor::{ErasedConstructor, LifecycleHooks, TypeDescriptor};
