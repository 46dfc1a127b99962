//! Per-thread resolution path tracking

use std::cell::RefCell;

use wirebox_domain::error::{Error, Result};
use wirebox_domain::value_objects::BindingKey;

thread_local! {
    static RESOLVING: RefCell<Vec<BindingKey>> = const { RefCell::new(Vec::new()) };
}

/// Marks a key as under resolution on this thread until dropped
///
/// Entering a key that is already on the path is a cycle; failing here keeps
/// singleton initialization from re-entering its own cell.
pub(crate) struct ResolutionGuard(());

impl ResolutionGuard {
    pub(crate) fn enter(key: &BindingKey) -> Result<Self> {
        RESOLVING.with(|path| {
            let mut path = path.borrow_mut();
            if let Some(start) = path.iter().position(|k| k == key) {
                let cycle = path[start..]
                    .iter()
                    .chain(std::iter::once(key))
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                return Err(Error::CircularDependency { path: cycle });
            }
            path.push(key.clone());
            Ok(Self(()))
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLVING.with(|path| {
            path.borrow_mut().pop();
        });
    }
}
