//! Deactivation hook registry

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::Deactivatable;
use wirebox_domain::value_objects::LifecycleState;

/// A deactivation hook recorded at construction time
pub struct RegistryEntry {
    type_name: String,
    sequence: u64,
    hook: Arc<dyn Deactivatable>,
}

impl RegistryEntry {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn hook(&self) -> &Arc<dyn Deactivatable> {
        &self.hook
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("type_name", &self.type_name)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct Entries {
    next_sequence: u64,
    closed: bool,
    entries: Vec<RegistryEntry>,
}

/// Append-only list of deactivation hooks in construction order
///
/// Sequence numbers are assigned under the same lock as the append, so the
/// order of `entries` and the order of sequence numbers always agree.
#[derive(Default)]
pub struct LifecycleRegistry {
    inner: Mutex<Entries>,
}

impl LifecycleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hook and return its sequence number (starting at 1)
    ///
    /// Fails with `InvalidState` once the registry has been [closed](Self::close).
    pub fn register(
        &self,
        type_name: impl Into<String>,
        hook: Arc<dyn Deactivatable>,
    ) -> Result<u64> {
        let type_name = type_name.into();
        let mut inner = self.lock();
        if inner.closed {
            return Err(Error::InvalidState {
                state: LifecycleState::Stopped,
                operation: "register deactivation hook",
            });
        }
        inner.next_sequence += 1;
        let sequence = inner.next_sequence;
        debug!(type_name = %type_name, sequence, "Registered deactivation hook");
        inner.entries.push(RegistryEntry {
            type_name,
            sequence,
            hook,
        });
        Ok(sequence)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Owning types of the recorded hooks, in registration order
    pub fn type_names(&self) -> Vec<String> {
        self.lock()
            .entries
            .iter()
            .map(|entry| entry.type_name.clone())
            .collect()
    }

    /// Remove every hook, newest first
    ///
    /// Sequence numbers keep increasing after a drain.
    pub fn drain(&self) -> Vec<RegistryEntry> {
        let mut entries = std::mem::take(&mut self.lock().entries);
        entries.reverse();
        entries
    }

    /// Refuse further registrations and drain what is left, newest first
    pub fn close(&self) -> Vec<RegistryEntry> {
        let mut inner = self.lock();
        inner.closed = true;
        let mut entries = std::mem::take(&mut inner.entries);
        entries.reverse();
        entries
    }

    // A hook panicking while another thread appended must not wedge shutdown.
    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LifecycleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleRegistry")
            .field("hooks", &self.type_names())
            .field("closed", &self.is_closed())
            .finish()
    }
}
