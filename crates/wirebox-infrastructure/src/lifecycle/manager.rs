//! Lifecycle Manager
//!
//! Owns the container and the deactivation registry, and moves the object
//! graph through `Uninitialized → Started → Stopped`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = ContainerBuilder::new();
//! builder
//!     .bind_type::<Reporter>(Scope::Singleton)
//!     .eager(BindingKey::of::<Reporter>());
//!
//! let manager = LifecycleManager::new(builder);
//! manager.start()?;
//! let reporter = manager.resolve::<Reporter>()?;
//! manager.shutdown()?;
//! ```

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, error, info, warn};
use wirebox_domain::error::{Error, HookFailure, Result, ShutdownFailures};
use wirebox_domain::ports::{ContainerAdapter, ContainerAdapterExt};
use wirebox_domain::value_objects::LifecycleState;

use super::{DefaultShutdownCoordinator, LifecycleRegistry};
use crate::config::{AppConfig, LifecycleConfig};
use crate::di::{ClassFactory, Container, ContainerBuilder};
use crate::error_ext::ErrorContext;

/// Starts eager bindings and tears everything down in reverse creation order
pub struct LifecycleManager {
    container: Arc<Container>,
    registry: Arc<LifecycleRegistry>,
    state: Mutex<LifecycleState>,
    config: LifecycleConfig,
}

impl LifecycleManager {
    pub fn new(builder: ContainerBuilder) -> Self {
        Self::with_config(builder, LifecycleConfig::default())
    }

    pub fn with_config(builder: ContainerBuilder, config: LifecycleConfig) -> Self {
        let registry = Arc::new(LifecycleRegistry::new());
        let container = builder.build(Arc::clone(&registry));
        Self {
            container,
            registry,
            state: Mutex::new(LifecycleState::Uninitialized),
            config,
        }
    }

    /// Manager configured from the container and lifecycle sections of `config`
    pub fn from_config(mut builder: ContainerBuilder, config: &AppConfig) -> Self {
        builder.apply_config(&config.container);
        Self::with_config(builder, config.lifecycle.clone())
    }

    pub fn state(&self) -> LifecycleState {
        *self.lock_state()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn factory(&self) -> &ClassFactory {
        self.container.factory()
    }

    pub fn registry(&self) -> &Arc<LifecycleRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Resolve the unqualified binding of `T`
    pub fn resolve<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.container.get::<T>()
    }

    /// Types currently holding a deactivation hook, in creation order
    pub fn registered_hooks(&self) -> Vec<String> {
        self.registry.type_names()
    }

    /// Construct every eager binding
    ///
    /// On failure every hook registered so far is run in reverse, the manager
    /// ends up `Stopped`, and the construction error is returned.
    ///
    /// Once stopped the registry is closed, so later constructions fail
    /// instead of leaving hooks nobody will run.
    pub fn start(&self) -> Result<()> {
        let mut state = self.lock_state();
        if *state != LifecycleState::Uninitialized {
            return Err(Error::InvalidState {
                state: *state,
                operation: "start",
            });
        }

        let roots = self.container.eager_keys();
        info!(roots = roots.len(), "Starting lifecycle");
        for key in roots {
            if let Err(err) = self.container.resolve(key) {
                error!(key = %key, error = %err, "Startup failed, tearing down");
                if let Err(teardown) = self.deactivate_all() {
                    error!(error = %teardown, "Teardown after failed startup reported failures");
                }
                *state = LifecycleState::Stopped;
                return Err(err);
            }
            debug!(key = %key, "Constructed eager binding");
        }

        *state = LifecycleState::Started;
        info!(hooks = self.registry.len(), "Lifecycle started");
        Ok(())
    }

    /// Run every deactivation hook, newest first
    ///
    /// Only acts when `Started`; otherwise it returns `Ok(())` and leaves the
    /// state alone. Failing hooks do not stop the pass and are returned
    /// together as `ShutdownFailed`.
    pub fn shutdown(&self) -> Result<()> {
        let mut state = self.lock_state();
        if *state != LifecycleState::Started {
            let current = *state;
            debug!(state = %current, "Shutdown skipped");
            return Ok(());
        }

        info!(hooks = self.registry.len(), "Shutting down lifecycle");
        let result = self.deactivate_all();
        *state = LifecycleState::Stopped;
        match &result {
            Ok(()) => info!("Lifecycle stopped"),
            Err(err) => warn!(error = %err, "Lifecycle stopped with failures"),
        }
        result
    }

    /// [`start`](Self::start) on a blocking task, failing if it outlasts `timeout`
    ///
    /// A timed-out start keeps running in the background; the manager stays
    /// locked until it finishes.
    pub async fn start_with_timeout(self: &Arc<Self>, timeout: Duration) -> Result<()> {
        let manager = Arc::clone(self);
        let task = tokio::task::spawn_blocking(move || manager.start());
        match tokio::time::timeout(timeout, task).await {
            Ok(joined) => joined.context("Startup task failed")?,
            Err(_) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(timeout_ms, "Startup timed out");
                Err(Error::StartupTimeout { timeout_ms })
            }
        }
    }

    /// Start bounded by the configured `startup_timeout_ms`, if any
    pub async fn start_async(self: &Arc<Self>) -> Result<()> {
        match self.config.startup_timeout() {
            Some(timeout) => self.start_with_timeout(timeout).await,
            None => {
                let manager = Arc::clone(self);
                tokio::task::spawn_blocking(move || manager.start())
                    .await
                    .context("Startup task failed")?
            }
        }
    }

    /// Wait for the shutdown signal, then shut down
    pub async fn run_until_shutdown(&self, coordinator: &DefaultShutdownCoordinator) -> Result<()> {
        coordinator.wait_for_shutdown().await;
        self.shutdown()
    }

    fn deactivate_all(&self) -> Result<()> {
        let mut failures = Vec::new();
        for entry in self.registry.close() {
            match entry.hook().deactivate() {
                Ok(()) => debug!(
                    type_name = entry.type_name(),
                    sequence = entry.sequence(),
                    "Deactivated instance"
                ),
                Err(err) => {
                    warn!(
                        type_name = entry.type_name(),
                        sequence = entry.sequence(),
                        error = %err,
                        "Deactivation hook failed"
                    );
                    failures.push(HookFailure::new(entry.type_name(), entry.sequence(), err));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::ShutdownFailed(ShutdownFailures::new(failures)))
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, LifecycleState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("state", &self.state())
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
