//! Shutdown coordination and async startup tests

use std::sync::Arc;
use std::time::Duration;

use wirebox_domain::error::Error;
use wirebox_domain::ports::ShutdownCoordinator;
use wirebox_domain::value_objects::{BindingKey, LifecycleState, Scope};
use wirebox_infrastructure::config::LifecycleConfig;
use wirebox_infrastructure::di::ContainerBuilder;
use wirebox_infrastructure::lifecycle::{DefaultShutdownCoordinator, LifecycleManager};

use crate::test_utils::{SlowStart, State, StateObject};

fn slow_manager(config: LifecycleConfig) -> Arc<LifecycleManager> {
    let mut builder = ContainerBuilder::new();
    builder
        .bind_type::<SlowStart>(Scope::Singleton)
        .eager(BindingKey::of::<SlowStart>());
    Arc::new(LifecycleManager::with_config(builder, config))
}

#[test]
fn test_coordinator_flag() {
    let coordinator = DefaultShutdownCoordinator::new();
    assert!(!coordinator.is_shutting_down());

    coordinator.signal_shutdown();
    assert!(coordinator.is_shutting_down());
}

#[tokio::test]
async fn test_wait_returns_immediately_after_signal() {
    let coordinator = DefaultShutdownCoordinator::new();
    coordinator.signal_shutdown();

    tokio::time::timeout(Duration::from_secs(1), coordinator.wait_for_shutdown())
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_wait_wakes_on_signal() {
    let coordinator = Arc::new(DefaultShutdownCoordinator::new());
    let waiter = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.wait_for_shutdown().await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    coordinator.signal_shutdown();

    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_until_shutdown_stops_the_manager() {
    let mut builder = ContainerBuilder::new();
    builder
        .bind_type::<StateObject>(Scope::Singleton)
        .eager(BindingKey::of::<StateObject>());
    let manager = Arc::new(LifecycleManager::new(builder));
    manager.start().unwrap();
    let obj = manager.resolve::<StateObject>().unwrap();

    let coordinator = Arc::new(DefaultShutdownCoordinator::new());
    let runner = {
        let manager = Arc::clone(&manager);
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { manager.run_until_shutdown(&coordinator).await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(manager.state(), LifecycleState::Started);

    coordinator.signal_shutdown();
    runner.await.unwrap().unwrap();

    assert_eq!(manager.state(), LifecycleState::Stopped);
    assert_eq!(obj.state(), State::Stopped);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_start_with_timeout_within_bound() {
    let manager = slow_manager(LifecycleConfig::default());

    manager
        .start_with_timeout(Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(manager.state(), LifecycleState::Started);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_start_with_timeout_exceeded() {
    let manager = slow_manager(LifecycleConfig::default());

    let err = manager
        .start_with_timeout(Duration::from_millis(20))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::StartupTimeout { timeout_ms: 20 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_start_async_uses_configured_bound() {
    let manager = slow_manager(LifecycleConfig {
        startup_timeout_ms: Some(20),
    });
    assert!(matches!(
        manager.start_async().await,
        Err(Error::StartupTimeout { timeout_ms: 20 })
    ));

    let unbounded = slow_manager(LifecycleConfig::default());
    unbounded.start_async().await.unwrap();
    assert_eq!(unbounded.state(), LifecycleState::Started);
}
