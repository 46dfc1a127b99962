//! Lifecycle registry tests

use std::sync::{Arc, Mutex};
use std::thread;

use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::Deactivatable;
use wirebox_domain::value_objects::LifecycleState;
use wirebox_infrastructure::lifecycle::LifecycleRegistry;

struct Noop;

impl Deactivatable for Noop {
    fn deactivate(&self) -> Result<()> {
        Ok(())
    }
}

struct Recorder {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Deactivatable for Recorder {
    fn deactivate(&self) -> Result<()> {
        self.log.lock().unwrap().push(self.label);
        Ok(())
    }
}

#[test]
fn test_sequence_numbers_increase() {
    let registry = LifecycleRegistry::new();
    let a = registry.register("A", Arc::new(Noop)).unwrap();
    let b = registry.register("B", Arc::new(Noop)).unwrap();
    let c = registry.register("C", Arc::new(Noop)).unwrap();

    assert!(a < b && b < c);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.type_names(), ["A", "B", "C"]);
}

#[test]
fn test_drain_returns_newest_first_and_empties() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let registry = LifecycleRegistry::new();
    for label in ["A", "B", "C"] {
        registry.register(
            label,
            Arc::new(Recorder {
                label,
                log: Arc::clone(&log),
            }),
        )
        .unwrap();
    }

    let drained = registry.drain();
    assert!(registry.is_empty());
    assert_eq!(
        drained.iter().map(|e| e.type_name()).collect::<Vec<_>>(),
        ["C", "B", "A"]
    );

    for entry in &drained {
        entry.hook().deactivate().unwrap();
    }
    assert_eq!(*log.lock().unwrap(), ["C", "B", "A"]);
}

#[test]
fn test_sequence_keeps_increasing_after_drain() {
    let registry = LifecycleRegistry::new();
    let first = registry.register("A", Arc::new(Noop)).unwrap();
    registry.drain();
    let second = registry.register("A", Arc::new(Noop)).unwrap();
    assert!(second > first);
}

#[test]
fn test_concurrent_registration_keeps_order_consistent() {
    let registry = Arc::new(LifecycleRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..50 {
                    registry.register("worker", Arc::new(Noop)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let sequences: Vec<u64> = registry.drain().iter().map(|e| e.sequence()).collect();
    assert_eq!(sequences.len(), 400);
    assert!(sequences.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_close_drains_and_refuses_new_hooks() {
    let registry = LifecycleRegistry::new();
    registry.register("A", Arc::new(Noop)).unwrap();
    registry.register("B", Arc::new(Noop)).unwrap();

    let drained = registry.close();
    assert_eq!(
        drained.iter().map(|e| e.type_name()).collect::<Vec<_>>(),
        ["B", "A"]
    );
    assert!(registry.is_closed());

    let err = registry.register("C", Arc::new(Noop)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidState {
            state: LifecycleState::Stopped,
            ..
        }
    ));
    assert!(registry.is_empty());
}
