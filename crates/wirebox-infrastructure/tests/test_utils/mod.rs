//! Shared injectable fixtures

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wirebox_domain::descriptor::{Constructor, Deferred, TypeDescriptor};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::{Activatable, Deactivatable, Injectable, Managed};
use wirebox_domain::registry::{INJECTABLES, InjectableEntry};
use wirebox_infrastructure::di::ClassFactory;

/// Records lifecycle events in the order they happen
#[derive(Default)]
pub struct EventLog(Mutex<Vec<String>>);

impl EventLog {
    pub fn record(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

// ---------------------------------------------------------------------------
// Plain constructions
// ---------------------------------------------------------------------------

pub struct Greeter {
    pub name: String,
}

impl Managed for Greeter {}

impl Injectable for Greeter {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::injectable()
                .param::<String>()
                .build(|args| {
                    Ok(Greeter {
                        name: args.cloned::<String>(0)?,
                    })
                }),
        ]
    }
}

/// One plain and one qualified `String`
pub struct Pair {
    pub s1: String,
    pub s2: String,
}

impl Managed for Pair {}

impl Injectable for Pair {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::injectable()
                .param::<String>()
                .named_param::<String>("s2")
                .build(|args| {
                    Ok(Pair {
                        s1: args.cloned::<String>(0)?,
                        s2: args.cloned::<String>(1)?,
                    })
                }),
        ]
    }
}

/// Two constructors, only the second marked
pub struct Marked {
    pub via: &'static str,
}

impl Managed for Marked {}

impl Injectable for Marked {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::plain().build(|_| Ok(Marked { via: "plain" })),
            Constructor::injectable()
                .param::<String>()
                .build(|_| Ok(Marked { via: "marked" })),
        ]
    }
}

/// Two unmarked constructors
pub struct Undecided;

impl Managed for Undecided {}

impl Injectable for Undecided {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::plain().build(|_| Ok(Undecided)),
            Constructor::plain().param::<String>().build(|_| Ok(Undecided)),
        ]
    }
}

pub struct Unbuildable;

impl Managed for Unbuildable {}

impl Injectable for Unbuildable {
    fn constructors() -> Vec<Constructor<Self>> {
        Vec::new()
    }
}

/// Asks for the factory itself
pub struct Assembler {
    pub factory: Arc<ClassFactory>,
}

impl Managed for Assembler {}

impl Injectable for Assembler {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::injectable()
                .param::<ClassFactory>()
                .build(|args| {
                    Ok(Assembler {
                        factory: args.get::<ClassFactory>(0)?,
                    })
                }),
        ]
    }
}

/// Registered at link time under an alias
pub struct RegisteredGreeter {
    pub name: String,
}

impl Managed for RegisteredGreeter {}

impl Injectable for RegisteredGreeter {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::injectable()
                .param::<String>()
                .build(|args| {
                    Ok(RegisteredGreeter {
                        name: args.cloned::<String>(0)?,
                    })
                }),
        ]
    }
}

pub const REGISTERED_GREETER_ALIAS: &str = "registered-greeter";

#[linkme::distributed_slice(INJECTABLES)]
static REGISTERED_GREETER: InjectableEntry = InjectableEntry {
    name: REGISTERED_GREETER_ALIAS,
    describe: TypeDescriptor::of::<RegisteredGreeter>,
};

// ---------------------------------------------------------------------------
// Lifecycle-managed fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Init,
    Started,
    Stopped,
}

pub struct StateObject {
    state: Mutex<State>,
}

impl StateObject {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Init),
        }
    }

    pub fn state(&self) -> State {
        *self.state.lock().unwrap()
    }
}

impl Activatable for StateObject {
    fn activate(&self) -> Result<()> {
        *self.state.lock().unwrap() = State::Started;
        Ok(())
    }
}

impl Deactivatable for StateObject {
    fn deactivate(&self) -> Result<()> {
        *self.state.lock().unwrap() = State::Stopped;
        Ok(())
    }
}

impl Managed for StateObject {
    fn activation(&self) -> Option<&dyn Activatable> {
        Some(self)
    }

    fn deactivation(self: Arc<Self>) -> Option<Arc<dyn Deactivatable>> {
        Some(self)
    }
}

impl Injectable for StateObject {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::injectable().build(|_| Ok(StateObject::new()))]
    }
}

/// Declares a type that logs `start:<label>` / `stop:<label>` and depends on `$dep`s
macro_rules! lifecycle_step {
    ($name:ident, $label:literal $(, $dep:ty)*) => {
        pub struct $name {
            log: Arc<EventLog>,
        }

        impl Activatable for $name {
            fn activate(&self) -> Result<()> {
                self.log.record(concat!("start:", $label));
                Ok(())
            }
        }

        impl Deactivatable for $name {
            fn deactivate(&self) -> Result<()> {
                self.log.record(concat!("stop:", $label));
                Ok(())
            }
        }

        impl Managed for $name {
            fn activation(&self) -> Option<&dyn Activatable> {
                Some(self)
            }

            fn deactivation(self: Arc<Self>) -> Option<Arc<dyn Deactivatable>> {
                Some(self)
            }
        }

        impl Injectable for $name {
            fn constructors() -> Vec<Constructor<Self>> {
                vec![
                    Constructor::injectable()
                        .param::<EventLog>()
                        $(.param::<$dep>())*
                        .build(|args| {
                            Ok($name {
                                log: args.get::<EventLog>(0)?,
                            })
                        }),
                ]
            }
        }
    };
}

lifecycle_step!(StepA, "A");
lifecycle_step!(StepB, "B", StepA);
lifecycle_step!(StepC, "C", StepB);

/// Declares a type whose deactivation hook fails after logging
macro_rules! failing_stop {
    ($name:ident, $label:literal) => {
        pub struct $name {
            log: Arc<EventLog>,
        }

        impl Deactivatable for $name {
            fn deactivate(&self) -> Result<()> {
                self.log.record(concat!("stop:", $label));
                Err(Error::hook(concat!($label, " refused to stop")))
            }
        }

        impl Managed for $name {
            fn deactivation(self: Arc<Self>) -> Option<Arc<dyn Deactivatable>> {
                Some(self)
            }
        }

        impl Injectable for $name {
            fn constructors() -> Vec<Constructor<Self>> {
                vec![
                    Constructor::injectable()
                        .param::<EventLog>()
                        .build(|args| {
                            Ok($name {
                                log: args.get::<EventLog>(0)?,
                            })
                        }),
                ]
            }
        }
    };
}

failing_stop!(BrokenStopOne, "one");
failing_stop!(BrokenStopTwo, "two");

/// Activation always fails; would register a deactivation hook otherwise
pub struct BrokenStart;

impl Activatable for BrokenStart {
    fn activate(&self) -> Result<()> {
        Err(Error::hook("refused to start"))
    }
}

impl Deactivatable for BrokenStart {
    fn deactivate(&self) -> Result<()> {
        Ok(())
    }
}

impl Managed for BrokenStart {
    fn activation(&self) -> Option<&dyn Activatable> {
        Some(self)
    }

    fn deactivation(self: Arc<Self>) -> Option<Arc<dyn Deactivatable>> {
        Some(self)
    }
}

impl Injectable for BrokenStart {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::injectable().build(|_| Ok(BrokenStart))]
    }
}

/// Activation sleeps long enough to trip short startup bounds
pub struct SlowStart;

pub const SLOW_START_DELAY: Duration = Duration::from_millis(300);

impl Activatable for SlowStart {
    fn activate(&self) -> Result<()> {
        std::thread::sleep(SLOW_START_DELAY);
        Ok(())
    }
}

impl Managed for SlowStart {
    fn activation(&self) -> Option<&dyn Activatable> {
        Some(self)
    }
}

impl Injectable for SlowStart {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::injectable().build(|_| Ok(SlowStart))]
    }
}

// ---------------------------------------------------------------------------
// Deferred and cyclic fixtures
// ---------------------------------------------------------------------------

/// Counts how often it is constructed
pub struct Expensive {
    pub serial: usize,
}

pub static EXPENSIVE_BUILDS: AtomicUsize = AtomicUsize::new(0);

impl Managed for Expensive {}

impl Injectable for Expensive {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::injectable().param::<EventLog>().build(|args| {
            args.get::<EventLog>(0)?.record("build:Expensive");
            Ok(Expensive {
                serial: EXPENSIVE_BUILDS.fetch_add(1, Ordering::SeqCst),
            })
        })]
    }
}

pub struct LazyConsumer {
    pub expensive: Deferred<Expensive>,
}

impl Managed for LazyConsumer {}

impl Injectable for LazyConsumer {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::injectable()
                .deferred::<Expensive>()
                .build(|args| {
                    Ok(LazyConsumer {
                        expensive: args.deferred::<Expensive>(0)?,
                    })
                }),
        ]
    }
}

/// Deferred handle to a qualified `String`
pub struct LazyName {
    pub name: Deferred<String>,
}

impl Managed for LazyName {}

impl Injectable for LazyName {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::injectable()
                .named_deferred::<String>("name")
                .build(|args| {
                    Ok(LazyName {
                        name: args.deferred::<String>(0)?,
                    })
                }),
        ]
    }
}

pub struct CycleA;
pub struct CycleB;

impl Managed for CycleA {}
impl Managed for CycleB {}

impl Injectable for CycleA {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::injectable().param::<CycleB>().build(|_| Ok(CycleA))]
    }
}

impl Injectable for CycleB {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::injectable().param::<CycleA>().build(|_| Ok(CycleB))]
    }
}
