//! Binding container tests

use std::sync::Arc;

use wirebox_domain::error::Error;
use wirebox_domain::ports::{ContainerAdapter, ContainerAdapterExt};
use wirebox_domain::value_objects::{BindingKey, Scope, TypeKey};
use wirebox_infrastructure::di::{ClassFactory, Container, ContainerBuilder, Module};
use wirebox_infrastructure::lifecycle::LifecycleRegistry;

use crate::test_utils::{CycleA, CycleB, Greeter, State, StateObject};

fn build(builder: ContainerBuilder) -> (Arc<Container>, Arc<LifecycleRegistry>) {
    let registry = Arc::new(LifecycleRegistry::new());
    (builder.build(Arc::clone(&registry)), registry)
}

#[test]
fn test_instance_binding_is_shared() {
    let mut builder = ContainerBuilder::new();
    builder.bind_instance(String::from("foo"));
    let (container, _) = build(builder);

    let first = container.get::<String>().unwrap();
    let second = container.get::<String>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_singleton_type_binding_constructs_once() {
    let mut builder = ContainerBuilder::new();
    builder.bind_type::<StateObject>(Scope::Singleton);
    let (container, registry) = build(builder);

    let first = container.get::<StateObject>().unwrap();
    let second = container.get::<StateObject>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_transient_type_binding_constructs_every_time() {
    let mut builder = ContainerBuilder::new();
    builder.bind_type::<StateObject>(Scope::Transient);
    let (container, registry) = build(builder);

    let first = container.get::<StateObject>().unwrap();
    let second = container.get::<StateObject>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_duplicate_bindings_are_ambiguous() {
    let mut builder = ContainerBuilder::new();
    builder
        .bind_instance(String::from("foo"))
        .bind_instance(String::from("bar"));
    let (container, _) = build(builder);

    let err = container.get::<String>().err().unwrap();
    assert!(matches!(
        err,
        Error::AmbiguousBinding { candidates: 2, .. }
    ));
}

#[test]
fn test_qualified_bindings_do_not_collide() {
    let mut builder = ContainerBuilder::new();
    builder
        .bind_instance(String::from("foo"))
        .bind_named_instance("s2", String::from("baz"));
    let (container, _) = build(builder);

    assert_eq!(container.get::<String>().unwrap().as_str(), "foo");
    assert_eq!(container.get_named::<String>("s2").unwrap().as_str(), "baz");
    assert!(matches!(
        container.get_named::<String>("s3"),
        Err(Error::UnboundType { .. })
    ));
}

#[test]
fn test_unbound_type() {
    let (container, _) = build(ContainerBuilder::new());
    let err = container.get::<u64>().err().unwrap();
    assert!(matches!(err, Error::UnboundType { key } if key == BindingKey::of::<u64>()));
}

#[test]
fn test_just_in_time_binding_for_catalog_type() {
    let mut builder = ContainerBuilder::new();
    builder.register::<StateObject>();
    let (container, registry) = build(builder);

    let obj = container.get::<StateObject>().unwrap();
    assert_eq!(obj.state(), State::Started);
    assert!(Arc::ptr_eq(&obj, &container.get::<StateObject>().unwrap()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_just_in_time_binding_can_be_disabled() {
    let mut builder = ContainerBuilder::new();
    builder.register::<StateObject>().just_in_time(false);
    let (container, _) = build(builder);

    assert!(!container.contains(&BindingKey::of::<StateObject>()));
    assert!(matches!(
        container.get::<StateObject>(),
        Err(Error::UnboundType { .. })
    ));
}

#[test]
fn test_just_in_time_never_applies_to_qualified_keys() {
    let mut builder = ContainerBuilder::new();
    builder.register::<StateObject>();
    let (container, _) = build(builder);

    assert!(matches!(
        container.get_named::<StateObject>("primary"),
        Err(Error::UnboundType { .. })
    ));
}

#[test]
fn test_provider_output_is_activated_and_registered() {
    let mut builder = ContainerBuilder::new();
    builder.bind_provider(Scope::Singleton, |_: &Container| Ok(StateObject::new()));
    let (container, registry) = build(builder);

    let obj = container.get::<StateObject>().unwrap();
    assert_eq!(obj.state(), State::Started);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_provider_reads_from_container() {
    let mut builder = ContainerBuilder::new();
    builder
        .bind_instance(String::from("foo"))
        .bind_named_provider("loud", Scope::Transient, |container: &Container| {
            let name = container.get::<String>()?;
            Ok(Greeter {
                name: name.to_uppercase(),
            })
        });
    let (container, _) = build(builder);

    let greeter = container.get_named::<Greeter>("loud").unwrap();
    assert_eq!(greeter.name, "FOO");
}

#[test]
fn test_class_factory_is_bound() {
    let (container, _) = build(ContainerBuilder::new());

    assert!(container.contains(&BindingKey::of::<ClassFactory>()));
    let factory = container.get::<ClassFactory>().unwrap();
    assert!(Arc::ptr_eq(factory.registry(), container.registry()));
}

#[test]
fn test_contains_reports_explicit_bindings() {
    let mut builder = ContainerBuilder::new();
    builder.bind_named_instance("s2", String::from("baz"));
    let (container, _) = build(builder);

    assert!(container.contains(&BindingKey::named::<String>("s2")));
    assert!(!container.contains(&BindingKey::of::<String>()));
}

#[test]
fn test_circular_dependency_is_detected() {
    let mut builder = ContainerBuilder::new();
    builder
        .bind_type::<CycleA>(Scope::Singleton)
        .bind_type::<CycleB>(Scope::Singleton);
    let (container, _) = build(builder);

    let err = container.get::<CycleA>().err().unwrap();
    match err.root_cause() {
        Error::CircularDependency { path } => {
            assert!(path.contains("CycleA"));
            assert!(path.contains("CycleB"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

struct Strings;

impl Module for Strings {
    fn configure(&self, builder: &mut ContainerBuilder) {
        builder
            .bind_instance(String::from("foo"))
            .bind_named_instance("s2", String::from("baz"));
    }
}

#[test]
fn test_modules_contribute_bindings() {
    let numbers = |builder: &mut ContainerBuilder| {
        builder.bind_instance(42_u32);
    };

    let mut builder = ContainerBuilder::new();
    builder.install(&Strings).install(&numbers);
    assert_eq!(builder.len(), 3);
    let (container, _) = build(builder);

    assert_eq!(container.get_named::<String>("s2").unwrap().as_str(), "baz");
    assert_eq!(*container.get::<u32>().unwrap(), 42);
    assert_eq!(container.binding_count(), 3);
}

#[test]
fn test_factory_construction_does_not_enable_just_in_time() {
    let (container, _) = build(ContainerBuilder::new());
    assert!(container.just_in_time_enabled());

    container.factory().new_instance::<StateObject>().unwrap();
    assert!(!container.catalog().contains(&TypeKey::of::<StateObject>()));
    assert!(matches!(
        container.get::<StateObject>(),
        Err(Error::UnboundType { .. })
    ));
}
