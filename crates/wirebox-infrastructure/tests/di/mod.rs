//! Construction tests: factory, container, deferred handles

mod container_test;
