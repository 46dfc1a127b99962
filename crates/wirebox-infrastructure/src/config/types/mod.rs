//! Configuration types module

pub mod app;
pub mod container;
pub mod lifecycle;
pub mod logging;

pub use app::AppConfig;
pub use container::ContainerConfig;
pub use lifecycle::LifecycleConfig;
pub use logging::LoggingConfig;
