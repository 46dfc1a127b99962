//! Error handling types

use std::fmt;

use thiserror::Error;

use crate::value_objects::{BindingKey, LifecycleState};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by hook and infrastructure failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// No binding exists for the requested key
    #[error("No binding for {key}")]
    UnboundType {
        /// The key that could not be resolved
        key: BindingKey,
    },

    /// More than one binding exists for the requested key
    #[error("Ambiguous binding for {key}: {candidates} candidates")]
    AmbiguousBinding {
        /// The key with competing bindings
        key: BindingKey,
        /// Number of bindings registered under the key
        candidates: usize,
    },

    /// Constructor selection could not pick a single constructor
    #[error("Ambiguous constructor for {type_name}: {candidates} eligible constructors")]
    AmbiguousConstructor {
        /// Type being constructed
        type_name: String,
        /// Number of competing constructors
        candidates: usize,
    },

    /// The type declares no constructor at all
    #[error("No constructor declared for {type_name}")]
    MissingConstructor {
        /// Type being constructed
        type_name: String,
    },

    /// A constructor parameter could not be resolved
    #[error("Unresolved dependency {key} for parameter {position} of {target}")]
    UnresolvedDependency {
        /// Type whose constructor needed the parameter
        target: String,
        /// Zero-based parameter position
        position: usize,
        /// Key of the failing parameter
        key: BindingKey,
        /// Why resolution failed
        #[source]
        source: Box<Error>,
    },

    /// The activation hook of a freshly constructed instance failed
    #[error("Activation failed for {type_name}")]
    ActivationFailed {
        /// Type whose activation failed
        type_name: String,
        /// The hook failure
        #[source]
        source: Box<Error>,
    },

    /// One or more deactivation hooks failed during shutdown
    #[error("{0}")]
    ShutdownFailed(ShutdownFailures),

    /// A type name was not found in the type catalog
    #[error("Unknown type: {name}")]
    UnknownType {
        /// The requested name
        name: String,
    },

    /// A resolved value did not have the declared type
    #[error("Type mismatch for {key}: expected {expected}")]
    TypeMismatch {
        /// Key of the mismatching value
        key: String,
        /// Name of the expected type
        expected: &'static str,
    },

    /// Construction re-entered a key that is already being constructed
    #[error("Circular dependency: {path}")]
    CircularDependency {
        /// Resolution path that closed the cycle
        path: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A lifecycle operation was requested from a state that does not allow it
    #[error("Cannot {operation} from lifecycle state {state}")]
    InvalidState {
        /// Current state
        state: LifecycleState,
        /// Requested operation
        operation: &'static str,
    },

    /// Startup did not finish within the configured bound
    #[error("Startup did not complete within {timeout_ms}ms")]
    StartupTimeout {
        /// The bound that was exceeded
        timeout_ms: u64,
    },

    /// Failure reported by an activation or deactivation hook
    #[error("Hook error: {message}")]
    Hook {
        /// Description of the hook failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    /// Create a hook error
    pub fn hook<S: Into<String>>(message: S) -> Self {
        Self::Hook {
            message: message.into(),
            source: None,
        }
    }

    /// Create a hook error with source
    pub fn hook_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Hook {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wrap a resolution failure for a constructor parameter
    pub fn unresolved(target: &str, position: usize, key: BindingKey, source: Error) -> Self {
        Self::UnresolvedDependency {
            target: target.to_string(),
            position,
            key,
            source: Box::new(source),
        }
    }

    /// Follow `UnresolvedDependency` wrappers down to the failure that started the chain
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Self::UnresolvedDependency { source, .. } = current {
            current = source;
        }
        current
    }

    /// Aggregated shutdown failures, if this is a `ShutdownFailed` error
    pub fn shutdown_failures(&self) -> Option<&ShutdownFailures> {
        match self {
            Self::ShutdownFailed(failures) => Some(failures),
            _ => None,
        }
    }
}

/// A single deactivation hook that failed during shutdown
#[derive(Debug)]
pub struct HookFailure {
    /// Type that owns the hook
    pub type_name: String,
    /// Registry sequence number of the hook
    pub sequence: u64,
    /// The hook's error
    pub error: Error,
}

impl HookFailure {
    pub fn new(type_name: impl Into<String>, sequence: u64, error: Error) -> Self {
        Self {
            type_name: type_name.into(),
            sequence,
            error,
        }
    }
}

/// Every deactivation failure of one shutdown pass, in the order the hooks ran
#[derive(Debug, Default)]
pub struct ShutdownFailures {
    failures: Vec<HookFailure>,
}

impl ShutdownFailures {
    pub fn new(failures: Vec<HookFailure>) -> Self {
        Self { failures }
    }

    pub fn failures(&self) -> &[HookFailure] {
        &self.failures
    }

    /// Owning type of each failed hook
    pub fn type_names(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.type_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for ShutdownFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deactivation hook(s) failed", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(
                f,
                "{sep}{} (#{}): {}",
                failure.type_name, failure.sequence, failure.error
            )?;
        }
        Ok(())
    }
}

impl IntoIterator for ShutdownFailures {
    type Item = HookFailure;
    type IntoIter = std::vec::IntoIter<HookFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
