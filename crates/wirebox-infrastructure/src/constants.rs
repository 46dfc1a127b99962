//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebox";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between nested keys in environment variables (`WIREBOX_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "WIREBOX_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "wirebox";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Whether unbound catalog types are constructed on demand by default
pub const DEFAULT_JUST_IN_TIME_BINDINGS: bool = true;
