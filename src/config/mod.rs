//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize into FileConfig)
//!     → env.rs (LOG_LEVEL / CONTAINER_NAME override file values)
//!     → LoggerConfig (resolved once, immutable)
//!     → passed by value into the logger
//! ```
//!
//! # Design Decisions
//! - The environment is read once at startup, never per log call
//! - All fields have defaults so an empty file or no file works
//! - A malformed `LOG_LEVEL` is not an error: it resolves to the
//!   permissive threshold and emits a diagnostic warning

pub mod env;
pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{FileConfig, LoggerConfig, LoggerSection, ObservabilityConfig};
