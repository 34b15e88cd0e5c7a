//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → LogConfig (typed, immutable)
//!     → sink built once from LogConfig.sink
//!     → filter fields held in FilterHandle (atomic swap)
//!
//! On reload:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → FilterHandle swaps min_severity / conditional_threshold
//!     → in-flight and future log calls observe the new filter
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Only filter fields are hot-swapped; the sink is construction-time

pub mod filter;
pub mod loader;
pub mod schema;
pub mod watcher;

pub use filter::{FilterConfig, FilterHandle};
pub use loader::{load_config, ConfigError};
pub use schema::{ConsoleStream, LogConfig, SinkConfig};
pub use watcher::ConfigWatcher;
