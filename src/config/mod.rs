//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors collected)
//!     → SteerConfig (validated, immutable)
//!     → VipTable::apply_config (whole-set publish per VIP)
//!
//! On file change:
//!     watcher.rs detects it
//!     → loader.rs loads and validates the new config
//!     → VipTable::apply_config, atomic swap of the active Arc<SteerConfig>
//!     → a failed reload keeps the previous state
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes arrive as a whole new value
//! - All sections have defaults so a minimal file is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - The table, not the config, is what the decision path reads

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BackendConfig, ObservabilityConfig, SteerConfig, VipConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
