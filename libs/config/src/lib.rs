//! # Argos Configuration
//!
//! Centralized constants and runtime configuration for Argos request
//! validation.
//!
//! ## Features
//!
//! - **Limits**: unit conversions and accepted ranges for truck parameters
//! - **Validator Configuration**: log settings and request defaults loaded from
//!   TOML with environment overrides
//!
//! ## Usage
//!
//! ```rust
//! use argos_config::limits;
//!
//! let tons = 5_000.0 / limits::KG_PER_TON;
//! assert!(tons <= limits::MAX_TRUCK_WEIGHT_TONS);
//! ```

pub mod limits;
pub mod validator_config;

// Re-export commonly used types
pub use validator_config::{load_config, parse_level, ValidatorConfig, LoggingConfig, ValidationSettings};
