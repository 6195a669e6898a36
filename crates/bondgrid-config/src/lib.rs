//! # Bondgrid Config
//!
//! Engine settings: shock size, terms of new grid rows, rate table
//! resolution and an optional fixed pricing date. Read from TOML; every key
//! is optional.
//!
//! ```rust
//! use bondgrid_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("shock_size = 0.0025").unwrap();
//! assert_eq!(config.rate_table_points, 21);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

mod engine;
pub mod error;

pub use engine::EngineConfig;
pub use error::{ConfigError, ConfigResult, ValidationError};
