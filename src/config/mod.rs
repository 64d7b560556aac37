//! Configuration loading and management for the Groove Engine.
//!
//! This module loads deployment metadata and the default Groove Score
//! category weights from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use groove_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/groove").unwrap();
//! println!("Loaded deployment: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineMetadata, GrooveConfig, ScoringConfig};
