//! Configuration loading and management for the ESIC calculator.
//!
//! This module loads the scheme metadata and the rate set (coverage
//! thresholds, contribution ceiling and employee rate) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use esic_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/esic").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ContributionRates, CoverageThresholds, EsicRates, SchemeConfig, SchemeMetadata};
