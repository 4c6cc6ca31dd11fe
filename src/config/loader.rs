//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scheme
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EsicRates, SchemeConfig, SchemeMetadata};

/// Loads and provides access to the scheme configuration.
///
/// # Directory Structure
///
/// ```text
/// config/esic/
/// ├── scheme.yaml   # Scheme metadata
/// └── rates.yaml    # Coverage thresholds and contribution rates
/// ```
///
/// # Example
///
/// ```no_run
/// use esic_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/esic").unwrap();
/// println!("Loaded scheme: {}", loader.scheme().name);
/// println!("Employee rate: {}", loader.rates().contribution.employee_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// holds rates the calculator cannot work with.
    ///
    /// ```no_run
    /// use esic_calculator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/esic")?;
    /// # Ok::<(), esic_calculator::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchemeMetadata>(&path.join("scheme.yaml"))?;
        let rates = Self::load_yaml::<EsicRates>(&path.join("rates.yaml"))?;
        Self::validate(&rates)?;

        debug!(
            scheme = %metadata.code,
            version = %metadata.version,
            "Loaded scheme configuration"
        );

        Ok(Self {
            config: SchemeConfig::new(metadata, rates),
        })
    }

    /// A loader holding the built-in statutory rates, for callers without a
    /// configuration directory.
    pub fn statutory() -> Self {
        let metadata = SchemeMetadata {
            code: "ESIC".to_string(),
            name: "Employees' State Insurance Scheme".to_string(),
            version: "statutory".to_string(),
            source_url: "https://www.esic.gov.in".to_string(),
        };
        Self {
            config: SchemeConfig::new(metadata, EsicRates::default()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects rate sets that would make the calculation meaningless.
    fn validate(rates: &EsicRates) -> EngineResult<()> {
        let invalid = |field: &str, message: &str| EngineError::InvalidConfig {
            field: field.to_string(),
            message: message.to_string(),
        };

        let coverage = &rates.coverage;
        let contribution = &rates.contribution;

        if coverage.gross_ceiling <= Decimal::ZERO {
            return Err(invalid("coverage.gross_ceiling", "must be positive"));
        }
        if coverage.wage_ceiling <= Decimal::ZERO {
            return Err(invalid("coverage.wage_ceiling", "must be positive"));
        }
        if coverage.minimum_gross.is_sign_negative() {
            return Err(invalid("coverage.minimum_gross", "must not be negative"));
        }
        if coverage.minimum_gross > coverage.gross_ceiling {
            return Err(invalid(
                "coverage.minimum_gross",
                "must not exceed coverage.gross_ceiling",
            ));
        }
        if contribution.wage_ceiling <= Decimal::ZERO {
            return Err(invalid("contribution.wage_ceiling", "must be positive"));
        }
        if contribution.employee_rate.is_sign_negative() || contribution.employee_rate >= Decimal::ONE
        {
            return Err(invalid(
                "contribution.employee_rate",
                "must be a fraction between 0 and 1",
            ));
        }

        Ok(())
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns the rate set.
    pub fn rates(&self) -> &EsicRates {
        self.config.rates()
    }
}
