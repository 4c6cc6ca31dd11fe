//! Configuration types for the ESIC scheme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the scheme the rates belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeMetadata {
    /// Short identifier (e.g., "ESIC").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version or effective date of the rate set.
    pub version: String,
    /// URL to the official scheme documentation.
    pub source_url: String,
}

/// Coverage thresholds.
///
/// An employee is coverable when
/// `minimum_gross <= total_gross <= gross_ceiling` and
/// `wage_sum <= wage_ceiling`. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageThresholds {
    /// Highest total gross that is still coverable.
    pub gross_ceiling: Decimal,
    /// Highest wage sum that is still coverable.
    pub wage_ceiling: Decimal,
    /// Lowest total gross that is coverable.
    pub minimum_gross: Decimal,
}

/// Contribution rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Contribution bases above this amount yield zero contribution wages.
    pub wage_ceiling: Decimal,
    /// Employee share as a fraction (0.0075 is 0.75%).
    pub employee_rate: Decimal,
}

/// The complete rate set the calculator runs against.
///
/// # Example
///
/// ```
/// use esic_calculator::config::EsicRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = EsicRates::default();
/// assert_eq!(rates.coverage.gross_ceiling, Decimal::from(42000));
/// assert_eq!(rates.contribution.employee_rate, Decimal::from_str("0.0075").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsicRates {
    /// Coverage thresholds.
    pub coverage: CoverageThresholds,
    /// Contribution rates.
    pub contribution: ContributionRates,
}

impl Default for EsicRates {
    /// The statutory rate set: coverage up to 42000 gross and 21000 wages,
    /// contribution wages up to 21000 at 0.75%.
    fn default() -> Self {
        Self {
            coverage: CoverageThresholds {
                gross_ceiling: Decimal::from(42000),
                wage_ceiling: Decimal::from(21000),
                minimum_gross: Decimal::ONE,
            },
            contribution: ContributionRates {
                wage_ceiling: Decimal::from(21000),
                employee_rate: Decimal::new(75, 4),
            },
        }
    }
}

/// The complete scheme configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    metadata: SchemeMetadata,
    rates: EsicRates,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rates: EsicRates) -> Self {
        Self { metadata, rates }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the rate set.
    pub fn rates(&self) -> &EsicRates {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_rates_are_statutory_values() {
        let rates = EsicRates::default();

        assert_eq!(rates.coverage.gross_ceiling, Decimal::from(42000));
        assert_eq!(rates.coverage.wage_ceiling, Decimal::from(21000));
        assert_eq!(rates.coverage.minimum_gross, Decimal::ONE);
        assert_eq!(rates.contribution.wage_ceiling, Decimal::from(21000));
        assert_eq!(
            rates.contribution.employee_rate,
            Decimal::from_str("0.0075").unwrap()
        );
    }

    #[test]
    fn test_deserialize_rates_from_yaml() {
        let yaml = r#"
coverage:
  gross_ceiling: "42000"
  wage_ceiling: "21000"
  minimum_gross: "1"
contribution:
  wage_ceiling: "21000"
  employee_rate: "0.0075"
"#;
        let rates: EsicRates = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates, EsicRates::default());
    }
}
