//! ESIC coverage determination.
//!
//! An employee is coverable when total gross lies in
//! `[minimum_gross, gross_ceiling]` and the wage sum does not exceed the
//! wage ceiling. Every bound is inclusive.

use rust_decimal::Decimal;

use crate::config::CoverageThresholds;
use crate::models::AuditStep;

/// Statutory reference for the coverage test.
pub const COVERAGE_CLAUSE: &str = "ESI Act s.2(9)";

/// The result of the coverage test, with its audit step.
#[derive(Debug, Clone)]
pub struct CoverageResult {
    /// Whether the employee is coverable.
    pub is_coverable: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Decides whether an employee falls under ESIC coverage.
///
/// All three conditions must hold:
/// - `total_gross <= gross_ceiling`
/// - `wage_sum <= wage_ceiling`
/// - `total_gross >= minimum_gross`
///
/// The minimum keeps an empty form (all zeros) from reading as coverable.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::determine_coverage;
/// use esic_calculator::config::EsicRates;
/// use rust_decimal::Decimal;
///
/// let thresholds = EsicRates::default().coverage;
///
/// let at_limits = determine_coverage(Decimal::from(42000), Decimal::from(21000), &thresholds, 3);
/// assert!(at_limits.is_coverable);
///
/// let empty = determine_coverage(Decimal::ZERO, Decimal::ZERO, &thresholds, 3);
/// assert!(!empty.is_coverable);
/// ```
pub fn determine_coverage(
    total_gross: Decimal,
    wage_sum: Decimal,
    thresholds: &CoverageThresholds,
    step_number: u32,
) -> CoverageResult {
    let within_gross_ceiling = total_gross <= thresholds.gross_ceiling;
    let within_wage_ceiling = wage_sum <= thresholds.wage_ceiling;
    let meets_minimum = total_gross >= thresholds.minimum_gross;

    let is_coverable = within_gross_ceiling && within_wage_ceiling && meets_minimum;

    let reasoning = if is_coverable {
        format!(
            "Total gross {} is within [{}, {}] and wage sum {} does not exceed {} - coverable",
            total_gross.normalize(),
            thresholds.minimum_gross.normalize(),
            thresholds.gross_ceiling.normalize(),
            wage_sum.normalize(),
            thresholds.wage_ceiling.normalize()
        )
    } else {
        let mut reasons = Vec::new();
        if !within_gross_ceiling {
            reasons.push(format!(
                "total gross {} exceeds {}",
                total_gross.normalize(),
                thresholds.gross_ceiling.normalize()
            ));
        }
        if !within_wage_ceiling {
            reasons.push(format!(
                "wage sum {} exceeds {}",
                wage_sum.normalize(),
                thresholds.wage_ceiling.normalize()
            ));
        }
        if !meets_minimum {
            reasons.push(format!(
                "total gross {} is below the minimum {}",
                total_gross.normalize(),
                thresholds.minimum_gross.normalize()
            ));
        }
        format!("Not coverable: {}", reasons.join("; "))
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "esic_coverage".to_string(),
        rule_name: "ESIC Coverage".to_string(),
        clause_ref: COVERAGE_CLAUSE.to_string(),
        input: serde_json::json!({
            "total_gross": total_gross.normalize().to_string(),
            "wage_sum": wage_sum.normalize().to_string(),
            "gross_ceiling": thresholds.gross_ceiling.normalize().to_string(),
            "wage_ceiling": thresholds.wage_ceiling.normalize().to_string(),
            "minimum_gross": thresholds.minimum_gross.normalize().to_string()
        }),
        output: serde_json::json!({
            "is_coverable": is_coverable,
            "within_gross_ceiling": within_gross_ceiling,
            "within_wage_ceiling": within_wage_ceiling,
            "meets_minimum": meets_minimum
        }),
        reasoning,
    };

    CoverageResult {
        is_coverable,
        audit_step,
    }
}
