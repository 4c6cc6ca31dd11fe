//! Contribution wages and employee contribution.
//!
//! The contribution basis is the larger of the wage sum and half of total
//! gross. A basis up to the ceiling is used as-is; a basis above it yields
//! zero contribution wages. This is a cut-off, not a cap: a basis of
//! 21000.01 gives 0, never 21000.

use rust_decimal::Decimal;

use crate::config::ContributionRates;
use crate::models::AuditStep;

/// Statutory reference for contributions.
pub const CONTRIBUTION_CLAUSE: &str = "ESI Act s.39";

/// Statutory reference for the employee's contribution rate.
pub const EMPLOYEE_RATE_CLAUSE: &str = "ESI (Central) Rules r.51";

/// The contribution basis and the wages derived from it, with the audit step.
#[derive(Debug, Clone)]
pub struct ContributionWagesResult {
    /// `max(wage_sum, total_gross / 2)`.
    pub basis: Decimal,
    /// The basis if it is within the ceiling, otherwise zero.
    pub wages: Decimal,
    /// True when the basis was above the ceiling.
    pub above_ceiling: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The employee contribution, with the audit step.
#[derive(Debug, Clone)]
pub struct EmployeeContributionResult {
    /// The contribution in whole rupees.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the wages the ESI contribution is charged on.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::calculate_contribution_wages;
/// use esic_calculator::config::EsicRates;
/// use rust_decimal::Decimal;
///
/// let rates = EsicRates::default().contribution;
///
/// // Half of gross wins over a smaller wage sum.
/// let result = calculate_contribution_wages(Decimal::from(10000), Decimal::from(42000), &rates, 4);
/// assert_eq!(result.basis, Decimal::from(21000));
/// assert_eq!(result.wages, Decimal::from(21000));
///
/// // Above the ceiling the wages drop to zero.
/// let result = calculate_contribution_wages(Decimal::from(25000), Decimal::from(25000), &rates, 4);
/// assert_eq!(result.wages, Decimal::ZERO);
/// ```
pub fn calculate_contribution_wages(
    wage_sum: Decimal,
    total_gross: Decimal,
    rates: &ContributionRates,
    step_number: u32,
) -> ContributionWagesResult {
    let half_gross = total_gross / Decimal::TWO;
    let basis = wage_sum.max(half_gross);

    let above_ceiling = basis > rates.wage_ceiling;
    let wages = if above_ceiling { Decimal::ZERO } else { basis };

    let reasoning = if above_ceiling {
        format!(
            "max({}, {} / 2) = {} exceeds ceiling {} - contribution wages are 0",
            wage_sum.normalize(),
            total_gross.normalize(),
            basis.normalize(),
            rates.wage_ceiling.normalize()
        )
    } else {
        format!(
            "max({}, {} / 2) = {} is within ceiling {}",
            wage_sum.normalize(),
            total_gross.normalize(),
            basis.normalize(),
            rates.wage_ceiling.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "contribution_wages".to_string(),
        rule_name: "Wages for ESI Contribution".to_string(),
        clause_ref: CONTRIBUTION_CLAUSE.to_string(),
        input: serde_json::json!({
            "wage_sum": wage_sum.normalize().to_string(),
            "total_gross": total_gross.normalize().to_string(),
            "wage_ceiling": rates.wage_ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "half_gross": half_gross.normalize().to_string(),
            "basis": basis.normalize().to_string(),
            "above_ceiling": above_ceiling,
            "wages": wages.normalize().to_string()
        }),
        reasoning,
    };

    ContributionWagesResult {
        basis,
        wages,
        above_ceiling,
        audit_step,
    }
}

/// Applies the employee rate and rounds up to the next whole rupee.
///
/// Any positive fraction rounds up; an exact result is left unchanged.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::calculate_employee_contribution;
/// use esic_calculator::config::EsicRates;
/// use rust_decimal::Decimal;
///
/// let rates = EsicRates::default().contribution;
///
/// // 15000 x 0.75% = 112.5, rounded up
/// let result = calculate_employee_contribution(Decimal::from(15000), &rates, 5);
/// assert_eq!(result.amount, Decimal::from(113));
///
/// // 20000 x 0.75% = 150 exactly
/// let result = calculate_employee_contribution(Decimal::from(20000), &rates, 5);
/// assert_eq!(result.amount, Decimal::from(150));
/// ```
pub fn calculate_employee_contribution(
    wages: Decimal,
    rates: &ContributionRates,
    step_number: u32,
) -> EmployeeContributionResult {
    let exact = wages * rates.employee_rate;
    let amount = exact.ceil();
    let rounded_up = amount != exact;

    let percentage = (rates.employee_rate * Decimal::ONE_HUNDRED).normalize();

    let reasoning = if rounded_up {
        format!(
            "{} x {}% = {}, rounded up to {}",
            wages.normalize(),
            percentage,
            exact.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "{} x {}% = {}",
            wages.normalize(),
            percentage,
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_contribution".to_string(),
        rule_name: "Employee Contribution".to_string(),
        clause_ref: EMPLOYEE_RATE_CLAUSE.to_string(),
        input: serde_json::json!({
            "wages": wages.normalize().to_string(),
            "employee_rate": rates.employee_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "exact": exact.normalize().to_string(),
            "amount": amount.normalize().to_string(),
            "rounded_up": rounded_up
        }),
        reasoning,
    };

    EmployeeContributionResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EsicRates;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> ContributionRates {
        EsicRates::default().contribution
    }

    #[test]
    fn test_wage_sum_is_basis_when_larger() {
        let result = calculate_contribution_wages(dec("15000"), dec("15000"), &rates(), 4);

        assert_eq!(result.basis, dec("15000"));
        assert_eq!(result.wages, dec("15000"));
        assert!(!result.above_ceiling);
        assert_eq!(result.audit_step.output["half_gross"].as_str().unwrap(), "7500");
    }

    #[test]
    fn test_half_gross_is_basis_when_larger() {
        let result = calculate_contribution_wages(dec("8000"), dec("30000"), &rates(), 4);

        assert_eq!(result.basis, dec("15000"));
        assert_eq!(result.wages, dec("15000"));
    }

    #[test]
    fn test_half_gross_keeps_fraction() {
        let result = calculate_contribution_wages(dec("0"), dec("15001"), &rates(), 4);
        assert_eq!(result.basis, dec("7500.5"));
    }

    #[test]
    fn test_basis_at_ceiling_passes_through() {
        let result = calculate_contribution_wages(dec("21000"), dec("21000"), &rates(), 4);

        assert_eq!(result.wages, dec("21000"));
        assert!(!result.above_ceiling);
        assert!(result.audit_step.reasoning.contains("is within ceiling 21000"));
    }

    #[test]
    fn test_basis_just_above_ceiling_snaps_to_zero() {
        let result = calculate_contribution_wages(dec("21000.01"), dec("21000.01"), &rates(), 4);

        assert_eq!(result.basis, dec("21000.01"));
        assert_eq!(result.wages, Decimal::ZERO);
        assert!(result.above_ceiling);
        assert!(result.audit_step.output["above_ceiling"].as_bool().unwrap());
        assert!(result.audit_step.reasoning.contains("contribution wages are 0"));
    }

    #[test]
    fn test_half_gross_above_ceiling_snaps_to_zero() {
        // Wage sum is small but half of gross crosses the ceiling.
        let result = calculate_contribution_wages(dec("5000"), dec("42002"), &rates(), 4);

        assert_eq!(result.basis, dec("21001"));
        assert_eq!(result.wages, Decimal::ZERO);
    }

    #[test]
    fn test_contribution_rounds_fraction_up() {
        let result = calculate_employee_contribution(dec("15000"), &rates(), 5);

        assert_eq!(result.amount, dec("113"));
        assert_eq!(result.audit_step.output["exact"].as_str().unwrap(), "112.5");
        assert!(result.audit_step.output["rounded_up"].as_bool().unwrap());
        assert_eq!(
            result.audit_step.reasoning,
            "15000 x 0.75% = 112.5, rounded up to 113"
        );
    }

    #[test]
    fn test_contribution_at_ceiling() {
        let result = calculate_employee_contribution(dec("21000"), &rates(), 5);
        assert_eq!(result.amount, dec("158"));
    }

    #[test]
    fn test_exact_contribution_is_not_rounded() {
        let result = calculate_employee_contribution(dec("20000"), &rates(), 5);

        assert_eq!(result.amount, dec("150"));
        assert!(!result.audit_step.output["rounded_up"].as_bool().unwrap());
        assert_eq!(result.audit_step.reasoning, "20000 x 0.75% = 150");
    }

    #[test]
    fn test_tiny_wages_round_up_to_one() {
        // 1 x 0.75% = 0.0075
        let result = calculate_employee_contribution(dec("1"), &rates(), 5);
        assert_eq!(result.amount, dec("1"));
    }

    #[test]
    fn test_zero_wages_give_zero_contribution() {
        let result = calculate_employee_contribution(Decimal::ZERO, &rates(), 5);

        assert_eq!(result.amount, Decimal::ZERO);
        assert!(!result.audit_step.output["rounded_up"].as_bool().unwrap());
    }

    #[test]
    fn test_contribution_is_whole_number() {
        for wages in ["1234.56", "999.99", "20999.99", "7500.5"] {
            let result = calculate_employee_contribution(dec(wages), &rates(), 5);
            assert_eq!(result.amount, result.amount.trunc(), "wages {}", wages);
        }
    }
}
