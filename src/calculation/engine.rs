//! The ESIC calculation pipeline.
//!
//! Runs the steps in their fixed order: wage sum, total gross, coverage,
//! contribution wages, employee contribution. The pipeline holds no state and
//! every call is independent, so it is safe to run from any number of
//! threads at once.

use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::config::EsicRates;
use crate::models::{AuditTrace, AuditWarning, EsicCalculation, EsicResult, WageInputs};
use crate::presentation::DisplayResult;

use super::contribution::{calculate_contribution_wages, calculate_employee_contribution};
use super::coverage::determine_coverage;
use super::normalization::normalize_inputs;
use super::wage_sum::{calculate_total_gross, calculate_wage_sum};

/// A computed result together with the trace of how it was reached.
#[derive(Debug, Clone)]
pub struct ComputationResult {
    /// The computed values.
    pub result: EsicResult,
    /// The audit trace for the computation.
    pub audit_trace: AuditTrace,
}

/// Computes ESIC coverage and contribution using the statutory rates.
///
/// Never fails. Inputs built directly rather than through
/// [`normalize_fields`](super::normalize_fields) are bounded first: a
/// negative or out-of-range component counts as zero.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::compute;
/// use esic_calculator::models::WageInputs;
/// use rust_decimal::Decimal;
///
/// let result = compute(WageInputs {
///     basic_pay: Decimal::from(10000),
///     hra: Decimal::from(32000),
///     ..WageInputs::default()
/// });
///
/// assert_eq!(result.total_gross, Decimal::from(42000));
/// assert!(result.is_coverable);
/// assert_eq!(result.wages_for_esi_contribution, Decimal::from(21000));
/// assert_eq!(result.employee_contribution, Decimal::from(158));
/// ```
pub fn compute(inputs: WageInputs) -> EsicResult {
    compute_with_rates(inputs, &EsicRates::default()).result
}

/// Computes ESIC coverage and contribution against the given rate set,
/// recording an audit step per rule.
pub fn compute_with_rates(inputs: WageInputs, rates: &EsicRates) -> ComputationResult {
    let start_time = Instant::now();
    let inputs = normalize_inputs(inputs);
    let mut steps = Vec::with_capacity(5);
    let mut warnings = Vec::new();

    let wage_sum = calculate_wage_sum(&inputs, 1);
    steps.push(wage_sum.audit_step);

    let total_gross = calculate_total_gross(&inputs, wage_sum.amount, 2);
    steps.push(total_gross.audit_step);

    let coverage = determine_coverage(total_gross.amount, wage_sum.amount, &rates.coverage, 3);
    steps.push(coverage.audit_step);

    let contribution_wages = calculate_contribution_wages(
        wage_sum.amount,
        total_gross.amount,
        &rates.contribution,
        4,
    );
    steps.push(contribution_wages.audit_step);

    let contribution =
        calculate_employee_contribution(contribution_wages.wages, &rates.contribution, 5);
    steps.push(contribution.audit_step);

    if total_gross.amount < rates.coverage.minimum_gross {
        warnings.push(AuditWarning {
            code: "NO_WAGES_ENTERED".to_string(),
            message: format!(
                "Total gross {} is below the minimum of {}; nothing to assess",
                total_gross.amount.normalize(),
                rates.coverage.minimum_gross.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    if contribution_wages.above_ceiling {
        warnings.push(AuditWarning {
            code: "CONTRIBUTION_WAGES_ABOVE_CEILING".to_string(),
            message: format!(
                "Contribution basis {} exceeds {}; contribution wages set to 0",
                contribution_wages.basis.normalize(),
                rates.contribution.wage_ceiling.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    let result = EsicResult {
        wage_sum: wage_sum.amount,
        total_gross: total_gross.amount,
        is_coverable: coverage.is_coverable,
        contribution_basis: contribution_wages.basis,
        wages_for_esi_contribution: contribution_wages.wages,
        employee_contribution: contribution.amount,
    };

    ComputationResult {
        result,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
        },
    }
}

/// Runs a full calculation and wraps it in an [`EsicCalculation`] record with
/// an id, timestamp, engine version and display strings.
pub fn calculate(inputs: WageInputs, rates: &EsicRates) -> EsicCalculation {
    let inputs = normalize_inputs(inputs);
    let computation = compute_with_rates(inputs, rates);

    EsicCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        inputs,
        display: DisplayResult::from_result(&computation.result),
        result: computation.result,
        audit_trace: computation.audit_trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn basic_pay(amount: &str) -> WageInputs {
        WageInputs {
            basic_pay: dec(amount),
            ..WageInputs::default()
        }
    }

    /// Scenario 1: typical coverable wage
    #[test]
    fn test_basic_pay_15000_is_coverable() {
        let result = compute(basic_pay("15000"));

        assert_eq!(result.wage_sum, dec("15000"));
        assert_eq!(result.total_gross, dec("15000"));
        assert!(result.is_coverable);
        assert_eq!(result.contribution_basis, dec("15000"));
        assert_eq!(result.wages_for_esi_contribution, dec("15000"));
        assert_eq!(result.employee_contribution, dec("113"));
    }

    /// Scenario 2: wage sum above the ceiling
    #[test]
    fn test_basic_pay_25000_is_not_coverable() {
        let result = compute(basic_pay("25000"));

        assert_eq!(result.total_gross, dec("25000"));
        assert!(!result.is_coverable);
        assert_eq!(result.contribution_basis, dec("25000"));
        assert_eq!(result.wages_for_esi_contribution, Decimal::ZERO);
        assert_eq!(result.employee_contribution, Decimal::ZERO);
    }

    /// Scenario 3: empty form
    #[test]
    fn test_all_zero_is_not_coverable() {
        let result = compute(WageInputs::default());

        assert_eq!(result.total_gross, Decimal::ZERO);
        assert!(!result.is_coverable);
        assert_eq!(result.wages_for_esi_contribution, Decimal::ZERO);
        assert_eq!(result.employee_contribution, Decimal::ZERO);
    }

    /// Scenario 4: both limits hit exactly
    #[test]
    fn test_gross_at_ceiling_is_coverable() {
        let result = compute(WageInputs {
            basic_pay: dec("10000"),
            hra: dec("32000"),
            ..WageInputs::default()
        });

        assert_eq!(result.wage_sum, dec("10000"));
        assert_eq!(result.total_gross, dec("42000"));
        assert!(result.is_coverable);
        assert_eq!(result.contribution_basis, dec("21000"));
        assert_eq!(result.wages_for_esi_contribution, dec("21000"));
        assert_eq!(result.employee_contribution, dec("158"));
    }

    /// Scenario 5: gross one rupee over the ceiling
    #[test]
    fn test_gross_one_over_ceiling_is_not_coverable() {
        let result = compute(WageInputs {
            basic_pay: dec("10000"),
            hra: dec("32001"),
            ..WageInputs::default()
        });

        assert_eq!(result.total_gross, dec("42001"));
        assert!(!result.is_coverable);
        // max(10000, 21000.5) is above the contribution ceiling
        assert_eq!(result.contribution_basis, dec("21000.5"));
        assert_eq!(result.wages_for_esi_contribution, Decimal::ZERO);
        assert_eq!(result.employee_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_half_gross_over_ceiling_zeroes_wages() {
        let result = compute(WageInputs {
            basic_pay: dec("100"),
            bonus: dec("42000"),
            ..WageInputs::default()
        });

        assert!(!result.is_coverable);
        assert_eq!(result.contribution_basis, dec("21050"));
        assert_eq!(result.wages_for_esi_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_contribution_does_not_depend_on_coverage() {
        // Below the minimum gross, so not coverable, but the contribution
        // wages still pass through and round up to one rupee.
        let result = compute(basic_pay("0.5"));

        assert!(!result.is_coverable);
        assert_eq!(result.wages_for_esi_contribution, dec("0.5"));
        assert_eq!(result.employee_contribution, dec("1"));
    }

    #[test]
    fn test_audit_trace_has_five_ordered_steps() {
        let computation = compute_with_rates(basic_pay("15000"), &EsicRates::default());
        let steps = &computation.audit_trace.steps;

        let rule_ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "wage_sum",
                "total_gross",
                "esic_coverage",
                "contribution_wages",
                "employee_contribution"
            ]
        );
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
        assert!(computation.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_empty_form_warns_no_wages() {
        let computation = compute_with_rates(WageInputs::default(), &EsicRates::default());
        let codes: Vec<&str> = computation
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();

        assert_eq!(codes, vec!["NO_WAGES_ENTERED"]);
    }

    #[test]
    fn test_snap_to_zero_warns_above_ceiling() {
        let computation = compute_with_rates(basic_pay("25000"), &EsicRates::default());
        let warning = &computation.audit_trace.warnings[0];

        assert_eq!(warning.code, "CONTRIBUTION_WAGES_ABOVE_CEILING");
        assert_eq!(warning.severity, "medium");
        assert!(warning.message.contains("25000"));
    }

    #[test]
    fn test_custom_rates_are_applied() {
        let mut rates = EsicRates::default();
        rates.contribution.employee_rate = dec("0.01");
        rates.contribution.wage_ceiling = dec("30000");
        rates.coverage.wage_ceiling = dec("30000");

        let result = compute_with_rates(basic_pay("25000"), &rates).result;

        assert!(result.is_coverable);
        assert_eq!(result.wages_for_esi_contribution, dec("25000"));
        assert_eq!(result.employee_contribution, dec("250"));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let inputs = WageInputs {
            basic_pay: dec("12345.67"),
            overtime: dec("890.12"),
            ..WageInputs::default()
        };

        assert_eq!(compute(inputs), compute(inputs));
    }

    #[test]
    fn test_calculate_wraps_result_with_metadata() {
        let inputs = basic_pay("15000");
        let calculation = calculate(inputs, &EsicRates::default());

        assert_eq!(calculation.inputs, inputs);
        assert_eq!(calculation.result, compute(inputs));
        assert_eq!(calculation.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(calculation.display.total_gross, "15,000.00");
        assert_eq!(calculation.display.coverable, "YES");
        assert_eq!(calculation.audit_trace.steps.len(), 5);
    }

    #[test]
    fn test_calculate_assigns_unique_ids() {
        let inputs = basic_pay("15000");
        let first = calculate(inputs, &EsicRates::default());
        let second = calculate(inputs, &EsicRates::default());

        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn test_extreme_components_count_as_zero() {
        let result = compute(WageInputs {
            basic_pay: Decimal::MAX,
            da: Decimal::MAX,
            hra: Decimal::MAX,
            bonus: dec("1200"),
            ..WageInputs::default()
        });

        assert_eq!(result.wage_sum, Decimal::ZERO);
        assert_eq!(result.total_gross, dec("1200"));
        assert!(result.is_coverable);
        assert_eq!(result.wages_for_esi_contribution, dec("600"));
        assert_eq!(result.employee_contribution, dec("5"));
    }

    #[test]
    fn test_negative_component_cannot_offset_gross() {
        let result = compute(WageInputs {
            basic_pay: dec("-50000"),
            hra: dec("60000"),
            ..WageInputs::default()
        });

        assert_eq!(result.wage_sum, Decimal::ZERO);
        assert_eq!(result.total_gross, dec("60000"));
        assert!(!result.is_coverable);
        assert_eq!(result.wages_for_esi_contribution, Decimal::ZERO);
        assert_eq!(result.employee_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_calculate_records_bounded_inputs() {
        let calculation = calculate(
            WageInputs {
                basic_pay: dec("-1"),
                hra: dec("4000"),
                ..WageInputs::default()
            },
            &EsicRates::default(),
        );

        assert_eq!(calculation.inputs.basic_pay, Decimal::ZERO);
        assert_eq!(calculation.inputs.hra, dec("4000"));
    }
}
