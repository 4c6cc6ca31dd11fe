//! Calculation result models for the ESIC calculator.
//!
//! This module contains the four-field [`EsicResult`], the audit structures
//! recording how it was reached, and the [`EsicCalculation`] envelope returned
//! by the HTTP surface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WageInputs;
use crate::presentation::DisplayResult;

/// The outcome of an ESIC calculation.
///
/// `total_gross`, `is_coverable`, `wages_for_esi_contribution` and
/// `employee_contribution` are the outputs a display renders. `wage_sum` and
/// `contribution_basis` are the intermediate values they were derived from.
///
/// # Example
///
/// ```
/// use esic_calculator::calculation::compute;
/// use esic_calculator::models::WageInputs;
/// use rust_decimal::Decimal;
///
/// let result = compute(WageInputs {
///     basic_pay: Decimal::from(15000),
///     ..WageInputs::default()
/// });
///
/// assert!(result.is_coverable);
/// assert_eq!(result.wages_for_esi_contribution, Decimal::from(15000));
/// assert_eq!(result.employee_contribution, Decimal::from(113));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsicResult {
    /// Sum of the four inclusive components.
    pub wage_sum: Decimal,
    /// Sum of all thirteen components.
    pub total_gross: Decimal,
    /// Whether the employee falls under ESIC coverage.
    pub is_coverable: bool,
    /// `max(wage_sum, total_gross / 2)` before the ceiling is applied.
    pub contribution_basis: Decimal,
    /// The wages the contribution is charged on, zero above the ceiling.
    pub wages_for_esi_contribution: Decimal,
    /// The employee's contribution in whole rupees.
    pub employee_contribution: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory provision behind this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag outcomes that are correct but easy to misread, such as
/// contribution wages snapping to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use esic_calculator::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete record of one calculation, as returned by `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsicCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The normalized inputs the calculation ran on.
    pub inputs: WageInputs,
    /// The computed values.
    pub result: EsicResult,
    /// The computed values formatted for display.
    pub display: DisplayResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
