//! Wage sum and total gross calculation.
//!
//! The wage sum covers the four inclusive components and is the base for
//! both the coverage test and the contribution basis. Total gross adds the
//! nine exclusive components on top of it.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ComponentGroup, WageInputs};

/// Statutory reference for the definition of wages.
pub const WAGE_DEFINITION_CLAUSE: &str = "ESI Act s.2(22)";

/// The result of summing a group of components, with its audit step.
#[derive(Debug, Clone)]
pub struct WageSumResult {
    /// The summed amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the inclusive components: basic pay, DA, retention and other
/// inclusive allowances.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::calculate_wage_sum;
/// use esic_calculator::models::WageInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = WageInputs {
///     basic_pay: Decimal::from(12000),
///     da: Decimal::from(3000),
///     hra: Decimal::from(5000),
///     ..WageInputs::default()
/// };
///
/// let result = calculate_wage_sum(&inputs, 1);
/// assert_eq!(result.amount, Decimal::from(15000));
/// ```
pub fn calculate_wage_sum(inputs: &WageInputs, step_number: u32) -> WageSumResult {
    let amount = inputs.basic_pay + inputs.da + inputs.retention + inputs.inclusive;

    let audit_step = AuditStep {
        step_number,
        rule_id: "wage_sum".to_string(),
        rule_name: "Wage Sum".to_string(),
        clause_ref: WAGE_DEFINITION_CLAUSE.to_string(),
        input: components_json(inputs, Some(ComponentGroup::Inclusive)),
        output: serde_json::json!({
            "wage_sum": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            inputs.basic_pay.normalize(),
            inputs.da.normalize(),
            inputs.retention.normalize(),
            inputs.inclusive.normalize(),
            amount.normalize()
        ),
    };

    WageSumResult { amount, audit_step }
}

/// Adds the nine exclusive components to the wage sum.
///
/// `wage_sum` must be the value [`calculate_wage_sum`] produced for the same
/// inputs.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::calculate_total_gross;
/// use esic_calculator::models::WageInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = WageInputs {
///     basic_pay: Decimal::from(10000),
///     hra: Decimal::from(32000),
///     ..WageInputs::default()
/// };
///
/// let result = calculate_total_gross(&inputs, Decimal::from(10000), 2);
/// assert_eq!(result.amount, Decimal::from(42000));
/// ```
pub fn calculate_total_gross(
    inputs: &WageInputs,
    wage_sum: Decimal,
    step_number: u32,
) -> WageSumResult {
    let exclusive_total = inputs.hra
        + inputs.conveyance
        + inputs.overtime
        + inputs.bonus
        + inputs.washing
        + inputs.epf
        + inputs.commission
        + inputs.house_value
        + inputs.settlement;
    let amount = wage_sum + exclusive_total;

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_gross".to_string(),
        rule_name: "Total Gross".to_string(),
        clause_ref: WAGE_DEFINITION_CLAUSE.to_string(),
        input: serde_json::json!({
            "wage_sum": wage_sum.normalize().to_string(),
            "exclusive_components": components_json(inputs, Some(ComponentGroup::Exclusive))
        }),
        output: serde_json::json!({
            "exclusive_total": exclusive_total.normalize().to_string(),
            "total_gross": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Wage sum {} + exclusive components {} = {}",
            wage_sum.normalize(),
            exclusive_total.normalize(),
            amount.normalize()
        ),
    };

    WageSumResult { amount, audit_step }
}

/// Renders the components of a group (or all of them) as a JSON object
/// keyed by form field name.
fn components_json(inputs: &WageInputs, group: Option<ComponentGroup>) -> serde_json::Value {
    let map = inputs
        .components()
        .filter(|(component, _)| group.is_none_or(|g| component.group() == g))
        .map(|(component, amount)| {
            (
                component.field_name().to_string(),
                serde_json::Value::String(amount.normalize().to_string()),
            )
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(map)
}
