//! Wage component inputs.
//!
//! This module defines the [`WageInputs`] record holding the thirteen payroll
//! components an ESIC calculation works from, and the [`WageComponent`] enum
//! that names them and sorts them into inclusive and exclusive groups.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::normalize_value;

/// Which side of the ESIC wage definition a component falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentGroup {
    /// Counted toward the wage sum used for eligibility and contribution.
    Inclusive,
    /// Counted only in total gross.
    Exclusive,
}

/// One of the thirteen wage components, in form order.
///
/// # Example
///
/// ```
/// use esic_calculator::models::{ComponentGroup, WageComponent};
///
/// assert_eq!(WageComponent::HouseValue.field_name(), "houseValue");
/// assert_eq!(WageComponent::Da.group(), ComponentGroup::Inclusive);
/// assert_eq!(WageComponent::from_field_name("hra"), Some(WageComponent::Hra));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageComponent {
    /// Basic pay.
    BasicPay,
    /// Dearness allowance.
    Da,
    /// Retention allowance.
    Retention,
    /// Other allowances that fall inside the wage definition.
    Inclusive,
    /// House rent allowance.
    Hra,
    /// Conveyance allowance.
    Conveyance,
    /// Overtime payments.
    Overtime,
    /// Bonus.
    Bonus,
    /// Washing allowance.
    Washing,
    /// Employer's EPF contribution.
    Epf,
    /// Commission.
    Commission,
    /// Value of house accommodation provided.
    HouseValue,
    /// Settlement payments on discharge or retrenchment.
    Settlement,
}

impl WageComponent {
    /// All components in form order, inclusive group first.
    pub const ALL: [WageComponent; 13] = [
        WageComponent::BasicPay,
        WageComponent::Da,
        WageComponent::Retention,
        WageComponent::Inclusive,
        WageComponent::Hra,
        WageComponent::Conveyance,
        WageComponent::Overtime,
        WageComponent::Bonus,
        WageComponent::Washing,
        WageComponent::Epf,
        WageComponent::Commission,
        WageComponent::HouseValue,
        WageComponent::Settlement,
    ];

    /// The form field name a collaborator uses for this component.
    pub fn field_name(self) -> &'static str {
        match self {
            WageComponent::BasicPay => "basicPay",
            WageComponent::Da => "da",
            WageComponent::Retention => "retention",
            WageComponent::Inclusive => "inclusive",
            WageComponent::Hra => "hra",
            WageComponent::Conveyance => "conveyance",
            WageComponent::Overtime => "overtime",
            WageComponent::Bonus => "bonus",
            WageComponent::Washing => "washing",
            WageComponent::Epf => "epf",
            WageComponent::Commission => "commission",
            WageComponent::HouseValue => "houseValue",
            WageComponent::Settlement => "settlement",
        }
    }

    /// A human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WageComponent::BasicPay => "Basic Pay",
            WageComponent::Da => "Dearness Allowance",
            WageComponent::Retention => "Retention Allowance",
            WageComponent::Inclusive => "Other Inclusive Allowances",
            WageComponent::Hra => "House Rent Allowance",
            WageComponent::Conveyance => "Conveyance Allowance",
            WageComponent::Overtime => "Overtime",
            WageComponent::Bonus => "Bonus",
            WageComponent::Washing => "Washing Allowance",
            WageComponent::Epf => "Employer's EPF Contribution",
            WageComponent::Commission => "Commission",
            WageComponent::HouseValue => "Value of House Accommodation",
            WageComponent::Settlement => "Settlement Payment",
        }
    }

    /// The group this component belongs to.
    pub fn group(self) -> ComponentGroup {
        match self {
            WageComponent::BasicPay
            | WageComponent::Da
            | WageComponent::Retention
            | WageComponent::Inclusive => ComponentGroup::Inclusive,
            _ => ComponentGroup::Exclusive,
        }
    }

    /// Looks a component up by form field name.
    ///
    /// Accepts both the form name (`houseValue`) and the snake_case name
    /// (`house_value`).
    pub fn from_field_name(name: &str) -> Option<WageComponent> {
        WageComponent::ALL.into_iter().find(|component| {
            component.field_name() == name || component.snake_case_name() == name
        })
    }

    fn snake_case_name(self) -> &'static str {
        match self {
            WageComponent::BasicPay => "basic_pay",
            WageComponent::HouseValue => "house_value",
            other => other.field_name(),
        }
    }
}

/// The thirteen wage components for one employee.
///
/// Every field defaults to zero, so a partially filled JSON object
/// deserializes cleanly. Deserialized amounts are normalized the same way
/// form values are: blank, non-numeric, negative or out-of-range amounts
/// become zero. Field names are snake_case; the camelCase form names
/// (`basicPay`, `houseValue`) are accepted as aliases.
///
/// # Example
///
/// ```
/// use esic_calculator::models::WageInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = WageInputs {
///     basic_pay: Decimal::from(10000),
///     hra: Decimal::from(4000),
///     ..WageInputs::default()
/// };
/// assert_eq!(inputs.wage_sum(), Decimal::from(10000));
/// assert_eq!(inputs.total_gross(), Decimal::from(14000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WageInputs {
    /// Basic pay.
    #[serde(alias = "basicPay", deserialize_with = "normalized_amount")]
    pub basic_pay: Decimal,
    /// Dearness allowance.
    #[serde(deserialize_with = "normalized_amount")]
    pub da: Decimal,
    /// Retention allowance.
    #[serde(deserialize_with = "normalized_amount")]
    pub retention: Decimal,
    /// Other allowances inside the wage definition.
    #[serde(deserialize_with = "normalized_amount")]
    pub inclusive: Decimal,
    /// House rent allowance.
    #[serde(deserialize_with = "normalized_amount")]
    pub hra: Decimal,
    /// Conveyance allowance.
    #[serde(deserialize_with = "normalized_amount")]
    pub conveyance: Decimal,
    /// Overtime payments.
    #[serde(deserialize_with = "normalized_amount")]
    pub overtime: Decimal,
    /// Bonus.
    #[serde(deserialize_with = "normalized_amount")]
    pub bonus: Decimal,
    /// Washing allowance.
    #[serde(deserialize_with = "normalized_amount")]
    pub washing: Decimal,
    /// Employer's EPF contribution.
    #[serde(deserialize_with = "normalized_amount")]
    pub epf: Decimal,
    /// Commission.
    #[serde(deserialize_with = "normalized_amount")]
    pub commission: Decimal,
    /// Value of house accommodation provided.
    #[serde(alias = "houseValue", deserialize_with = "normalized_amount")]
    pub house_value: Decimal,
    /// Settlement payments.
    #[serde(deserialize_with = "normalized_amount")]
    pub settlement: Decimal,
}

impl WageInputs {
    /// Returns the amount held for a component.
    pub fn amount(&self, component: WageComponent) -> Decimal {
        match component {
            WageComponent::BasicPay => self.basic_pay,
            WageComponent::Da => self.da,
            WageComponent::Retention => self.retention,
            WageComponent::Inclusive => self.inclusive,
            WageComponent::Hra => self.hra,
            WageComponent::Conveyance => self.conveyance,
            WageComponent::Overtime => self.overtime,
            WageComponent::Bonus => self.bonus,
            WageComponent::Washing => self.washing,
            WageComponent::Epf => self.epf,
            WageComponent::Commission => self.commission,
            WageComponent::HouseValue => self.house_value,
            WageComponent::Settlement => self.settlement,
        }
    }

    /// Replaces the amount held for a component.
    pub fn set_amount(&mut self, component: WageComponent, amount: Decimal) {
        let slot = match component {
            WageComponent::BasicPay => &mut self.basic_pay,
            WageComponent::Da => &mut self.da,
            WageComponent::Retention => &mut self.retention,
            WageComponent::Inclusive => &mut self.inclusive,
            WageComponent::Hra => &mut self.hra,
            WageComponent::Conveyance => &mut self.conveyance,
            WageComponent::Overtime => &mut self.overtime,
            WageComponent::Bonus => &mut self.bonus,
            WageComponent::Washing => &mut self.washing,
            WageComponent::Epf => &mut self.epf,
            WageComponent::Commission => &mut self.commission,
            WageComponent::HouseValue => &mut self.house_value,
            WageComponent::Settlement => &mut self.settlement,
        };
        *slot = amount;
    }

    /// Iterates over every component with its amount, in form order.
    pub fn components(&self) -> impl Iterator<Item = (WageComponent, Decimal)> + '_ {
        WageComponent::ALL
            .into_iter()
            .map(move |component| (component, self.amount(component)))
    }

    /// Sum of the given group's components.
    pub fn group_total(&self, group: ComponentGroup) -> Decimal {
        self.components()
            .filter(|(component, _)| component.group() == group)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Sum of the inclusive components.
    pub fn wage_sum(&self) -> Decimal {
        self.basic_pay + self.da + self.retention + self.inclusive
    }

    /// Sum of all thirteen components.
    pub fn total_gross(&self) -> Decimal {
        self.wage_sum()
            + self.hra
            + self.conveyance
            + self.overtime
            + self.bonus
            + self.washing
            + self.epf
            + self.commission
            + self.house_value
            + self.settlement
    }
}

/// Reads any JSON amount and normalizes it.
fn normalized_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_value(&value))
}
