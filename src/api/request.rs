//! Request types for the ESIC calculator API.
//!
//! This module defines the JSON request body for the `/calculate` endpoint.
//! Amounts arrive as a form would send them: numbers, numeric strings, empty
//! strings or nulls. They are kept raw here and normalized in one place by
//! [`normalize_fields`].

use serde::{Deserialize, Serialize};

use crate::calculation::normalize_fields;
use crate::models::{WageComponent, WageInputs};

/// A single amount as it appears in the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON string, possibly empty or non-numeric.
    Text(String),
    /// Any other JSON value (boolean, array, object). Counts as zero.
    Other(serde_json::Value),
}

impl RawAmount {
    /// The amount as text, or `None` when it has no textual form.
    fn as_text(&self) -> Option<String> {
        match self {
            RawAmount::Number(number) => Some(number.to_string()),
            RawAmount::Text(text) => Some(text.clone()),
            RawAmount::Other(_) => None,
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional. Field names are snake_case, and the form names
/// (`basicPay`, `houseValue`) are accepted too. Unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationRequest {
    /// Basic pay.
    #[serde(default, alias = "basicPay", skip_serializing_if = "Option::is_none")]
    pub basic_pay: Option<RawAmount>,
    /// Dearness allowance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub da: Option<RawAmount>,
    /// Retention allowance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<RawAmount>,
    /// Other inclusive allowances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<RawAmount>,
    /// House rent allowance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hra: Option<RawAmount>,
    /// Conveyance allowance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conveyance: Option<RawAmount>,
    /// Overtime payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<RawAmount>,
    /// Bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<RawAmount>,
    /// Washing allowance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub washing: Option<RawAmount>,
    /// Employer's EPF contribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epf: Option<RawAmount>,
    /// Commission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<RawAmount>,
    /// Value of house accommodation.
    #[serde(default, alias = "houseValue", skip_serializing_if = "Option::is_none")]
    pub house_value: Option<RawAmount>,
    /// Settlement payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement: Option<RawAmount>,
}

impl CalculationRequest {
    /// Pairs each component with the raw value supplied for it.
    fn raw_fields(&self) -> [(WageComponent, Option<&RawAmount>); 13] {
        [
            (WageComponent::BasicPay, self.basic_pay.as_ref()),
            (WageComponent::Da, self.da.as_ref()),
            (WageComponent::Retention, self.retention.as_ref()),
            (WageComponent::Inclusive, self.inclusive.as_ref()),
            (WageComponent::Hra, self.hra.as_ref()),
            (WageComponent::Conveyance, self.conveyance.as_ref()),
            (WageComponent::Overtime, self.overtime.as_ref()),
            (WageComponent::Bonus, self.bonus.as_ref()),
            (WageComponent::Washing, self.washing.as_ref()),
            (WageComponent::Epf, self.epf.as_ref()),
            (WageComponent::Commission, self.commission.as_ref()),
            (WageComponent::HouseValue, self.house_value.as_ref()),
            (WageComponent::Settlement, self.settlement.as_ref()),
        ]
    }
}

impl From<&CalculationRequest> for WageInputs {
    fn from(req: &CalculationRequest) -> Self {
        let fields: Vec<(&'static str, Option<String>)> = req
            .raw_fields()
            .into_iter()
            .map(|(component, raw)| (component.field_name(), raw.and_then(RawAmount::as_text)))
            .collect();

        normalize_fields(
            fields
                .iter()
                .map(|(name, text)| (*name, text.as_deref())),
        )
    }
}
