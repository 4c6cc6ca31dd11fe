//! Core data models for the ESIC calculator.
//!
//! This module contains the wage inputs, the computed result, and the audit
//! structures shared by the calculation and API layers.

mod esic_result;
mod wage_inputs;

pub use esic_result::{AuditStep, AuditTrace, AuditWarning, EsicCalculation, EsicResult};
pub use wage_inputs::{ComponentGroup, WageComponent, WageInputs};
