//! Calculation logic for the ESIC calculator.
//!
//! This module contains input normalization, the individual calculation
//! steps (wage sum, total gross, coverage, contribution wages and employee
//! contribution), and the [`compute`] pipeline that runs them in order.

mod contribution;
mod coverage;
mod engine;
mod normalization;
mod wage_sum;

pub use contribution::{
    CONTRIBUTION_CLAUSE, ContributionWagesResult, EMPLOYEE_RATE_CLAUSE,
    EmployeeContributionResult, calculate_contribution_wages, calculate_employee_contribution,
};
pub use coverage::{COVERAGE_CLAUSE, CoverageResult, determine_coverage};
pub use engine::{ComputationResult, calculate, compute, compute_with_rates};
pub use normalization::{
    MAX_COMPONENT_AMOUNT, normalize_amount, normalize_fields, normalize_inputs, normalize_value,
};
pub use wage_sum::{
    WAGE_DEFINITION_CLAUSE, WageSumResult, calculate_total_gross, calculate_wage_sum,
};
