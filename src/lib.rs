//! Employees' State Insurance (ESIC) calculator.
//!
//! This crate decides whether an employee is covered by ESIC and works out
//! the wages their contribution is charged on and the employee's share,
//! from thirteen payroll components.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
