//! HTTP API module for the ESIC calculator.
//!
//! Exposes the calculator as a small REST service: `POST /calculate` runs a
//! calculation and `GET /scheme` reports the active rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RawAmount};
pub use response::{ApiError, SchemeInfo};
pub use state::AppState;
