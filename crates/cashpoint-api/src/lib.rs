//! # cashpoint-api — HTTP surface for the Cashpoint withdrawal service.
//!
//! Exposes the axum [`routes::router`] over any [`cashpoint_core::Dispenser`],
//! plus the service configuration. The binary in `bins/cashpoint-api` wires
//! this up; integration tests drive the router over a local listener.

use std::sync::Arc;

use cashpoint_core::Dispenser;

pub mod config;
pub mod routes;

pub use config::ApiConfig;

/// Shared application state passed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    /// The dispenser answering withdrawal requests.
    pub teller: Arc<dyn Dispenser>,
}
