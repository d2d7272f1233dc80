//! Service configuration for the withdrawal API.

use cashpoint_core::DenominationSet;

/// Configuration for the withdrawal API service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP server, e.g. `0.0.0.0:8080`.
    pub bind_addr: String,
    /// Note values the service dispenses, largest first.
    ///
    /// Single source of truth: the eligibility divisor is derived from
    /// the smallest value of this set.
    pub denominations: DenominationSet,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            denominations: DenominationSet::default(),
        }
    }
}
