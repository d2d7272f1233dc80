//! Axum router and HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use cashpoint_core::WithdrawError;

use crate::AppState;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/withdraw/:amount", post(withdraw))
        .route("/denominations", get(denominations))
        .with_state(state)
        .layer(cors)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DenominationsResponse {
    /// Configured note values, largest first.
    notes: Vec<i64>,
    /// Smallest note; the eligibility divisor.
    smallest: i64,
}

/// `GET /denominations` — the configured note values.
async fn denominations(State(state): State<AppState>) -> impl IntoResponse {
    let set = state.teller.denominations();
    Json(DenominationsResponse {
        notes: set.values().to_vec(),
        smallest: set.smallest(),
    })
}

/// `POST /withdraw/:amount` — dispense notes summing to `amount`.
async fn withdraw(
    State(state): State<AppState>,
    Path(amount): Path<i64>,
) -> impl IntoResponse {
    if !state.teller.is_eligible(amount) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!(
                    "Amount not available for withdrawal. Available notes: {}",
                    state.teller.denominations()
                ),
            })),
        );
    }

    match state.teller.withdraw(amount) {
        Ok(selection) => {
            info!(amount, notes = ?selection.notes, "withdrawal dispensed");
            let dispensed = selection
                .notes
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");
            (
                StatusCode::OK,
                Json(json!({
                    "amount": selection.total,
                    "notes": selection.notes,
                    "dispensed": dispensed,
                })),
            )
        }
        Err(e @ WithdrawError::Ineligible { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        ),
        // The pre-check accepted this amount, yet the greedy walk could not
        // compose it; the configured set and divisor disagree.
        Err(e @ WithdrawError::Unrepresentable { .. }) => {
            warn!(amount, error = %e, "eligible amount not representable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        }
    }
}
