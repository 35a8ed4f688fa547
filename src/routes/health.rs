use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::client::MflClient;

/// Liveness of the gateway itself; upstream is not contacted.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    league_id: String,
    season: u16,
    timestamp: i64,
}

pub async fn health_check(State(client): State<MflClient>) -> (StatusCode, Json<HealthResponse>) {
    let config = client.config();
    let response = HealthResponse {
        status: "ok",
        league_id: config.league_id.clone(),
        season: config.year,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
