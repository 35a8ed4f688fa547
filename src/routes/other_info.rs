use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};
use crate::models::{PoolType, query_bool};

#[derive(Deserialize)]
pub struct PoolQuery {
    #[serde(default)]
    pub pool_type: PoolType,
}

#[derive(Deserialize)]
pub struct AbilitiesQuery {
    #[serde(default)]
    pub franchise_id: Option<i64>,
    #[serde(default, deserialize_with = "query_bool")]
    pub details: bool,
}

/// GET /future_draft_picks
pub async fn get_future_draft_picks(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("futureDraftPicks", QueryParams::new()).await?))
}

/// GET /accounting - League accounting summary
///
/// Negative amounts are charges against a franchise; positive amounts were
/// paid by or are owed to it.
pub async fn get_accounting(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("accounting", QueryParams::new()).await?))
}

/// GET /pool - NFL or fantasy pool picks
pub async fn get_pool(
    State(client): State<MflClient>,
    Query(params): Query<PoolQuery>,
) -> ApiResult {
    let query = QueryParams::new().set("POOLTYPE", params.pool_type);

    Ok(Json(client.league("pool", query).await?))
}

/// GET /survivor_pool
pub async fn get_survivor_pool(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("survivorPool", QueryParams::new()).await?))
}

/// GET /abilities - What the current franchise is allowed to do
pub async fn get_abilities(
    State(client): State<MflClient>,
    Query(params): Query<AbilitiesQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("F", params.franchise_id)
        .switch("DETAILS", params.details);

    Ok(Json(client.league("abilities", query).await?))
}
