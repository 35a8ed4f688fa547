use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};

#[derive(Deserialize)]
pub struct KeepersQuery {
    #[serde(default)]
    pub franchise_id: Option<i64>,
}

/// GET /draft_results - Draft results (may lag the live draft by ~15 minutes)
pub async fn get_draft_results(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("draftResults", QueryParams::new()).await?))
}

/// GET /auction_results - Auction results
pub async fn get_auction_results(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("auctionResults", QueryParams::new()).await?))
}

/// GET /selected_keepers - Currently selected keepers
pub async fn get_selected_keepers(
    State(client): State<MflClient>,
    Query(params): Query<KeepersQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("FRANCHISE", params.franchise_id);

    Ok(Json(client.league("selectedKeepers", query).await?))
}

/// GET /my_draft_list - My Draft List
pub async fn get_my_draft_list(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("myDraftList", QueryParams::new()).await?))
}
