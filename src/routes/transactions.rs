use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};
use crate::models::{TransactionType, query_bool};

#[derive(Deserialize)]
pub struct TransactionsQuery {
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub franchise_id: Option<i64>,
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Deserialize)]
pub struct FranchiseQuery {
    #[serde(default)]
    pub franchise_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct TradeBaitQuery {
    #[serde(default, deserialize_with = "query_bool")]
    pub include_draft_picks: bool,
}

/// GET /transactions - Non-pending transactions
///
/// The unfiltered set can be very large; narrow it with week, franchise_id,
/// days or count.
pub async fn get_transactions(
    State(client): State<MflClient>,
    Query(params): Query<TransactionsQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("W", params.week)
        .set("TRANS_TYPE", params.transaction_type)
        .opt("FRANCHISE", params.franchise_id)
        .opt("DAYS", params.days)
        .opt("COUNT", params.count);

    Ok(Json(client.league("transactions", query).await?))
}

/// GET /pending_waivers - Unprocessed waivers submitted by a franchise
pub async fn get_pending_waivers(
    State(client): State<MflClient>,
    Query(params): Query<FranchiseQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("FRANCHISE_ID", params.franchise_id);

    Ok(Json(client.league("pendingWaivers", query).await?))
}

/// GET /pending_trades - Pending trades for a franchise
pub async fn get_pending_trades(
    State(client): State<MflClient>,
    Query(params): Query<FranchiseQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("FRANCHISE_ID", params.franchise_id);

    Ok(Json(client.league("pendingTrades", query).await?))
}

/// GET /trade_bait - Trade bait for every franchise
///
/// With include_draft_picks, offered draft picks are listed too: `DP_02_05`
/// is round 3 pick 6 of the current draft, `FP_0005_2018_2` is franchise
/// 0005's 2018 second-rounder, `BB_10` is $10 of blind bid dollars.
pub async fn get_trade_bait(
    State(client): State<MflClient>,
    Query(params): Query<TradeBaitQuery>,
) -> ApiResult {
    let query = QueryParams::new().flag("INCLUDE_DRAFT_PICKS", params.include_draft_picks);

    Ok(Json(client.league("tradeBait", query).await?))
}

/// GET /assets - Tradable players and current and future draft picks
pub async fn get_assets(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("assets", QueryParams::new()).await?))
}
