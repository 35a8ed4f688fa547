use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};

#[derive(Deserialize)]
pub struct RosterStatusQuery {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub franchise_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct ContestPlayersQuery {
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub franchise_id: Option<i64>,
}

/// GET /player_roster_status - Franchise(s) holding a player and their status
///
/// Status is one of R, S, NS, IR or TS. Free agents carry `is_fa` and may be
/// flagged `cant_add` or `locked`.
pub async fn get_player_roster_status(
    State(client): State<MflClient>,
    Query(params): Query<RosterStatusQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("P", params.player_id)
        .opt("W", params.week)
        .opt("F", params.franchise_id);

    Ok(Json(client.league("playerRosterStatus", query).await?))
}

/// GET /my_watch_list - My Watch List
pub async fn get_my_watch_list(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("myWatchList", QueryParams::new()).await?))
}

/// GET /contest_players - Players eligible for a contest-league starting lineup
pub async fn get_contest_players(
    State(client): State<MflClient>,
    Query(params): Query<ContestPlayersQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("W", params.week)
        .opt("F", params.franchise_id);

    Ok(Json(client.league("contestPlayers", query).await?))
}

/// GET /salaries - Player salaries and contract fields
///
/// Defaults are listed under player id 0000.
pub async fn get_salaries(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("salaries", QueryParams::new()).await?))
}

/// GET /salary_adjustments - Extra salary adjustments
pub async fn get_salary_adjustments(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("salaryAdjustments", QueryParams::new()).await?))
}
