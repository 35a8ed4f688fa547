use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};

#[derive(Deserialize)]
pub struct WeekFranchiseQuery {
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub franchise_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct FreeAgentsQuery {
    /// Position code, e.g. "QB"
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Deserialize)]
pub struct BracketQuery {
    #[serde(default)]
    pub bracket_id: Option<i64>,
}

/// GET /league - League setup: name, roster sizes, lineup requirements,
/// franchise and division names
pub async fn get_league(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("league", QueryParams::new()).await?))
}

/// GET /rules - League scoring rules
pub async fn get_rules(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("rules", QueryParams::new()).await?))
}

/// GET /rosters - Current rosters
///
/// Query params:
/// - week: roster as of that week (must not be past the upcoming week)
/// - franchise_id: only that franchise's roster
pub async fn get_rosters(
    State(client): State<MflClient>,
    Query(params): Query<WeekFranchiseQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("W", params.week)
        .opt("FRANCHISE", params.franchise_id);

    Ok(Json(client.league("rosters", query).await?))
}

/// GET /free_agents - Fantasy free agents, optionally for one position
pub async fn get_free_agents(
    State(client): State<MflClient>,
    Query(params): Query<FreeAgentsQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("POSITION", params.position);

    Ok(Json(client.league("freeAgents", query).await?))
}

/// GET /schedule - Fantasy schedule, optionally for one week or franchise
pub async fn get_schedule(
    State(client): State<MflClient>,
    Query(params): Query<WeekFranchiseQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("W", params.week)
        .opt("FRANCHISE", params.franchise_id);

    Ok(Json(client.league("schedule", query).await?))
}

/// GET /calendar - League calendar events
pub async fn get_calendar(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("calendar", QueryParams::new()).await?))
}

/// GET /playoff_brackets - All playoff brackets
pub async fn get_playoff_brackets(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("playoffBrackets", QueryParams::new()).await?))
}

/// GET /playoff_bracket - Games (and results if available) of one bracket
pub async fn get_playoff_bracket(
    State(client): State<MflClient>,
    Query(params): Query<BracketQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("BRACKET_ID", params.bracket_id);

    Ok(Json(client.league("playoffBracket", query).await?))
}
