use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};
use crate::error::ApiError;
use crate::models::query_bool;

#[derive(Deserialize)]
pub struct MyLeaguesQuery {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default, deserialize_with = "query_bool")]
    pub names: bool,
}

#[derive(Deserialize)]
pub struct LeagueSearchQuery {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub league_id: Option<i64>,
    #[serde(default)]
    pub year: Option<u16>,
}

/// GET /my_leagues - Leagues of the API key's owner
pub async fn get_my_leagues(
    State(client): State<MflClient>,
    Query(params): Query<MyLeaguesQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("YEAR", params.year)
        .switch("FRANCHISE_NAMES", params.names);

    Ok(Json(client.unscoped("myLeagues", query).await?))
}

/// GET /league_search - Leagues matching a search term or a league id
///
/// Exactly one of search_term and league_id must be given.
pub async fn league_search(
    State(client): State<MflClient>,
    Query(params): Query<LeagueSearchQuery>,
) -> ApiResult {
    let search_term = params.search_term.filter(|s| !s.trim().is_empty());
    if search_term.is_some() == params.league_id.is_some() {
        return Err(ApiError::BadRequest(
            "specify either search_term or league_id, but not both".to_string(),
        ));
    }

    let query = QueryParams::new()
        .opt("SEARCH", search_term)
        .opt("ID", params.league_id)
        .opt("YEAR", params.year);

    Ok(Json(client.unscoped("leagueSearch", query).await?))
}
