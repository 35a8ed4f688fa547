use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};
use crate::models::{ScoreStatus, ScoringWeek, query_bool};

#[derive(Deserialize)]
pub struct StandingsQuery {
    #[serde(default, deserialize_with = "query_bool")]
    pub column_names: bool,
    #[serde(default, deserialize_with = "query_bool")]
    pub all_fields: bool,
    #[serde(default, deserialize_with = "query_bool")]
    pub web: bool,
}

#[derive(Deserialize)]
pub struct WeeklyResultsQuery {
    #[serde(default)]
    pub week: Option<ScoringWeek>,
    #[serde(default, deserialize_with = "query_bool")]
    pub missing_as_bye: bool,
}

#[derive(Deserialize)]
pub struct LiveScoringQuery {
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default, deserialize_with = "query_bool")]
    pub details: bool,
}

/// Shared by player and projected scores; projections take plain week numbers.
#[derive(Deserialize)]
pub struct PlayerScoresQuery<W> {
    pub week: Option<W>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub player: Option<i64>,
    /// Position codes, e.g. "QB|RB"
    #[serde(default)]
    pub positions: Option<String>,
    #[serde(default)]
    pub status: Option<ScoreStatus>,
    #[serde(default, deserialize_with = "query_bool")]
    pub rules: bool,
    #[serde(default)]
    pub count: Option<u32>,
}

impl<W: std::fmt::Display> PlayerScoresQuery<W> {
    fn into_params(self) -> QueryParams {
        QueryParams::new()
            .opt("W", self.week)
            .opt("YEAR", self.year)
            .opt("PLAYERS", self.player)
            .opt("POSITIONS", self.positions)
            .opt("STATUS", self.status)
            .switch("RULES", self.rules)
            .opt("COUNT", self.count)
    }
}

/// GET /league_standings - Current standings
///
/// Query params:
/// - column_names: include the column key to name mapping, in display order
/// - all_fields: include extra fields used for sorting standings
/// - web: only the columns shown on the web site (ignored with all_fields)
pub async fn get_league_standings(
    State(client): State<MflClient>,
    Query(params): Query<StandingsQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .switch("COLUMN_NAMES", params.column_names)
        .switch("ALL", params.all_fields)
        .switch("WEB", params.web);

    Ok(Json(client.league("leagueStandings", query).await?))
}

/// GET /weekly_results - Starter and bench scores for every franchise
///
/// week may be `YTD` for all weeks so far. With missing_as_bye, teams without
/// a scheduled opponent are shown against a BYE.
pub async fn get_weekly_results(
    State(client): State<MflClient>,
    Query(params): Query<WeeklyResultsQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("W", params.week)
        .switch("MISSING_AS_BYE", params.missing_as_bye);

    Ok(Json(client.league("weeklyResults", query).await?))
}

/// GET /live_scoring - Live scores, game seconds remaining and player status
pub async fn get_live_scoring(
    State(client): State<MflClient>,
    Query(params): Query<LiveScoringQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("W", params.week)
        .switch("DETAILS", params.details);

    Ok(Json(client.league("liveScoring", query).await?))
}

/// GET /player_scores - Scores of rostered players and free agents
pub async fn get_player_scores(
    State(client): State<MflClient>,
    Query(params): Query<PlayerScoresQuery<ScoringWeek>>,
) -> ApiResult {
    Ok(Json(client.league("playerScores", params.into_params()).await?))
}

/// GET /projected_scores - Expected points under the league's scoring system
pub async fn get_projected_scores(
    State(client): State<MflClient>,
    Query(params): Query<PlayerScoresQuery<u32>>,
) -> ApiResult {
    Ok(Json(client.league("projectedScores", params.into_params()).await?))
}
