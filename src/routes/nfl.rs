use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};
use crate::models::NflWeek;

#[derive(Deserialize)]
pub struct WeekQuery {
    #[serde(default)]
    pub week: Option<u32>,
}

#[derive(Deserialize)]
pub struct NflScheduleQuery {
    #[serde(default)]
    pub week: Option<NflWeek>,
}

/// GET /injuries - NFL injury report
pub async fn get_injuries(
    State(client): State<MflClient>,
    Query(params): Query<WeekQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("W", params.week);

    Ok(Json(client.nfl("injuries", query).await?))
}

/// GET /nfl_schedule - NFL schedule for a week, or `ALL` for the season
pub async fn get_nfl_schedule(
    State(client): State<MflClient>,
    Query(params): Query<NflScheduleQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("W", params.week);

    Ok(Json(client.nfl("nflSchedule", query).await?))
}

/// GET /nfl_bye_weeks - Bye weeks for every team, or teams on bye in one week
pub async fn get_nfl_bye_weeks(
    State(client): State<MflClient>,
    Query(params): Query<WeekQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("W", params.week);

    Ok(Json(client.nfl("nflByeWeeks", query).await?))
}

/// GET /points_allowed - Fantasy points allowed by each NFL team, by position
///
/// Scored with the league's rules, so this one goes to the league host.
pub async fn get_points_allowed(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("pointsAllowed", QueryParams::new()).await?))
}
