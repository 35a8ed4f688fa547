use axum::{extract::State, response::Json};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use super::extract::Query;
use super::ApiResult;
use crate::client::{MflClient, QueryParams};
use crate::error::ApiError;
use crate::models::{Period, TopStatus, query_bool, query_opt_bool};

const DEFAULT_KEEPER_FILTER: &str = "NKR";

fn default_keeper_filter() -> String {
    DEFAULT_KEEPER_FILTER.to_string()
}

#[derive(Deserialize)]
pub struct PlayersQuery {
    #[serde(default, deserialize_with = "query_bool")]
    pub details: bool,
    /// Unix seconds, RFC 3339, or a date/time without offset (UTC); defaults to now
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub player_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct PlayerProfileQuery {
    pub player_id: i64,
}

#[derive(Deserialize)]
pub struct PlayerRanksQuery {
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Deserialize)]
pub struct AdpQuery {
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub fcount: Option<u32>,
    #[serde(default, deserialize_with = "query_opt_bool")]
    pub is_ppr: Option<bool>,
    #[serde(default = "default_keeper_filter")]
    pub is_keeper: String,
    #[serde(default, deserialize_with = "query_opt_bool")]
    pub is_mock: Option<bool>,
    #[serde(default)]
    pub cutoff: Option<u32>,
    #[serde(default, deserialize_with = "query_bool")]
    pub details: bool,
}

#[derive(Deserialize)]
pub struct AavQuery {
    #[serde(default)]
    pub period: Period,
    #[serde(default, deserialize_with = "query_opt_bool")]
    pub is_ppr: Option<bool>,
    #[serde(default = "default_keeper_filter")]
    pub is_keeper: String,
}

#[derive(Deserialize)]
pub struct TopQuery {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub status: Option<TopStatus>,
}

#[derive(Deserialize)]
pub struct TopTradesQuery {
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Deserialize)]
pub struct WhoShouldIStartQuery {
    #[serde(default)]
    pub league_id: Option<i64>,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub franchise: Option<i64>,
}

/// Parse `since` as unix seconds, RFC 3339, or a naive date/time taken as UTC.
fn parse_since(raw: &str) -> Result<i64, ApiError> {
    let raw = raw.trim();
    if let Ok(seconds) = raw.parse::<i64>() {
        return Ok(seconds);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.timestamp());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts.and_utc().timestamp());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc().timestamp())
        .ok_or_else(|| ApiError::BadRequest(format!("invalid since {raw:?}")))
}

/// GET /players - Player ids, names and positions
///
/// Only changes to the player database after `since` are returned.
pub async fn get_players(
    State(client): State<MflClient>,
    Query(params): Query<PlayersQuery>,
) -> ApiResult {
    let since = match params.since.as_deref() {
        Some(raw) => parse_since(raw)?,
        None => Utc::now().timestamp(),
    };

    let query = QueryParams::new()
        .switch("DETAILS", params.details)
        .set("SINCE", since)
        .opt("PLAYERS", params.player_id);

    Ok(Json(client.league("players", query).await?))
}

/// GET /player_profile - Player profile summary
pub async fn get_player_profile(
    State(client): State<MflClient>,
    Query(params): Query<PlayerProfileQuery>,
) -> ApiResult {
    let query = QueryParams::new().set("P", params.player_id);

    Ok(Json(client.unscoped("playerProfile", query).await?))
}

/// GET /all_rules - Every scoring rule upstream knows about
pub async fn get_all_rules(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.unscoped("allRules", QueryParams::new()).await?))
}

/// GET /player_ranks - Expert rankings from FantasySharks.com
pub async fn get_player_ranks(
    State(client): State<MflClient>,
    Query(params): Query<PlayerRanksQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("POS", params.position);

    Ok(Json(client.unscoped("playerRanks", query).await?))
}

/// GET /adp - Average draft position
pub async fn get_adp(
    State(client): State<MflClient>,
    Query(params): Query<AdpQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .set("PERIOD", params.period)
        .opt("FCOUNT", params.fcount)
        .flag("IS_PPR", params.is_ppr.unwrap_or(false))
        .set("IS_KEEPER", params.is_keeper)
        .flag("IS_MOCK", params.is_mock.unwrap_or(false))
        .opt("CUTOFF", params.cutoff)
        .switch("DETAILS", params.details);

    Ok(Json(client.unscoped("adp", query).await?))
}

/// GET /aav - Average auction value
pub async fn get_aav(
    State(client): State<MflClient>,
    Query(params): Query<AavQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .set("PERIOD", params.period)
        .flag("IS_PPR", params.is_ppr.unwrap_or(false))
        .set("IS_KEEPER", params.is_keeper);

    Ok(Json(client.unscoped("aav", query).await?))
}

async fn top_list(client: &MflClient, request_type: &str, params: TopQuery) -> ApiResult {
    let query = QueryParams::new()
        .opt("COUNT", params.count)
        .opt("STATUS", params.status);

    Ok(Json(client.unscoped(request_type, query).await?))
}

/// GET /top_adds - Most added players
pub async fn get_top_adds(
    State(client): State<MflClient>,
    Query(params): Query<TopQuery>,
) -> ApiResult {
    top_list(&client, "topAdds", params).await
}

/// GET /top_drops - Most dropped players
pub async fn get_top_drops(
    State(client): State<MflClient>,
    Query(params): Query<TopQuery>,
) -> ApiResult {
    top_list(&client, "topDrops", params).await
}

/// GET /top_starters - Most started players
pub async fn get_top_starters(
    State(client): State<MflClient>,
    Query(params): Query<TopQuery>,
) -> ApiResult {
    top_list(&client, "topStarters", params).await
}

/// GET /top_trades - Most traded players
pub async fn get_top_trades(
    State(client): State<MflClient>,
    Query(params): Query<TopTradesQuery>,
) -> ApiResult {
    let query = QueryParams::new().opt("COUNT", params.count);

    Ok(Json(client.unscoped("topTrades", query).await?))
}

/// GET /top_owns - Most owned players
pub async fn get_top_owns(
    State(client): State<MflClient>,
    Query(params): Query<TopQuery>,
) -> ApiResult {
    top_list(&client, "topOwns", params).await
}

/// GET /who_should_i_start - "Who Should I Start?" data
///
/// league_id replaces the configured league for this call only.
pub async fn get_who_should_i_start(
    State(client): State<MflClient>,
    Query(params): Query<WhoShouldIStartQuery>,
) -> ApiResult {
    let query = QueryParams::new()
        .opt("L", params.league_id)
        .opt("WEEK", params.week)
        .opt("FRANCHISE", params.franchise);

    Ok(Json(client.league("whoShouldIStart", query).await?))
}
