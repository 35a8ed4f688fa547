use axum::{response::Json, routing::get, Router};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::client::MflClient;
use crate::error::ApiError;

pub mod communications;
pub mod draft;
pub mod extract;
pub mod fantasy;
pub mod health;
pub mod league_info;
pub mod league_players;
pub mod nfl;
pub mod other_info;
pub mod scoring;
pub mod transactions;
pub mod user;

/// Every upstream-backed handler returns the upstream body verbatim.
pub type ApiResult = Result<Json<Value>, ApiError>;

pub fn router(client: MflClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "MFL Gateway - v1.0" }))
        .route("/health", get(health::health_check))

        // Common league info
        .route("/league", get(league_info::get_league))
        .route("/rules", get(league_info::get_rules))
        .route("/rosters", get(league_info::get_rosters))
        .route("/free_agents", get(league_info::get_free_agents))
        .route("/schedule", get(league_info::get_schedule))
        .route("/calendar", get(league_info::get_calendar))
        .route("/playoff_brackets", get(league_info::get_playoff_brackets))
        .route("/playoff_bracket", get(league_info::get_playoff_bracket))

        // Transactions
        .route("/transactions", get(transactions::get_transactions))
        .route("/pending_waivers", get(transactions::get_pending_waivers))
        .route("/pending_trades", get(transactions::get_pending_trades))
        .route("/trade_bait", get(transactions::get_trade_bait))
        .route("/assets", get(transactions::get_assets))

        // Scoring and results
        .route("/league_standings", get(scoring::get_league_standings))
        .route("/weekly_results", get(scoring::get_weekly_results))
        .route("/live_scoring", get(scoring::get_live_scoring))
        .route("/player_scores", get(scoring::get_player_scores))
        .route("/projected_scores", get(scoring::get_projected_scores))

        // Draft and auction
        .route("/draft_results", get(draft::get_draft_results))
        .route("/auction_results", get(draft::get_auction_results))
        .route("/selected_keepers", get(draft::get_selected_keepers))
        .route("/my_draft_list", get(draft::get_my_draft_list))

        // Communications
        .route("/message_board", get(communications::get_message_board))
        .route("/message_board_thread/{thread_id}", get(communications::get_message_board_thread))
        .route("/polls", get(communications::get_polls))

        // League players
        .route("/player_roster_status", get(league_players::get_player_roster_status))
        .route("/my_watch_list", get(league_players::get_my_watch_list))
        .route("/contest_players", get(league_players::get_contest_players))
        .route("/salaries", get(league_players::get_salaries))
        .route("/salary_adjustments", get(league_players::get_salary_adjustments))

        // Other league info
        .route("/future_draft_picks", get(other_info::get_future_draft_picks))
        .route("/accounting", get(other_info::get_accounting))
        .route("/pool", get(other_info::get_pool))
        .route("/survivor_pool", get(other_info::get_survivor_pool))
        .route("/abilities", get(other_info::get_abilities))

        // User functions
        .route("/my_leagues", get(user::get_my_leagues))
        .route("/league_search", get(user::league_search))

        // Fantasy content
        .route("/players", get(fantasy::get_players))
        .route("/player_profile", get(fantasy::get_player_profile))
        .route("/all_rules", get(fantasy::get_all_rules))
        .route("/player_ranks", get(fantasy::get_player_ranks))
        .route("/adp", get(fantasy::get_adp))
        .route("/aav", get(fantasy::get_aav))
        .route("/top_adds", get(fantasy::get_top_adds))
        .route("/top_drops", get(fantasy::get_top_drops))
        .route("/top_starters", get(fantasy::get_top_starters))
        .route("/top_trades", get(fantasy::get_top_trades))
        .route("/top_owns", get(fantasy::get_top_owns))
        .route("/who_should_i_start", get(fantasy::get_who_should_i_start))

        // NFL content
        .route("/injuries", get(nfl::get_injuries))
        .route("/nfl_schedule", get(nfl::get_nfl_schedule))
        .route("/nfl_bye_weeks", get(nfl::get_nfl_bye_weeks))
        .route("/points_allowed", get(nfl::get_points_allowed))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(client)
}
