use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::extract::{Path, Query};
use super::ApiResult;
use crate::client::{MflClient, QueryParams};

const DEFAULT_MESSAGE_COUNT: u32 = 10;

fn default_message_count() -> u32 {
    DEFAULT_MESSAGE_COUNT
}

#[derive(Deserialize)]
pub struct MessageBoardQuery {
    #[serde(default = "default_message_count")]
    pub count: u32,
}

/// GET /message_board - Recent message board posts
pub async fn get_message_board(
    State(client): State<MflClient>,
    Query(params): Query<MessageBoardQuery>,
) -> ApiResult {
    let query = QueryParams::new().set("COUNT", params.count);

    Ok(Json(client.league("messageBoard", query).await?))
}

/// GET /message_board_thread/{thread_id} - Posts in one thread
pub async fn get_message_board_thread(
    State(client): State<MflClient>,
    Path(thread_id): Path<i64>,
) -> ApiResult {
    let query = QueryParams::new().set("THREAD_ID", thread_id);

    Ok(Json(client.league("messageBoardThread", query).await?))
}

/// GET /polls - Current league polls
pub async fn get_polls(State(client): State<MflClient>) -> ApiResult {
    Ok(Json(client.league("polls", QueryParams::new()).await?))
}
