use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{dto::board::BoardSnapshot, error::AppError, services::board_service, state::SharedState};

/// Query parameters accepted by the board read route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    #[serde(default)]
    night_date: Option<String>,
}

/// Routes serving the page data set.
pub fn router() -> Router<SharedState> {
    Router::new().route("/board", get(get_board))
}

/// Return the tables, spare players, and weight categories for one night.
#[utoipa::path(
    get,
    path = "/board",
    tag = "board",
    params(("nightDate" = Option<String>, Query, description = "Night to show, YYYY-MM-DD; defaults to the active night")),
    responses((status = 200, description = "Board data for the night", body = BoardSnapshot))
)]
pub async fn get_board(
    State(state): State<SharedState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardSnapshot>, AppError> {
    let snapshot = board_service::board_snapshot(&state, query.night_date).await?;
    Ok(Json(snapshot))
}
