//! Form actions invoked by the board page. Each route accepts a form-encoded
//! body, delegates to the matching service, and tags failures with the form
//! identifier so the page can surface the message in the right modal.

use axum::{Form, Json, Router, extract::State, routing::post};

use crate::{
    dto::{
        board::{
            BoardSnapshot, NightDateResponse, SparePlayerActionResponse,
            SparePlayerDeletedResponse, TableActionResponse, TableDeletedResponse,
        },
        forms::{
            CreateTableForm, DeletePlayerForm, DeleteSparePlayerForm, DeleteTableForm, FormId,
            JoinCategoryForm, JoinTableForm, PageDataForm, SetNightDateForm, UpdatePlayerForm,
            UpdateTableForm,
        },
    },
    error::ActionRejection,
    services::{board_service, player_service, spare_service, table_service},
    state::SharedState,
};

/// Configure the form-action routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/actions/page-data", post(page_data))
        .route("/actions/create-table", post(create_table))
        .route("/actions/update-table", post(update_table))
        .route("/actions/join-table", post(join_table))
        .route("/actions/update-player", post(update_player))
        .route("/actions/join-category", post(join_category))
        .route("/actions/delete-table", post(delete_table))
        .route("/actions/delete-player", post(delete_player))
        .route("/actions/delete-spare-player", post(delete_spare_player))
        .route("/actions/set-night-date", post(set_night_date))
}

/// Reload the full board data set for a night.
#[utoipa::path(
    post,
    path = "/actions/page-data",
    tag = "actions",
    request_body(content = PageDataForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Board data for the night", body = BoardSnapshot))
)]
pub async fn page_data(
    State(state): State<SharedState>,
    Form(payload): Form<PageDataForm>,
) -> Result<Json<BoardSnapshot>, ActionRejection> {
    let snapshot = board_service::page_data(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::PageData, err))?;
    Ok(Json(snapshot))
}

/// Open a new table for the night.
#[utoipa::path(
    post,
    path = "/actions/create-table",
    tag = "actions",
    request_body(content = CreateTableForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Table created", body = TableActionResponse))
)]
pub async fn create_table(
    State(state): State<SharedState>,
    Form(payload): Form<CreateTableForm>,
) -> Result<Json<TableActionResponse>, ActionRejection> {
    let table = table_service::create_table(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::Create, err))?;
    Ok(Json(TableActionResponse::new(FormId::Create, table)))
}

/// Edit an existing table.
#[utoipa::path(
    post,
    path = "/actions/update-table",
    tag = "actions",
    request_body(content = UpdateTableForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Table updated", body = TableActionResponse))
)]
pub async fn update_table(
    State(state): State<SharedState>,
    Form(payload): Form<UpdateTableForm>,
) -> Result<Json<TableActionResponse>, ActionRejection> {
    let table = table_service::update_table(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::Update, err))?;
    Ok(Json(TableActionResponse::new(FormId::Update, table)))
}

/// Take a seat at a table.
#[utoipa::path(
    post,
    path = "/actions/join-table",
    tag = "actions",
    request_body(content = JoinTableForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Player seated", body = TableActionResponse))
)]
pub async fn join_table(
    State(state): State<SharedState>,
    Form(payload): Form<JoinTableForm>,
) -> Result<Json<TableActionResponse>, ActionRejection> {
    let table = player_service::join_table(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::JoinTable, err))?;
    Ok(Json(TableActionResponse::new(FormId::JoinTable, table)))
}

/// Edit a seated player.
#[utoipa::path(
    post,
    path = "/actions/update-player",
    tag = "actions",
    request_body(content = UpdatePlayerForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Player updated", body = TableActionResponse))
)]
pub async fn update_player(
    State(state): State<SharedState>,
    Form(payload): Form<UpdatePlayerForm>,
) -> Result<Json<TableActionResponse>, ActionRejection> {
    let table = player_service::update_player(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::UpdatePlayer, err))?;
    Ok(Json(TableActionResponse::new(FormId::UpdatePlayer, table)))
}

/// Sign up as a spare player for a weight category.
#[utoipa::path(
    post,
    path = "/actions/join-category",
    tag = "actions",
    request_body(content = JoinCategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Spare player signed up", body = SparePlayerActionResponse))
)]
pub async fn join_category(
    State(state): State<SharedState>,
    Form(payload): Form<JoinCategoryForm>,
) -> Result<Json<SparePlayerActionResponse>, ActionRejection> {
    let spare = spare_service::join_category(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::JoinCategory, err))?;
    Ok(Json(SparePlayerActionResponse::new(
        FormId::JoinCategory,
        spare,
    )))
}

/// Remove a table.
#[utoipa::path(
    post,
    path = "/actions/delete-table",
    tag = "actions",
    request_body(content = DeleteTableForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Table deleted", body = TableDeletedResponse))
)]
pub async fn delete_table(
    State(state): State<SharedState>,
    Form(payload): Form<DeleteTableForm>,
) -> Result<Json<TableDeletedResponse>, ActionRejection> {
    let table_id = table_service::delete_table(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::DeleteTable, err))?;
    Ok(Json(TableDeletedResponse::new(table_id)))
}

/// Remove a player from a table.
#[utoipa::path(
    post,
    path = "/actions/delete-player",
    tag = "actions",
    request_body(content = DeletePlayerForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Player removed", body = TableActionResponse))
)]
pub async fn delete_player(
    State(state): State<SharedState>,
    Form(payload): Form<DeletePlayerForm>,
) -> Result<Json<TableActionResponse>, ActionRejection> {
    let table = player_service::delete_player(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::DeletePlayer, err))?;
    Ok(Json(TableActionResponse::new(FormId::DeletePlayer, table)))
}

/// Remove a spare player from the waiting list.
#[utoipa::path(
    post,
    path = "/actions/delete-spare-player",
    tag = "actions",
    request_body(content = DeleteSparePlayerForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Spare player removed", body = SparePlayerDeletedResponse))
)]
pub async fn delete_spare_player(
    State(state): State<SharedState>,
    Form(payload): Form<DeleteSparePlayerForm>,
) -> Result<Json<SparePlayerDeletedResponse>, ActionRejection> {
    let spare_id = spare_service::delete_spare_player(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::DeleteSparePlayer, err))?;
    Ok(Json(SparePlayerDeletedResponse::new(spare_id)))
}

/// Switch the active night date.
#[utoipa::path(
    post,
    path = "/actions/set-night-date",
    tag = "actions",
    request_body(content = SetNightDateForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 200, description = "Night date updated", body = NightDateResponse))
)]
pub async fn set_night_date(
    State(state): State<SharedState>,
    Form(payload): Form<SetNightDateForm>,
) -> Result<Json<NightDateResponse>, ActionRejection> {
    let response = board_service::set_night_date(&state, payload)
        .await
        .map_err(|err| ActionRejection::new(FormId::SetNightDate, err))?;
    Ok(Json(response))
}
