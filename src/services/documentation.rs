use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Zuga Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::board::get_board,
        crate::routes::actions::page_data,
        crate::routes::actions::create_table,
        crate::routes::actions::update_table,
        crate::routes::actions::join_table,
        crate::routes::actions::update_player,
        crate::routes::actions::join_category,
        crate::routes::actions::delete_table,
        crate::routes::actions::delete_player,
        crate::routes::actions::delete_spare_player,
        crate::routes::actions::set_night_date,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::board::BoardSnapshot,
            crate::dto::board::TableSummary,
            crate::dto::board::PlayerSummary,
            crate::dto::board::SparePlayerSummary,
            crate::dto::board::TableActionResponse,
            crate::dto::board::SparePlayerActionResponse,
            crate::dto::board::TableDeletedResponse,
            crate::dto::board::SparePlayerDeletedResponse,
            crate::dto::board::NightDateResponse,
            crate::dto::forms::FormId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "board", description = "Board data for one game night"),
        (name = "actions", description = "Form actions submitted by the board page"),
    )
)]
pub struct ApiDoc;
