use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::sport::{Day, Schedule, Sport, Time},
    server::{
        controller::sport::{
            self, add_schedule, add_sport, delete_schedule, delete_sport, get_schedules,
            get_sport, get_sports,
        },
        middleware::auth::require_auth,
        state::AppState,
    },
};

/// OpenAPI document for the sports endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sports Schedules API",
        description = "Register sports and manage their weekly schedules"
    ),
    paths(
        sport::get_sports,
        sport::get_sport,
        sport::add_sport,
        sport::delete_sport,
        sport::get_schedules,
        sport::add_schedule,
        sport::delete_schedule,
    ),
    components(schemas(Sport, Schedule, Time, Day)),
    tags((name = "sport", description = "Sports and their schedules"))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/sports` route sits behind `require_auth`; the OpenAPI document is
/// public. The session manager layer must be applied by the caller, outside
/// this router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sports", get(get_sports).post(add_sport))
        .route("/sports/{sport_name}", get(get_sport).delete(delete_sport))
        .route(
            "/sports/{sport_name}/schedules",
            get(get_schedules).post(add_schedule).delete(delete_schedule),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .route("/api/docs/openapi.json", get(openapi))
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
