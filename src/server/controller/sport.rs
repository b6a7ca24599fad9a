use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use url::Url;

use crate::{
    model::sport::{Schedule, Sport},
    server::{
        error::AppError,
        model::sport::ScheduleLookup,
        state::AppState,
        util::{extract::JsonBody, param::required_param},
    },
};

/// Tag for grouping sport endpoints in OpenAPI documentation
pub static SPORT_TAG: &str = "sport";

pub const SPORT_ALREADY_REGISTERED: &str = "Sport already registered";
pub const SPORT_NOT_REGISTERED: &str = "the specified sport is not registered";
pub const SCHEDULE_NOT_ADDED: &str =
    "the specified schedule is already registered or the specified sport is not registered";
pub const SCHEDULE_NOT_REMOVED: &str =
    "the specified sport is not registered or the specified schedule is not registered";

const SPORT_NAME: &str = "sportName";

/// Only the path of this URL ends up in `Location` headers.
const LOCATION_BASE: &str = "http://localhost/sports";

/// List every registered sport.
///
/// # Returns
/// - `200 OK` - JSON array of sports, empty when none are registered
/// - `401 Unauthorized` - No authenticated session and no valid Basic credentials
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/sports",
    tag = SPORT_TAG,
    responses(
        (status = 200, description = "All registered sports", body = Vec<Sport>),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_sports(State(state): State<AppState>) -> Result<Response, AppError> {
    let sports = state
        .sports
        .dispatch(|sports| async move { sports.get_all().await })
        .await?;

    Ok((StatusCode::OK, Json(sports)).into_response())
}

/// Get a single sport with its schedules.
///
/// # Returns
/// - `200 OK` - The sport
/// - `400 Bad Request` - Blank sport name
/// - `404 Not Found` - No sport with this name, empty body
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/sports/{sport_name}",
    tag = SPORT_TAG,
    params(
        ("sport_name" = String, Path, description = "Unique sport name")
    ),
    responses(
        (status = 200, description = "The sport", body = Sport),
        (status = 400, description = "Blank sport name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Sport not registered"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_sport(
    State(state): State<AppState>,
    Path(sport_name): Path<String>,
) -> Result<Response, AppError> {
    required_param(SPORT_NAME, &sport_name)?;

    let sport = state
        .sports
        .dispatch(move |sports| async move { sports.get_sport(&sport_name).await })
        .await?;

    match sport {
        Some(sport) => Ok((StatusCode::OK, Json(sport)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Register a new sport.
///
/// The body is decoded as JSON whatever its content type. Schedules in the body
/// are stored as given.
///
/// # Returns
/// - `201 Created` - Sport stored, `Location` points at the new sport
/// - `400 Bad Request` - Malformed body, blank `sportName` or sport already registered
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/sports",
    tag = SPORT_TAG,
    request_body = Sport,
    responses(
        (status = 201, description = "Sport registered", headers(("Location" = String, description = "Path of the new sport"))),
        (status = 400, description = "Malformed body, blank sport name or sport already registered", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn add_sport(
    State(state): State<AppState>,
    JsonBody(sport): JsonBody<Sport>,
) -> Result<Response, AppError> {
    required_param(SPORT_NAME, &sport.sport_name)?;

    let location = sport_location(&sport.sport_name)?;

    let result = state
        .sports
        .dispatch(move |sports| async move { sports.add_sport(sport).await })
        .await;

    match result {
        Ok(()) => Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response()),
        Err(AppError::DuplicateKey(_)) => {
            Ok((StatusCode::BAD_REQUEST, SPORT_ALREADY_REGISTERED).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Delete a sport together with its schedules.
///
/// # Returns
/// - `200 OK` - Sport deleted
/// - `400 Bad Request` - Blank sport name
/// - `404 Not Found` - No sport with this name, empty body
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/sports/{sport_name}",
    tag = SPORT_TAG,
    params(
        ("sport_name" = String, Path, description = "Unique sport name")
    ),
    responses(
        (status = 200, description = "Sport deleted"),
        (status = 400, description = "Blank sport name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Sport not registered"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_sport(
    State(state): State<AppState>,
    Path(sport_name): Path<String>,
) -> Result<Response, AppError> {
    required_param(SPORT_NAME, &sport_name)?;

    let result = state
        .sports
        .dispatch(move |sports| async move { sports.remove_sport(&sport_name).await })
        .await;

    match result {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(AppError::InvalidOperation(_)) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(err) => Err(err),
    }
}

/// List the schedules of a sport.
///
/// # Returns
/// - `200 OK` - JSON array of schedules, empty when the sport has none
/// - `400 Bad Request` - Blank sport name
/// - `404 Not Found` - No sport with this name
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/sports/{sport_name}/schedules",
    tag = SPORT_TAG,
    params(
        ("sport_name" = String, Path, description = "Unique sport name")
    ),
    responses(
        (status = 200, description = "Schedules of the sport", body = Vec<Schedule>),
        (status = 400, description = "Blank sport name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Sport not registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    Path(sport_name): Path<String>,
) -> Result<Response, AppError> {
    required_param(SPORT_NAME, &sport_name)?;

    let lookup = state
        .sports
        .dispatch(move |sports| async move { sports.get_schedules(&sport_name).await })
        .await?;

    match lookup {
        ScheduleLookup::Found(schedules) => Ok((StatusCode::OK, Json(schedules)).into_response()),
        ScheduleLookup::NotFound => Ok((StatusCode::NOT_FOUND, SPORT_NOT_REGISTERED).into_response()),
    }
}

/// Add a schedule to a sport.
///
/// # Returns
/// - `201 Created` - Schedule added
/// - `400 Bad Request` - Malformed body, blank sport name, sport missing or schedule already present
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/sports/{sport_name}/schedules",
    tag = SPORT_TAG,
    params(
        ("sport_name" = String, Path, description = "Unique sport name")
    ),
    request_body = Schedule,
    responses(
        (status = 201, description = "Schedule added"),
        (status = 400, description = "Malformed body, sport not registered or schedule already registered", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn add_schedule(
    State(state): State<AppState>,
    Path(sport_name): Path<String>,
    JsonBody(schedule): JsonBody<Schedule>,
) -> Result<Response, AppError> {
    required_param(SPORT_NAME, &sport_name)?;

    let result = state
        .sports
        .dispatch(move |sports| async move { sports.add_schedule(&sport_name, schedule).await })
        .await;

    match result {
        Ok(()) => Ok(StatusCode::CREATED.into_response()),
        Err(AppError::InvalidOperation(_)) => {
            Ok((StatusCode::BAD_REQUEST, SCHEDULE_NOT_ADDED).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Remove a schedule from a sport.
///
/// Every stored occurrence equal to the body is removed.
///
/// # Returns
/// - `200 OK` - Schedule removed
/// - `400 Bad Request` - Malformed body or blank sport name
/// - `404 Not Found` - Sport missing or schedule not present
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/sports/{sport_name}/schedules",
    tag = SPORT_TAG,
    params(
        ("sport_name" = String, Path, description = "Unique sport name")
    ),
    request_body = Schedule,
    responses(
        (status = 200, description = "Schedule removed"),
        (status = 400, description = "Malformed body or blank sport name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Sport or schedule not registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(sport_name): Path<String>,
    JsonBody(schedule): JsonBody<Schedule>,
) -> Result<Response, AppError> {
    required_param(SPORT_NAME, &sport_name)?;

    let result = state
        .sports
        .dispatch(move |sports| async move { sports.remove_schedule(&sport_name, schedule).await })
        .await;

    match result {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(AppError::InvalidOperation(_)) => {
            Ok((StatusCode::NOT_FOUND, SCHEDULE_NOT_REMOVED).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Builds the `Location` header value of a newly registered sport.
///
/// The name is percent-encoded as a single path segment.
fn sport_location(sport_name: &str) -> Result<HeaderValue, AppError> {
    let mut url = Url::parse(LOCATION_BASE)
        .map_err(|e| AppError::InternalError(format!("Invalid location base: {}", e)))?;

    url.path_segments_mut()
        .map_err(|_| AppError::InternalError("Location base cannot hold a path".to_string()))?
        .push(sport_name);

    HeaderValue::from_str(url.path())
        .map_err(|e| AppError::InternalError(format!("Invalid Location header: {}", e)))
}
