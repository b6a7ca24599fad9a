use super::*;

async fn app_with_soccer() -> Router {
    let app = app().await;
    send(&app, request("POST", "/sports", Some(SOCCER))).await;
    app
}

/// Tests that a sport without schedules and a missing sport are told apart.
///
/// Expected: 200 [] for soccer, 404 with the not-registered message for polo
#[tokio::test]
async fn distinguishes_empty_schedules_from_missing_sport() {
    let app = app_with_soccer().await;

    let empty = send(&app, request("GET", "/sports/soccer/schedules", None)).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.json(), json!([]));

    let missing = send(&app, request("GET", "/sports/polo/schedules", None)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body, SPORT_NOT_REGISTERED);
}

/// Tests adding a schedule and adding it again.
///
/// Expected: 201, then 400 with the duplicated-schedule message and one stored copy
#[tokio::test]
async fn adds_schedule_once() {
    let app = app_with_soccer().await;

    let added = send(
        &app,
        request("POST", "/sports/soccer/schedules", Some(MONDAY_MORNING)),
    )
    .await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert!(added.body.is_empty());

    let repeated = send(
        &app,
        request("POST", "/sports/soccer/schedules", Some(MONDAY_MORNING)),
    )
    .await;
    assert_eq!(repeated.status, StatusCode::BAD_REQUEST);
    assert_eq!(repeated.body, SCHEDULE_NOT_ADDED);

    let schedules = send(&app, request("GET", "/sports/soccer/schedules", None)).await;
    assert_eq!(
        schedules.json(),
        json!([{
            "fromHour": { "hour": 10, "min": 0 },
            "toHour": { "hour": 12, "min": 0 },
            "day": "MONDAY"
        }])
    );
}

/// Tests adding a schedule to a sport that does not exist.
///
/// Expected: 400 with the duplicated-schedule message
#[tokio::test]
async fn adding_schedule_to_unknown_sport_fails() {
    let app = app().await;

    let response = send(
        &app,
        request("POST", "/sports/polo/schedules", Some(MONDAY_MORNING)),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, SCHEDULE_NOT_ADDED);
}

/// Tests a schedule body that is not valid JSON.
///
/// Expected: 400
#[tokio::test]
async fn rejects_malformed_schedule() {
    let app = app_with_soccer().await;

    let response = send(
        &app,
        request("POST", "/sports/soccer/schedules", Some(r#"{"day":"SOMEDAY"}"#)),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Tests removing a stored schedule.
///
/// Expected: 200 and only the other schedule left
#[tokio::test]
async fn removes_schedule() {
    let app = app_with_soccer().await;

    send(
        &app,
        request("POST", "/sports/soccer/schedules", Some(MONDAY_MORNING)),
    )
    .await;
    send(
        &app,
        request("POST", "/sports/soccer/schedules", Some(FRIDAY_EVENING)),
    )
    .await;

    let removed = send(
        &app,
        request("DELETE", "/sports/soccer/schedules", Some(MONDAY_MORNING)),
    )
    .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert!(removed.body.is_empty());

    let schedules = send(&app, request("GET", "/sports/soccer/schedules", None)).await;
    assert_eq!(
        schedules.json(),
        json!([serde_json::from_str::<Value>(FRIDAY_EVENING).unwrap()])
    );
}

/// Tests removing a schedule the sport does not have.
///
/// Expected: 404 with the not-found message
#[tokio::test]
async fn removing_absent_schedule_is_not_found() {
    let app = app_with_soccer().await;

    let response = send(
        &app,
        request("DELETE", "/sports/soccer/schedules", Some(MONDAY_MORNING)),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, SCHEDULE_NOT_REMOVED);
}

/// Tests removing a schedule from a sport that does not exist.
///
/// Expected: 404 with the not-found message
#[tokio::test]
async fn removing_schedule_from_unknown_sport_is_not_found() {
    let app = app().await;

    let response = send(
        &app,
        request("DELETE", "/sports/polo/schedules", Some(MONDAY_MORNING)),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, SCHEDULE_NOT_REMOVED);
}

/// Tests that deleting a sport drops its schedules with it.
///
/// Expected: 404 on the schedules of the deleted sport
#[tokio::test]
async fn deleting_sport_drops_schedules() {
    let app = app_with_soccer().await;

    send(
        &app,
        request("POST", "/sports/soccer/schedules", Some(MONDAY_MORNING)),
    )
    .await;
    send(&app, request("DELETE", "/sports/soccer", None)).await;

    let response = send(&app, request("GET", "/sports/soccer/schedules", None)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, SPORT_NOT_REGISTERED);
}
