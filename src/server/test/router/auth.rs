use super::*;

/// Tests a request without credentials.
///
/// Expected: 401 with a Basic challenge
#[tokio::test]
async fn rejects_anonymous_request() {
    let app = app().await;

    let request = Request::builder()
        .uri("/sports")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers[header::WWW_AUTHENTICATE], BASIC_CHALLENGE);
}

/// Tests a request with a wrong password.
///
/// Expected: 401 and no sport stored
#[tokio::test]
async fn rejects_wrong_password() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/sports")
        .header(header::AUTHORIZATION, basic_auth("alice", "hunter2"))
        .body(Body::from(SOCCER))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let all = send(&app, super::request("GET", "/sports", None)).await;
    assert_eq!(all.json(), json!([]));
}

/// Tests that a Basic login is remembered through the session cookie.
///
/// Expected: the follow-up request with only the cookie succeeds
#[tokio::test]
async fn reuses_session_after_basic_login() {
    let app = app().await;

    let login = send(&app, request("GET", "/sports", None)).await;
    assert_eq!(login.status, StatusCode::OK);

    let cookie = login.headers[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let request = Request::builder()
        .uri("/sports")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
}

/// Tests that the OpenAPI document is served without credentials.
///
/// Expected: 200 with every sport path documented
#[tokio::test]
async fn serves_openapi_document() {
    let app = app().await;

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);

    let paths = &response.json()["paths"];
    assert!(paths.get("/sports").is_some());
    assert!(paths.get("/sports/{sport_name}").is_some());
    assert!(paths.get("/sports/{sport_name}/schedules").is_some());
}
