use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use httpmock::prelude::*;
use pacifico_site::events::BoardSnapshot;
use pacifico_site::settings::Settings;
use pacifico_site::{AppState, build_router};
use serde_json::{Value, json};
use tower::Service;
use url::Url;

const EVENTS_PATH: &str = "/api/v1/calendar/events";
const CONTACT_PATH: &str = "/api/v1/contact/message";

/// Helper function to create test app state pointing at a mocked upstream
fn create_test_state(upstream: &str) -> AppState {
    let settings = Settings {
        events_url: Url::parse(&format!("{upstream}{EVENTS_PATH}")).unwrap(),
        contact_url: Url::parse(&format!("{upstream}{CONTACT_PATH}")).unwrap(),
        events_timeout_ms: 500,
        events_retry_delay_ms: 10,
        events_max_retries: 2,
        events_limit: 6,
        contact_timeout_ms: 2_000,
        calendar_embed_url: "https://calendar.example.com/embed".to_string(),
        calendar_ics_url: "https://calendar.example.com/basic.ics".to_string(),
        assets_dir: "public".to_string(),
        school_timezone: "America/Costa_Rica".to_string(),
        admin_token: "test-token-123".to_string(),
        debug: true,
        enable_swagger: true,
        port: 8080,
    };

    AppState::new(settings, chrono_tz::America::Costa_Rica)
}

/// Helper to extract response body as string
async fn response_body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: &mut axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .call(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, response_body_string(response.into_body()).await)
}

fn upstream_events() -> Value {
    json!({
        "results": [
            {"id": "evt-1", "title": "Lantern Walk", "date": "2025-11-11", "all_day": true, "venue": "School garden"},
            {"id": "evt-2", "name": "Parent Evening", "start_date": "2025-11-20", "start_time": "6:00 PM", "end_time": "7:30 PM"}
        ]
    })
}

#[tokio::test]
async fn test_api_index() {
    // Arrange
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    // Act
    let (status, body) = get(&mut app, "/api").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Pacifico Internacional API"));
    assert!(body.contains("/api/events.ics"));
}

#[tokio::test]
async fn test_healthz_live() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let (status, body) = get(&mut app, "/healthz/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""status":"ok"#));
}

#[tokio::test]
async fn test_home_shows_loading_before_first_load() {
    // Arrange
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    // Act
    let (status, body) = get(&mut app, "/").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Discover Waldorf in Costa Rica"));
    assert!(body.contains("Loading upcoming events..."));

    let (_, ready) = get(&mut app, "/healthz/ready").await;
    assert!(ready.contains(r#""eventsLoaded":false"#));
}

#[tokio::test]
async fn test_events_loaded_from_upstream() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(EVENTS_PATH);
            then.status(200).json_body(upstream_events());
        })
        .await;
    let state = create_test_state(&server.base_url());
    state.spawn_event_load().await.unwrap();
    let mut app = build_router(state);

    // Act
    let (status, body) = get(&mut app, "/api/events").await;

    // Assert
    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    let snapshot: BoardSnapshot = serde_json::from_str(&body).unwrap();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.events.len(), 2);
    assert_eq!(snapshot.events[0].title, "Lantern Walk");
    assert!(snapshot.events[0].is_all_day);
    assert_eq!(snapshot.events[0].location.as_deref(), Some("School garden"));
    assert_eq!(snapshot.events[1].title, "Parent Evening");
    assert_eq!(snapshot.events[1].end_date, "2025-11-20");

    let (_, home) = get(&mut app, "/").await;
    assert!(home.contains("Lantern Walk"));
    assert!(home.contains("Thursday, November 20, 2025 from 6:00 PM to 7:30 PM"));
    assert!(!home.contains("Loading upcoming events..."));
}

#[tokio::test]
async fn test_events_fall_back_when_upstream_fails() {
    // Arrange
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(EVENTS_PATH);
            then.status(500).body("internal error");
        })
        .await;
    let state = create_test_state(&server.base_url());
    state.spawn_event_load().await.unwrap();
    let mut app = build_router(state);

    // Act
    let (status, body) = get(&mut app, "/api/events").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let snapshot: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot["loading"], false);
    assert_eq!(snapshot["origin"], "fallback");
    assert_eq!(snapshot["generation"], 1);
    assert_eq!(snapshot["events"].as_array().unwrap().len(), 6);
    assert_eq!(snapshot["events"][5]["title"], "Costa Rica Independence Day");
}

#[tokio::test]
async fn test_events_fall_back_on_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(EVENTS_PATH);
            then.status(200)
                .json_body(upstream_events())
                .delay(std::time::Duration::from_secs(2));
        })
        .await;
    let state = create_test_state(&server.base_url());
    state.spawn_event_load().await.unwrap();

    let snapshot = state.board.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.events.len(), 6);
    assert_eq!(snapshot.events[0].title, "Grades 1&2 Meet your Teacher");
}

#[tokio::test]
async fn test_events_ical_after_load() {
    // Arrange
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(EVENTS_PATH);
            then.status(200).json_body(upstream_events());
        })
        .await;
    let state = create_test_state(&server.base_url());
    state.spawn_event_load().await.unwrap();
    let mut app = build_router(state);

    // Act
    let response = app
        .call(
            Request::builder()
                .uri("/api/events.ics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/calendar");
    let content_disposition = response.headers().get(header::CONTENT_DISPOSITION).unwrap();
    assert!(
        content_disposition
            .to_str()
            .unwrap()
            .contains("pacifico_calendar.ics")
    );

    let body = response_body_string(response.into_body()).await;
    assert!(body.contains("BEGIN:VCALENDAR"));
    assert_eq!(body.matches("BEGIN:VEVENT").count(), 2);
    assert!(body.contains("SUMMARY:Lantern Walk"));
}

#[tokio::test]
async fn test_events_ical_before_load_is_not_found() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let (status, _) = get(&mut app, "/api/events.ics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_refresh_requires_token() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/api/events/refresh?token=invalid-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_reloads_events() {
    // Arrange
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(EVENTS_PATH);
            then.status(200).json_body(upstream_events());
        })
        .await;
    let state = create_test_state(&server.base_url());
    let mut app = build_router(state.clone());

    // Act
    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/api/events/refresh")
                .header(header::AUTHORIZATION, "Bearer test-token-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body_string(response.into_body()).await;
    let snapshot: BoardSnapshot = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot.events.len(), 2);
    assert_eq!(state.board.snapshot().generation, 1);
}

#[tokio::test]
async fn test_calendar_page() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let (status, body) = get(&mut app, "/calendar").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<iframe src=\"https://calendar.example.com/embed\""));
    assert!(body.contains("https://calendar.example.com/basic.ics"));
}

#[tokio::test]
async fn test_home_tuition_open() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let (status, body) = get(&mut app, "/?tuition=open").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(" open>"));
    assert!(body.contains("$5,800"));
}

#[tokio::test]
async fn test_contact_form_success_clears_fields() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(CONTACT_PATH).json_body(json!({
                "name": "Ana Mora",
                "email": "ana@example.com",
                "phone": "6",
                "message": "Hello there"
            }));
            then.status(200);
        })
        .await;
    let state = create_test_state(&server.base_url());
    let mut app = build_router(state);

    // Act
    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "firstName=Ana&lastName=Mora&email=ana%40example.com&childAge=6&message=Hello+there",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body_string(response.into_body()).await;
    assert!(body.contains("Your message has been sent successfully"));
    assert!(!body.contains("value=\"Ana\""));
    assert!(body.contains("name=\"firstName\" placeholder=\"Your first name\" value=\"\""));
}

#[tokio::test]
async fn test_contact_form_failure_keeps_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(CONTACT_PATH);
            then.status(500);
        })
        .await;
    let state = create_test_state(&server.base_url());
    let mut app = build_router(state);

    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "firstName=Ana&lastName=Mora&email=ana%40example.com&childAge=&message=Hi",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body_string(response.into_body()).await;
    assert!(body.contains("Sorry, there was an error sending your message."));
    assert!(body.contains("value=\"Ana\""));
}

#[tokio::test]
async fn test_contact_api_rejects_missing_fields() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"firstName": "Ana", "email": "ana@example.com"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_api_upstream_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(CONTACT_PATH);
            then.status(503);
        })
        .await;
    let state = create_test_state(&server.base_url());
    let mut app = build_router(state);

    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "firstName": "Ana",
                        "lastName": "Mora",
                        "email": "ana@example.com",
                        "message": "Hi"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_body_string(response.into_body()).await;
    assert!(body.contains(r#""status":"error""#));
}

#[tokio::test]
async fn test_refresh_finishes_after_client_disconnects() {
    // Arrange
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(EVENTS_PATH);
            then.status(200)
                .json_body(upstream_events())
                .delay(std::time::Duration::from_millis(300));
        })
        .await;
    let state = create_test_state(&server.base_url());
    let mut app = build_router(state.clone());

    // Act
    let request = Request::builder()
        .method("POST")
        .uri("/api/events/refresh?token=test-token-123")
        .body(Body::empty())
        .unwrap();
    let abandoned =
        tokio::time::timeout(std::time::Duration::from_millis(50), app.call(request)).await;
    tokio::time::sleep(std::time::Duration::from_millis(600)).await;

    // Assert
    assert!(abandoned.is_err());
    let snapshot = state.board.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.events[0].title, "Lantern Walk");

    let (_, home) = get(&mut app, "/").await;
    assert!(!home.contains("Loading upcoming events..."));
}

#[tokio::test]
async fn test_menu_link_closes_menu() {
    let state = create_test_state("http://example.com");
    let mut app = build_router(state);

    let (_, opened) = get(&mut app, "/?menu=open").await;
    assert!(opened.contains(" open>"));

    let (status, body) = get(&mut app, "/?menu=open&section=calendar").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(" open>"));
}

#[tokio::test]
async fn test_contact_api_accepts_concurrent_visitors() {
    // Arrange
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(CONTACT_PATH);
            then.status(200).delay(std::time::Duration::from_millis(200));
        })
        .await;
    let state = create_test_state(&server.base_url());
    let app = build_router(state);

    let send = |first_name: &'static str| {
        let mut app = app.clone();
        async move {
            app.call(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "firstName": first_name,
                            "lastName": "Mora",
                            "email": "family@example.com",
                            "message": "Hi"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
        }
    };

    // Act
    let (ana, luis) = tokio::join!(send("Ana"), send("Luis"));

    // Assert
    assert_eq!(ana, StatusCode::OK);
    assert_eq!(luis, StatusCode::OK);
}
