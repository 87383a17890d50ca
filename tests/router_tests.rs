use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use flowdate::config::Config;
use flowdate::error::{AppResult, Error};
use flowdate::playground::{CalendarEvent, ParseClient, SessionRegistry};
use flowdate::server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Mock parser that answers every request the same way
struct FixedClient {
    fail: bool,
}

#[async_trait]
impl ParseClient for FixedClient {
    async fn parse_events(&self, _text: &str) -> AppResult<Vec<CalendarEvent>> {
        if self.fail {
            return Err(Error::ServiceStatus {
                status: 500,
                body: String::new(),
            });
        }
        Ok(vec![CalendarEvent {
            title: Some("Lunch with Sarah".to_string()),
            date: Some("2025-01-02".to_string()),
            start_time: Some("13:00".to_string()),
            ..Default::default()
        }])
    }
}

fn app(fail: bool) -> Router {
    let state = AppState {
        config: Arc::new(Config::default()),
        sessions: Arc::new(SessionRegistry::new(Arc::new(FixedClient { fail }), 16)),
    };
    router(state)
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` part of the session cookie set on `response`
fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body))
        .unwrap()
}

fn post_json(uri: &str, cookie: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app(false).oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

/// The landing page renders every section and starts a session
#[tokio::test]
async fn test_index_renders_page_and_sets_cookie() {
    let response = app(false).oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).starts_with("flowdate_session="));

    let html = body_text(response).await;
    assert!(html.contains("Flowdate OS"));
    assert!(html.contains("Plans made"));
    assert!(html.contains("Average parse latency"));
    assert!(html.contains("Northwind"));
    assert!(html.contains("The old way"));
    assert!(html.contains("id=\"playground\""));
    assert!(html.contains("href=\"#playground\""));
    assert!(html.contains("Waiting for input..."));
    assert!(!html.contains("http-equiv=\"refresh\""));
}

/// Posting the form parses, redirects, and the next page view shows the event
#[tokio::test]
async fn test_form_submission_round_trip() {
    let app = app(false);

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .clone()
        .oneshot(post_form("/playground", &cookie, "text=Lunch+with+Sarah+at+1pm+tomorrow"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/#playground");

    let page = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    let html = body_text(page).await;
    assert!(html.contains("Lunch with Sarah at 1pm tomorrow"));
    assert!(html.contains("<span class=\"event-title\">Lunch with Sarah</span>"));
    assert!(html.contains("13:00"));
    assert!(html.contains("No location"));
    assert!(!html.contains("Waiting for input..."));
}

/// A failed parse shows the fixed message and leaves the button enabled
#[tokio::test]
async fn test_failed_submission_shows_error() {
    let app = app(true);

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    app.clone()
        .oneshot(post_form("/playground", &cookie, "text=Gym+at+6"))
        .await
        .unwrap();

    let html = body_text(app.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(html.contains("Could not reach the parsing service. Make sure the backend is running, then try again."));
    assert!(html.contains("Generate Events →"));
    assert!(!html.contains(" disabled"));
}

/// Blank JSON submissions are reported as ignored
#[tokio::test]
async fn test_api_blank_submission_ignored() {
    let response = app(false)
        .oneshot(post_json("/api/playground", None, r#"{ "text": "   " }"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["outcome"]["status"], "ignored");
    assert_eq!(body["outcome"]["reason"], "blank");
    assert_eq!(body["state"]["loading"], false);
}

/// JSON submissions start a request and the state endpoint reports the result
#[tokio::test]
async fn test_api_submission_and_state() {
    let app = app(false);

    let response = app
        .clone()
        .oneshot(post_json("/api/playground", None, r#"{ "text": "Lunch with Sarah" }"#))
        .await
        .unwrap();
    let cookie = session_cookie(&response);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["outcome"]["status"], "started");
    assert_eq!(body["outcome"]["token"], 1);

    let mut events = Value::Null;
    for _ in 0..50 {
        let response = app.clone().oneshot(get("/api/playground", Some(&cookie))).await.unwrap();
        let state: Value = serde_json::from_str(&body_text(response).await).unwrap();
        if state["loading"] == false {
            events = state["events"].clone();
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    assert_eq!(events[0]["title"], "Lunch with Sarah");
    assert_eq!(events[0]["start_time"], "13:00");
}

/// Resetting ends the session and clears the cookie
#[tokio::test]
async fn test_reset_ends_session() {
    let app = app(false);

    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);
    app.clone()
        .oneshot(post_form("/playground", &cookie, "text=Gym"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/playground/reset", &cookie, ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    // The old id no longer maps to a session, so a fresh one is started
    let page = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_ne!(session_cookie(&page), cookie);
    let html = body_text(page).await;
    assert!(html.contains("Waiting for input..."));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let response = app(false).oneshot(get("/assets/flowdate.css", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("scroll-behavior: smooth"));
}
