use axum::{
    extract::{Form, Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::page::{LandingPage, PLAYGROUND_ANCHOR};
use super::AppState;
use crate::error::AppResult;
use crate::playground::{PlaygroundHandle, PlaygroundState, SubmitOutcome};

/// Cookie carrying the visitor's playground session id
pub const SESSION_COOKIE: &str = "flowdate_session";

/// Text posted from the playground form or the JSON API
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitText {
    #[serde(default)]
    pub text: String,
}

/// Answer to a JSON submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub outcome: SubmitOutcome,
    pub state: PlaygroundState,
}

fn session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Find or start the visitor's playground and keep the cookie current
async fn playground_for(state: &AppState, jar: CookieJar) -> (CookieJar, PlaygroundHandle) {
    let (id, handle) = state.sessions.get_or_create(session_id(&jar)).await;
    (jar.add(session_cookie(id)), handle)
}

/// Set the text and submit it in one go
async fn set_and_submit(handle: &PlaygroundHandle, text: String) -> AppResult<SubmitOutcome> {
    handle.set_text(text).await?;
    let outcome = handle.submit().await?;
    debug!("Playground submission: {:?}", outcome);
    Ok(outcome)
}

/// Handler for the landing page
pub async fn index_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, handle) = playground_for(&state, jar).await;
    let html = LandingPage::compose(&handle.snapshot()).to_html()?;
    Ok((jar, Html(html)))
}

/// Handler for the playground form
pub async fn playground_form_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SubmitText>,
) -> AppResult<(CookieJar, Redirect)> {
    let (jar, handle) = playground_for(&state, jar).await;

    if let SubmitOutcome::Started { .. } = set_and_submit(&handle, form.text).await? {
        // Give fast parses a chance to land before the page renders; slower
        // ones show the loading state and the page refreshes itself
        let grace = Duration::from_millis(state.config.render_grace_ms);
        let _ = tokio::time::timeout(grace, handle.wait_idle()).await;
    }

    Ok((jar, Redirect::to(&format!("/#{}", PLAYGROUND_ANCHOR))))
}

/// Handler that ends the visitor's playground session
pub async fn playground_reset_handler(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = match session_id(&jar) {
        Some(id) => {
            if state.sessions.remove(id).await {
                info!("Playground session {} reset", id);
            }
            jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
        }
        None => jar,
    };
    (jar, Redirect::to("/"))
}

/// Handler returning the playground state as JSON
pub async fn playground_state_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<PlaygroundState>) {
    let (jar, handle) = playground_for(&state, jar).await;
    (jar, Json(handle.snapshot()))
}

/// Handler for JSON submissions
pub async fn playground_submit_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SubmitText>,
) -> AppResult<impl IntoResponse> {
    let (jar, handle) = playground_for(&state, jar).await;
    let outcome = set_and_submit(&handle, body.text).await?;

    let response = SubmitResponse {
        outcome,
        state: handle.snapshot(),
    };
    Ok((StatusCode::ACCEPTED, jar, Json(response)))
}

// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}
