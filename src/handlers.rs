use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use axum_extra::extract::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::Deserialize;
use tracing::warn;

use crate::{
    AppState,
    auth::verify_token,
    contact::SUCCESS_MESSAGE,
    error::ApiError,
    events::BoardSnapshot,
    models::{ContactForm, ContactResponse, ContactStatus},
    pages,
    view_state::{ContactField, PageAction, PageState, Section},
};

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub menu: Option<String>,
    pub tuition: Option<String>,
    /// Set by links inside the mobile menu.
    pub section: Option<Section>,
}

fn is_open(flag: &Option<String>) -> bool {
    matches!(flag.as_deref(), Some("open" | "1" | "true"))
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    let mut page = PageState::default();
    if is_open(&query.menu) {
        page.apply(PageAction::ToggleMenu);
    }
    if is_open(&query.tuition) {
        page.apply(PageAction::ToggleTuition);
    }
    if let Some(section) = query.section {
        page.apply(PageAction::Navigate(section));
    }
    Html(pages::home_page(&page, &state.board.snapshot()).into_string())
}

pub async fn calendar(State(state): State<AppState>) -> Html<String> {
    Html(
        pages::calendar_page(
            &state.settings.calendar_embed_url,
            &state.settings.calendar_ics_url,
        )
        .into_string(),
    )
}

/// Form post from the home page; re-renders the page with the outcome.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let mut page = PageState::default();
    for field in ContactField::ALL {
        page.apply(PageAction::EditField(field, field.value_in(&form).to_string()));
    }
    page.apply(PageAction::SubmitStarted);
    match state.contact.submit(&form).await {
        Ok(()) => {
            page.apply(PageAction::SubmitSucceeded);
        }
        Err(err) => {
            warn!(error = %err, "contact form submission failed");
            page.apply(PageAction::SubmitFailed);
        }
    }
    Html(pages::home_page(&page, &state.board.snapshot()).into_string())
}

#[utoipa::path(get, path = "/api", tag = "site")]
pub async fn api_index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Pacifico Internacional API",
        "endpoints": {
            "/api/events": "Upcoming school events as JSON",
            "/api/events.ics": "Upcoming school events as an iCal file",
            "/api/events/refresh": "Reload events from the calendar service (token required)",
            "/api/contact": "Send a message to the school"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "site")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "site")]
pub async fn healthz_ready(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.board.snapshot();
    Json(serde_json::json!({
        "status": "ok",
        "eventsLoaded": !snapshot.loading,
        "origin": snapshot.origin,
    }))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Current calendar board", body = BoardSnapshot)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Json<BoardSnapshot> {
    Json(state.board.snapshot())
}

#[utoipa::path(
    get,
    path = "/api/events.ics",
    responses(
        (status = 200, description = "iCal file", content_type = "text/calendar"),
        (status = 404, description = "No events available yet")
    ),
    tag = "events"
)]
pub async fn events_ical(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.board.snapshot();
    if snapshot.events.is_empty() {
        return Err(ApiError::NotFound("No events available".into()));
    }

    let body = state.exporter.generate(&snapshot.events);
    Ok((
        StatusCode::OK,
        [
            ("content-type", "text/calendar"),
            (
                "content-disposition",
                "attachment; filename=pacifico_calendar.ics",
            ),
        ],
        body,
    ))
}

#[utoipa::path(
    post,
    path = "/api/events/refresh",
    params(
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Board after the reload", body = BoardSnapshot),
        (status = 401, description = "Invalid authentication token"),
        (status = 409, description = "A load is already in progress"),
        (status = 500, description = "The load task failed")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "events"
)]
pub async fn refresh_events(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<BoardSnapshot>, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(
        &state.settings.admin_token,
        auth_header,
        query.token.as_deref(),
    )?;

    let snapshot = state.board.load_from(&state.pipeline).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message delivered", body = ContactResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "The same message is already being sent"),
        (status = 502, description = "Contact service rejected the message", body = ContactResponse)
    ),
    tag = "contact"
)]
pub async fn post_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, ApiError> {
    state.contact.submit(&form).await?;
    Ok(Json(ContactResponse {
        status: ContactStatus::Success,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
