pub mod auth;
pub mod contact;
pub mod content;
pub mod error;
pub mod events;
pub mod format;
pub mod handlers;
pub mod ical;
pub mod in_flight;
pub mod models;
pub mod openapi;
pub mod pages;
pub mod settings;
pub mod validation;
pub mod view_state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use chrono_tz::Tz;
use handlers::{
    api_index, calendar, events_ical, healthz_live, healthz_ready, home, list_events,
    post_contact, refresh_events, submit_contact_form,
};
use tower_http::LatencyUnit;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::contact::ContactRelay;
use crate::events::{EventBoard, EventPipeline, HttpEventSource, RetryPolicy};
use crate::ical::ICalExporter;
use crate::openapi::ApiDoc;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub board: Arc<EventBoard>,
    pub pipeline: Arc<EventPipeline<HttpEventSource>>,
    pub contact: Arc<ContactRelay>,
    pub exporter: Arc<ICalExporter>,
}

impl AppState {
    pub fn new(settings: Settings, school_tz: Tz) -> Self {
        let source = HttpEventSource::new(settings.events_url.clone(), settings.events_timeout());
        let policy = RetryPolicy {
            max_retries: settings.events_max_retries,
            delay: settings.events_retry_delay(),
        };

        Self {
            pipeline: Arc::new(EventPipeline::new(source, policy).with_limit(settings.events_limit)),
            board: Arc::new(EventBoard::new()),
            contact: Arc::new(ContactRelay::new(
                settings.contact_url.clone(),
                settings.contact_timeout(),
            )),
            exporter: Arc::new(ICalExporter::new(school_tz)),
            settings,
        }
    }

    /// Starts the initial calendar load in the background.
    pub fn spawn_event_load(&self) -> tokio::task::JoinHandle<()> {
        let board = self.board.clone();
        let pipeline = self.pipeline.clone();
        tokio::spawn(async move {
            if let Err(err) = board.load_from(&pipeline).await {
                tracing::warn!(error = %err, "initial calendar load skipped");
            }
        })
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let school_tz: Tz = settings
        .school_timezone
        .parse()
        .map_err(|err| format!("invalid school timezone {}: {err}", settings.school_timezone))?;

    let state = AppState::new(settings, school_tz);
    state.spawn_event_load();

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!(
        events_url = %state.pipeline.source().url(),
        "Starting Pacifico Internacional site on {addr}"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let assets = Path::new(&state.settings.assets_dir);
    let mut router = Router::new()
        .route("/", get(home))
        .route("/calendar", get(calendar))
        .route("/contact", post(submit_contact_form))
        .route("/api", get(api_index))
        .route("/api/events", get(list_events))
        .route("/api/events.ics", get(events_ical))
        .route("/api/events/refresh", post(refresh_events))
        .route("/api/contact", post(post_contact))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .nest_service("/documents", ServeDir::new(assets.join("documents")))
        .nest_service("/images", ServeDir::new(assets.join("images")))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
