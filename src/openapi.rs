use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::events::{BoardSnapshot, EventOrigin, LoadPhase};
use crate::models::{CalendarEvent, ContactForm, ContactResponse, ContactStatus};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
        components.add_security_scheme(
            "query_token",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("token"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::api_index,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::list_events,
        crate::handlers::events_ical,
        crate::handlers::refresh_events,
        crate::handlers::post_contact
    ),
    components(schemas(
        CalendarEvent,
        BoardSnapshot,
        LoadPhase,
        EventOrigin,
        ContactForm,
        ContactResponse,
        ContactStatus
    )),
    tags(
        (name = "events", description = "School calendar events"),
        (name = "contact", description = "Messages to the school office"),
        (name = "site", description = "Service metadata and health")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;
