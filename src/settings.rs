use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub events_url: Url,
    pub contact_url: Url,
    pub events_timeout_ms: u64,
    pub events_retry_delay_ms: u64,
    pub events_max_retries: u32,
    pub events_limit: usize,
    pub contact_timeout_ms: u64,
    pub calendar_embed_url: String,
    pub calendar_ics_url: String,
    pub assets_dir: String,
    pub school_timezone: String,
    pub admin_token: String,
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // APP_EVENTS_URL -> events_url; nested keys would use a double underscore
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("events_url", "https://tiomike.com/api/v1/calendar/events")?
            .set_default("contact_url", "https://tiomike.com/api/v1/contact/message")?
            .set_default("events_timeout_ms", 15_000)?
            .set_default("events_retry_delay_ms", 2_000)?
            .set_default("events_max_retries", 2)?
            .set_default("events_limit", 6)?
            .set_default("contact_timeout_ms", 15_000)?
            .set_default(
                "calendar_embed_url",
                "https://calendar.google.com/calendar/embed?height=600&wkst=1&bgcolor=%23ffffff&ctz=America%2FCosta_Rica&src=93e6bc2fe2660ddcc925e876ff13dd04394372fc3d48130f6617c431e92dbbd6%40group.calendar.google.com&color=%23039BE5&showTitle=0&showNav=1&showDate=1&showPrint=0&showTabs=1&showCalendars=0&showTz=1",
            )?
            .set_default(
                "calendar_ics_url",
                "https://calendar.google.com/calendar/ical/93e6bc2fe2660ddcc925e876ff13dd04394372fc3d48130f6617c431e92dbbd6%40group.calendar.google.com/public/basic.ics",
            )?
            .set_default("assets_dir", "public")?
            .set_default("school_timezone", "America/Costa_Rica")?
            .set_default("admin_token", "default-token-change-me")?
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .build()?;

        config.try_deserialize()
    }

    pub fn events_timeout(&self) -> Duration {
        Duration::from_millis(self.events_timeout_ms)
    }

    pub fn events_retry_delay(&self) -> Duration {
        Duration::from_millis(self.events_retry_delay_ms)
    }

    pub fn contact_timeout(&self) -> Duration {
        Duration::from_millis(self.contact_timeout_ms)
    }
}
