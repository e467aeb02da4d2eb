use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use super::fallback::fallback_events;
use super::normalize::{FieldMapping, extract_records};
use super::source::{EventSource, FetchError};
use crate::models::CalendarEvent;

pub const DEFAULT_EVENT_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStep {
    RetryAfter(Duration),
    GiveUp,
}

impl RetryPolicy {
    /// Decision after attempt number `attempt` (1-based) has failed.
    pub fn after_failure(&self, attempt: u32) -> RetryStep {
        if attempt <= self.max_retries {
            RetryStep::RetryAfter(self.delay)
        } else {
            RetryStep::GiveUp
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventOrigin {
    Network,
    Fallback,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadPhase {
    Idle,
    Loading { attempt: u32 },
    Retrying { attempt: u32, delay_ms: u64 },
    Ready { origin: EventOrigin },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub events: Vec<CalendarEvent>,
    pub origin: EventOrigin,
    pub attempts: u32,
}

/// Receives progress of a load sequence.
pub trait LoadObserver: Send + Sync {
    fn phase_changed(&self, phase: LoadPhase);

    /// Called exactly once per load, after the last attempt.
    fn completed(&self, outcome: &LoadOutcome);
}

pub struct EventPipeline<S> {
    source: S,
    mapping: FieldMapping,
    policy: RetryPolicy,
    limit: usize,
}

impl<S: EventSource> EventPipeline<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self {
            source,
            mapping: FieldMapping::default(),
            policy,
            limit: DEFAULT_EVENT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn attempt(&self, today: NaiveDate) -> Result<Vec<CalendarEvent>, FetchError> {
        let payload = self.source.fetch().await?;
        let records = extract_records(payload)?;
        Ok(self.mapping.normalize_all(&records, self.limit, today)?)
    }

    /// Runs attempts until one yields events or the retry budget is spent,
    /// in which case the fallback list is used. Never fails.
    pub async fn load(&self, observer: &dyn LoadObserver) -> LoadOutcome {
        let mut attempt = 1;
        let outcome = loop {
            observer.phase_changed(LoadPhase::Loading { attempt });
            info!(attempt, "fetching calendar events");

            let err = match self.attempt(Utc::now().date_naive()).await {
                Ok(events) => {
                    info!(attempt, count = events.len(), "loaded calendar events");
                    break LoadOutcome {
                        events,
                        origin: EventOrigin::Network,
                        attempts: attempt,
                    };
                }
                Err(err) => err,
            };
            warn!(attempt, error = %err, "calendar events fetch failed");

            match self.policy.after_failure(attempt) {
                RetryStep::RetryAfter(delay) => {
                    observer.phase_changed(LoadPhase::Retrying {
                        attempt,
                        delay_ms: delay.as_millis() as u64,
                    });
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                RetryStep::GiveUp => {
                    warn!(attempts = attempt, "using fallback calendar events");
                    break LoadOutcome {
                        events: fallback_events(),
                        origin: EventOrigin::Fallback,
                        attempts: attempt,
                    };
                }
            }
        };

        observer.completed(&outcome);
        outcome
    }
}
