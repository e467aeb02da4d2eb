use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinError;
use utoipa::ToSchema;

use super::pipeline::{EventOrigin, EventPipeline, LoadObserver, LoadOutcome, LoadPhase};
use super::source::EventSource;
use crate::in_flight::InFlight;
use crate::models::CalendarEvent;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("A calendar load is already in progress")]
    InProgress,
    #[error("Calendar load task failed: {0}")]
    Task(#[from] JoinError),
}

/// What the calendar section shows at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct BoardSnapshot {
    /// True until the first load has published a list.
    pub loading: bool,
    pub phase: LoadPhase,
    pub origin: Option<EventOrigin>,
    pub events: Vec<CalendarEvent>,
    /// Number of completed loads.
    pub generation: u64,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            loading: true,
            phase: LoadPhase::Idle,
            origin: None,
            events: Vec::new(),
            generation: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBoard {
    state: RwLock<BoardSnapshot>,
    active: InFlight,
}

impl EventBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.active.is_active()
    }

    /// Runs one load sequence on its own task and waits for the published
    /// snapshot. Dropping the returned future does not stop the load.
    pub async fn load_from<S>(
        self: &Arc<Self>,
        pipeline: &Arc<EventPipeline<S>>,
    ) -> Result<BoardSnapshot, LoadError>
    where
        S: EventSource + 'static,
    {
        let board = Arc::clone(self);
        let pipeline = Arc::clone(pipeline);
        tokio::spawn(async move { board.run_load(&pipeline).await }).await?
    }

    async fn run_load<S: EventSource>(
        &self,
        pipeline: &EventPipeline<S>,
    ) -> Result<BoardSnapshot, LoadError> {
        let _guard = self.active.try_acquire().ok_or(LoadError::InProgress)?;
        pipeline.load(self).await;
        Ok(self.snapshot())
    }

    fn update(&self, apply: impl FnOnce(&mut BoardSnapshot)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
    }
}

impl LoadObserver for EventBoard {
    // The published list stays visible while a reload is in progress.
    fn phase_changed(&self, phase: LoadPhase) {
        self.update(|state| state.phase = phase);
    }

    fn completed(&self, outcome: &LoadOutcome) {
        self.update(|state| {
            state.events = outcome.events.clone();
            state.origin = Some(outcome.origin);
            state.phase = LoadPhase::Ready {
                origin: outcome.origin,
            };
            state.loading = false;
            state.generation += 1;
        });
    }
}
