// src/controller.rs
//! Submission controller: validate, evaluate, render.
//!
//! `submit` borrows the controller mutably for the whole request, so a second
//! submission cannot start while one is in flight.

use tracing::{debug, info};

use crate::core::EvaluationService;
use crate::submission::SubmissionForm;
use crate::view::{render, ResultsSurface, UiState};

pub struct SubmissionController<S, V> {
    service: S,
    surface: V,
    state: UiState,
}

impl<S, V> SubmissionController<S, V>
where
    S: EvaluationService,
    V: ResultsSurface,
{
    /// Takes ownership of the surface and presents the idle view once
    pub fn new(service: S, mut surface: V) -> Self {
        let state = UiState::Idle;
        surface.present(&render(&state));
        Self {
            service,
            surface,
            state,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn into_parts(self) -> (S, V) {
        (self.service, self.surface)
    }

    pub async fn submit(&mut self, form: SubmissionForm) -> &UiState {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                info!("Submission rejected: {}", e);
                transition(
                    &mut self.state,
                    &mut self.surface,
                    UiState::Error(e.display_message()),
                );
                return &self.state;
            }
        };

        let mut guard = LoadingGuard::engage(&mut self.state, &mut self.surface);

        let outcome = match self.service.evaluate(&request).await {
            Ok(result) => UiState::Success(result),
            Err(e) => {
                info!("Evaluation error [{}]: {}", e.code(), e);
                UiState::Error(e.display_message())
            }
        };

        guard.settle(outcome);
        drop(guard);

        &self.state
    }
}

fn transition<V: ResultsSurface>(state: &mut UiState, surface: &mut V, next: UiState) {
    debug!("UI state: {} -> {}", state.name(), next.name());
    *state = next;
    surface.present(&render(state));
}

/// Holds the Loading state for one request. Whatever ends the request,
/// dropping the guard leaves the submit control enabled with its label restored.
struct LoadingGuard<'a, V: ResultsSurface> {
    state: &'a mut UiState,
    surface: &'a mut V,
    settled: bool,
}

impl<'a, V: ResultsSurface> LoadingGuard<'a, V> {
    fn engage(state: &'a mut UiState, surface: &'a mut V) -> Self {
        transition(state, surface, UiState::Loading);
        Self {
            state,
            surface,
            settled: false,
        }
    }

    fn settle(&mut self, outcome: UiState) {
        transition(&mut *self.state, &mut *self.surface, outcome);
        self.settled = true;
    }
}

impl<V: ResultsSurface> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        if !self.settled {
            // Request was dropped or panicked before an outcome arrived
            transition(&mut *self.state, &mut *self.surface, UiState::Idle);
        }
    }
}
