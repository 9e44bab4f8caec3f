//! Trigger controller
//!
//! The entry points a host wires to its controls: each trigger passes
//! through an [`InteractionGate`], runs its pipeline(s), renders the result
//! and re-enables the control whether or not the request succeeded.

use super::dual_fetch::{AggregateError, DualFetchUseCase};
use super::record_vote::{VoteReceipt, VoteRecorder};
use super::run_pipeline::RunPipelineUseCase;
use crate::config::SessionConfig;
use crate::ports::display::DisplayPort;
use crate::ports::http_fetcher::HttpFetcher;
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use duel_domain::{
    AggregateResult, Control, FetchTask, GateError, InteractionGate, PendingGuard, PipelineError,
    Settlement, Side, Slot, SourceCatalog, VoteTally,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced to the triggering context
#[derive(Error, Debug)]
pub enum TriggerError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

/// Pending gate whose every settlement is pushed to the host.
///
/// Dropping it without [`HostedGuard::release`] (the trigger future was
/// cancelled or unwound) settles as a failure and still publishes.
struct HostedGuard<'a, D: DisplayPort> {
    guard: Option<PendingGuard<'a>>,
    gate: &'a InteractionGate,
    display: &'a D,
}

impl<D: DisplayPort> HostedGuard<'_, D> {
    fn release(mut self, settlement: Settlement) {
        if let Some(guard) = self.guard.take() {
            guard.release(settlement);
        }
    }
}

impl<D: DisplayPort> Drop for HostedGuard<'_, D> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.display
            .update_control(self.gate.control(), &self.gate.view());
    }
}

/// Host-facing controller owning the gates and the vote recorder
pub struct TriggerController<F: HttpFetcher + 'static, D: DisplayPort + 'static> {
    pipeline: RunPipelineUseCase<F>,
    aggregator: DualFetchUseCase<F>,
    recorder: VoteRecorder<D>,
    catalog: SourceCatalog,
    display: Arc<D>,
    progress: Arc<dyn FetchProgressNotifier>,
    duel_gate: InteractionGate,
    cat_gate: InteractionGate,
    text_gate: InteractionGate,
}

impl<F: HttpFetcher + 'static, D: DisplayPort + 'static> TriggerController<F, D> {
    pub fn new(fetcher: Arc<F>, display: Arc<D>, catalog: SourceCatalog) -> Self {
        Self::with_config(fetcher, display, catalog, SessionConfig::default())
    }

    pub fn with_config(
        fetcher: Arc<F>,
        display: Arc<D>,
        catalog: SourceCatalog,
        config: SessionConfig,
    ) -> Self {
        Self {
            pipeline: RunPipelineUseCase::new(Arc::clone(&fetcher)),
            aggregator: DualFetchUseCase::new(fetcher),
            recorder: VoteRecorder::new(Arc::clone(&display)).with_clear_delay(config.clear_delay),
            catalog,
            display,
            progress: Arc::new(NoProgress),
            duel_gate: InteractionGate::with_labels(Control::DuelButton, config.duel_labels),
            cat_gate: InteractionGate::with_labels(Control::CatButton, config.cat_labels),
            text_gate: InteractionGate::with_labels(Control::JumbotronButton, config.text_labels),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn FetchProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Push the initial state of every control and score to the host
    pub fn initialize(&self) {
        for gate in [&self.duel_gate, &self.cat_gate, &self.text_gate] {
            self.display.update_control(gate.control(), &gate.view());
        }
        let tally = self.recorder.tally();
        self.display.show_score(Side::Dog, tally.dog_votes);
        self.display.show_score(Side::Cat, tally.cat_votes);
    }

    pub fn gate(&self, control: Control) -> &InteractionGate {
        match control {
            Control::DuelButton => &self.duel_gate,
            Control::CatButton => &self.cat_gate,
            Control::JumbotronButton => &self.text_gate,
        }
    }

    pub fn tally(&self) -> VoteTally {
        self.recorder.tally()
    }

    /// Enter `Pending` and show the disabled control
    fn begin<'a>(&'a self, gate: &'a InteractionGate) -> Result<HostedGuard<'a, D>, GateError> {
        let guard = gate.try_begin()?;
        self.display.update_control(gate.control(), &gate.view());
        Ok(HostedGuard {
            guard: Some(guard),
            gate,
            display: self.display.as_ref(),
        })
    }

    /// Load a fresh dog/cat pair into the duel slots
    pub async fn on_trigger(&self) -> Result<AggregateResult, TriggerError> {
        let guard = self.begin(&self.duel_gate)?;

        let (dog, cat) = self.catalog.duel_tasks();
        let outcome = self
            .aggregator
            .execute_with_progress(dog, cat, self.progress.as_ref())
            .await;

        match &outcome {
            Ok(pair) => {
                self.recorder.start_new_pair();
                self.display.render(Slot::DogContainer, pair.first());
                self.display.render(Slot::CatContainer, pair.second());
                guard.release(Settlement::Succeeded);
                info!("Duel ready");
            }
            Err(e) => {
                warn!("Duel failed: {}", e);
                guard.release(Settlement::Failed);
            }
        }

        outcome.map_err(TriggerError::from)
    }

    /// Load a single cat picture
    pub async fn on_generate_cat(&self) -> Result<String, TriggerError> {
        let task = self.catalog.single_cat_task();
        self.run_gated(&self.cat_gate, &task, Slot::CatSingle).await
    }

    /// Load the static text resource; the control disappears on success
    pub async fn on_load_text(&self) -> Result<String, TriggerError> {
        let task = self
            .catalog
            .text_task()
            .ok_or(TriggerError::NotConfigured("jumbotron.url"))?;
        self.run_gated(&self.text_gate, &task, Slot::Jumbotron).await
    }

    async fn run_gated(
        &self,
        gate: &InteractionGate,
        task: &FetchTask,
        slot: Slot,
    ) -> Result<String, TriggerError> {
        let guard = self.begin(gate)?;

        let outcome = self
            .pipeline
            .execute_with_progress(task, self.progress.as_ref())
            .await;

        match &outcome {
            Ok(fragment) => {
                self.display.render(slot, fragment);
                guard.release(Settlement::Succeeded);
            }
            Err(e) => {
                warn!("{} failed: {}", gate.control(), e);
                guard.release(Settlement::Failed);
            }
        }

        outcome.map_err(TriggerError::from)
    }

    /// Count a vote for the picture on `side`
    pub fn on_vote(&self, side: Side) -> VoteReceipt {
        self.recorder.record_vote(side)
    }
}
