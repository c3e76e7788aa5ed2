//! Evaluation simulation runner.
//!
//! Drives a fixed six-stage schedule to completion, publishing stage and
//! progress updates over an mpsc channel, then synthesizes one
//! [`EvaluationResult`] through the outcome sampler. Stages execute strictly
//! sequentially; at most one run is in flight per runner instance (enforced
//! by `&mut self`).
//!
//! Delays are sampled per stage from the schedule's `[min, max)` window and
//! awaited through an injected [`StagePacer`], so tests collapse them to zero
//! with [`InstantPacer`] while production code sleeps on `tokio::time`.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde_json::json;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::catalog::{self, Capability};
use crate::logging::json_log;
use crate::outcome::{self, EvaluationResult};

/// One entry of the stage schedule: label plus the half-open delay window the
/// per-stage pause is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    pub label: &'static str,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

pub const STAGES: [StageSpec; 6] = [
    StageSpec { label: "Initializing evaluation...", min_delay_ms: 600, max_delay_ms: 1000 },
    StageSpec { label: "Processing input document...", min_delay_ms: 600, max_delay_ms: 1000 },
    StageSpec { label: "Running AI extraction...", min_delay_ms: 600, max_delay_ms: 1000 },
    StageSpec { label: "Validating outputs...", min_delay_ms: 600, max_delay_ms: 1000 },
    StageSpec { label: "Computing metrics...", min_delay_ms: 600, max_delay_ms: 1000 },
    StageSpec { label: "Finalizing results...", min_delay_ms: 600, max_delay_ms: 1000 },
];

/// Progress percentage after entering stage `index`, rounded to two decimals:
/// 16.67, 33.33, 50.0, 66.67, 83.33, 100.0.
pub fn stage_progress(index: usize) -> f64 {
    let raw = (index as f64 + 1.0) / STAGES.len() as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Why a start request was refused. A refused start mutates nothing; the
/// control surface should disable its trigger via [`EvalRunner::can_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("no taxonomy selected")]
    MissingTaxonomy,
    #[error("no use case selected")]
    MissingUseCase,
    #[error("no capability selected")]
    MissingCapability,
    #[error("input text is blank")]
    BlankInput,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error(transparent)]
    Blocked(#[from] StartError),
    /// The update receiver was dropped mid-run; remaining stages were
    /// abandoned without emitting anything further.
    #[error("run discarded before completion")]
    Cancelled,
}

/// Incremental observation of a run. Stage updates arrive in strict ascending
/// order; `Finished` arrives exactly once, after the last stage update.
#[derive(Debug, Clone, PartialEq)]
pub enum RunUpdate {
    Stage { index: usize, label: &'static str, progress: f64 },
    Finished(EvaluationResult),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running {
        stage: usize,
    },
    Completed(EvaluationResult),
}

/// Awaits the sampled inter-stage delay. Production code uses [`TokioPacer`];
/// tests substitute [`InstantPacer`] to collapse delays to zero.
#[async_trait]
pub trait StagePacer {
    async fn pause(&self, delay: Duration);
}

pub struct TokioPacer;

#[async_trait]
impl StagePacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        sleep(delay).await;
    }
}

/// Pacer that returns immediately, for deterministic tests.
pub struct InstantPacer;

#[async_trait]
impl StagePacer for InstantPacer {
    async fn pause(&self, _delay: Duration) {}
}

/// Owned state behind the run-evaluation surface: the four configuration
/// fields plus the `Idle -> Running -> Completed` phase machine.
///
/// Ephemeral by design: one instance per page mount, discarded on
/// navigation. Nothing is persisted.
#[derive(Debug, Default)]
pub struct EvalRunner {
    taxonomy: String,
    use_case: String,
    capability: Option<Capability>,
    input: String,
    phase: RunPhase,
}

impl EvalRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting a taxonomy invalidates the dependent use-case choice.
    pub fn set_taxonomy(&mut self, id: &str) {
        self.taxonomy = id.to_string();
        self.use_case.clear();
    }

    /// Selecting a use case auto-loads its canned sample input when one
    /// exists, mirroring the configuration surface.
    pub fn set_use_case(&mut self, name: &str) {
        self.use_case = name.to_string();
        if let Some(sample) = catalog::sample_input(name) {
            self.input = sample.to_string();
        }
    }

    pub fn set_capability(&mut self, capability: Capability) {
        self.capability = Some(capability);
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn taxonomy(&self) -> &str {
        &self.taxonomy
    }

    pub fn use_case(&self) -> &str {
        &self.use_case
    }

    pub fn capability(&self) -> Option<Capability> {
        self.capability
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &RunPhase {
        &self.phase
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        match &self.phase {
            RunPhase::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn can_run(&self) -> bool {
        self.check_start().is_ok()
    }

    fn check_start(&self) -> Result<Capability, StartError> {
        if self.taxonomy.is_empty() {
            return Err(StartError::MissingTaxonomy);
        }
        if self.use_case.is_empty() {
            return Err(StartError::MissingUseCase);
        }
        let capability = self.capability.ok_or(StartError::MissingCapability)?;
        if self.input.trim().is_empty() {
            return Err(StartError::BlankInput);
        }
        Ok(capability)
    }

    /// Execute one simulated run to completion.
    ///
    /// Publishes a [`RunUpdate::Stage`] per stage in order, pausing between
    /// stages, then emits [`RunUpdate::Finished`] once and transitions to
    /// `Completed`. If the receiver is gone the run aborts silently with
    /// [`RunError::Cancelled`] and the phase returns to `Idle`.
    pub async fn run(
        &mut self,
        pacer: &impl StagePacer,
        rng: &mut impl Rng,
        updates: &mpsc::Sender<RunUpdate>,
    ) -> Result<EvaluationResult, RunError> {
        let capability = self.check_start()?;

        for (index, spec) in STAGES.iter().enumerate() {
            self.phase = RunPhase::Running { stage: index };
            let progress = stage_progress(index);
            let update = RunUpdate::Stage { index, label: spec.label, progress };
            if updates.send(update).await.is_err() {
                self.phase = RunPhase::Idle;
                return Err(RunError::Cancelled);
            }
            json_log(
                "eval.stage",
                json!({ "stage": index, "label": spec.label, "progress": progress }),
            );
            let delay_ms = rng.gen_range(spec.min_delay_ms as f64..spec.max_delay_ms as f64);
            pacer.pause(Duration::from_millis(delay_ms as u64)).await;
        }

        let result = outcome::synthesize(capability, rng);
        json_log(
            "eval.completed",
            json!({
                "capability": capability.id(),
                "status": result.status.as_str(),
                "score": result.score,
            }),
        );
        if updates.send(RunUpdate::Finished(result.clone())).await.is_err() {
            self.phase = RunPhase::Idle;
            return Err(RunError::Cancelled);
        }
        self.phase = RunPhase::Completed(result.clone());
        Ok(result)
    }

    /// `Completed -> Idle`: clears the result and progress, preserving the
    /// taxonomy, use case, capability, and input selections.
    pub fn reset(&mut self) {
        self.phase = RunPhase::Idle;
    }
}
