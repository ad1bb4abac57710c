//! Coach: pluggable, trait-based backend behind the three interview operations.
//!
//! Default: `SimulatedCoach` (keyword heuristics, no model call, reproducible when seeded).
//! A model-backed coach can implement the same trait without touching the handlers.
//!
//! `AppState` holds an `Arc<dyn Coach>`, chosen at startup.

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::coaching::questions::generate_introduction;
use crate::coaching::tables::CoachTables;
use crate::coaching::turn::process_turn;
use crate::errors::AppError;
use crate::models::{Interview, InterviewResult, InterviewSettings, InterviewType, TurnOutcome};
use crate::report::build_result;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The coach trait. Every call receives the full interview snapshot and
/// returns a new value; implementations keep no per-session state.
#[async_trait]
pub trait Coach: Send + Sync {
    async fn introduction(
        &self,
        interview_type: InterviewType,
        settings: &InterviewSettings,
    ) -> Result<String, AppError>;

    async fn process_turn(
        &self,
        answer: &str,
        interview: &Interview,
    ) -> Result<TurnOutcome, AppError>;

    async fn build_result(&self, interview: &Interview) -> Result<InterviewResult, AppError>;

    /// Backend label, for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// SimulatedCoach: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-heuristic coach. Never fails.
///
/// With a seed, the random source for each turn is `seed + question number`, so a
/// replayed session picks the same questions and phrasing. Without one it is
/// seeded from OS entropy on every call.
pub struct SimulatedCoach {
    tables: Arc<CoachTables>,
    seed: Option<u64>,
}

impl SimulatedCoach {
    pub fn new(tables: Arc<CoachTables>, seed: Option<u64>) -> Self {
        Self { tables, seed }
    }

    fn rng_for(&self, question_number: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(question_number as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SimulatedCoach {
    fn default() -> Self {
        Self::new(Arc::new(CoachTables::default()), None)
    }
}

#[async_trait]
impl Coach for SimulatedCoach {
    async fn introduction(
        &self,
        interview_type: InterviewType,
        settings: &InterviewSettings,
    ) -> Result<String, AppError> {
        Ok(generate_introduction(&self.tables, interview_type, settings))
    }

    async fn process_turn(
        &self,
        answer: &str,
        interview: &Interview,
    ) -> Result<TurnOutcome, AppError> {
        let mut rng = self.rng_for(interview.questions.len());
        Ok(process_turn(&self.tables, answer, interview, &mut rng))
    }

    async fn build_result(&self, interview: &Interview) -> Result<InterviewResult, AppError> {
        let result = build_result(&self.tables, interview);
        info!(
            "Built interview result: overall_score={} answers={}",
            result.overall_score,
            interview.rated().count()
        );
        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "simulated"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
