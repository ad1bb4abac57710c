use std::sync::Arc;

use crate::coaching::coach::Coach;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no session data; every request carries its own interview snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable coach backend. Default: SimulatedCoach.
    pub coach: Arc<dyn Coach>,
}
