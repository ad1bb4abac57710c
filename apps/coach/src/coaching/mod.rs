// Interview coaching engine
// Implements: keyword tables, question selection, STAR extraction, answer rating, turn orchestration.
// No model calls here; a model-backed coach plugs in through the `Coach` trait.

pub mod coach;
pub mod handlers;
pub mod questions;
pub mod rating;
pub mod star;
pub mod tables;
pub mod turn;
