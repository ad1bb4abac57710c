//! Mock-interview coach: STAR answer analysis, per-answer rating, skill scoring
//! and end-of-session reports, served over a small JSON API.
//!
//! The core (`coaching`, `report`) is pure and synchronous. The random source
//! used for question and phrase selection is always passed in by the caller.

pub mod coaching;
pub mod config;
pub mod errors;
pub mod models;
pub mod report;
pub mod routes;
pub mod state;

pub use coaching::questions::{generate_introduction, select_question};
pub use coaching::tables::CoachTables;
pub use coaching::turn::process_turn;
pub use report::build_result;
