//! Answer Rater: strengths, improvement notes and a 1–10 rating for one answer.

use crate::models::{AnswerFeedback, StarBreakdown};

pub const STRENGTH_CONTEXT: &str = "Good context setting";
pub const STRENGTH_ACTIONS: &str = "Detailed description of actions taken";
pub const STRENGTH_OUTCOMES: &str = "Clear articulation of outcomes";
pub const STRENGTH_COMPREHENSIVE: &str = "Comprehensive response";
pub const STRENGTH_DEFAULT: &str = "Addressed the question directly";

pub const IMPROVE_SITUATION: &str = "Provide more context about the situation";
pub const IMPROVE_TASK: &str = "Clarify your specific responsibilities or objectives";
pub const IMPROVE_ACTION: &str = "Elaborate on the specific actions you took";
pub const IMPROVE_RESULT: &str = "Quantify results or explain the impact of your actions";
pub const IMPROVE_DEFAULT: &str = "Consider adding more specific examples to strengthen your answer";

const MAX_IMPROVEMENTS: usize = 3;

const BASE_RATING: i32 = 5;
const LONG_ANSWER_CHARS: usize = 200;
const SHORT_ANSWER_CHARS: usize = 50;

/// Rates an answer given its STAR breakdown. Never fails; empty answers get the floor.
pub fn rate_answer(answer: &str, star: &StarBreakdown) -> AnswerFeedback {
    let length = answer.chars().count();

    AnswerFeedback {
        strengths: strengths(length, star),
        improvements: improvements(star),
        rating: rating(length, star),
        star: star.clone(),
    }
}

fn strengths(length: usize, star: &StarBreakdown) -> Vec<String> {
    let rules = [
        (star.situation.is_some(), STRENGTH_CONTEXT),
        (star.action.is_some() && length > 30, STRENGTH_ACTIONS),
        (star.result.is_some(), STRENGTH_OUTCOMES),
        (length > 100, STRENGTH_COMPREHENSIVE),
    ];

    let mut out: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, s)| s.to_string())
        .collect();

    if out.is_empty() {
        out.push(STRENGTH_DEFAULT.to_string());
    }
    out
}

fn improvements(star: &StarBreakdown) -> Vec<String> {
    let rules = [
        (too_short(&star.situation, 20), IMPROVE_SITUATION),
        (too_short(&star.task, 15), IMPROVE_TASK),
        (too_short(&star.action, 25), IMPROVE_ACTION),
        (too_short(&star.result, 20), IMPROVE_RESULT),
    ];

    let mut out: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .take(MAX_IMPROVEMENTS)
        .map(|(_, s)| s.to_string())
        .collect();

    if out.is_empty() {
        out.push(IMPROVE_DEFAULT.to_string());
    }
    out
}

fn too_short(component: &Option<String>, min_chars: usize) -> bool {
    component
        .as_deref()
        .map(|c| c.chars().count() < min_chars)
        .unwrap_or(true)
}

fn rating(length: usize, star: &StarBreakdown) -> u8 {
    let mut rating = BASE_RATING + star.present_count() as i32;
    if length > LONG_ANSWER_CHARS {
        rating += 1;
    }
    if length < SHORT_ANSWER_CHARS {
        rating -= 2;
    }
    rating.clamp(1, 10) as u8
}
