//! Question Selector: opening turn, next-question choice, and turn phrasing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coaching::tables::CoachTables;
use crate::models::{Difficulty, InterviewSettings, InterviewType};

/// Hard interviews may switch to the advanced pool once this many questions were asked.
const ADVANCED_AFTER: usize = 3;
/// The advanced pool is used when the uniform draw exceeds this.
const ADVANCED_DRAW_THRESHOLD: f64 = 0.5;

/// Builds the opening coach turn: a type-specific greeting, difficulty and focus
/// phrasing, then the type's fixed first question.
pub fn generate_introduction(
    tables: &CoachTables,
    interview_type: InterviewType,
    settings: &InterviewSettings,
) -> String {
    let greeting = match interview_type {
        InterviewType::Technical => {
            "Welcome to your technical interview practice. I'll ask about your engineering experience and how you solve problems."
        }
        InterviewType::Behavioral => {
            "Welcome to your behavioral interview practice. I'll ask about real situations you've handled, so structure your answers around what happened, what you did, and how it turned out."
        }
        InterviewType::Hr => {
            "Welcome to your HR interview practice. I'll ask about your motivation, goals, and how you fit with a team."
        }
        InterviewType::Other => {
            "Welcome to your interview practice session. I'll ask you a range of questions and give feedback on each answer."
        }
    };

    let mut intro = format!(
        "{greeting} We'll keep this at {} difficulty",
        settings.difficulty.label()
    );

    let focus: Vec<&str> = settings
        .focus
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if !focus.is_empty() {
        intro.push_str(&format!(", with a focus on {}", focus.join(", ")));
    }
    intro.push_str(". ");
    intro.push_str(tables.opening_for(interview_type));
    intro
}

/// Picks the next question for a session that has already asked `question_number` questions.
///
/// Pools are indexed modulo their length, so long sessions cycle through them.
/// An empty base pool falls back to the built-in questions for the type.
/// On hard difficulty past the third question, a coin flip from `rng` decides
/// whether the advanced pool is used instead of the base pool.
pub fn select_question<'a, R: Rng + ?Sized>(
    tables: &'a CoachTables,
    interview_type: InterviewType,
    difficulty: Difficulty,
    question_number: usize,
    rng: &mut R,
) -> &'a str {
    let pool = tables.pool_for(interview_type);

    let use_advanced = difficulty == Difficulty::Hard
        && question_number > ADVANCED_AFTER
        && !pool.advanced.is_empty()
        && rng.gen::<f64>() > ADVANCED_DRAW_THRESHOLD;

    let questions = if use_advanced {
        &pool.advanced
    } else {
        &pool.base
    };

    if questions.is_empty() {
        let builtin = CoachTables::builtin_base_for(interview_type);
        return builtin[question_number % builtin.len()];
    }
    &questions[question_number % questions.len()]
}

/// Joins a random acknowledgment, a random transition and the next question.
pub fn compose_turn<R: Rng + ?Sized>(
    tables: &CoachTables,
    next_question: &str,
    rng: &mut R,
) -> String {
    let ack = tables
        .acknowledgments
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default();
    let transition = tables
        .transitions
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default();

    [ack, transition, next_question]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
