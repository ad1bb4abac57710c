//! Session Turn Orchestrator.
//!
//! Flow: extract_star → rate_answer → select_question → compose_turn.
//! The interview snapshot is read-only; the caller appends the outcome.

use rand::Rng;
use tracing::debug;

use crate::coaching::questions::{compose_turn, select_question};
use crate::coaching::rating::rate_answer;
use crate::coaching::star::extract_star;
use crate::coaching::tables::CoachTables;
use crate::models::{Interview, TurnOutcome};

/// Rates `answer` and produces the next coach turn.
///
/// `interview` is the history before this answer; its record count is the
/// question number handed to the selector.
pub fn process_turn<R: Rng + ?Sized>(
    tables: &CoachTables,
    answer: &str,
    interview: &Interview,
    rng: &mut R,
) -> TurnOutcome {
    let star = extract_star(tables, answer);
    let feedback = rate_answer(answer, &star);

    let question_number = interview.questions.len();
    let next_question = select_question(
        tables,
        interview.interview_type,
        interview.settings.difficulty,
        question_number,
        rng,
    );

    debug!(
        question_number,
        rating = feedback.rating,
        star_components = star.present_count(),
        "Processed interview turn"
    );

    TurnOutcome {
        next_turn_text: compose_turn(tables, next_question, rng),
        feedback,
        last_question_asked: next_question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coaching::tables::{BEHAVIORAL_QUESTIONS, HR_QUESTIONS, TECHNICAL_QUESTIONS};
    use crate::models::{Difficulty, InterviewSettings, InterviewType, QuestionRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn interview(interview_type: InterviewType, answered: usize) -> Interview {
        let mut interview = Interview::new(
            interview_type,
            InterviewSettings {
                difficulty: Difficulty::Easy,
                focus: vec![],
            },
        );
        for i in 0..answered {
            interview = interview.with_record(QuestionRecord {
                question_text: format!("Q{i}"),
                answer_text: "ok".to_string(),
                feedback: None,
            });
        }
        interview
    }

    #[test]
    fn test_turn_survives_emptied_tables() {
        let mut tables = CoachTables::default();
        tables.questions.hr.base.clear();
        tables.acknowledgments.clear();
        tables.transitions.clear();
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = process_turn(&tables, "ok", &interview(InterviewType::Hr, 2), &mut rng);
        assert_eq!(outcome.last_question_asked, HR_QUESTIONS[2]);
        assert_eq!(outcome.next_turn_text, HR_QUESTIONS[2]);
    }

    #[test]
    fn test_turn_ends_with_selected_question() {
        let tables = CoachTables::default();
        let mut rng = StdRng::seed_from_u64(11);
        let outcome = process_turn(
            &tables,
            "I took charge.",
            &interview(InterviewType::Technical, 0),
            &mut rng,
        );
        assert_eq!(outcome.last_question_asked, TECHNICAL_QUESTIONS[0]);
        assert!(outcome.next_turn_text.ends_with(TECHNICAL_QUESTIONS[0]));
        assert!(outcome.feedback.star.action.is_some());
    }

    #[test]
    fn test_question_number_follows_history_length() {
        let tables = CoachTables::default();
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = process_turn(
            &tables,
            "ok",
            &interview(InterviewType::Behavioral, 2),
            &mut rng,
        );
        assert_eq!(outcome.last_question_asked, BEHAVIORAL_QUESTIONS[2]);
        assert_eq!(outcome.feedback.rating, 3);
    }

    #[test]
    fn test_input_interview_not_mutated() {
        let tables = CoachTables::default();
        let before = interview(InterviewType::Hr, 1);
        let snapshot = before.clone();
        let mut rng = StdRng::seed_from_u64(9);
        let _ = process_turn(&tables, "answer", &before, &mut rng);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_seeded_turns_are_reproducible() {
        let tables = CoachTables::default();
        let history = interview(InterviewType::Technical, 6);
        let a = process_turn(&tables, "ok", &history, &mut StdRng::seed_from_u64(1));
        let b = process_turn(&tables, "ok", &history, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
