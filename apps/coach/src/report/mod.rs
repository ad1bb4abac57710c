//! End-of-session report: skill scores plus the aggregated summary.
//!
//! Everything here is deterministic, so building a report twice from the same
//! interview gives the same result.

pub mod aggregate;
pub mod skills;
pub mod templates;

use crate::coaching::tables::CoachTables;
use crate::models::{Interview, InterviewResult};
use crate::report::aggregate::{
    build_summary, build_tips, overall_score, top_strengths, top_weaknesses,
};
use crate::report::skills::score_skills;

pub fn build_result(tables: &CoachTables, interview: &Interview) -> InterviewResult {
    let overall_score = overall_score(interview);
    let weaknesses = top_weaknesses(interview);

    InterviewResult {
        overall_score,
        feedback: build_summary(overall_score, interview.interview_type),
        skill_scores: score_skills(interview),
        strengths: top_strengths(interview),
        improvement_tips: build_tips(tables, &weaknesses),
        weaknesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coaching::tables::GENERIC_TIPS;
    use crate::coaching::turn::process_turn;
    use crate::models::{InterviewSettings, InterviewType, QuestionRecord, Skill};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ANSWERS: &[&str] = &[
        "I was on a team project facing a tight deadline situation. My task was to redesign the checkout flow. I implemented a new caching approach and the result was a 30% faster load time.",
        "ok",
        "I lead a team of four. We had to migrate our database, so I took ownership of the rollout plan and the outcome was zero downtime.",
        "",
    ];

    /// Plays a full session the way a caller would.
    fn play(interview_type: InterviewType) -> Interview {
        let tables = CoachTables::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut interview = Interview::new(interview_type, InterviewSettings::default());
        let mut question = tables.opening_for(interview_type).to_string();
        for answer in ANSWERS {
            let outcome = process_turn(&tables, answer, &interview, &mut rng);
            interview = interview.with_record(QuestionRecord {
                question_text: question,
                answer_text: answer.to_string(),
                feedback: Some(outcome.feedback),
            });
            question = outcome.last_question_asked;
        }
        interview
    }

    #[test]
    fn test_zero_question_interview() {
        let result = build_result(
            &CoachTables::default(),
            &Interview::new(InterviewType::Behavioral, InterviewSettings::default()),
        );
        assert_eq!(result.overall_score, 5.0);
        assert!(result.strengths.is_empty());
        assert!(result.weaknesses.is_empty());
        assert_eq!(
            result.improvement_tips,
            GENERIC_TIPS.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_full_session_report_limits() {
        let result = build_result(&CoachTables::default(), &play(InterviewType::Technical));
        assert!(result.strengths.len() <= 5);
        assert!(result.weaknesses.len() <= 4);
        assert!(result.improvement_tips.len() <= 5);
        assert!(result.skill_scores.contains_key(&Skill::Technical));
        assert!(result
            .skill_scores
            .values()
            .all(|s| (1.0..=10.0).contains(s)));

        let mut tips = result.improvement_tips.clone();
        tips.sort();
        tips.dedup();
        assert_eq!(tips.len(), result.improvement_tips.len());
    }

    #[test]
    fn test_overall_score_from_session() {
        // ratings: 9, 3, 8 (three components, 130 chars), 3
        let result = build_result(&CoachTables::default(), &play(InterviewType::Hr));
        assert_eq!(result.overall_score, 5.8);
        assert!(result.feedback.starts_with("You have a foundation"));
    }

    #[test]
    fn test_build_result_is_idempotent() {
        let tables = CoachTables::default();
        let interview = play(InterviewType::Behavioral);
        assert_eq!(build_result(&tables, &interview), build_result(&tables, &interview));
    }
}
