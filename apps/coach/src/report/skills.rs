//! Skill Scorer: per-interview competency scores built from the whole answer history.
//!
//! Every skill starts at 6.0 and accumulates small modifiers per rated answer.
//! `technical` and `behavioral` are only scored for their matching interview type
//! and are absent from the map otherwise.

use std::collections::BTreeMap;

use crate::models::{AnswerFeedback, Interview, InterviewType, QuestionRecord, Skill};

const BASE_SCORE: f64 = 6.0;

pub fn score_skills(interview: &Interview) -> BTreeMap<Skill, f64> {
    let mut skills = vec![Skill::Communication, Skill::ProblemSolving, Skill::Leadership];
    match interview.interview_type {
        InterviewType::Technical => skills.push(Skill::Technical),
        InterviewType::Behavioral => skills.push(Skill::Behavioral),
        InterviewType::Hr | InterviewType::Other => {}
    }

    skills
        .into_iter()
        .map(|skill| {
            let modifier: f64 = interview
                .rated()
                .map(|(record, feedback)| modifier_for(skill, record, feedback))
                .sum();
            (skill, finalize(BASE_SCORE + modifier))
        })
        .collect()
}

fn modifier_for(skill: Skill, record: &QuestionRecord, feedback: &AnswerFeedback) -> f64 {
    let answer = record.answer_text.as_str();
    let length = answer.chars().count();
    let star = &feedback.star;
    let mut m = 0.0;

    match skill {
        Skill::Communication => {
            if length > 100 {
                m += 0.2;
            }
            if length < 50 {
                m -= 0.3;
            }
            if star.situation.is_some() && star.result.is_some() {
                m += 0.3;
            }
        }
        Skill::Technical => {
            if feedback.rating > 7 {
                m += 0.4;
            }
            if feedback.rating < 5 {
                m -= 0.4;
            }
        }
        Skill::ProblemSolving => {
            if star.action.is_some() {
                m += 0.2;
            }
            if feedback
                .strengths
                .iter()
                .any(|s| s.to_lowercase().contains("detail"))
            {
                m += 0.3;
            }
        }
        Skill::Behavioral => {
            let present = star.present_count();
            if present >= 3 {
                m += 0.5;
            }
            if present <= 1 {
                m -= 0.4;
            }
        }
        Skill::Leadership => {
            let lower = answer.to_lowercase();
            if lower.contains("lead") {
                m += 0.3;
            }
            if lower.contains("team") {
                m += 0.2;
            }
            if star.action.is_some() && star.result.is_some() {
                m += 0.2;
            }
        }
    }
    m
}

/// Clamps to 1–10 and rounds to one decimal.
pub(crate) fn finalize(score: f64) -> f64 {
    round1(score.clamp(1.0, 10.0))
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coaching::rating::rate_answer;
    use crate::coaching::star::extract_star;
    use crate::coaching::tables::CoachTables;
    use crate::models::InterviewSettings;

    const STRONG: &str = "I was on a team project facing a tight deadline situation. My task was to redesign the checkout flow. I implemented a new caching approach and the result was a 30% faster load time.";

    fn answered(interview_type: InterviewType, answers: &[&str]) -> Interview {
        let tables = CoachTables::default();
        answers.iter().fold(
            Interview::new(interview_type, InterviewSettings::default()),
            |interview, answer| {
                let star = extract_star(&tables, answer);
                interview.with_record(QuestionRecord {
                    question_text: "Q".to_string(),
                    answer_text: answer.to_string(),
                    feedback: Some(rate_answer(answer, &star)),
                })
            },
        )
    }

    fn one_decimal(x: f64) -> bool {
        ((x * 10.0).round() - x * 10.0).abs() < 1e-9
    }

    #[test]
    fn test_no_answers_gives_base_scores() {
        let scores = score_skills(&answered(InterviewType::Hr, &[]));
        assert_eq!(scores.len(), 3);
        assert!(scores.values().all(|&s| s == 6.0));
    }

    #[test]
    fn test_type_gated_skills() {
        let tech = score_skills(&answered(InterviewType::Technical, &[]));
        assert!(tech.contains_key(&Skill::Technical));
        assert!(!tech.contains_key(&Skill::Behavioral));

        let behavioral = score_skills(&answered(InterviewType::Behavioral, &[]));
        assert!(behavioral.contains_key(&Skill::Behavioral));
        assert!(!behavioral.contains_key(&Skill::Technical));

        let other = score_skills(&answered(InterviewType::Other, &[]));
        assert!(!other.contains_key(&Skill::Technical));
        assert!(!other.contains_key(&Skill::Behavioral));
    }

    #[test]
    fn test_strong_answer_modifiers() {
        let scores = score_skills(&answered(InterviewType::Technical, &[STRONG]));
        // 181 chars: +0.2, situation + result: +0.3
        assert_eq!(scores[&Skill::Communication], 6.5);
        // rating 9
        assert_eq!(scores[&Skill::Technical], 6.4);
        // action +0.2, "Detailed description..." +0.3
        assert_eq!(scores[&Skill::ProblemSolving], 6.5);
        // "team" +0.2, action + result +0.2
        assert_eq!(scores[&Skill::Leadership], 6.4);
    }

    #[test]
    fn test_weak_answers_lower_scores() {
        let scores = score_skills(&answered(InterviewType::Behavioral, &["ok", "fine"]));
        assert_eq!(scores[&Skill::Communication], 5.4);
        assert_eq!(scores[&Skill::Behavioral], 5.2);
        assert_eq!(scores[&Skill::ProblemSolving], 6.0);
    }

    #[test]
    fn test_scores_clamped_and_one_decimal() {
        let many_weak = vec!["ok"; 40];
        let low = score_skills(&answered(InterviewType::Behavioral, &many_weak));
        assert_eq!(low[&Skill::Communication], 1.0);
        assert_eq!(low[&Skill::Behavioral], 1.0);

        let many_strong = vec!["I lead the team. The result was success and I took action."; 40];
        let high = score_skills(&answered(InterviewType::Technical, &many_strong));
        for (_, score) in high.iter().chain(low.iter()) {
            assert!((1.0..=10.0).contains(score));
            assert!(one_decimal(*score));
        }
        assert_eq!(high[&Skill::Leadership], 10.0);
    }

    #[test]
    fn test_unrated_records_ignored() {
        let interview = answered(InterviewType::Hr, &[]).with_record(QuestionRecord {
            question_text: "Q".to_string(),
            answer_text: "I lead the team".to_string(),
            feedback: None,
        });
        assert_eq!(score_skills(&interview)[&Skill::Leadership], 6.0);
    }
}
