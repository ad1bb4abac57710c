use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of interview being practiced. Drives question pools and report phrasing.
///
/// Unrecognized values deserialize to `Other`, which borrows the behavioral
/// question pool and has its own introduction template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Technical,
    #[default]
    Behavioral,
    Hr,
    #[serde(other)]
    Other,
}

/// Unrecognized values deserialize to `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Hard,
    #[default]
    #[serde(other)]
    Normal,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

/// Session settings chosen up front. Immutable once the session starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewSettings {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub focus: Vec<String>,
}

/// Sentences of an answer bucketed by STAR component.
/// `None` means no sentence matched, which marks a structurally weak answer rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBreakdown {
    pub situation: Option<String>,
    pub task: Option<String>,
    pub action: Option<String>,
    pub result: Option<String>,
}

impl StarBreakdown {
    /// Number of components with at least one matching sentence (0–4).
    pub fn present_count(&self) -> usize {
        [&self.situation, &self.task, &self.action, &self.result]
            .iter()
            .filter(|c| c.is_some())
            .count()
    }
}

/// Feedback for a single answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub star: StarBreakdown,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// 1 – 10
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_text: String,
    pub answer_text: String,
    /// Absent for a question that was asked but not rated yet.
    #[serde(default)]
    pub feedback: Option<AnswerFeedback>,
}

/// The caller-owned interview snapshot. Records are in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub interview_type: InterviewType,
    #[serde(default)]
    pub settings: InterviewSettings,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl Interview {
    pub fn new(interview_type: InterviewType, settings: InterviewSettings) -> Self {
        Self {
            interview_type,
            settings,
            questions: Vec::new(),
        }
    }

    /// Returns a new snapshot with `record` appended. `self` is left untouched.
    pub fn with_record(&self, record: QuestionRecord) -> Self {
        let mut next = self.clone();
        next.questions.push(record);
        next
    }

    /// Records that carry feedback, in order.
    pub fn rated(&self) -> impl Iterator<Item = (&QuestionRecord, &AnswerFeedback)> {
        self.questions
            .iter()
            .filter_map(|q| q.feedback.as_ref().map(|f| (q, f)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Communication,
    Technical,
    ProblemSolving,
    Behavioral,
    Leadership,
}

/// End-of-session report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewResult {
    /// Mean answer rating, one decimal. 5.0 when nothing was rated.
    pub overall_score: f64,
    pub feedback: String,
    /// Type-gated skills (technical, behavioral) are absent rather than zero.
    pub skill_scores: BTreeMap<Skill, f64>,
    pub strengths: Vec<String>, // ≤ 5
    pub weaknesses: Vec<String>, // ≤ 4
    pub improvement_tips: Vec<String>, // ≤ 5, unique
}

/// Output of one coach turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub next_turn_text: String,
    pub feedback: AnswerFeedback,
    pub last_question_asked: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_interview_type_falls_back_to_other() {
        let t: InterviewType = serde_json::from_str(r#""system_design""#).unwrap();
        assert_eq!(t, InterviewType::Other);
    }

    #[test]
    fn test_interview_type_serde_snake_case() {
        let t: InterviewType = serde_json::from_str(r#""hr""#).unwrap();
        assert_eq!(t, InterviewType::Hr);
        assert_eq!(
            serde_json::to_string(&InterviewType::Technical).unwrap(),
            r#""technical""#
        );
    }

    #[test]
    fn test_unknown_difficulty_is_normal() {
        let d: Difficulty = serde_json::from_str(r#""brutal""#).unwrap();
        assert_eq!(d, Difficulty::Normal);
    }

    #[test]
    fn test_settings_with_unknown_difficulty_round_trip_as_normal() {
        let settings: InterviewSettings =
            serde_json::from_str(r#"{"difficulty": "brutal", "focus": ["sql"]}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Normal);
        assert_eq!(
            serde_json::to_value(&settings).unwrap()["difficulty"],
            serde_json::json!("normal")
        );
        let hard: Difficulty = serde_json::from_str(r#""hard""#).unwrap();
        assert_eq!(hard, Difficulty::Hard);
    }

    #[test]
    fn test_settings_focus_defaults_to_empty() {
        let s: InterviewSettings = serde_json::from_str(r#"{"difficulty": "hard"}"#).unwrap();
        assert_eq!(s.difficulty, Difficulty::Hard);
        assert!(s.focus.is_empty());
    }

    #[test]
    fn test_present_count() {
        let star = StarBreakdown {
            situation: Some("a.".to_string()),
            task: None,
            action: Some("b.".to_string()),
            result: None,
        };
        assert_eq!(star.present_count(), 2);
        assert_eq!(StarBreakdown::default().present_count(), 0);
    }

    #[test]
    fn test_with_record_leaves_snapshot_untouched() {
        let interview = Interview::new(InterviewType::Hr, InterviewSettings::default());
        let next = interview.with_record(QuestionRecord {
            question_text: "Q".to_string(),
            answer_text: "A".to_string(),
            feedback: None,
        });
        assert!(interview.questions.is_empty());
        assert_eq!(next.questions.len(), 1);
        assert_eq!(next.rated().count(), 0);
    }

    #[test]
    fn test_skill_keys_serialize_snake_case() {
        let mut scores = BTreeMap::new();
        scores.insert(Skill::ProblemSolving, 6.5);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"problem_solving":6.5}"#);
    }
}
