//! Keyword tables: every word list and phrase pool the simulated coach reads.
//!
//! The built-in tables are the `const` slices below. A JSON file can replace any
//! subset of them at startup (`COACH_TABLES_PATH`); missing fields keep their
//! defaults. Control flow never hardcodes a keyword, so tuning the heuristics is a
//! data change only.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::InterviewType;

// ────────────────────────────────────────────────────────────────────────────
// STAR keywords
// ────────────────────────────────────────────────────────────────────────────

pub const SITUATION_KEYWORDS: &[&str] = &[
    "situation",
    "context",
    "background",
    "faced",
    "setting",
    "scenario",
    "environment",
];

pub const TASK_KEYWORDS: &[&str] = &[
    "task",
    "goal",
    "objective",
    "assigned",
    "responsibility",
    "needed to",
    "had to",
];

pub const ACTION_KEYWORDS: &[&str] = &[
    "action",
    "approach",
    "steps",
    "implemented",
    "strategy",
    "method",
    "executed",
    "did",
    "took",
    "handled",
];

pub const RESULT_KEYWORDS: &[&str] = &[
    "result",
    "outcome",
    "achievement",
    "accomplishment",
    "impact",
    "effect",
    "learned",
    "benefit",
    "success",
];

// ────────────────────────────────────────────────────────────────────────────
// Question pools
// ────────────────────────────────────────────────────────────────────────────

pub const TECHNICAL_QUESTIONS: &[&str] = &[
    "Can you walk me through a challenging technical problem you solved recently?",
    "How do you approach debugging an issue you have never seen before?",
    "Describe a system you designed. What trade-offs did you make?",
    "Tell me about a time you had to learn a new technology quickly to deliver a project.",
    "How do you ensure the quality and reliability of the code you ship?",
    "Describe a time you improved the performance of an application or service.",
    "How do you decide between building a solution yourself and adopting an existing tool?",
];

pub const TECHNICAL_ADVANCED_QUESTIONS: &[&str] = &[
    "Design a rate limiter for a public API. How would it behave under a sudden traffic spike?",
    "Tell me about a production incident you owned end to end. What did the post-mortem change?",
    "How would you migrate a monolith to independent services without downtime?",
    "Describe how you would diagnose intermittent latency in a distributed system.",
    "Walk me through a technical decision you made that you would now reverse, and why.",
];

pub const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about a time you faced a conflict with a teammate and how you resolved it.",
    "Describe a situation where you had to meet a tight deadline.",
    "Give me an example of a goal you set and how you achieved it.",
    "Tell me about a time you made a mistake. How did you handle it?",
    "Describe a time you had to persuade someone to see things your way.",
    "Tell me about a time you went above and beyond what was expected of you.",
    "Describe a situation where you had to adapt to a significant change at work.",
];

pub const BEHAVIORAL_ADVANCED_QUESTIONS: &[&str] = &[
    "Tell me about a time you had to make an unpopular decision. How did you bring people along?",
    "Describe a situation where you had to lead without formal authority.",
    "Tell me about a time you received critical feedback you disagreed with.",
    "Describe the most difficult trade-off you have made between quality and speed.",
    "Tell me about a time you failed to meet a commitment. What happened next?",
];

pub const HR_QUESTIONS: &[&str] = &[
    "Why are you interested in this role?",
    "Where do you see yourself in five years?",
    "What are your greatest strengths and weaknesses?",
    "Why are you looking to leave your current position?",
    "How do you handle stress and pressure at work?",
    "What kind of work environment helps you do your best work?",
    "What are your salary expectations?",
];

pub const HR_ADVANCED_QUESTIONS: &[&str] = &[
    "What would your previous manager say is your biggest area for growth?",
    "Tell me about a time your values conflicted with a company decision.",
    "How do you evaluate whether a company's culture is right for you?",
    "Why should we hire you over other qualified candidates?",
];

/// Fixed first question per interview type, asked by the introduction turn.
pub const TECHNICAL_OPENING: &str =
    "To start, could you tell me about your technical background and the technologies you work with most?";
pub const BEHAVIORAL_OPENING: &str =
    "To start, could you tell me a little about yourself and your professional journey so far?";
pub const HR_OPENING: &str =
    "To start, could you tell me about yourself and what drew you to apply for this position?";
pub const OTHER_OPENING: &str =
    "To start, could you tell me a little about yourself and what you hope to get out of this session?";

// ────────────────────────────────────────────────────────────────────────────
// Turn phrasing
// ────────────────────────────────────────────────────────────────────────────

pub const ACKNOWLEDGMENTS: &[&str] = &[
    "Thank you for sharing that.",
    "I appreciate the detail in your answer.",
    "That's helpful context.",
    "Thanks, that gives me a clearer picture.",
    "Good, I can see how you approached that.",
];

pub const TRANSITIONS: &[&str] = &[
    "Let's move on to the next question.",
    "Now I'd like to ask you about something different.",
    "Building on that, here's another question.",
    "Let's explore another area.",
    "Here's the next one for you.",
];

// ────────────────────────────────────────────────────────────────────────────
// Improvement tips
// ────────────────────────────────────────────────────────────────────────────

/// (trigger word, tip). Checked in order; the first trigger found in a weakness wins.
pub const TIP_TRIGGERS: &[(&str, &str)] = &[
    (
        "responsibilities",
        "State your personal responsibility explicitly so the interviewer knows exactly what you owned.",
    ),
    (
        "results",
        "Close every answer with a measurable outcome such as time saved or errors reduced.",
    ),
    (
        "actions",
        "Walk through the concrete steps you took, and say \"I\" rather than \"we\" to make your contribution clear.",
    ),
    (
        "context",
        "Open with one or two sentences of background so the interviewer understands what was at stake.",
    ),
    (
        "specific",
        "Use concrete examples from your own experience instead of general statements.",
    ),
];

pub const GENERIC_TIPS: &[&str] = &[
    "Use the STAR method (Situation, Task, Action, Result) to structure your answers.",
    "Quantify your achievements with numbers and metrics wherever possible.",
    "Prepare 5-7 versatile stories from your experience that you can adapt to different questions.",
    "Record yourself answering mock interview questions to review your pacing and clarity.",
];

// ────────────────────────────────────────────────────────────────────────────
// Runtime tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("failed to read keyword tables from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("keyword tables are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("keyword table '{0}' must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarKeywords {
    pub situation: Vec<String>,
    pub task: Vec<String>,
    pub action: Vec<String>,
    pub result: Vec<String>,
}

impl Default for StarKeywords {
    fn default() -> Self {
        Self {
            situation: owned(SITUATION_KEYWORDS),
            task: owned(TASK_KEYWORDS),
            action: owned(ACTION_KEYWORDS),
            result: owned(RESULT_KEYWORDS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionPool {
    pub base: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
}

impl QuestionPool {
    fn from_static(base: &[&str], advanced: &[&str]) -> Self {
        Self {
            base: owned(base),
            advanced: owned(advanced),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionPools {
    pub technical: QuestionPool,
    pub behavioral: QuestionPool,
    pub hr: QuestionPool,
}

impl Default for QuestionPools {
    fn default() -> Self {
        Self {
            technical: QuestionPool::from_static(TECHNICAL_QUESTIONS, TECHNICAL_ADVANCED_QUESTIONS),
            behavioral: QuestionPool::from_static(
                BEHAVIORAL_QUESTIONS,
                BEHAVIORAL_ADVANCED_QUESTIONS,
            ),
            hr: QuestionPool::from_static(HR_QUESTIONS, HR_ADVANCED_QUESTIONS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningQuestions {
    pub technical: String,
    pub behavioral: String,
    pub hr: String,
    pub other: String,
}

impl Default for OpeningQuestions {
    fn default() -> Self {
        Self {
            technical: TECHNICAL_OPENING.to_string(),
            behavioral: BEHAVIORAL_OPENING.to_string(),
            hr: HR_OPENING.to_string(),
            other: OTHER_OPENING.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipTrigger {
    pub trigger: String,
    pub tip: String,
}

/// Every table the coach consults, loaded once and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachTables {
    pub star: StarKeywords,
    pub questions: QuestionPools,
    pub openings: OpeningQuestions,
    pub acknowledgments: Vec<String>,
    pub transitions: Vec<String>,
    pub tip_triggers: Vec<TipTrigger>,
    pub generic_tips: Vec<String>,
}

impl Default for CoachTables {
    fn default() -> Self {
        Self {
            star: StarKeywords::default(),
            questions: QuestionPools::default(),
            openings: OpeningQuestions::default(),
            acknowledgments: owned(ACKNOWLEDGMENTS),
            transitions: owned(TRANSITIONS),
            tip_triggers: TIP_TRIGGERS
                .iter()
                .map(|(trigger, tip)| TipTrigger {
                    trigger: trigger.to_string(),
                    tip: tip.to_string(),
                })
                .collect(),
            generic_tips: owned(GENERIC_TIPS),
        }
    }
}

impl CoachTables {
    /// Parses a (possibly partial) JSON override and validates it.
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        let tables: CoachTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Rejects tables the selectors would index into with a zero modulus.
    pub fn validate(&self) -> Result<(), TablesError> {
        let required: [(&'static str, bool); 9] = [
            ("questions.technical.base", self.questions.technical.base.is_empty()),
            ("questions.behavioral.base", self.questions.behavioral.base.is_empty()),
            ("questions.hr.base", self.questions.hr.base.is_empty()),
            ("openings.technical", self.openings.technical.trim().is_empty()),
            ("openings.behavioral", self.openings.behavioral.trim().is_empty()),
            ("openings.hr", self.openings.hr.trim().is_empty()),
            ("openings.other", self.openings.other.trim().is_empty()),
            ("acknowledgments", self.acknowledgments.is_empty()),
            ("transitions", self.transitions.is_empty()),
        ];
        match required.iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(TablesError::Empty(name)),
            None => Ok(()),
        }
    }

    /// Question pool for an interview type. `Other` borrows the behavioral pool.
    pub fn pool_for(&self, interview_type: InterviewType) -> &QuestionPool {
        match interview_type {
            InterviewType::Technical => &self.questions.technical,
            InterviewType::Behavioral | InterviewType::Other => &self.questions.behavioral,
            InterviewType::Hr => &self.questions.hr,
        }
    }

    /// Built-in base questions for an interview type, used when a configured
    /// base pool is empty.
    pub fn builtin_base_for(interview_type: InterviewType) -> &'static [&'static str] {
        match interview_type {
            InterviewType::Technical => TECHNICAL_QUESTIONS,
            InterviewType::Behavioral | InterviewType::Other => BEHAVIORAL_QUESTIONS,
            InterviewType::Hr => HR_QUESTIONS,
        }
    }

    pub fn opening_for(&self, interview_type: InterviewType) -> &str {
        match interview_type {
            InterviewType::Technical => &self.openings.technical,
            InterviewType::Behavioral => &self.openings.behavioral,
            InterviewType::Hr => &self.openings.hr,
            InterviewType::Other => &self.openings.other,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
