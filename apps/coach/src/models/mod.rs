pub mod interview;

pub use interview::{
    AnswerFeedback, Difficulty, Interview, InterviewResult, InterviewSettings, InterviewType,
    QuestionRecord, Skill, StarBreakdown, TurnOutcome,
};
