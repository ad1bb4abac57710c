//! Fixed summary text for the end-of-session report.

use crate::models::InterviewType;

/// Score band of an interview. The 8 and 6 thresholds are load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Strong,
    Solid,
    NeedsImprovement,
}

impl Band {
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= 8.0 {
            Band::Strong
        } else if overall_score >= 6.0 {
            Band::Solid
        } else {
            Band::NeedsImprovement
        }
    }
}

pub const STRONG_SUMMARY: &str = "Excellent performance! You gave well-structured answers backed by clear examples, and you described your experiences with confidence and self-awareness.";

pub const SOLID_SUMMARY: &str = "Good job! You showed solid interview skills with room to grow. Your answers were generally clear, though several would benefit from more structure and more specific examples.";

pub const NEEDS_IMPROVEMENT_SUMMARY: &str = "You have a foundation to build on, but there is clear room for improvement. Focus on structuring your answers with the STAR method and backing each one with a specific, concrete example.";

pub fn band_summary(band: Band) -> &'static str {
    match band {
        Band::Strong => STRONG_SUMMARY,
        Band::Solid => SOLID_SUMMARY,
        Band::NeedsImprovement => NEEDS_IMPROVEMENT_SUMMARY,
    }
}

/// Closing sentence for the interview type. `Other` has none.
pub fn type_sentence(interview_type: InterviewType, band: Band) -> Option<&'static str> {
    let sentence = match (interview_type, band) {
        (InterviewType::Technical, Band::Strong) => {
            "Your technical explanations were clear and grounded in real project experience."
        }
        (InterviewType::Technical, Band::Solid) => {
            "Your technical answers were sound; walking through your design decisions in more depth would make them stronger."
        }
        (InterviewType::Technical, Band::NeedsImprovement) => {
            "Practice explaining technical problems step by step and tie each explanation to a project you worked on."
        }
        (InterviewType::Behavioral, Band::Strong) => {
            "Your behavioral examples showed a consistent situation-to-result structure."
        }
        (InterviewType::Behavioral, Band::Solid) => {
            "Your behavioral examples were relevant; make the result of each story more explicit."
        }
        (InterviewType::Behavioral, Band::NeedsImprovement) => {
            "Prepare behavioral stories in advance so each one covers the situation, your task, your actions and the result."
        }
        (InterviewType::Hr, Band::Strong) => {
            "You communicated your motivation and fit for the role convincingly."
        }
        (InterviewType::Hr, Band::Solid) => {
            "You came across as a reasonable fit; connect your goals more directly to the role."
        }
        (InterviewType::Hr, Band::NeedsImprovement) => {
            "Spend time researching the company so you can explain clearly why you want this role."
        }
        (InterviewType::Other, _) => return None,
    };
    Some(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::from_score(10.0), Band::Strong);
        assert_eq!(Band::from_score(8.0), Band::Strong);
        assert_eq!(Band::from_score(7.9), Band::Solid);
        assert_eq!(Band::from_score(6.0), Band::Solid);
        assert_eq!(Band::from_score(5.9), Band::NeedsImprovement);
        assert_eq!(Band::from_score(1.0), Band::NeedsImprovement);
    }

    #[test]
    fn test_other_type_has_no_sentence() {
        assert!(type_sentence(InterviewType::Other, Band::Strong).is_none());
    }

    #[test]
    fn test_each_known_type_has_sentence_per_band() {
        for t in [InterviewType::Technical, InterviewType::Behavioral, InterviewType::Hr] {
            for b in [Band::Strong, Band::Solid, Band::NeedsImprovement] {
                assert!(type_sentence(t, b).is_some());
            }
        }
    }
}
