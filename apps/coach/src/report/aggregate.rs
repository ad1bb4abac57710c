//! Report Aggregator: overall score, recurring strengths and weaknesses,
//! summary paragraph and improvement tips.

use crate::coaching::tables::CoachTables;
use crate::models::{Interview, InterviewType};
use crate::report::skills::round1;
use crate::report::templates::{band_summary, type_sentence, Band};

pub const MAX_STRENGTHS: usize = 5;
pub const MAX_WEAKNESSES: usize = 4;
pub const MAX_TIPS: usize = 5;

/// Score used when no answer has been rated.
const NEUTRAL_SCORE: f64 = 5.0;

/// Mean of all ratings, one decimal.
pub fn overall_score(interview: &Interview) -> f64 {
    let ratings: Vec<f64> = interview
        .rated()
        .map(|(_, feedback)| f64::from(feedback.rating))
        .collect();

    if ratings.is_empty() {
        return NEUTRAL_SCORE;
    }
    round1(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Most frequent strings first. Ties keep first-seen order.
pub fn rank_by_frequency<'a>(items: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }

    // sort_by is stable, so equal counts keep insertion order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(s, _)| s.to_string())
        .collect()
}

pub fn top_strengths(interview: &Interview) -> Vec<String> {
    rank_by_frequency(
        interview
            .rated()
            .flat_map(|(_, f)| f.strengths.iter().map(String::as_str)),
        MAX_STRENGTHS,
    )
}

pub fn top_weaknesses(interview: &Interview) -> Vec<String> {
    rank_by_frequency(
        interview
            .rated()
            .flat_map(|(_, f)| f.improvements.iter().map(String::as_str)),
        MAX_WEAKNESSES,
    )
}

/// Band paragraph followed by the interview-type sentence, if any.
pub fn build_summary(overall_score: f64, interview_type: InterviewType) -> String {
    let band = Band::from_score(overall_score);
    match type_sentence(interview_type, band) {
        Some(sentence) => format!("{} {}", band_summary(band), sentence),
        None => band_summary(band).to_string(),
    }
}

/// Maps each weakness to an actionable tip, then backfills generic tips up to five.
pub fn build_tips(tables: &CoachTables, weaknesses: &[String]) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();

    let mapped = weaknesses.iter().map(|weakness| {
        let lower = weakness.to_lowercase();
        tables
            .tip_triggers
            .iter()
            .find(|t| lower.contains(&t.trigger.to_lowercase()))
            .map(|t| t.tip.clone())
            .unwrap_or_else(|| weakness.clone())
    });

    for tip in mapped.chain(tables.generic_tips.iter().cloned()) {
        if tips.len() >= MAX_TIPS {
            break;
        }
        if !tips.contains(&tip) {
            tips.push(tip);
        }
    }
    tips
}
