//! STAR Extractor: buckets the sentences of an answer into Situation, Task,
//! Action and Result by keyword matching.
//!
//! A sentence may land in several buckets. A bucket with no sentence is `None`.

use crate::coaching::tables::CoachTables;
use crate::models::StarBreakdown;

pub fn extract_star(tables: &CoachTables, answer: &str) -> StarBreakdown {
    let sentences = split_sentences(answer);

    StarBreakdown {
        situation: collect_matching(&sentences, &tables.star.situation),
        task: collect_matching(&sentences, &tables.star.task),
        action: collect_matching(&sentences, &tables.star.action),
        result: collect_matching(&sentences, &tables.star.result),
    }
}

/// Splits on `.`, `!` and `?`, dropping blank fragments.
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Joins every sentence containing one of `keywords` (case-insensitive) with ". ".
fn collect_matching(sentences: &[&str], keywords: &[String]) -> Option<String> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let matched: Vec<&str> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .copied()
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(format!("{}.", matched.join(". ")))
    }
}
