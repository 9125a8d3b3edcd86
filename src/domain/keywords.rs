//! Keyword heuristic used when no sentiment model is available

use crate::domain::emotion::{EmotionLabel, EmotionResult};

pub const POSITIVE_WORDS: [&str; 10] = [
    "happy",
    "good",
    "great",
    "awesome",
    "fun",
    "love",
    "excited",
    "amazing",
    "wonderful",
    "fantastic",
];

pub const NEGATIVE_WORDS: [&str; 10] = [
    "sad",
    "bad",
    "angry",
    "upset",
    "worried",
    "scared",
    "hurt",
    "lonely",
    "frustrated",
    "disappointed",
];

const BASE_SCORE: f64 = 0.5;
const PER_WORD: f64 = 0.1;
const MAX_SCORE: f64 = 0.8;
const NEUTRAL_SCORE: f64 = 0.6;

/// How many words of each list appear in a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordTally {
    pub positive: usize,
    pub negative: usize,
}

impl KeywordTally {
    /// Count list words appearing anywhere in `text`, case-insensitively.
    /// Matching is plain substring search, so "fun" also matches "funny".
    /// Each list word counts at most once.
    pub fn count(text: &str) -> Self {
        let lower = text.to_lowercase();
        KeywordTally {
            positive: POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count(),
            negative: NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count(),
        }
    }
}

/// Classify text by counting emotion words. Never fails.
pub fn classify_by_keywords(text: &str) -> EmotionResult {
    let tally = KeywordTally::count(text);

    if tally.positive > tally.negative {
        EmotionResult::new(EmotionLabel::Positive, scaled(tally.positive))
    } else if tally.negative > tally.positive {
        EmotionResult::new(EmotionLabel::Negative, scaled(tally.negative))
    } else {
        EmotionResult::new(EmotionLabel::Neutral, NEUTRAL_SCORE)
    }
}

fn scaled(count: usize) -> f64 {
    (BASE_SCORE + PER_WORD * count as f64).min(MAX_SCORE)
}
