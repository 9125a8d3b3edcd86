//! Emotion labels, results and the raw-score normalization rule

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three emotion categories a journal entry can be sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmotionLabel {
    Positive = 0,
    Negative = 1,
    Neutral = 2,
}

/// Fixed presentation metadata attached to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub emoji: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Indexed by `EmotionLabel as usize`
static PRESENTATION: [Presentation; 3] = [
    Presentation {
        emoji: "😊",
        color: "text-emotions-happy",
        description: "Happy and positive! You seem to be having a great time!",
    },
    Presentation {
        emoji: "😢",
        color: "text-emotions-sad",
        description: "A bit sad or worried. That's okay - everyone has these feelings sometimes!",
    },
    Presentation {
        emoji: "😌",
        color: "text-emotions-calm",
        description: "Calm and balanced. You seem peaceful and content today!",
    },
];

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 3] = [
        EmotionLabel::Positive,
        EmotionLabel::Negative,
        EmotionLabel::Neutral,
    ];

    /// Canonical uppercase form
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Positive => "POSITIVE",
            EmotionLabel::Negative => "NEGATIVE",
            EmotionLabel::Neutral => "NEUTRAL",
        }
    }

    pub fn presentation(&self) -> &'static Presentation {
        &PRESENTATION[*self as usize]
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POSITIVE" => Ok(EmotionLabel::Positive),
            "NEGATIVE" => Ok(EmotionLabel::Negative),
            "NEUTRAL" => Ok(EmotionLabel::Neutral),
            _ => Err(format!(
                "Unknown emotion: '{}'. Valid emotions are: positive, negative, neutral",
                s
            )),
        }
    }
}

/// Outcome of classifying one piece of text.
///
/// Only `label` and `score` are stored; emoji, color and description are
/// looked up from the label so they can never disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredEmotion", into = "StoredEmotion")]
pub struct EmotionResult {
    label: EmotionLabel,
    score: f64,
}

impl EmotionResult {
    /// Build a result, clamping the score into `[0, 1]`
    pub fn new(label: EmotionLabel, score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        EmotionResult { label, score }
    }

    pub fn label(&self) -> EmotionLabel {
        self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn emoji(&self) -> &'static str {
        self.label.presentation().emoji
    }

    pub fn color(&self) -> &'static str {
        self.label.presentation().color
    }

    pub fn description(&self) -> &'static str {
        self.label.presentation().description
    }

    /// Confidence as a whole percentage
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// On-disk shape of an emotion: the presentation fields are written out for
/// readers of the JSON file and ignored when reading back.
#[derive(Serialize, Deserialize)]
struct StoredEmotion {
    label: EmotionLabel,
    score: f64,
    #[serde(default)]
    emoji: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    description: String,
}

impl From<StoredEmotion> for EmotionResult {
    fn from(stored: StoredEmotion) -> Self {
        EmotionResult::new(stored.label, stored.score)
    }
}

impl From<EmotionResult> for StoredEmotion {
    fn from(result: EmotionResult) -> Self {
        StoredEmotion {
            label: result.label,
            score: result.score,
            emoji: result.emoji().to_string(),
            color: result.color().to_string(),
            description: result.description().to_string(),
        }
    }
}

/// Raw label/score pair as produced by a sentiment backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSentiment {
    pub label: String,
    pub score: f64,
}

impl RawSentiment {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        RawSentiment {
            label: label.into(),
            score,
        }
    }
}

const POSITIVE_SENTINEL: &str = "label_1";
const NEGATIVE_SENTINEL: &str = "label_0";
const POSITIVE_THRESHOLD: f64 = 0.6;
const NEGATIVE_THRESHOLD: f64 = 0.4;

/// Map a backend's open-vocabulary output onto the three emotion labels.
///
/// Label evidence wins over score evidence. Negative results report
/// `1 - score` so the score is always confidence in the assigned label.
pub fn normalize(raw: &RawSentiment) -> EmotionResult {
    let label = raw.label.to_lowercase();
    let score = raw.score.clamp(0.0, 1.0);

    if label.contains("positive") || label == POSITIVE_SENTINEL {
        EmotionResult::new(EmotionLabel::Positive, score)
    } else if label.contains("negative") || label == NEGATIVE_SENTINEL {
        EmotionResult::new(EmotionLabel::Negative, 1.0 - score)
    } else if score > POSITIVE_THRESHOLD {
        EmotionResult::new(EmotionLabel::Positive, score)
    } else if score < NEGATIVE_THRESHOLD {
        EmotionResult::new(EmotionLabel::Negative, 1.0 - score)
    } else {
        EmotionResult::new(EmotionLabel::Neutral, score)
    }
}
