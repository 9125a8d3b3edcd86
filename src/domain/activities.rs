//! Activity suggestions for each emotion

use crate::domain::emotion::EmotionLabel;
use std::str::FromStr;

/// How hard an activity is, shown as a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Fun,
}

impl Difficulty {
    pub fn badge(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Super Easy!",
            Difficulty::Medium => "Let's Try!",
            Difficulty::Fun => "So Fun!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

const fn activity(
    title: &'static str,
    emoji: &'static str,
    description: &'static str,
    difficulty: Difficulty,
) -> Activity {
    Activity {
        title,
        emoji,
        description,
        difficulty,
    }
}

static POSITIVE_ACTIVITIES: [Activity; 4] = [
    activity(
        "Dance Party",
        "💃",
        "Put on your favorite song and dance like nobody's watching!",
        Difficulty::Fun,
    ),
    activity(
        "Share Your Joy",
        "📞",
        "Call a friend or family member to share your happiness!",
        Difficulty::Easy,
    ),
    activity(
        "Creative Art Time",
        "🎨",
        "Draw, paint, or create something colorful and bright!",
        Difficulty::Medium,
    ),
    activity(
        "Gratitude List",
        "📝",
        "Write down 3 things that made you smile today!",
        Difficulty::Easy,
    ),
];

static NEGATIVE_ACTIVITIES: [Activity; 4] = [
    activity(
        "Cozy Corner Time",
        "🧸",
        "Snuggle with a blanket, pillow, or favorite stuffed animal.",
        Difficulty::Easy,
    ),
    activity(
        "Deep Breathing",
        "🫁",
        "Take 5 slow, deep breaths. Imagine blowing up a big balloon!",
        Difficulty::Easy,
    ),
    activity(
        "Talk it Out",
        "💬",
        "Share your feelings with someone you trust and care about.",
        Difficulty::Medium,
    ),
    activity(
        "Gentle Movement",
        "🚶",
        "Take a slow walk outside or do some gentle stretches.",
        Difficulty::Medium,
    ),
];

static NEUTRAL_ACTIVITIES: [Activity; 4] = [
    activity(
        "Try Something New",
        "🎲",
        "Learn a new word, try a new game, or explore a new place!",
        Difficulty::Medium,
    ),
    activity(
        "Help Someone",
        "🤝",
        "Do something kind for a family member, friend, or pet!",
        Difficulty::Easy,
    ),
    activity(
        "Nature Adventure",
        "🌳",
        "Go outside and look for interesting bugs, leaves, or clouds!",
        Difficulty::Fun,
    ),
    activity(
        "Read Together",
        "📚",
        "Pick a fun book and read with someone special!",
        Difficulty::Easy,
    ),
];

pub fn activities_for(label: EmotionLabel) -> &'static [Activity] {
    match label {
        EmotionLabel::Positive => &POSITIVE_ACTIVITIES,
        EmotionLabel::Negative => &NEGATIVE_ACTIVITIES,
        EmotionLabel::Neutral => &NEUTRAL_ACTIVITIES,
    }
}

/// Look up activities by label name; unrecognized names get the calm set
pub fn activities_for_name(name: &str) -> &'static [Activity] {
    let label = EmotionLabel::from_str(name).unwrap_or(EmotionLabel::Neutral);
    activities_for(label)
}
