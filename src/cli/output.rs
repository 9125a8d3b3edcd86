//! Output formatting utilities

use crate::domain::{encouragement, Activity, EmotionResult, JournalEntry};

/// Format an analyzed emotion for display
pub fn format_analysis(text: &str, emotion: &EmotionResult) -> String {
    format!(
        "{}  {} ({}% sure)\n{}\n{}\n",
        emotion.emoji(),
        emotion.label(),
        emotion.percent(),
        emotion.description(),
        encouragement(text.chars().count())
    )
}

/// Format activity suggestions for display
pub fn format_activities(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "No activities found".to_string();
    }

    let mut output = String::from("Fun activities for you:\n");
    for activity in activities {
        output.push_str(&format!(
            "  {} {} [{}]\n      {}\n",
            activity.emoji,
            activity.title,
            activity.difficulty.badge(),
            activity.description
        ));
    }
    output
}

/// Format saved entries for display
pub fn format_history(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {:<8}  {}\n",
            entry.timestamp.format("%d-%m-%Y %H:%M"),
            entry.emotion.emoji(),
            entry.emotion.label(),
            entry.content
        ));
    }
    output
}
