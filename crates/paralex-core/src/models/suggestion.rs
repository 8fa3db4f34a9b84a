use serde::{Deserialize, Serialize};

/// A follow-up action offered to the user after an assistant turn.
///
/// `title` is the button text, `label` a short description, `action` the
/// message submitted when the suggestion is chosen. The current set is
/// always replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub label: String,
    pub action: String,
}

impl Suggestion {
    pub fn new(
        title: impl Into<String>,
        label: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Suggestion {
            title: title.into(),
            label: label.into(),
            action: action.into(),
        }
    }
}

/// The fixed starter set, shown before any conversation exists and used as
/// the fallback whenever the model's suggestions are unusable.
pub fn default_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            "What are my legal rights?",
            "Understand your position",
            "What are my legal rights in this case?",
        ),
        Suggestion::new(
            "Ask about contract law",
            "Contract law basics",
            "Explain contract law principles.",
        ),
        Suggestion::new(
            "How to file a lawsuit?",
            "Filing procedure",
            "How do I file a lawsuit?",
        ),
        Suggestion::new(
            "Get help with legal terms",
            "Term explanation",
            "Explain the legal term 'breach of contract'.",
        ),
    ]
}
