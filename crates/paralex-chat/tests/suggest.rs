use paralex_core::models::default_suggestions;
use paralex_chat::suggest::parse_suggestions;

fn four_valid() -> String {
    serde_json::json!([
        { "title": "Review the contract", "label": "Analysis", "action": "Analyze my contract." },
        { "title": "Explain a term", "label": "Terms", "action": "Explain 'consideration'." },
        { "title": "Find case law", "label": "Research", "action": "Summarize relevant case law." },
        { "title": "Next steps", "label": "Guidance", "action": "What should I do next?" }
    ])
    .to_string()
}

#[test]
fn four_complete_objects_parse() {
    let suggestions = parse_suggestions(&four_valid()).unwrap();
    assert_eq!(suggestions.len(), 4);
    assert_eq!(suggestions[0].title, "Review the contract");
}

#[test]
fn fenced_json_parses() {
    let fenced = format!("```json\n{}\n```", four_valid());
    assert!(parse_suggestions(&fenced).is_some());
}

#[test]
fn wrong_count_is_rejected() {
    let three = serde_json::json!([
        { "title": "a", "label": "b", "action": "c" },
        { "title": "a", "label": "b", "action": "c" },
        { "title": "a", "label": "b", "action": "c" }
    ])
    .to_string();
    assert!(parse_suggestions(&three).is_none());
}

#[test]
fn empty_field_is_rejected() {
    let with_empty = serde_json::json!([
        { "title": "a", "label": "b", "action": "c" },
        { "title": "", "label": "b", "action": "c" },
        { "title": "a", "label": "b", "action": "c" },
        { "title": "a", "label": "b", "action": "c" }
    ])
    .to_string();
    assert!(parse_suggestions(&with_empty).is_none());
}

#[test]
fn missing_field_is_rejected() {
    let missing = serde_json::json!([
        { "title": "a", "label": "b", "action": "c" },
        { "title": "a", "action": "c" },
        { "title": "a", "label": "b", "action": "c" },
        { "title": "a", "label": "b", "action": "c" }
    ])
    .to_string();
    assert!(parse_suggestions(&missing).is_none());
}

#[test]
fn prose_is_rejected() {
    assert!(parse_suggestions("Here are some ideas for you!").is_none());
}

#[test]
fn default_set_has_four_complete_entries() {
    let defaults = default_suggestions();
    assert_eq!(defaults.len(), 4);
    for s in &defaults {
        assert!(!s.title.is_empty());
        assert!(!s.label.is_empty());
        assert!(!s.action.is_empty());
    }
}
