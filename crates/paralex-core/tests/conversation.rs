use paralex_core::models::{ChatRole, Conversation, MessageContent, ToolName};

#[test]
fn messages_append_in_turn_order() {
    let mut conversation = Conversation::new();
    assert!(conversation.is_empty());

    conversation.push_user("What are my legal rights?");
    conversation.push_assistant("Let me walk you through them.");
    conversation.push_user("Thanks.");

    let texts: Vec<&str> = conversation
        .messages()
        .iter()
        .filter_map(|m| m.text())
        .collect();
    assert_eq!(
        texts,
        vec![
            "What are my legal rights?",
            "Let me walk you through them.",
            "Thanks."
        ]
    );
}

#[test]
fn tool_exchange_appends_call_then_result_with_same_id() {
    let mut conversation = Conversation::new();
    conversation.push_tool_exchange(
        "call_7",
        ToolName::AnalyzeDocument,
        serde_json::json!({ "documentText": "This agreement..." }),
        "The analysis of the document is now displayed on the screen.",
    );

    assert_eq!(conversation.len(), 2);
    let messages = conversation.messages();

    assert_eq!(messages[0].role, ChatRole::Assistant);
    let MessageContent::ToolCall { id: call_id, name, .. } = &messages[0].content else {
        panic!("expected a tool call record");
    };
    assert_eq!(call_id, "call_7");
    assert_eq!(*name, ToolName::AnalyzeDocument);

    assert_eq!(messages[1].role, ChatRole::Tool);
    let MessageContent::ToolResult { id: result_id, .. } = &messages[1].content else {
        panic!("expected a tool result record");
    };
    assert_eq!(result_id, "call_7");
}

#[test]
fn conversation_serializes_round_trip() {
    let mut conversation = Conversation::new();
    conversation.push_user("Hello");
    conversation.push_assistant("Hi! How can I help with your legal needs?");

    let json = serde_json::to_string(&conversation).unwrap();
    let back: Conversation = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, conversation.id);
    assert_eq!(back.len(), 2);
    assert_eq!(back.messages()[0].text(), Some("Hello"));
}

#[test]
fn tool_names_use_wire_spelling() {
    assert_eq!(
        serde_json::to_value(ToolName::ExplainLegalTerm).unwrap(),
        "explainLegalTerm"
    );
    assert_eq!(
        "analyzeDocument".parse::<ToolName>().unwrap(),
        ToolName::AnalyzeDocument
    );
    assert!("draftContract".parse::<ToolName>().is_err());
}
