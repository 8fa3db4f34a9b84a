use paralex_chat::wire::{to_wire_messages, SYSTEM_PROMPT};
use paralex_core::models::{Conversation, ToolName};

#[test]
fn system_prompt_comes_first() {
    let mut conversation = Conversation::new();
    conversation.push_user("Hello");

    let wire = to_wire_messages(&conversation);
    assert_eq!(wire.len(), 2);
    assert_eq!(wire[0].role, "system");
    assert_eq!(wire[0].content.as_deref(), Some(SYSTEM_PROMPT));
    assert_eq!(wire[1].role, "user");
    assert_eq!(wire[1].content.as_deref(), Some("Hello"));
}

#[test]
fn tool_exchange_round_trips_to_wire_form() {
    let mut conversation = Conversation::new();
    conversation.push_user("Explain breach of contract");
    conversation.push_tool_exchange(
        "call_42",
        ToolName::ExplainLegalTerm,
        serde_json::json!({ "term": "breach of contract" }),
        "**breach of contract**: This is a placeholder explanation for the term.",
    );

    let wire = to_wire_messages(&conversation);
    // system + user + assistant tool call + tool result
    assert_eq!(wire.len(), 4);

    let call = &wire[2];
    assert_eq!(call.role, "assistant");
    assert!(call.content.is_none());
    let tool_calls = call.tool_calls.as_ref().unwrap();
    assert_eq!(tool_calls[0].id, "call_42");
    assert_eq!(tool_calls[0].function.name, "explainLegalTerm");

    let result = &wire[3];
    assert_eq!(result.role, "tool");
    assert_eq!(result.tool_call_id.as_deref(), Some("call_42"));
    assert!(result.content.as_deref().unwrap().contains("breach of contract"));
}

#[test]
fn serialized_tool_call_declares_function_type() {
    let mut conversation = Conversation::new();
    conversation.push_tool_exchange(
        "call_1",
        ToolName::SummarizeCaseLaw,
        serde_json::json!({ "caseName": "Roe v. Wade" }),
        "A summary of the case law for Roe v. Wade is now displayed.",
    );

    let wire = to_wire_messages(&conversation);
    let json = serde_json::to_value(&wire[1]).unwrap();
    assert_eq!(json["tool_calls"][0]["type"], "function");
    assert_eq!(json["tool_calls"][0]["function"]["name"], "summarizeCaseLaw");
}
