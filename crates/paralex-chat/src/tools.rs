//! The three fixed legal-assistant tools.
//!
//! Every resolution is deterministic placeholder content keyed on the tool
//! name and arguments. These are deliberate stub seams: real document
//! analysis or case-law research can replace the bodies without touching
//! the calling contract.

use paralex_core::models::ToolName;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ChatError;

/// Upper bound on how much of a submitted document the rendering echoes.
const DOCUMENT_EXCERPT_CHARS: usize = 600;

/// A renderable tool outcome, sent to the client in place of streamed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRendering {
    pub tool: ToolName,
    pub title: String,
    pub body: String,
}

/// A resolved tool call: what goes into the history record and what goes
/// to the screen.
#[derive(Debug, Clone)]
pub struct ToolResolution {
    pub name: ToolName,
    pub arguments: Value,
    pub record_result: String,
    pub rendering: ToolRendering,
}

/// Declared parameter schemas for the tool definitions sent upstream.
pub fn tool_definitions() -> Vec<paralex_openai::ToolDefinition> {
    [
        (
            ToolName::AnalyzeDocument,
            json!({
                "type": "object",
                "properties": {
                    "documentText": { "type": "string" }
                },
                "required": ["documentText"]
            }),
        ),
        (
            ToolName::SummarizeCaseLaw,
            json!({
                "type": "object",
                "properties": {
                    "caseName": { "type": "string" }
                },
                "required": ["caseName"]
            }),
        ),
        (
            ToolName::ExplainLegalTerm,
            json!({
                "type": "object",
                "properties": {
                    "term": { "type": "string" }
                },
                "required": ["term"]
            }),
        ),
    ]
    .into_iter()
    .map(|(name, parameters)| {
        paralex_openai::ToolDefinition::function(name.as_str(), name.description(), parameters)
    })
    .collect()
}

/// Resolve a model-initiated tool call locally.
pub fn resolve_tool_call(name: &str, arguments: &str) -> Result<ToolResolution, ChatError> {
    let name: ToolName = name
        .parse()
        .map_err(|_| ChatError::UnknownTool(name.to_string()))?;

    let arguments: Value = serde_json::from_str(arguments)
        .map_err(|e| ChatError::BadToolArguments(e.to_string()))?;

    let resolution = match name {
        ToolName::AnalyzeDocument => {
            let document_text = required_string(&arguments, "documentText")?;
            ToolResolution {
                name,
                record_result: "The analysis of the document is now displayed on the screen."
                    .to_string(),
                rendering: ToolRendering {
                    tool: name,
                    title: "Document analysis".to_string(),
                    body: format!(
                        "Placeholder analysis of the submitted document:\n\n{}",
                        excerpt(&document_text, DOCUMENT_EXCERPT_CHARS)
                    ),
                },
                arguments,
            }
        }
        ToolName::SummarizeCaseLaw => {
            let case_name = required_string(&arguments, "caseName")?;
            ToolResolution {
                name,
                record_result: format!("A summary of the case law for {case_name} is now displayed."),
                rendering: ToolRendering {
                    tool: name,
                    title: format!("Case summary: {case_name}"),
                    body: format!("Placeholder summary of the case law for {case_name}."),
                },
                arguments,
            }
        }
        ToolName::ExplainLegalTerm => {
            let term = required_string(&arguments, "term")?;
            let explanation = format!("**{term}**: This is a placeholder explanation for the term.");
            ToolResolution {
                name,
                record_result: explanation.clone(),
                rendering: ToolRendering {
                    tool: name,
                    title: format!("Legal term: {term}"),
                    body: explanation,
                },
                arguments,
            }
        }
    };

    Ok(resolution)
}

fn required_string(arguments: &Value, field: &str) -> Result<String, ChatError> {
    arguments
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ChatError::BadToolArguments(format!("missing string field `{field}`")))
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}
