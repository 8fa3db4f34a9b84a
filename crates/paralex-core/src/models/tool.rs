use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three fixed legal-assistant tools the model may invoke.
///
/// Wire names are camelCase to match the tool definitions sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolName {
    AnalyzeDocument,
    SummarizeCaseLaw,
    ExplainLegalTerm,
}

impl ToolName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::AnalyzeDocument => "analyzeDocument",
            ToolName::SummarizeCaseLaw => "summarizeCaseLaw",
            ToolName::ExplainLegalTerm => "explainLegalTerm",
        }
    }

    /// Human-readable description, used in the tool definitions sent to
    /// the model.
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::AnalyzeDocument => "Analyze a legal document and provide insights.",
            ToolName::SummarizeCaseLaw => {
                "Summarize case law based on a provided case name or details."
            }
            ToolName::ExplainLegalTerm => "Explain a specific legal term or concept.",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyzeDocument" => Ok(ToolName::AnalyzeDocument),
            "summarizeCaseLaw" => Ok(ToolName::SummarizeCaseLaw),
            "explainLegalTerm" => Ok(ToolName::ExplainLegalTerm),
            other => Err(CoreError::UnknownTool(other.to_string())),
        }
    }
}
