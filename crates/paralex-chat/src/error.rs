use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Upstream(#[from] paralex_openai::OpenAiError),

    #[error("model invoked unknown tool: {0}")]
    UnknownTool(String),

    #[error("tool arguments did not match the declared schema: {0}")]
    BadToolArguments(String),

    #[error("model finished a tool turn without a complete tool call")]
    IncompleteToolCall,
}
