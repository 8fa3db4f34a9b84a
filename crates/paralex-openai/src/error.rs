use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream returned a non-success status. The body is kept for
    /// server-side logs and must not be forwarded to clients verbatim.
    #[error("upstream API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("failed to parse upstream response: {0}")]
    Parse(String),

    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),
}
