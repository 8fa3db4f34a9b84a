use std::path::Path;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::debug;

use crate::error::OpenAiError;
use crate::models::{ChatCompletion, ChatRequest, Transcription};
use crate::stream::ChatStream;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible API. Cheap to clone; holds the bearer
/// credential and a connection pool.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str) -> Result<Self, OpenAiError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, OpenAiError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| OpenAiError::Parse(format!("invalid api key header: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(OpenAiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Buffered chat completion.
    pub async fn chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatCompletion, OpenAiError> {
        debug!(model = %request.model, messages = request.messages.len(), "chat completion");

        let response = self
            .http
            .post(self.url("/chat/completions"))
            .json(request)
            .send()
            .await?;

        let response = check_status(response).await?;
        response
            .json::<ChatCompletion>()
            .await
            .map_err(|e| OpenAiError::Parse(format!("bad completion body: {e}")))
    }

    /// Streamed chat completion. `stream: true` is forced on the request.
    pub async fn chat_completion_stream(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatStream, OpenAiError> {
        let mut request = request.clone();
        request.stream = Some(true);

        debug!(model = %request.model, messages = request.messages.len(), "streamed chat completion");

        let response = self
            .http
            .post(self.url("/chat/completions"))
            .json(&request)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(ChatStream::new(response))
    }

    /// Transcribe an audio file. The upstream infers the container from the
    /// filename, so the extension must match the actual format.
    pub async fn transcribe_file(
        &self,
        path: &Path,
        model: &str,
    ) -> Result<String, OpenAiError> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        debug!(model, %filename, bytes = bytes.len(), "transcription request");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", model.to_string());

        let response = self
            .http
            .post(self.url("/audio/transcriptions"))
            .multipart(form)
            .send()
            .await?;

        let response = check_status(response).await?;
        let transcription = response
            .json::<Transcription>()
            .await
            .map_err(|e| OpenAiError::Parse(format!("bad transcription body: {e}")))?;

        Ok(transcription.text)
    }
}

/// Convert a non-success response into `Upstream`, capturing the body for
/// server-side logs.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OpenAiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OpenAiError::Upstream {
        status: status.as_u16(),
        body,
    })
}
