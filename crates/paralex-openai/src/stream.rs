//! Streamed chat completions, decoded into token and tool-call events.

use futures::StreamExt;

use crate::error::OpenAiError;
use crate::models::StreamChunk;
use crate::sse::{is_done, SseDecoder};

/// A single decoded event from a streamed completion.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A fragment of assistant text.
    Token(String),
    /// An incremental fragment of a model-initiated tool call. The id and
    /// name arrive with the first fragment for a given index; the argument
    /// JSON accumulates across fragments.
    ToolCallDelta {
        index: usize,
        id: Option<String>,
        name: Option<String>,
        arguments_fragment: String,
    },
    /// The model finished the turn; carries the upstream finish reason
    /// (`stop`, `tool_calls`, ...).
    Finished(Option<String>),
}

/// A live streamed completion. Dropping it drops the upstream connection,
/// which is the only cancellation the hosted API offers.
pub struct ChatStream {
    body: futures::stream::BoxStream<'static, reqwest::Result<bytes::Bytes>>,
    decoder: SseDecoder,
    queued: std::collections::VecDeque<StreamEvent>,
    done: bool,
}

impl ChatStream {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        ChatStream {
            body: response.bytes_stream().boxed(),
            decoder: SseDecoder::new(),
            queued: std::collections::VecDeque::new(),
            done: false,
        }
    }

    /// Next decoded event, or `None` once the stream has ended.
    pub async fn next_event(&mut self) -> Result<Option<StreamEvent>, OpenAiError> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Ok(Some(event));
            }
            if self.done {
                return Ok(None);
            }

            match self.body.next().await {
                Some(chunk) => {
                    let chunk = chunk.map_err(OpenAiError::Http)?;
                    let text = String::from_utf8_lossy(&chunk);
                    for payload in self.decoder.feed(&text) {
                        if is_done(&payload) {
                            self.done = true;
                            break;
                        }
                        self.decode_payload(&payload)?;
                    }
                }
                None => {
                    self.done = true;
                }
            }
        }
    }

    fn decode_payload(&mut self, payload: &str) -> Result<(), OpenAiError> {
        let chunk: StreamChunk = serde_json::from_str(payload)
            .map_err(|e| OpenAiError::Parse(format!("bad stream chunk: {e}")))?;

        for choice in chunk.choices {
            if let Some(content) = choice.delta.content {
                if !content.is_empty() {
                    self.queued.push_back(StreamEvent::Token(content));
                }
            }
            if let Some(tool_calls) = choice.delta.tool_calls {
                for tc in tool_calls {
                    let (name, arguments_fragment) = match tc.function {
                        Some(f) => (f.name, f.arguments.unwrap_or_default()),
                        None => (None, String::new()),
                    };
                    self.queued.push_back(StreamEvent::ToolCallDelta {
                        index: tc.index,
                        id: tc.id,
                        name,
                        arguments_fragment,
                    });
                }
            }
            if choice.finish_reason.is_some() {
                self.queued
                    .push_back(StreamEvent::Finished(choice.finish_reason));
            }
        }
        Ok(())
    }
}
