//! Incremental Server-Sent Events decoding for streamed chat completions.
//!
//! The upstream emits `data:` lines carrying JSON chunks, separated by
//! blank lines, terminated by the `data: [DONE]` sentinel. Network chunks
//! split lines arbitrarily, so the decoder buffers until a full line is
//! available.

/// Line-buffered SSE decoder. Feed raw text as it arrives; collect the
/// completed `data` payloads.
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: String,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk of the response body, returning any `data` payloads
    /// whose lines completed within it. Comment lines and non-`data`
    /// fields are skipped; the `[DONE]` sentinel is returned as-is so the
    /// caller can terminate.
    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        self.pending.push_str(chunk);

        let mut payloads = Vec::new();
        while let Some(newline) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=newline).collect();
            let line = line.trim_end_matches(['\n', '\r']);

            if line.is_empty() || line.starts_with(':') {
                continue;
            }
            if let Some((field, value)) = parse_field(line) {
                if field == "data" {
                    payloads.push(value.to_string());
                }
            }
        }
        payloads
    }
}

/// Split an SSE line into (field, value), stripping the single optional
/// space after the colon.
fn parse_field(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let field = &line[..colon];
    let value = line[colon + 1..].strip_prefix(' ').unwrap_or(&line[colon + 1..]);
    Some((field, value))
}

/// Whether a payload is the end-of-stream sentinel.
pub fn is_done(payload: &str) -> bool {
    payload.trim() == "[DONE]"
}
