use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("no audio data in upload")]
    EmptyUpload,

    #[error("temp file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio transcoding failed: {0}")]
    Transcode(String),

    #[error(transparent)]
    Upstream(#[from] paralex_openai::OpenAiError),
}
