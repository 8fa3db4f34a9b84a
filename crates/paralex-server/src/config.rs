use std::env;

use paralex_transcribe::{CorrectionMode, TranscribeOptions};

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Upstream credential. Optional at startup so the server can boot
    /// without it; each request that needs it reports a configuration
    /// error before any file or network I/O.
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub transcribe_model: String,
    pub correction: CorrectionMode,
    pub ffmpeg_bin: String,
    pub addr: String,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let correction_raw =
            env::var("PARALEX_CORRECTION").unwrap_or_else(|_| "fallback".to_string());
        let correction = CorrectionMode::parse(&correction_raw).ok_or_else(|| {
            eyre::eyre!("PARALEX_CORRECTION must be off, fallback, or strict, got {correction_raw:?}")
        })?;

        Ok(ServerConfig {
            api_key,
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| paralex_openai::client::DEFAULT_BASE_URL.to_string()),
            chat_model: env::var("PARALEX_CHAT_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            transcribe_model: env::var("PARALEX_TRANSCRIBE_MODEL")
                .unwrap_or_else(|_| "whisper-1".to_string()),
            correction,
            ffmpeg_bin: env::var("PARALEX_FFMPEG").unwrap_or_else(|_| "ffmpeg".to_string()),
            addr: env::var("PARALEX_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        })
    }

    pub fn transcribe_options(&self) -> TranscribeOptions {
        TranscribeOptions {
            model: self.transcribe_model.clone(),
            ffmpeg_bin: self.ffmpeg_bin.clone(),
        }
    }
}
