//! paralex-transcribe
//!
//! The audio-transcription pipeline: scoped temp-file handling, ffmpeg
//! transcoding to the sample rate the speech API wants, upstream
//! forwarding, and the optional grammar-correction stage.

pub mod correction;
pub mod error;
pub mod format;

pub use correction::{apply_correction, CorrectionMode};
pub use error::TranscribeError;
pub use format::{container_format, AudioFormat};

use std::path::{Path, PathBuf};

use paralex_openai::OpenAiClient;
use tempfile::TempDir;
use tracing::{info, warn};

/// Pipeline settings, owned by the caller's configuration layer.
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    /// Upstream transcription model, e.g. `whisper-1`.
    pub model: String,
    /// Encoder binary to invoke for non-WAV uploads.
    pub ffmpeg_bin: String,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        TranscribeOptions {
            model: "whisper-1".to_string(),
            ffmpeg_bin: "ffmpeg".to_string(),
        }
    }
}

/// Transcribe one uploaded audio blob.
///
/// Writes the upload into a scoped temp directory, transcodes to 16 kHz
/// mono WAV when the container needs it, and forwards the result upstream.
/// The temp directory (original and transcoded file alike) is removed on
/// every exit path; leaked temp files would otherwise accumulate
/// unboundedly under load.
///
/// An empty transcript is a valid result, not an error.
pub async fn transcribe_upload(
    client: &OpenAiClient,
    options: &TranscribeOptions,
    filename: &str,
    bytes: &[u8],
) -> Result<String, TranscribeError> {
    if bytes.is_empty() {
        return Err(TranscribeError::EmptyUpload);
    }

    let format = container_format(filename);
    let workdir = TempDir::with_prefix("paralex-audio-")?;

    let input_path = workdir.path().join(format!("input.{}", format.extension()));
    tokio::fs::write(&input_path, bytes).await?;

    let audio_path = if format.needs_transcode() {
        transcode_to_wav(&options.ffmpeg_bin, &input_path, workdir.path()).await?
    } else {
        input_path
    };

    let text = client.transcribe_file(&audio_path, &options.model).await?;

    info!(
        filename,
        upload_bytes = bytes.len(),
        transcript_len = text.len(),
        "transcription complete"
    );

    Ok(text)
    // workdir dropped here; same on every error return above.
}

/// Run the upload through ffmpeg: single channel, 16 kHz, WAV container.
async fn transcode_to_wav(
    ffmpeg_bin: &str,
    input: &Path,
    workdir: &Path,
) -> Result<PathBuf, TranscribeError> {
    let output = workdir.join("output.wav");

    let result = tokio::process::Command::new(ffmpeg_bin)
        .arg("-i")
        .arg(input)
        .args(["-ar", "16000", "-ac", "1", "-y"])
        .arg(&output)
        .output()
        .await
        .map_err(|e| TranscribeError::Transcode(format!("failed to run {ffmpeg_bin}: {e}")))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        warn!(%stderr, "ffmpeg exited with failure");
        return Err(TranscribeError::Transcode(format!(
            "{ffmpeg_bin} exited with {}",
            result.status
        )));
    }

    if !output.exists() {
        return Err(TranscribeError::Transcode(
            "encoder reported success but produced no output".to_string(),
        ));
    }

    Ok(output)
}
