//! Container format detection for uploaded audio.

/// Audio container of an upload, decided from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Webm,
    Ogg,
    Mp3,
    M4a,
}

impl AudioFormat {
    /// WAV goes upstream as-is; everything else is normalized to 16 kHz
    /// mono WAV first.
    pub fn needs_transcode(&self) -> bool {
        !matches!(self, AudioFormat::Wav)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Webm => "webm",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::M4a => "m4a",
        }
    }
}

/// Decide the container from the uploaded filename. Unknown or missing
/// extensions are treated as webm, the browser capture default.
pub fn container_format(filename: &str) -> AudioFormat {
    let ext = filename.rsplit_once('.').map(|(_, e)| e.to_lowercase());
    match ext.as_deref() {
        Some("wav") => AudioFormat::Wav,
        Some("ogg") | Some("oga") => AudioFormat::Ogg,
        Some("mp3") => AudioFormat::Mp3,
        Some("m4a") | Some("mp4") => AudioFormat::M4a,
        Some("webm") => AudioFormat::Webm,
        _ => AudioFormat::Webm,
    }
}
