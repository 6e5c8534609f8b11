use bytes::Bytes;

/// Audio container format, inferred from the uploaded filename. Anything
/// that is neither `.wav` nor `.mp3` is assumed to be browser-recorded webm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mpeg,
    Webm,
}

impl AudioFormat {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".wav") {
            Self::Wav
        } else if lower.ends_with(".mp3") {
            Self::Mpeg
        } else {
            Self::Webm
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mpeg => "audio/mpeg",
            Self::Webm => "audio/webm",
        }
    }
}

/// Raw audio bytes plus the content type the speech API should see.
/// Consumed exactly once per match attempt.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub data: Bytes,
    pub format: AudioFormat,
}

impl AudioPayload {
    pub fn new(data: Bytes, format: AudioFormat) -> Self {
        Self { data, format }
    }

    pub fn from_upload(filename: &str, data: Vec<u8>) -> Self {
        Self {
            data: data.into(),
            format: AudioFormat::from_filename(filename),
        }
    }
}
