/// Export container formats
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Container requested by the caller when exporting a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Wav,
    Flac,
    Ogg,
    Mp3,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Wav => "wav",
            ExportFormat::Flac => "flac",
            ExportFormat::Ogg => "ogg",
            ExportFormat::Mp3 => "mp3",
        }
    }

    /// Whether an encoder for this format is compiled into this build
    pub fn is_available(&self) -> bool {
        match self {
            ExportFormat::Wav => true,
            ExportFormat::Flac => cfg!(feature = "flac"),
            ExportFormat::Ogg => cfg!(feature = "vorbis"),
            ExportFormat::Mp3 => false,
        }
    }

    /// Container actually written when this one is requested
    ///
    /// Formats without a compiled-in encoder export as WAV.
    pub fn effective(self) -> Self {
        if self.is_available() {
            self
        } else {
            ExportFormat::Wav
        }
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Wav
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wav" | "wave" => Ok(Self::Wav),
            "flac" => Ok(Self::Flac),
            "ogg" | "vorbis" => Ok(Self::Ogg),
            "mp3" => Ok(Self::Mp3),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
