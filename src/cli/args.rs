//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Arguments for the transcription binary.
#[derive(Parser, Debug)]
#[command(name = "koe-stt", about = "Transcribe Japanese speech to text", version)]
pub struct SttArgs {
    /// Audio file to transcribe (WAV, or WebM/Ogg converted via ffmpeg)
    pub input: PathBuf,

    /// Model size (tiny, base, small, medium, large-v2, large-v3) or a path
    /// to a ggml .bin file. Overrides WHISPER_MODEL and the config file.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Spoken language as an ISO 639-1 code
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain transcription text
    #[default]
    Text,
    /// JSON object with transcription metadata
    Json,
}

/// Arguments for the synthesis binary.
#[derive(Parser, Debug)]
#[command(name = "koe-tts", about = "Synthesize Japanese speech from text", version)]
pub struct TtsArgs {
    /// Text to speak
    #[arg(long, required_unless_present = "list_voices")]
    pub text: Option<String>,

    /// Neural voice name (default: ja-JP-NanamiNeural)
    #[arg(long)]
    pub voice: Option<String>,

    /// File to write the audio to
    #[arg(long, required_unless_present = "list_voices")]
    pub output: Option<PathBuf>,

    /// List the available Japanese voices and exit
    #[arg(long)]
    pub list_voices: bool,
}
