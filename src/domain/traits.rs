//! Core domain traits for dependency inversion.
//!
//! These traits define contracts between the CLI flows and the speech
//! engines without depending on concrete implementations. They enable:
//! - Testability via mock implementations
//! - Clear API boundaries between orchestration and engines

use anyhow::Result;

/// Speech-to-text transcription abstraction.
///
/// Implementors convert audio samples to text.
pub trait Transcription: Send + Sync {
    /// Transcribe audio samples to text.
    ///
    /// # Arguments
    /// * `samples` - Audio samples at 16kHz mono
    /// * `language` - Language code (e.g., "ja", "en", "auto")
    fn transcribe(&self, samples: &[f32], language: &str) -> Result<String>;
}

/// Text-to-speech synthesis abstraction.
///
/// Implementors turn text into encoded audio bytes.
pub trait Synthesis: Send + Sync {
    /// Synthesize speech for the given text.
    ///
    /// # Arguments
    /// * `text` - Text to speak
    /// * `voice` - Voice short name (e.g., "ja-JP-NanamiNeural")
    fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>>;
}
