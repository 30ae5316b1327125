//! Mock implementations for unit testing.
//!
//! These mocks implement the core traits from `crate::domain::traits` to
//! enable testing without a Whisper model or network access.

use crate::domain::traits::{Synthesis, Transcription};
use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock transcription engine for testing.
///
/// Returns predefined text instead of actually transcribing, and counts
/// how many times it was invoked.
pub struct MockTranscription {
    result: Mutex<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockTranscription {
    /// Create a mock that returns the given text.
    pub fn returning(text: &str) -> Self {
        Self {
            result: Mutex::new(text.to_string()),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose transcribe() always fails.
    pub fn failing() -> Self {
        Self {
            result: Mutex::new(String::new()),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Set the text to return on next transcribe().
    pub fn set_result(&self, text: &str) {
        *self.result.lock().unwrap() = text.to_string();
    }

    /// Get how many times transcribe() was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transcription for MockTranscription {
    fn transcribe(&self, _samples: &[f32], _language: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("transcription failed");
        }
        Ok(self.result.lock().unwrap().clone())
    }
}

/// Mock synthesis engine for testing.
///
/// Returns predefined audio bytes and records every (text, voice) request.
pub struct MockSynthesis {
    audio: Vec<u8>,
    fail: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockSynthesis {
    /// Create a mock that returns the given audio bytes.
    pub fn returning(audio: &[u8]) -> Self {
        Self {
            audio: audio.to_vec(),
            fail: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose synthesize() always fails.
    pub fn failing() -> Self {
        Self {
            audio: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Get how many times synthesize() was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Get the recorded (text, voice) pairs in call order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Synthesis for MockSynthesis {
    fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), voice.to_string()));
        if self.fail {
            anyhow::bail!("synthesis failed");
        }
        Ok(self.audio.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_transcription_returns_text() {
        let transcriber = MockTranscription::returning("hello world");
        let result = transcriber.transcribe(&[], "en").unwrap();
        assert_eq!(result, "hello world");
    }

    #[test]
    fn test_mock_transcription_counts_calls() {
        let transcriber = MockTranscription::returning("test");
        assert_eq!(transcriber.calls(), 0);
        transcriber.transcribe(&[], "ja").unwrap();
        transcriber.transcribe(&[], "ja").unwrap();
        assert_eq!(transcriber.calls(), 2);
    }

    #[test]
    fn test_mock_transcription_failing() {
        let transcriber = MockTranscription::failing();
        assert!(transcriber.transcribe(&[], "ja").is_err());
        assert_eq!(transcriber.calls(), 1);
    }

    #[test]
    fn test_mock_transcription_set_result() {
        let transcriber = MockTranscription::returning("initial");
        assert_eq!(transcriber.transcribe(&[], "ja").unwrap(), "initial");

        transcriber.set_result("updated");
        assert_eq!(transcriber.transcribe(&[], "ja").unwrap(), "updated");
    }

    // === MockSynthesis Tests ===

    #[test]
    fn test_mock_synthesis_returns_audio() {
        let synth = MockSynthesis::returning(b"mp3 bytes");
        let audio = synth.synthesize("text", "voice").unwrap();
        assert_eq!(audio, b"mp3 bytes");
    }

    #[test]
    fn test_mock_synthesis_records_requests() {
        let synth = MockSynthesis::returning(b"");
        synth.synthesize("first", "voice-a").unwrap();
        synth.synthesize("second", "voice-b").unwrap();

        assert_eq!(
            synth.requests(),
            vec![
                ("first".to_string(), "voice-a".to_string()),
                ("second".to_string(), "voice-b".to_string()),
            ]
        );
    }

    #[test]
    fn test_mock_synthesis_failing() {
        let synth = MockSynthesis::failing();
        assert!(synth.synthesize("text", "voice").is_err());
        assert_eq!(synth.calls(), 1);
    }

    // === Trait Object (Box<dyn>) Tests ===

    #[test]
    fn test_transcription_as_trait_object() {
        let transcriber: Box<dyn Transcription> = Box::new(MockTranscription::returning("出力"));
        let text = transcriber.transcribe(&[0.0; 16000], "ja").unwrap();
        assert_eq!(text, "出力");
    }

    #[test]
    fn test_synthesis_as_trait_object() {
        let synth: Box<dyn Synthesis> = Box::new(MockSynthesis::returning(b"audio"));
        let audio = synth.synthesize("おはよう", "ja-JP-NanamiNeural").unwrap();
        assert_eq!(audio, b"audio");
    }
}
