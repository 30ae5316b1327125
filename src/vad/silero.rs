//! Silero VAD - neural network-based voice activity detection.
//!
//! Uses the voice_activity_detector crate which bundles the Silero ONNX
//! model, so no extra model download is needed.

use anyhow::Result;
use std::cell::RefCell;
use voice_activity_detector::VoiceActivityDetector as SileroVad;

use super::{CHUNK_SIZE, SAMPLE_RATE_HZ};

/// Per-chunk speech probability source.
///
/// # Thread Safety
///
/// This type is intentionally `!Send` and `!Sync` because the underlying
/// model uses RefCell for interior mutability. Create a new instance for
/// each thread that needs VAD functionality.
pub struct SileroSpeechDetector {
    vad: RefCell<SileroVad>,
}

impl SileroSpeechDetector {
    pub fn new() -> Result<Self> {
        let vad = SileroVad::builder()
            .sample_rate(SAMPLE_RATE_HZ)
            .chunk_size(CHUNK_SIZE)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create Silero VAD: {}", e))?;

        Ok(Self {
            vad: RefCell::new(vad),
        })
    }

    /// Speech probability for each 512-sample chunk, in signal order.
    /// A final partial chunk is zero-padded by the model.
    pub fn speech_probabilities(&self, samples: &[f32]) -> Result<Vec<f32>> {
        let mut vad = self.vad.borrow_mut();
        vad.reset();

        let mut probabilities = Vec::with_capacity(samples.len() / CHUNK_SIZE + 1);
        for chunk in samples.chunks(CHUNK_SIZE) {
            probabilities.push(vad.predict(chunk.iter().copied()));
        }

        Ok(probabilities)
    }
}
