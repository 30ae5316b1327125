//! Voice activity detection, used to drop silence before transcription.
//!
//! Silence filtering works in three steps: score every 512-sample chunk
//! with Silero, turn the scores into padded speech regions, and keep only
//! the samples inside those regions.

pub mod silero;

pub use silero::SileroSpeechDetector;

use anyhow::Result;
use std::ops::Range;

pub const SAMPLE_RATE_HZ: u32 = 16000;
/// Chunk size for Silero VAD at 16kHz (must be 512 samples per V5 model requirements)
pub const CHUNK_SIZE: usize = 512;
/// Shortest amount of retained speech worth transcribing (0.5s at 16kHz).
pub const MIN_SPEECH_SAMPLES: usize = 8000;

/// Tuning for turning per-chunk probabilities into speech regions.
pub struct RegionOptions {
    /// Speech probability threshold (0.0-1.0)
    pub threshold: f32,
    /// Silences shorter than this stay inside the surrounding speech
    pub min_silence_ms: u32,
    /// Regions shorter than this are discarded as noise
    pub min_speech_ms: u32,
    /// Context padding added on both sides of each region
    pub pad_ms: u32,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            min_silence_ms: 500,
            min_speech_ms: 250,
            pad_ms: 400,
        }
    }
}

fn ms_to_samples(ms: u32) -> usize {
    ms as usize * SAMPLE_RATE_HZ as usize / 1000
}

/// Convert per-chunk speech probabilities into half-open sample ranges.
///
/// Chunk `i` covers samples `[i * CHUNK_SIZE, (i + 1) * CHUNK_SIZE)`.
pub fn speech_regions(probabilities: &[f32], opts: &RegionOptions) -> Vec<Range<usize>> {
    let min_silence = ms_to_samples(opts.min_silence_ms);
    let min_speech = ms_to_samples(opts.min_speech_ms);
    let pad = ms_to_samples(opts.pad_ms);
    let total = probabilities.len() * CHUNK_SIZE;

    // Runs of consecutive speech chunks
    let mut runs: Vec<Range<usize>> = Vec::new();
    for (i, &probability) in probabilities.iter().enumerate() {
        if probability < opts.threshold {
            continue;
        }
        let start = i * CHUNK_SIZE;
        let end = start + CHUNK_SIZE;
        match runs.last_mut() {
            Some(last) if last.end == start => last.end = end,
            _ => runs.push(start..end),
        }
    }

    // Bridge short silences between neighbouring runs
    let mut merged: Vec<Range<usize>> = Vec::new();
    for run in runs {
        match merged.last_mut() {
            Some(last) if run.start - last.end < min_silence => last.end = run.end,
            _ => merged.push(run),
        }
    }

    // Too-short runs are noise, not speech
    merged.retain(|r| r.end - r.start >= min_speech);

    // Pad regions, re-merging overlaps the padding introduces
    let mut padded: Vec<Range<usize>> = Vec::new();
    for region in merged {
        let start = region.start.saturating_sub(pad);
        let end = (region.end + pad).min(total);
        match padded.last_mut() {
            Some(last) if start <= last.end => last.end = end,
            _ => padded.push(start..end),
        }
    }

    padded
}

/// Run Silero over the signal and keep only the samples inside speech
/// regions. Silence-only input yields an empty vector.
pub fn filter_speech(samples: &[f32]) -> Result<Vec<f32>> {
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let detector = SileroSpeechDetector::new()?;
    let probabilities = detector.speech_probabilities(samples)?;
    let regions = speech_regions(&probabilities, &RegionOptions::default());

    let mut kept = Vec::new();
    for region in &regions {
        let end = region.end.min(samples.len());
        if region.start < end {
            kept.extend_from_slice(&samples[region.start..end]);
        }
    }

    log::debug!(
        "VAD kept {} of {} samples in {} regions",
        kept.len(),
        samples.len(),
        regions.len()
    );

    Ok(kept)
}
