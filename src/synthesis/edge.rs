//! Synthesis backend over the Edge TTS websocket service.
//!
//! A single blocking call per request: connect, synthesize, return the
//! encoded audio. The connection is not reused between requests.

use anyhow::{anyhow, bail, Result};
use msedge_tts::tts::client::connect;
use msedge_tts::tts::SpeechConfig;
use msedge_tts::voice::{get_voices_list, Voice};

use crate::domain::traits::Synthesis;

/// MP3 output keeps files small and plays everywhere.
const AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

pub struct EdgeSynthesizer;

impl EdgeSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EdgeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesis for EdgeSynthesizer {
    fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>> {
        let config = SpeechConfig {
            voice_name: voice.to_string(),
            audio_format: AUDIO_FORMAT.to_string(),
            pitch: 0,
            rate: 0,
            volume: 0,
        };

        let mut client =
            connect().map_err(|e| anyhow!("failed to connect to Edge TTS service: {}", e))?;

        let audio = client
            .synthesize(text, &config)
            .map_err(|e| anyhow!("speech synthesis failed: {}", e))?;

        if audio.audio_bytes.is_empty() {
            bail!("Edge TTS returned no audio for voice {}", voice);
        }

        Ok(audio.audio_bytes)
    }
}

/// Fetch the voice catalogue and keep only the Japanese entries.
pub fn japanese_voices() -> Result<Vec<Voice>> {
    let voices =
        get_voices_list().map_err(|e| anyhow!("failed to fetch the voice list: {}", e))?;

    Ok(voices
        .into_iter()
        .filter(|v| v.locale.as_deref() == Some("ja-JP"))
        .collect())
}
