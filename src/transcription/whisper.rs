use anyhow::{Context, Result};
use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::domain::traits::Transcription;
use crate::transcription::join_segments;

pub struct WhisperTranscriber {
    ctx: WhisperContext,
}

impl WhisperTranscriber {
    /// Load a ggml model from disk. The context is created once and owned
    /// by the returned value; recognition runs on CPU.
    pub fn new(model_path: &Path) -> Result<Self> {
        let path_str = model_path.to_string_lossy();
        let ctx = WhisperContext::new_with_params(&path_str, WhisperContextParameters::default())
            .with_context(|| format!("failed to load Whisper model: {}", model_path.display()))?;

        Ok(Self { ctx })
    }

    fn run(&self, samples: &[f32], language: &str) -> Result<String> {
        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: 5,
            patience: -1.0,
        });

        params.set_language(Some(language));
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(false);

        let mut state = self.ctx.create_state()?;
        state.full(params, samples)?;

        let num_segments = state.full_n_segments()?;
        let mut segments = Vec::with_capacity(num_segments as usize);

        for i in 0..num_segments {
            if let Ok(segment) = state.full_get_segment_text(i) {
                segments.push(segment);
            }
        }

        Ok(join_segments(&segments))
    }
}

impl Transcription for WhisperTranscriber {
    fn transcribe(&self, samples: &[f32], language: &str) -> Result<String> {
        self.run(samples, language)
    }
}
