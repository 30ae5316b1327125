//! Transcription pipeline behind the `koe-stt` binary.

use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::audio;
use crate::cli::args::{OutputFormat, SttArgs};
use crate::config::{self, Config};
use crate::domain::traits::Transcription;
use crate::models;
use crate::transcription::WhisperTranscriber;
use crate::vad::{self, MIN_SPEECH_SAMPLES};

/// Payload printed by `--format json`.
#[derive(Serialize)]
struct TranscriptionOutput<'a> {
    version: &'a str,
    input_file: String,
    duration_secs: f64,
    language: &'a str,
    model: String,
    transcription: &'a str,
}

pub fn run(args: SttArgs) -> Result<()> {
    let config = config::load_config().unwrap_or_else(|e| {
        log::warn!("falling back to default config: {e:#}");
        Config::default()
    });

    // 1. Validate the input path before running any external tool.
    if !args.input.is_file() {
        bail!("audio file not found: {}", args.input.display());
    }

    // 2. Convert compressed formats to WAV. The handle owns the temp file,
    //    which is removed when it drops at the end of this function.
    let converted: Option<NamedTempFile> = if audio::needs_conversion(&args.input) {
        log::info!("converting {} to WAV", args.input.display());
        Some(audio::convert_to_wav(&args.input)?)
    } else {
        None
    };
    let wav_path: &Path = match &converted {
        Some(temp) => temp.path(),
        None => &args.input,
    };

    // 3. Decode and downmix to 16 kHz mono f32.
    let wav = audio::read_wav(wav_path)?;
    log::info!(
        "loaded {:.1}s of audio ({} Hz, {} channel(s))",
        wav.duration_secs,
        wav.sample_rate,
        wav.channels
    );
    let mut samples = audio::prepare_for_whisper(&wav)?;

    // 4. Keep only the voiced regions.
    if config.vad_filter {
        samples = vad::filter_speech(&samples)?;
    }

    // 5. Resolve and load the model. Flag > environment > config file.
    let env_model = std::env::var(models::MODEL_ENV_VAR).ok();
    let selector = models::select_model(args.model.as_deref(), env_model.as_deref(), &config.model);
    let model_path = models::resolve_model(&selector, download_progress)?;
    log::info!("loading model {}", model_path.display());
    let transcriber = WhisperTranscriber::new(&model_path)?;

    // 6. Recognize and print the result.
    let language = args.language.as_deref().unwrap_or(&config.language);
    let text = recognize(&transcriber, &samples, language)?;

    match args.format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => {
            let payload = TranscriptionOutput {
                version: env!("CARGO_PKG_VERSION"),
                input_file: args.input.display().to_string(),
                duration_secs: wav.duration_secs,
                language,
                model: model_path
                    .file_name()
                    .unwrap_or(model_path.as_os_str())
                    .to_string_lossy()
                    .into_owned(),
                transcription: &text,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

/// Run recognition unless the filtered audio is shorter than half a second.
/// Whisper tends to hallucinate text on near-empty input.
fn recognize(engine: &dyn Transcription, samples: &[f32], language: &str) -> Result<String> {
    if samples.len() < MIN_SPEECH_SAMPLES {
        log::info!("no speech detected, skipping recognition");
        return Ok(String::new());
    }

    engine.transcribe(samples, language)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!(
            "\rDownloading model... {pct}% ({} / {})",
            models::format_size(downloaded),
            models::format_size(total)
        );
        if downloaded >= total {
            eprintln!();
        }
    } else {
        eprint!("\rDownloading model... {}", models::format_size(downloaded));
    }
}
