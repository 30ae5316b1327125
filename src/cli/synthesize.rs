//! Synthesis pipeline behind the `koe-tts` binary.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::args::TtsArgs;
use crate::config::{self, Config};
use crate::domain::traits::Synthesis;
use crate::synthesis::{japanese_voices, EdgeSynthesizer};

pub fn run(args: TtsArgs) -> Result<()> {
    if args.list_voices {
        return list_voices();
    }

    let config = config::load_config().unwrap_or_else(|e| {
        log::warn!("falling back to default config: {e:#}");
        Config::default()
    });

    // The parser enforces both flags unless --list-voices was given.
    let text = args.text.as_deref().context("--text is required")?;
    let output = args.output.as_deref().context("--output is required")?;
    let voice = args.voice.as_deref().unwrap_or(&config.voice);

    synthesize_to_file(&EdgeSynthesizer::new(), text, voice, output)
}

fn list_voices() -> Result<()> {
    for voice in japanese_voices()? {
        let name = voice.short_name.as_deref().unwrap_or(&voice.name);
        match voice.gender.as_deref() {
            Some(gender) => println!("{name} ({gender})"),
            None => println!("{name}"),
        }
    }

    Ok(())
}

fn synthesize_to_file(
    engine: &dyn Synthesis,
    text: &str,
    voice: &str,
    output: &Path,
) -> Result<()> {
    log::info!("synthesizing {} characters with voice {voice}", text.chars().count());

    let audio = engine.synthesize(text, voice)?;
    fs::write(output, &audio)
        .with_context(|| format!("failed to write audio to {}", output.display()))?;

    log::info!("wrote {} to {}", crate::models::format_size(audio.len() as u64), output.display());
    Ok(())
}
