//! Conversion of compressed browser captures (webm/ogg) to WAV via ffmpeg.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

/// Extensions that have to go through ffmpeg before Whisper can read them.
const COMPRESSED_EXTENSIONS: &[&str] = &["webm", "ogg"];

/// Whether the file needs ffmpeg conversion before decoding.
pub fn needs_conversion(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| COMPRESSED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Convert a compressed capture to mono 16kHz 16-bit PCM WAV.
///
/// The returned handle owns the temporary file: it is removed when the
/// handle is dropped, on success and failure paths alike.
pub fn convert_to_wav(input: &Path) -> Result<NamedTempFile> {
    let temp = tempfile::Builder::new()
        .prefix("koe-")
        .suffix(".wav")
        .tempfile()
        .context("failed to create temporary WAV file")?;

    let output = Command::new("ffmpeg")
        .arg("-hide_banner")
        .arg("-loglevel")
        .arg("error")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .arg("-ar")
        .arg("16000")
        .arg("-ac")
        .arg("1")
        .arg("-c:a")
        .arg("pcm_s16le")
        .arg(temp.path())
        .output()
        .context("failed to run ffmpeg. Make sure ffmpeg is installed (e.g. sudo apt install ffmpeg)")?;

    if !output.status.success() {
        let error_msg = String::from_utf8_lossy(&output.stderr);
        bail!("ffmpeg failed for {}: {}", input.display(), error_msg.trim());
    }

    Ok(temp)
}
