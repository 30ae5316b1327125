use crate::config::models_dir;
use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Environment variable selecting the Whisper model size.
pub const MODEL_ENV_VAR: &str = "WHISPER_MODEL";

const HUGGINGFACE_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/";

#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Size name accepted by `WHISPER_MODEL` (e.g. "small").
    pub size: &'static str,
    pub filename: &'static str,
    pub size_bytes: u64,
    pub sha256: Option<&'static str>,
}

/// Quantized ggml models for CPU inference, one per accepted size.
pub fn available_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo {
            size: "tiny",
            filename: "ggml-tiny-q5_1.bin",
            size_bytes: 32_152_673,
            sha256: Some("818710568da3ca15689e31a743197b520007872ff9576237bda97bd1b469c3d7"),
        },
        ModelInfo {
            size: "base",
            filename: "ggml-base-q5_1.bin",
            size_bytes: 59_707_625,
            sha256: Some("422f1ae452ade6f30a004d7e5c6a43195e4433bc370bf23fac9cc591f01a8898"),
        },
        ModelInfo {
            size: "small",
            filename: "ggml-small-q5_1.bin",
            size_bytes: 190_085_487,
            sha256: Some("ae85e4a935d7a567bd102fe55afc16bb595bdb618e11b2fc7591bc08120411bb"),
        },
        ModelInfo {
            size: "medium",
            filename: "ggml-medium-q5_0.bin",
            size_bytes: 539_212_467,
            sha256: Some("19fea4b380c3a618ec4723c3eef2eb785ffba0d0538cf43f8f235e7b3b34220f"),
        },
        ModelInfo {
            size: "large-v2",
            filename: "ggml-large-v2-q5_0.bin",
            size_bytes: 1_080_000_000, // ~1.1 GB
            sha256: None,
        },
        ModelInfo {
            size: "large-v3",
            filename: "ggml-large-v3-q5_0.bin",
            size_bytes: 1_080_000_000, // ~1.1 GB
            sha256: None,
        },
    ]
}

pub fn find_model(size: &str) -> Option<ModelInfo> {
    available_models().into_iter().find(|m| m.size == size)
}

/// Pick the model selector: CLI flag first, then the environment, then config.
pub fn select_model(flag: Option<&str>, env: Option<&str>, config_model: &str) -> String {
    flag.filter(|s| !s.is_empty())
        .or(env.filter(|s| !s.is_empty()))
        .unwrap_or(config_model)
        .to_string()
}

/// Resolve a selector to an on-disk model path.
///
/// A size name maps into the catalog and is downloaded on first use;
/// anything else is treated as a path to a ggml model file.
pub fn resolve_model<F>(selector: &str, progress: F) -> Result<PathBuf>
where
    F: Fn(u64, u64),
{
    if let Some(info) = find_model(selector) {
        let path = models_dir().join(info.filename);
        if !path.exists() {
            log::info!("model '{}' not downloaded yet, fetching {}", selector, info.filename);
            return download_model(&info, progress);
        }
        return Ok(path);
    }

    let path = Path::new(selector);
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    bail!(
        "unknown model '{}': expected a size (tiny, base, small, medium, large-v2, large-v3) or a path to a ggml .bin file",
        selector
    );
}

fn verify_checksum(path: &Path, expected: &str) -> Result<()> {
    let mut file = fs::File::open(path)
        .with_context(|| format!("failed to open file for verification: {}", path.display()))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).context("failed to hash model file")?;
    let hash = format!("{:x}", hasher.finalize());
    if hash != expected {
        bail!(
            "checksum mismatch for {}: expected {}, got {}",
            path.display(),
            expected,
            hash
        );
    }
    Ok(())
}

/// Download a catalog model with progress reporting, checksum verification,
/// and atomic rename from temp to final path.
pub fn download_model<F>(info: &ModelInfo, progress: F) -> Result<PathBuf>
where
    F: Fn(u64, u64),
{
    let dir = models_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let temp_path = dir.join(format!("{}.downloading", info.filename));
    let final_path = dir.join(info.filename);

    let url = format!("{}{}", HUGGINGFACE_BASE_URL, info.filename);
    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .context("failed to build HTTP client")?;
    let mut response = client
        .get(&url)
        .send()
        .with_context(|| format!("failed to connect: {}", url))?;

    if !response.status().is_success() {
        bail!(
            "download failed for {}: HTTP {}",
            info.filename,
            response.status()
        );
    }

    let total_size = response.content_length().unwrap_or(info.size_bytes);

    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("failed to create file: {}", temp_path.display()))?;

    let mut downloaded: u64 = 0;
    let mut buf = [0u8; 128 * 1024];
    loop {
        let read = response.read(&mut buf).context("download interrupted")?;
        if read == 0 {
            break;
        }
        file.write_all(&buf[..read])
            .context("failed to write model data")?;
        downloaded += read as u64;
        progress(downloaded, total_size);
    }

    drop(file);

    match info.sha256 {
        Some(expected) => {
            if let Err(e) = verify_checksum(&temp_path, expected) {
                let _ = fs::remove_file(&temp_path);
                return Err(e);
            }
        }
        None => log::warn!(
            "no published checksum for {}, skipping verification",
            info.filename
        ),
    }

    fs::rename(&temp_path, &final_path).with_context(|| {
        format!(
            "failed to rename {} -> {}",
            temp_path.display(),
            final_path.display()
        )
    })?;

    Ok(final_path)
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
