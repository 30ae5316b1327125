//! Audio input handling: WAV decoding, resampling, and ffmpeg conversion
//! of compressed browser captures.

pub mod convert;
pub mod wav_reader;

pub use convert::{convert_to_wav, needs_conversion};
pub use wav_reader::{prepare_for_whisper, read_wav, WavAudio, WHISPER_SAMPLE_RATE};
