pub mod audio;
pub mod cli;
pub mod config;
pub mod domain;
pub mod models;
pub mod synthesis;
pub mod transcription;
pub mod vad;

#[cfg(test)]
pub mod test_support;
