pub mod join;
pub mod whisper;

pub use join::join_segments;
pub use whisper::WhisperTranscriber;
