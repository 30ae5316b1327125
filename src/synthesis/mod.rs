//! Text-to-speech synthesis via the Microsoft Edge neural voices.

pub mod edge;

pub use edge::{japanese_voices, EdgeSynthesizer};
