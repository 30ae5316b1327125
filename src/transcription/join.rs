//! Transcript assembly from recognizer segments.

/// Join recognizer segments into the final transcript: each segment is
/// trimmed, segments are joined with single spaces, and the result is
/// trimmed once more.
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref().trim())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
