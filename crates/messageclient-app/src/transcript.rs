//! Transcript buffer.
//!
//! Append-only character buffer backing the main view. Mutated only on the
//! UI task; newlines are preserved verbatim.

/// The transcript text shown in the main view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` verbatim, embedded newlines included.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Reset the transcript to empty.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Full transcript contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether anything has been appended since the last clear.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_text_byte_for_byte() {
        let mut transcript = Transcript::new();
        transcript.append("hello\n");
        transcript.append("two\nlines\n");
        transcript.append("no newline");

        assert_eq!(transcript.as_str(), "hello\ntwo\nlines\nno newline");
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut transcript = Transcript::new();
        transcript.append("hello\n");

        transcript.clear();
        assert!(transcript.is_empty());

        // Clearing again changes nothing.
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
