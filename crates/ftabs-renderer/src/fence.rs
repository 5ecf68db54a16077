//! Code fence tracking for directive parsing.
//!
//! Directive syntax (`:::`) that appears inside a fenced code block is
//! literal text, so the parser checks fence state before recognizing lines.

/// Tracks fenced-code-block state during line-by-line processing.
///
/// Fences use backticks or tildes (three or more). A closing fence must use
/// the same character and be at least as long as the opening fence.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Open fence: character and opening length.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the current line position is inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Update state for one line. Returns `true` if the line is a fence
    /// marker (opening or closing).
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                if closes_fence(trimmed, ch, len) {
                    self.open = None;
                    true
                } else {
                    false
                }
            }
            None => {
                if let Some(fence) = opens_fence(trimmed) {
                    self.open = Some(fence);
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Detect an opening fence: a run of three or more backticks or tildes.
fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let run = trimmed.chars().take_while(|&c| c == first).count();
    (run >= 3).then_some((first, run))
}

/// A closing fence repeats the opening character at least `min_len` times,
/// followed only by whitespace.
fn closes_fence(trimmed: &str, ch: char, min_len: usize) -> bool {
    let run = trimmed.chars().take_while(|&c| c == ch).count();
    run >= min_len && trimmed[run..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_fence_round_trip() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("```rust"));
        assert!(tracker.in_fence());
        assert!(!tracker.update("::: tab Inside"));
        assert!(tracker.in_fence());
        assert!(tracker.update("```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_tilde_fence() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("~~~"));
        assert!(!tracker.update("```"));
        assert!(tracker.in_fence());
        assert!(tracker.update("~~~~"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_shorter_run_does_not_close() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("````"));
        assert!(!tracker.update("```"));
        assert!(tracker.in_fence());
        assert!(tracker.update("````  "));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_inline_code_is_not_a_fence() {
        let mut tracker = FenceTracker::new();
        assert!(!tracker.update("``not a fence``"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_indented_fence_detected() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("   ```"));
        assert!(tracker.in_fence());
    }
}
