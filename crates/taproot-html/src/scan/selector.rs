//! Deepest-text selection.

/// The running best text run: the deepest non-blank run seen so far, with
/// later runs at the same depth overwriting earlier ones.
///
/// Blank runs (whitespace only, including the newlines and indentation of
/// a formatted source file) are ignored entirely, which is what makes
/// cosmetic reformatting irrelevant to the result. Kept runs are
/// normalized to a single trimmed, single-spaced line before storage.
#[derive(Debug, Default)]
pub struct DeepestText {
    best: Option<(usize, String)>,
}

impl DeepestText {
    /// Create a selector with no candidate yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { best: None }
    }

    /// Observe one text run at the given nesting depth.
    ///
    /// Replaces the stored candidate when the new run is strictly deeper,
    /// or equally deep (document-order last-wins on ties).
    pub fn observe(&mut self, depth: usize, raw: &str) {
        let mut words = raw.split_whitespace().peekable();
        if words.peek().is_none() {
            // Blank run: never becomes a candidate.
            return;
        }
        let replace = match &self.best {
            None => true,
            Some((best_depth, _)) => depth >= *best_depth,
        };
        if replace {
            let text = words.collect::<Vec<_>>().join(" ");
            self.best = Some((depth, text));
        }
    }

    /// The selected text, or `None` if no non-blank run was ever observed.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        self.best.map(|(_, text)| text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deeper_run_wins() {
        let mut selector = DeepestText::new();
        selector.observe(1, "shallow");
        selector.observe(3, "deep");
        selector.observe(2, "middle");
        assert_eq!(selector.into_text(), Some("deep".to_string()));
    }

    #[test]
    fn test_equal_depth_last_wins() {
        let mut selector = DeepestText::new();
        selector.observe(2, "first");
        selector.observe(2, "second");
        assert_eq!(selector.into_text(), Some("second".to_string()));
    }

    #[test]
    fn test_blank_runs_are_ignored() {
        let mut selector = DeepestText::new();
        selector.observe(5, " \n\t  ");
        selector.observe(1, "real text");
        selector.observe(9, "\n    \n");
        assert_eq!(selector.into_text(), Some("real text".to_string()));
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let mut selector = DeepestText::new();
        selector.observe(2, "\n      This is\n   the title.  \n");
        assert_eq!(selector.into_text(), Some("This is the title.".to_string()));
    }

    #[test]
    fn test_no_content() {
        let selector = DeepestText::new();
        assert_eq!(selector.into_text(), None);
    }
}
