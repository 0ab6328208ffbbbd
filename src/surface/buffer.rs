//! In-memory surface recording every fragment.

use serde::Serialize;

use super::Surface;
use crate::ansi::Style;

/// One appended piece of text with its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    /// Style code the style was resolved from
    pub tag: String,
    #[serde(flatten)]
    pub style: Style,
}

/// Surface that keeps fragments and tag registrations in memory.
#[derive(Debug, Clone, Default)]
pub struct StyledBuffer {
    fragments: Vec<Fragment>,
    tags: Vec<(String, Style)>,
}

impl StyledBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Tags in registration order.
    pub fn tags(&self) -> &[(String, Style)] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// All text without styling.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Fragments split into display lines at `\n`.
    ///
    /// A trailing newline does not produce an extra empty line. Empty input
    /// produces no lines.
    pub fn lines(&self) -> Vec<Vec<Fragment>> {
        let mut lines = Vec::new();
        let mut current: Vec<Fragment> = Vec::new();
        let mut open = false;

        for fragment in &self.fragments {
            let mut pieces = fragment.text.split('\n').peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    current.push(Fragment {
                        text: piece.to_string(),
                        tag: fragment.tag.clone(),
                        style: fragment.style,
                    });
                    open = true;
                }
                if pieces.peek().is_some() {
                    lines.push(std::mem::take(&mut current));
                    open = false;
                }
            }
        }

        if open {
            lines.push(current);
        }
        lines
    }
}

impl Surface for StyledBuffer {
    fn register_tag(&mut self, tag: &str, style: Style) {
        self.tags.push((tag.to_string(), style));
    }

    fn append_styled_text(&mut self, text: &str, tag: &str, style: Style) {
        self.fragments.push(Fragment {
            text: text.to_string(),
            tag: tag.to_string(),
            style,
        });
    }

    fn clear(&mut self) {
        self.fragments.clear();
    }
}
