use vowel_core::{Highlight, HighlightResolver};

/// One example word split for rendering, with the vowel spelling marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightedWordVm {
    pub prefix: String,
    pub highlighted: String,
    pub suffix: String,
}

impl HighlightedWordVm {
    #[must_use]
    pub fn has_highlight(&self) -> bool {
        !self.highlighted.is_empty()
    }
}

impl From<Highlight> for HighlightedWordVm {
    fn from(highlight: Highlight) -> Self {
        Self {
            prefix: highlight.prefix,
            highlighted: highlight.highlighted,
            suffix: highlight.suffix,
        }
    }
}

#[must_use]
pub fn map_highlighted_words(
    resolver: &HighlightResolver,
    words: &[String],
    symbol: &str,
) -> Vec<HighlightedWordVm> {
    words
        .iter()
        .map(|word| HighlightedWordVm::from(resolver.resolve(word, symbol)))
        .collect()
}
