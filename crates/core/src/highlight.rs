//! Picks the part of an example word that spells a given vowel sound.
//!
//! Most symbols go through an ordered list of literal spelling patterns,
//! longest first. The schwa is too irregular for that, so it is resolved
//! from a per-word table instead.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::ops::Range;

/// Symbol resolved through `WordOverrides` instead of the pattern table.
pub const SCHWA_SYMBOL: &str = "/ə/";

const BUILTIN_PATTERNS: [(&str, &[&str]); 16] = [
    ("/æ/", &["a"]),
    ("/eɪ/", &["eigh", "ay", "ai", "ea", "ey", "a", "e"]),
    ("/ɑːr/", &["ar"]),
    ("/e/", &["ea", "e"]),
    ("/iː/", &["ee", "ie", "ei", "e"]),
    ("/ɜːr/", &["er", "ir", "ur"]),
    ("/ɪ/", &["i", "y"]),
    ("/aɪ/", &["igh", "ie", "y", "i", "eye"]),
    ("/ɑ/", &["o", "a"]),
    ("/ʊ/", &["oo", "ou", "u"]),
    ("/uː/", &["oo", "ough", "u", "ue", "ew"]),
    ("/oʊ/", &["oa", "ow", "oe", "o"]),
    ("/aʊ/", &["ow", "ou"]),
    ("/ɔɪ/", &["oi", "oy"]),
    ("/ɔːr/", &["or", "oar"]),
    ("/ʌ/", &["u", "o"]),
];

const BUILTIN_SCHWA_WORDS: [(&str, char); 3] = [("about", 'a'), ("support", 'u'), ("pencil", 'i')];

//
// ─── HIGHLIGHT ─────────────────────────────────────────────────────────────────
//

/// A word split into three contiguous parts; `highlighted` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub prefix: String,
    pub highlighted: String,
    pub suffix: String,
}

impl Highlight {
    /// The whole word, nothing marked.
    #[must_use]
    pub fn none(word: &str) -> Self {
        Self {
            prefix: word.to_string(),
            highlighted: String::new(),
            suffix: String::new(),
        }
    }

    fn split(word: &str, span: Range<usize>) -> Self {
        Self {
            prefix: word[..span.start].to_string(),
            highlighted: word[span.clone()].to_string(),
            suffix: word[span.end..].to_string(),
        }
    }

    #[must_use]
    pub fn has_highlight(&self) -> bool {
        !self.highlighted.is_empty()
    }

    /// Concatenation of the three parts, equal to the resolved word.
    #[must_use]
    pub fn word(&self) -> String {
        format!("{}{}{}", self.prefix, self.highlighted, self.suffix)
    }
}

//
// ─── OVERRIDES ─────────────────────────────────────────────────────────────────
//

/// Word-to-letter table for the one symbol that bypasses pattern matching.
///
/// Keys are stored lowercased; the letter is highlighted at its first
/// case-insensitive occurrence in the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOverrides {
    symbol: String,
    words: HashMap<String, char>,
}

impl WordOverrides {
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        words: impl IntoIterator<Item = (impl AsRef<str>, char)>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            words: words
                .into_iter()
                .map(|(word, letter)| (word.as_ref().to_lowercase(), letter))
                .collect(),
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(SCHWA_SYMBOL, BUILTIN_SCHWA_WORDS)
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn letter_for(&self, word: &str) -> Option<char> {
        self.words.get(&word.to_lowercase()).copied()
    }
}

//
// ─── RESOLVER ──────────────────────────────────────────────────────────────────
//

/// Stateless lookup from `(word, symbol)` to a `Highlight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResolver {
    patterns: HashMap<String, Vec<String>>,
    overrides: WordOverrides,
}

impl Default for HighlightResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl HighlightResolver {
    /// Build a resolver from per-symbol pattern lists.
    ///
    /// Each list is stably sorted by descending character count, so equal
    /// lengths keep the order they were given in.
    #[must_use]
    pub fn new<S, P>(patterns: impl IntoIterator<Item = (S, P)>, overrides: WordOverrides) -> Self
    where
        S: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(|(symbol, list)| {
                let mut list: Vec<String> = list
                    .into_iter()
                    .map(Into::into)
                    .filter(|pattern: &String| !pattern.is_empty())
                    .collect();
                list.sort_by_key(|pattern| Reverse(pattern.chars().count()));
                (symbol.into(), list)
            })
            .collect();

        Self {
            patterns,
            overrides,
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_PATTERNS
                .iter()
                .map(|(symbol, list)| (*symbol, list.iter().copied())),
            WordOverrides::builtin(),
        )
    }

    /// Patterns tried for `symbol`, in matching order.
    #[must_use]
    pub fn patterns_for(&self, symbol: &str) -> &[String] {
        self.patterns.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn resolve(&self, word: &str, symbol: &str) -> Highlight {
        if symbol == self.overrides.symbol() {
            return self.resolve_override(word);
        }

        self.patterns_for(symbol)
            .iter()
            .find_map(|pattern| find_ignore_case(word, pattern))
            .map_or_else(|| Highlight::none(word), |span| Highlight::split(word, span))
    }

    fn resolve_override(&self, word: &str) -> Highlight {
        let Some(letter) = self.overrides.letter_for(word) else {
            return Highlight::none(word);
        };
        let mut buf = [0_u8; 4];
        find_ignore_case(word, letter.encode_utf8(&mut buf))
            .map_or_else(|| Highlight::none(word), |span| Highlight::split(word, span))
    }
}

/// Byte span of the leftmost case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for wanted in needle.chars() {
            let (offset, found) = rest.next()?;
            if !chars_eq_ignore_case(found, wanted) {
                return None;
            }
            end = start + offset + found.len_utf8();
        }
        Some(start..end)
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
