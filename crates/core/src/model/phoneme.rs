/// A vowel sound: its category name, its IPA symbol and a few example words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeEntry {
    name: String,
    symbol: String,
    examples: Vec<String>,
}

impl PhonemeEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        examples: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}
