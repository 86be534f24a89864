use std::collections::HashSet;

use thiserror::Error;

use crate::model::{PhonemeEntry, PhonemeId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset must contain at least one entry")]
    Empty,

    #[error("entry {index} has a blank name or symbol")]
    BlankField { index: usize },

    #[error("duplicate phoneme name: {0}")]
    DuplicateName(String),

    #[error("duplicate phoneme symbol: {0}")]
    DuplicateSymbol(String),
}

//
// ─── BUILTIN TABLE ─────────────────────────────────────────────────────────────
//

const BUILTIN: [(&str, &str, &[&str]); 17] = [
    ("short a", "/æ/", &["cat", "camp", "bath", "fan"]),
    ("long a", "/eɪ/", &["fate", "they", "great"]),
    ("ar sound", "/ɑːr/", &["car", "art", "mark"]),
    ("Schwa", "/ə/", &["about", "support", "pencil"]),
    ("short e", "/e/", &["let", "get", "egg"]),
    ("long e", "/iː/", &["fee", "she", "believe"]),
    ("er sound", "/ɜːr/", &["bird", "term", "hurt"]),
    ("short i", "/ɪ/", &["fit", "income", "it"]),
    ("long i", "/aɪ/", &["eye", "iron", "idea"]),
    // ɑ rather than ɒ: the table follows General American.
    ("short o", "/ɑ/", &["dog", "hot", "not", "lock"]),
    ("short oo", "/ʊ/", &["book", "should", "put"]),
    ("long oo", "/uː/", &["too", "loose", "through"]),
    ("long o", "/oʊ/", &["note", "no", "slow"]),
    ("ow sound", "/aʊ/", &["house", "out", "count"]),
    ("oi sound", "/ɔɪ/", &["boy", "joy", "join"]),
    ("or sound", "/ɔːr/", &["for", "sort", "storm"]),
    ("short u", "/ʌ/", &["but", "fun", "cup"]),
];

fn builtin_entries() -> Vec<PhonemeEntry> {
    BUILTIN
        .iter()
        .map(|(name, symbol, examples)| PhonemeEntry::new(*name, *symbol, examples.iter().copied()))
        .collect()
}

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// Ordered, validated table of phoneme entries.
///
/// Names and symbols are both unique, so either identifies an entry. The
/// order of entries is the order summary rows are reported in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<PhonemeEntry>,
}

impl Dataset {
    /// Validate and wrap a list of entries.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` for an empty list,
    /// `DatasetError::BlankField` when a name or symbol is blank, and
    /// `DatasetError::DuplicateName` / `DuplicateSymbol` on collisions.
    pub fn new(entries: Vec<PhonemeEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut names = HashSet::new();
        let mut symbols = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name().trim().is_empty() || entry.symbol().trim().is_empty() {
                return Err(DatasetError::BlankField { index });
            }
            if !names.insert(entry.name()) {
                return Err(DatasetError::DuplicateName(entry.name().to_string()));
            }
            if !symbols.insert(entry.symbol()) {
                return Err(DatasetError::DuplicateSymbol(entry.symbol().to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// The compiled-in 17 vowel table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[PhonemeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: PhonemeId) -> Option<&PhonemeEntry> {
        self.entries.get(id.value())
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&PhonemeEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PhonemeEntry::name)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PhonemeEntry::symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_passes_validation() {
        let validated = Dataset::new(builtin_entries()).unwrap();
        assert_eq!(validated, Dataset::builtin());
        assert_eq!(validated.len(), 17);
    }

    #[test]
    fn builtin_keeps_table_order() {
        let dataset = Dataset::builtin();
        let names: Vec<_> = dataset.names().collect();
        assert_eq!(names.first(), Some(&"short a"));
        assert_eq!(names.last(), Some(&"short u"));
        let schwa = dataset.find_by_name("Schwa").unwrap();
        assert_eq!(schwa.symbol(), "/ə/");
        assert_eq!(schwa.examples(), ["about", "support", "pencil"]);
        assert_eq!(dataset.get(PhonemeId::new(3)), Some(schwa));
    }

    #[test]
    fn rejects_empty_dataset() {
        assert_eq!(Dataset::new(Vec::new()), Err(DatasetError::Empty));
    }

    #[test]
    fn rejects_duplicate_name_and_symbol() {
        let dup_name = vec![
            PhonemeEntry::new("short a", "/æ/", ["cat"]),
            PhonemeEntry::new("short a", "/e/", ["let"]),
        ];
        assert_eq!(
            Dataset::new(dup_name),
            Err(DatasetError::DuplicateName("short a".into()))
        );

        let dup_symbol = vec![
            PhonemeEntry::new("short a", "/æ/", ["cat"]),
            PhonemeEntry::new("other a", "/æ/", ["fan"]),
        ];
        assert_eq!(
            Dataset::new(dup_symbol),
            Err(DatasetError::DuplicateSymbol("/æ/".into()))
        );
    }

    #[test]
    fn rejects_blank_fields() {
        let entries = vec![
            PhonemeEntry::new("short a", "/æ/", ["cat"]),
            PhonemeEntry::new("  ", "/e/", ["let"]),
        ];
        assert_eq!(
            Dataset::new(entries),
            Err(DatasetError::BlankField { index: 1 })
        );
    }
}
