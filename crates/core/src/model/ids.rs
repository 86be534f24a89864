use std::fmt;

/// Position of a phoneme entry inside its `Dataset`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhonemeId(usize);

impl PhonemeId {
    /// Creates a new `PhonemeId`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying index
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for PhonemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhonemeId({})", self.0)
    }
}

impl fmt::Display for PhonemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PhonemeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
