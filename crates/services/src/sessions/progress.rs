/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Counter in the form `3 / 17`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}
